//! Domain library for hrdesk.
//!
//! Holds the personnel, payroll and attendance records, the reference data
//! they are validated against, the form state model used to edit them and
//! the attendance filter.

use thiserror::Error;

pub mod directory;
pub mod filter;
pub mod form;
pub mod fs;
pub mod records;

pub use directory::Directory;
pub use filter::{AttendanceFilter, StatusFilter};
pub use form::{Form, FormRecord};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed directory data: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("$HOME must exist")]
    NoHome,
    #[error("No employee with id {0}")]
    UnknownEmployee(records::EmployeeId),
    #[error("Employee id {0} is listed more than once")]
    DuplicateEmployee(records::EmployeeId),
    #[error("'{0}' is not a known pay period")]
    UnknownPeriod(String),
}
