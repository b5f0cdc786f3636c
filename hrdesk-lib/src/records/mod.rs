//! Record types managed by hrdesk.
//!
//! Personnel and payroll records are edited through a [`Form`](crate::Form); attendance
//! records are read-only data supplied by the [`Directory`](crate::Directory).

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

mod attendance;
mod payroll;
mod personnel;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use payroll::{PayPeriod, Payroll, PayrollEdit, PayrollStatus, coerce_amount, net_salary};
pub use personnel::{Department, EmploymentStatus, Personnel, PersonnelEdit};

/// Identifies a [`Personnel`] record, and through it an entry in the employee directory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

/// Identifies a stored [`Payroll`] record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PayrollId(pub u64);

/// A display/value pair from the employee directory.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{name}")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
}
