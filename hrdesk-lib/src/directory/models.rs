use serde::Deserialize;

use crate::records::{AttendanceRecord, Personnel};

/// On-disk layout of a directory data set, deserialized from TOML.
#[derive(Debug, Deserialize)]
pub(crate) struct DirectoryFile {
    /// Pay period labels, most recent first
    pub(crate) periods: Vec<String>,
    #[serde(default)]
    pub(crate) personnel: Vec<Personnel>,
    #[serde(default)]
    pub(crate) attendance: Vec<AttendanceRecord>,
}
