use chrono::NaiveDate;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum AttendanceStatus {
    #[strum(serialize = "Puntual")]
    #[serde(rename = "Puntual")]
    OnTime,
    #[strum(serialize = "Tardanza")]
    #[serde(rename = "Tardanza")]
    Late,
    #[strum(serialize = "Ausente")]
    #[serde(rename = "Ausente")]
    Absent,
}

/// A single day of attendance for one employee.
///
/// Attendance is supplied from outside and never modified, so only read accessors exist.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[getset(get_copy = "pub")]
    id: u64,
    #[getset(get = "pub")]
    employee_name: String,
    /// Serialized as `YYYY-MM-DD`
    #[getset(get_copy = "pub")]
    date: NaiveDate,
    #[getset(get = "pub")]
    check_in: String,
    #[getset(get = "pub")]
    check_out: String,
    #[getset(get_copy = "pub")]
    status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn new(
        id: u64,
        employee_name: &str,
        date: NaiveDate,
        check_in: &str,
        check_out: &str,
        status: AttendanceStatus,
    ) -> Self {
        Self {
            id,
            employee_name: employee_name.into(),
            date,
            check_in: check_in.into(),
            check_out: check_out.into(),
            status,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize() {
        let record: AttendanceRecord = toml::from_str(
            r#"
            id = 7
            employee_name = "Juan Pérez"
            date = "2023-04-10"
            check_in = "08:55"
            check_out = "18:02"
            status = "Puntual"
            "#,
        )
        .unwrap();

        assert_eq!(record.id(), 7);
        assert_eq!(record.employee_name(), "Juan Pérez");
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2023, 4, 10).unwrap());
        assert_eq!(record.status(), AttendanceStatus::OnTime);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = toml::from_str::<AttendanceRecord>(
            r#"
            id = 1
            employee_name = "Juan Pérez"
            date = "2023-04-10"
            check_in = "08:55"
            check_out = "18:02"
            status = "Vacaciones"
            "#,
        );

        assert!(result.is_err());
    }
}
