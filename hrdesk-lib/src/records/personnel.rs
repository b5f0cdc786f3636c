use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{Directory, FormRecord, records::EmployeeId};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Department {
    #[strum(serialize = "Tecnología")]
    #[serde(rename = "Tecnología")]
    Technology,
    #[strum(serialize = "Diseño")]
    #[serde(rename = "Diseño")]
    Design,
    #[strum(serialize = "Administración")]
    #[serde(rename = "Administración")]
    Administration,
    #[strum(serialize = "Finanzas")]
    #[serde(rename = "Finanzas")]
    Finance,
    #[strum(serialize = "RRHH")]
    #[serde(rename = "RRHH")]
    HumanResources,
    #[strum(serialize = "Marketing")]
    #[serde(rename = "Marketing")]
    Marketing,
    #[strum(serialize = "Ventas")]
    #[serde(rename = "Ventas")]
    Sales,
    #[strum(serialize = "Operaciones")]
    #[serde(rename = "Operaciones")]
    Operations,
}

#[derive(
    Debug,
    Default,
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
pub enum EmploymentStatus {
    #[default]
    #[strum(serialize = "Activo")]
    #[serde(rename = "Activo")]
    Active,
    #[strum(serialize = "Inactivo")]
    #[serde(rename = "Inactivo")]
    Inactive,
}

/// A personnel record. Every field is free-form text except the department and status.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personnel {
    /// Unset until the record has been stored
    #[serde(default)]
    pub id: Option<EmployeeId>,
    pub name: String,
    #[serde(default)]
    pub position: String,
    /// Unset until one is chosen
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub status: EmploymentStatus,
}

/// A single field edit on a [`Personnel`] record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonnelEdit {
    Name(String),
    Position(String),
    Department(Department),
    Email(String),
    Phone(String),
    Status(EmploymentStatus),
}

impl FormRecord for Personnel {
    type Edit = PersonnelEdit;
    type Key = EmployeeId;

    fn blank(_directory: &Directory) -> Self {
        Self::default()
    }

    fn key(&self) -> Option<EmployeeId> {
        self.id
    }

    fn set(&mut self, edit: PersonnelEdit) {
        match edit {
            PersonnelEdit::Name(name) => self.name = name,
            PersonnelEdit::Position(position) => self.position = position,
            PersonnelEdit::Department(department) => self.department = Some(department),
            PersonnelEdit::Email(email) => self.email = email,
            PersonnelEdit::Phone(phone) => self.phone = phone,
            PersonnelEdit::Status(status) => self.status = status,
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_department_labels() {
        let labels: Vec<String> = Department::iter().map(|d| d.to_string()).collect();

        assert_eq!(labels.len(), 8);
        assert_eq!(labels.first().map(String::as_str), Some("Tecnología"));
        assert_eq!(labels.last().map(String::as_str), Some("Operaciones"));
        assert_eq!(Department::from_str("RRHH").unwrap(), Department::HumanResources);
    }

    #[test]
    fn test_default_status() {
        let record = Personnel::default();

        assert_eq!(record.status, EmploymentStatus::Active);
        assert_eq!(record.status.as_ref(), "Activo");
        assert_eq!(record.department, None);
        assert_eq!(record.id, None);
    }

    #[test]
    fn test_set_touches_one_field() {
        let mut record = Personnel {
            name: "Ana Martínez".into(),
            email: "ana@example.com".into(),
            ..Default::default()
        };

        record.set(PersonnelEdit::Department(Department::Finance));

        assert_eq!(record.department, Some(Department::Finance));
        assert_eq!(record.name, "Ana Martínez");
        assert_eq!(record.email, "ana@example.com");
    }
}
