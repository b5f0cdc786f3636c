use derive_more::Display;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::{
    Directory, FormRecord,
    records::{EmployeeId, PayrollId},
};

/// The net salary paid out for a period.
pub fn net_salary(base_salary: f64, bonuses: f64, deductions: f64) -> f64 {
    base_salary + bonuses - deductions
}

/// Parse user supplied text as an amount.
///
/// Empty, unparsable and non-finite input all count as `0` so that a half typed amount can
/// never poison the net salary.
pub fn coerce_amount(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
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
    strum::Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum PayrollStatus {
    #[default]
    #[strum(serialize = "Pendiente")]
    #[serde(rename = "Pendiente")]
    Pending,
    #[strum(serialize = "Pagado")]
    #[serde(rename = "Pagado")]
    Paid,
}

/// A pay period label, only obtainable from the [`Directory`] period list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct PayPeriod(String);

impl PayPeriod {
    pub(crate) fn new(label: &str) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

/// A payroll record.
///
/// The net salary is derived from the other amounts and cannot be set on its own.
#[derive(Debug, Default, Clone, PartialEq, Getters, CopyGetters)]
pub struct Payroll {
    #[getset(get_copy = "pub")]
    id: Option<PayrollId>,
    #[getset(get_copy = "pub")]
    employee: Option<EmployeeId>,
    #[getset(get = "pub")]
    period: Option<PayPeriod>,
    #[getset(get_copy = "pub")]
    base_salary: f64,
    #[getset(get_copy = "pub")]
    bonuses: f64,
    #[getset(get_copy = "pub")]
    deductions: f64,
    #[getset(get_copy = "pub")]
    net_salary: f64,
    #[getset(get_copy = "pub")]
    status: PayrollStatus,
}

/// A single field edit on a [`Payroll`] record. Amounts carry the raw text the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayrollEdit {
    Employee(EmployeeId),
    Period(PayPeriod),
    BaseSalary(String),
    Bonuses(String),
    Deductions(String),
    Status(PayrollStatus),
}

impl Payroll {
    pub fn new(
        employee: Option<EmployeeId>,
        period: Option<PayPeriod>,
        base_salary: f64,
        bonuses: f64,
        deductions: f64,
        status: PayrollStatus,
    ) -> Self {
        Self {
            id: None,
            employee,
            period,
            base_salary,
            bonuses,
            deductions,
            net_salary: net_salary(base_salary, bonuses, deductions),
            status,
        }
    }

    pub(crate) fn with_id(mut self, id: PayrollId) -> Self {
        self.id = Some(id);
        self
    }
}

impl FormRecord for Payroll {
    type Edit = PayrollEdit;
    type Key = PayrollId;

    fn blank(directory: &Directory) -> Self {
        Self {
            period: directory.periods().into_iter().next(),
            ..Default::default()
        }
    }

    fn key(&self) -> Option<PayrollId> {
        self.id
    }

    fn set(&mut self, edit: PayrollEdit) {
        match edit {
            PayrollEdit::Employee(id) => self.employee = Some(id),
            PayrollEdit::Period(period) => self.period = Some(period),
            PayrollEdit::BaseSalary(text) => self.base_salary = coerce_amount(&text),
            PayrollEdit::Bonuses(text) => self.bonuses = coerce_amount(&text),
            PayrollEdit::Deductions(text) => self.deductions = coerce_amount(&text),
            PayrollEdit::Status(status) => self.status = status,
        }
    }

    fn derive(&mut self) {
        self.net_salary = net_salary(self.base_salary, self.bonuses, self.deductions);
    }
}
