//! Editing state for records that are filled in by a user and handed off on submission.
//!
//! A [`Form`] owns one in-progress record. Every field edit is applied synchronously and any
//! derived fields are recomputed in the same step, so the state read back after an
//! [`update`](Form::update) is always consistent. Submitting or cancelling is reported to the
//! caller through an [`Action`]; the form never keeps a record around after either.

use std::fmt::Debug;

use tracing::debug;

use crate::Directory;

/// A record that can be edited through a [`Form`].
pub trait FormRecord: Clone + Debug + PartialEq {
    /// One variant per editable field, carrying the new value. Derived fields have no variant.
    type Edit: Clone + Debug;
    /// Identity of a stored record
    type Key: Copy + Debug + PartialEq;

    /// A record filled with defaults, used when creating a new one.
    fn blank(directory: &Directory) -> Self;

    /// Identity of this record, or `None` if it hasn't been stored yet.
    fn key(&self) -> Option<Self::Key>;

    /// Overwrite exactly one field.
    fn set(&mut self, edit: Self::Edit);

    /// Recompute derived fields from the editable ones.
    fn derive(&mut self) {}

    /// Overwrite one field and bring derived fields up to date.
    fn apply(&mut self, edit: Self::Edit) {
        self.set(edit);
        self.derive();
    }

    /// Copy an existing record as the starting point for an edit.
    fn seed(existing: &Self) -> Self {
        let mut record = existing.clone();
        record.derive();
        record
    }
}

#[derive(Debug, Clone)]
pub enum Message<E> {
    Edit(E),
    Submit,
    Cancel,
}

/// Action used for communicating with whoever owns the form
#[derive(Debug, Clone, PartialEq)]
pub enum Action<R> {
    None,
    /// The finished record. Storing it is up to the receiver.
    Submit(R),
    Cancel,
}

#[derive(Debug, Clone)]
pub struct Form<R: FormRecord> {
    blank: R,
    /// The record the state was seeded from, `None` when creating
    seeded: Option<R>,
    state: R,
}

impl<R: FormRecord> Form<R> {
    pub fn new(directory: &Directory, existing: Option<&R>) -> Self {
        let blank = R::blank(directory);
        let state = seed(&blank, existing);

        Self {
            blank,
            seeded: existing.cloned(),
            state,
        }
    }

    /// The current, in-progress record.
    pub fn state(&self) -> &R {
        &self.state
    }

    /// Whether the form was seeded from a stored record.
    pub fn is_editing(&self) -> bool {
        self.seeded.as_ref().and_then(R::key).is_some()
    }

    /// Load a new record for editing, dropping any edits in progress.
    pub fn load(&mut self, existing: Option<&R>) {
        self.state = seed(&self.blank, existing);
        self.seeded = existing.cloned();

        debug!(
            "Form seeded with target {:?}",
            self.seeded.as_ref().and_then(R::key)
        );
    }

    /// Point the form at a possibly different record. Edits in progress survive only when
    /// `existing` is the very record the form was last seeded from. Returns whether the state
    /// was re-seeded.
    pub fn retarget(&mut self, existing: Option<&R>) -> bool {
        if existing == self.seeded.as_ref() {
            return false;
        }

        self.load(existing);
        true
    }

    /// Reset the form state
    pub fn clear(&mut self) {
        self.seeded = None;
        self.state = self.blank.clone();
    }

    pub fn update(&mut self, message: Message<R::Edit>) -> Action<R> {
        match message {
            Message::Edit(edit) => {
                self.state.apply(edit);
                Action::None
            }
            Message::Submit => {
                let record = self.state.clone();

                self.clear();

                Action::Submit(record)
            }
            Message::Cancel => {
                self.clear();
                Action::Cancel
            }
        }
    }
}

fn seed<R: FormRecord>(blank: &R, existing: Option<&R>) -> R {
    existing.map_or_else(|| blank.clone(), R::seed)
}

#[cfg(test)]
mod test {
    use crate::records::{
        Department, EmployeeId, EmploymentStatus, Payroll, PayrollEdit, PayrollStatus, Personnel,
        PersonnelEdit,
    };

    use super::*;

    fn personnel(id: u64, name: &str) -> Personnel {
        Personnel {
            id: Some(EmployeeId(id)),
            name: name.into(),
            position: "Analista".into(),
            department: Some(Department::Finance),
            email: format!("{id}@example.com"),
            phone: "555-0100".into(),
            status: EmploymentStatus::Inactive,
        }
    }

    #[test]
    fn test_new_blank() {
        let directory = Directory::mock();
        let form: Form<Personnel> = Form::new(&directory, None);

        assert!(!form.is_editing());
        assert_eq!(form.state(), &Personnel::default());
    }

    #[test]
    fn test_new_payroll_defaults() {
        let directory = Directory::mock();
        let form: Form<Payroll> = Form::new(&directory, None);
        let state = form.state();

        assert_eq!(state.id(), None);
        assert_eq!(state.employee(), None);
        assert_eq!(state.period(), &directory.periods().into_iter().next());
        assert_eq!(state.base_salary(), 0.0);
        assert_eq!(state.net_salary(), 0.0);
        assert_eq!(state.status(), PayrollStatus::Pending);
    }

    #[test]
    fn test_new_from_existing() {
        let directory = Directory::mock();
        let existing = personnel(4, "Ana Martínez");
        let form = Form::new(&directory, Some(&existing));

        assert!(form.is_editing());
        assert_eq!(form.state(), &existing);
    }

    #[test]
    fn test_seed_rederives_net_salary() {
        let directory = Directory::mock();
        let mut existing = Payroll::new(None, None, 1000.0, 200.0, 50.0, PayrollStatus::Paid);
        existing.set(PayrollEdit::BaseSalary("2000".into()));

        let form = Form::new(&directory, Some(&existing));

        assert_eq!(form.state().net_salary(), 2150.0);
    }

    #[test]
    fn test_edit_only_changes_one_field() {
        let directory = Directory::mock();
        let existing = personnel(1, "Juan Pérez");
        let mut form = Form::new(&directory, Some(&existing));

        let action = form.update(Message::Edit(PersonnelEdit::Phone("555-0199".into())));

        assert_eq!(action, Action::None);
        assert_eq!(
            form.state(),
            &Personnel {
                phone: "555-0199".into(),
                ..existing
            }
        );
    }

    #[test]
    fn test_edit_is_idempotent() {
        let directory = Directory::mock();
        let mut once: Form<Payroll> = Form::new(&directory, None);
        let mut twice: Form<Payroll> = Form::new(&directory, None);

        once.update(Message::Edit(PayrollEdit::Bonuses("75".into())));
        twice.update(Message::Edit(PayrollEdit::Bonuses("75".into())));
        twice.update(Message::Edit(PayrollEdit::Bonuses("75".into())));

        assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn test_net_salary_tracks_edits() {
        let directory = Directory::mock();
        let mut form: Form<Payroll> = Form::new(&directory, None);

        let triples = [
            ("1000", "200", "50"),
            ("", "200", "50"),
            ("3500.75", "0", "1200.25"),
            ("100", "abc", "250"),
            ("  42 ", "8", ""),
        ];

        for (base, bonuses, deductions) in triples {
            form.update(Message::Edit(PayrollEdit::BaseSalary(base.into())));
            form.update(Message::Edit(PayrollEdit::Bonuses(bonuses.into())));
            form.update(Message::Edit(PayrollEdit::Deductions(deductions.into())));

            let state = form.state();
            assert_eq!(
                state.net_salary(),
                state.base_salary() + state.bonuses() - state.deductions()
            );
        }
    }

    #[test]
    fn test_submit_payroll() {
        let directory = Directory::mock();
        let mut form: Form<Payroll> = Form::new(&directory, None);

        form.update(Message::Edit(PayrollEdit::Employee(EmployeeId(1))));
        form.update(Message::Edit(PayrollEdit::BaseSalary("1000".into())));
        form.update(Message::Edit(PayrollEdit::Bonuses("200".into())));
        form.update(Message::Edit(PayrollEdit::Deductions("50".into())));

        let Action::Submit(record) = form.update(Message::Submit) else {
            panic!("submitting should hand over the record");
        };

        assert_eq!(record.net_salary(), 1150.0);
        assert_eq!(record.employee(), Some(EmployeeId(1)));
        // Nothing is retained after submission
        assert_eq!(form.state(), &Payroll::blank(&directory));
    }

    #[test]
    fn test_cancel_discards_edits() {
        let directory = Directory::mock();
        let existing = personnel(2, "María García");
        let mut form = Form::new(&directory, Some(&existing));

        form.update(Message::Edit(PersonnelEdit::Name("Someone else".into())));

        assert_eq!(form.update(Message::Cancel), Action::Cancel);
        assert!(!form.is_editing());
        assert_eq!(form.state(), &Personnel::default());
    }

    #[test]
    fn test_retarget_reseeds() {
        let directory = Directory::mock();
        let a = personnel(1, "Juan Pérez");
        let b = Personnel {
            department: None,
            ..personnel(2, "María García")
        };

        let mut form = Form::new(&directory, Some(&a));
        form.update(Message::Edit(PersonnelEdit::Position("Gerente".into())));
        form.update(Message::Edit(PersonnelEdit::Department(Department::Sales)));

        assert!(form.retarget(Some(&b)));

        let fresh = Form::new(&directory, Some(&b));
        assert_eq!(form.state(), fresh.state());
        assert_eq!(form.is_editing(), fresh.is_editing());
    }

    #[test]
    fn test_retarget_between_unsaved_records() {
        let directory = Directory::mock();
        let a = Payroll::new(Some(EmployeeId(1)), None, 1000.0, 0.0, 0.0, PayrollStatus::Pending);
        let b = Payroll::new(Some(EmployeeId(2)), None, 500.0, 25.0, 0.0, PayrollStatus::Paid);

        let mut form = Form::new(&directory, Some(&a));
        form.update(Message::Edit(PayrollEdit::Bonuses("300".into())));

        assert!(form.retarget(Some(&b)));

        let fresh = Form::new(&directory, Some(&b));
        assert_eq!(form.state(), fresh.state());
        assert_eq!(form.state().employee(), Some(EmployeeId(2)));
        assert!(!form.is_editing());
    }

    #[test]
    fn test_retarget_newer_version_of_same_record() {
        let directory = Directory::mock();
        let old = personnel(3, "Old");
        let new = personnel(3, "New");

        let mut form = Form::new(&directory, Some(&old));
        form.update(Message::Edit(PersonnelEdit::Position("Gerente".into())));

        assert!(form.retarget(Some(&new)));

        let fresh = Form::new(&directory, Some(&new));
        assert_eq!(form.state(), fresh.state());
        assert_eq!(form.state().name, "New");
        assert!(form.is_editing());
    }

    #[test]
    fn test_retarget_same_record_keeps_edits() {
        let directory = Directory::mock();
        let a = personnel(1, "Juan Pérez");
        let mut form = Form::new(&directory, Some(&a));

        form.update(Message::Edit(PersonnelEdit::Position("Gerente".into())));

        assert!(!form.retarget(Some(&a)));
        assert_eq!(form.state().position, "Gerente");
    }

    #[test]
    fn test_retarget_to_creation() {
        let directory = Directory::mock();
        let a = personnel(1, "Juan Pérez");
        let mut form = Form::new(&directory, Some(&a));

        assert!(form.retarget(None));
        assert!(!form.is_editing());
        assert_eq!(form.state(), &Personnel::default());
    }
}
