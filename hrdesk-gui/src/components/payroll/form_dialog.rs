use hrdesk_lib::{
    Directory, Form,
    form::{self, Action},
    records::{Employee, PayPeriod, Payroll, PayrollEdit, PayrollStatus},
};
use iced::{
    Element,
    widget::{button, column, combo_box, container, row, space, text, text_input},
};
use strum::IntoEnumIterator;

#[derive(Debug, Clone)]
pub enum Message {
    EmployeeSelected(Employee),
    PeriodSelected(PayPeriod),
    BaseSalaryInput(String),
    BonusesInput(String),
    DeductionsInput(String),
    StatusSelected(PayrollStatus),
    CancelPressed,
    GeneratePressed,
}

/// The text currently in each amount field. The form only keeps the parsed values.
#[derive(Debug, Default)]
struct AmountInputs {
    base_salary: String,
    bonuses: String,
    deductions: String,
}

impl AmountInputs {
    fn from_record(record: &Payroll) -> Self {
        Self {
            base_salary: record.base_salary().to_string(),
            bonuses: record.bonuses().to_string(),
            deductions: record.deductions().to_string(),
        }
    }
}

pub struct FormDialog {
    form: Form<Payroll>,
    inputs: AmountInputs,
    employees: Vec<Employee>,
    employee_state: combo_box::State<Employee>,
    period_state: combo_box::State<PayPeriod>,
    status_state: combo_box::State<PayrollStatus>,
}

impl FormDialog {
    pub fn new(directory: &Directory) -> Self {
        let form = Form::new(directory, None);
        let inputs = AmountInputs::from_record(form.state());
        let employees = directory.employees();

        Self {
            form,
            inputs,
            employee_state: combo_box::State::new(employees.clone()),
            employees,
            period_state: combo_box::State::new(directory.periods()),
            status_state: combo_box::State::new(PayrollStatus::iter().collect()),
        }
    }

    /// Replace the employees offered for selection.
    pub fn set_employees(&mut self, employees: Vec<Employee>) {
        self.employee_state = combo_box::State::new(employees.clone());
        self.employees = employees;
    }

    /// Point the dialog at a stored payroll, or at a new one.
    pub fn open(&mut self, existing: Option<&Payroll>) {
        self.form.retarget(existing);
        self.inputs = AmountInputs::from_record(self.form.state());
    }

    pub fn update(&mut self, message: Message) -> Action<Payroll> {
        let message = match message {
            Message::EmployeeSelected(employee) => {
                form::Message::Edit(PayrollEdit::Employee(employee.id))
            }
            Message::PeriodSelected(period) => form::Message::Edit(PayrollEdit::Period(period)),
            Message::BaseSalaryInput(content) => {
                self.inputs.base_salary = content.clone();
                form::Message::Edit(PayrollEdit::BaseSalary(content))
            }
            Message::BonusesInput(content) => {
                self.inputs.bonuses = content.clone();
                form::Message::Edit(PayrollEdit::Bonuses(content))
            }
            Message::DeductionsInput(content) => {
                self.inputs.deductions = content.clone();
                form::Message::Edit(PayrollEdit::Deductions(content))
            }
            Message::StatusSelected(status) => form::Message::Edit(PayrollEdit::Status(status)),
            Message::CancelPressed => form::Message::Cancel,
            Message::GeneratePressed => form::Message::Submit,
        };

        let action = self.form.update(message);

        if !matches!(action, Action::None) {
            self.inputs = AmountInputs::from_record(self.form.state());
        }

        action
    }

    pub fn view(&self) -> Element<'_, Message> {
        let state = self.form.state();
        let selected_employee = state
            .employee()
            .and_then(|id| self.employees.iter().find(|e| e.id == id));

        container(
            column![
                row![
                    text("Empleado: "),
                    combo_box(
                        &self.employee_state,
                        "Seleccionar empleado",
                        selected_employee,
                        Message::EmployeeSelected
                    ),
                ],
                row![
                    text("Período: "),
                    combo_box(
                        &self.period_state,
                        "Seleccionar período",
                        state.period().as_ref(),
                        Message::PeriodSelected
                    ),
                ],
                row![
                    text("Salario Base: "),
                    text_input("0", &self.inputs.base_salary).on_input(Message::BaseSalaryInput),
                ],
                row![
                    text("Bonificaciones: "),
                    text_input("0", &self.inputs.bonuses).on_input(Message::BonusesInput),
                ],
                row![
                    text("Deducciones: "),
                    text_input("0", &self.inputs.deductions).on_input(Message::DeductionsInput),
                ],
                row![
                    text("Salario Neto: "),
                    text(format!("{:.2}", state.net_salary())),
                ],
                row![
                    text("Estado: "),
                    combo_box(
                        &self.status_state,
                        "Seleccionar estado",
                        Some(&state.status()),
                        Message::StatusSelected
                    ),
                ],
                space::vertical(),
                row![
                    space::horizontal(),
                    button("Cancelar").on_press(Message::CancelPressed),
                    button("Generar Nómina")
                        .on_press_maybe(self.validate().then_some(Message::GeneratePressed)),
                ],
            ]
            .spacing(10),
        )
        .padding(20)
        .width(400)
        .height(600)
        .style(container::rounded_box)
        .into()
    }

    // A payroll has to belong to someone
    fn validate(&self) -> bool {
        let state = self.form.state();
        state.employee().is_some() && state.period().is_some()
    }
}

#[cfg(test)]
mod test {
    use hrdesk_lib::{FormRecord, records::EmployeeId};

    use super::*;

    fn employee(directory: &Directory, id: u64) -> Employee {
        directory.employee(EmployeeId(id)).unwrap()
    }

    #[test]
    fn test_generate() {
        let directory = Directory::bundled().unwrap();
        let mut dialog = FormDialog::new(&directory);

        dialog.update(Message::EmployeeSelected(employee(&directory, 1)));
        dialog.update(Message::BaseSalaryInput("1000".into()));
        dialog.update(Message::BonusesInput("200".into()));
        dialog.update(Message::DeductionsInput("50".into()));

        assert!(dialog.validate());
        assert_eq!(dialog.form.state().net_salary(), 1150.0);

        let Action::Submit(record) = dialog.update(Message::GeneratePressed) else {
            panic!("generating should submit the payroll");
        };

        assert_eq!(record.net_salary(), 1150.0);
        assert_eq!(record.employee(), Some(EmployeeId(1)));
        assert_eq!(record.period().as_ref().map(PayPeriod::label), Some("Abril 2023"));
        // Inputs follow the cleared form
        assert_eq!(dialog.inputs.base_salary, "0");
    }

    #[test]
    fn test_inputs_keep_raw_text() {
        let directory = Directory::bundled().unwrap();
        let mut dialog = FormDialog::new(&directory);

        dialog.update(Message::BaseSalaryInput("12.".into()));
        dialog.update(Message::DeductionsInput("".into()));

        assert_eq!(dialog.inputs.base_salary, "12.");
        assert_eq!(dialog.inputs.deductions, "");
        assert_eq!(dialog.form.state().net_salary(), 12.0);
    }

    #[test]
    fn test_open_existing() {
        let directory = Directory::bundled().unwrap();
        let stored = directory
            .save_payroll(Payroll::new(
                Some(EmployeeId(3)),
                directory.periods().into_iter().next(),
                1800.5,
                0.0,
                100.0,
                PayrollStatus::Paid,
            ))
            .unwrap();
        let mut dialog = FormDialog::new(&directory);

        dialog.open(Some(&stored));

        assert_eq!(dialog.inputs.base_salary, "1800.5");
        assert_eq!(dialog.form.state(), &Payroll::seed(&stored));
    }

    #[test]
    fn test_cancel() {
        let directory = Directory::bundled().unwrap();
        let mut dialog = FormDialog::new(&directory);

        dialog.update(Message::BaseSalaryInput("999".into()));

        assert_eq!(dialog.update(Message::CancelPressed), Action::Cancel);
        assert_eq!(dialog.form.state(), &Payroll::blank(&directory));
        assert_eq!(dialog.inputs.base_salary, "0");
    }
}
