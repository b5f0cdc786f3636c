use hrdesk_lib::{
    Directory, Form,
    form::{self, Action},
    records::{Department, EmploymentStatus, Personnel, PersonnelEdit},
};
use iced::{
    Element,
    widget::{button, column, combo_box, container, row, space, text, text_input},
};
use strum::IntoEnumIterator;

#[derive(Debug, Clone)]
pub enum Message {
    NameInput(String),
    PositionInput(String),
    DepartmentSelected(Department),
    EmailInput(String),
    PhoneInput(String),
    StatusSelected(EmploymentStatus),
    CancelPressed,
    SavePressed,
}

pub struct FormDialog {
    form: Form<Personnel>,
    department_state: combo_box::State<Department>,
    status_state: combo_box::State<EmploymentStatus>,
}

impl FormDialog {
    pub fn new(directory: &Directory) -> Self {
        Self {
            form: Form::new(directory, None),
            department_state: combo_box::State::new(Department::iter().collect()),
            status_state: combo_box::State::new(EmploymentStatus::iter().collect()),
        }
    }

    /// Point the dialog at a stored record, or at a new one.
    pub fn open(&mut self, existing: Option<&Personnel>) {
        self.form.retarget(existing);
    }

    pub fn update(&mut self, message: Message) -> Action<Personnel> {
        let message = match message {
            Message::NameInput(name) => form::Message::Edit(PersonnelEdit::Name(name)),
            Message::PositionInput(position) => {
                form::Message::Edit(PersonnelEdit::Position(position))
            }
            Message::DepartmentSelected(department) => {
                form::Message::Edit(PersonnelEdit::Department(department))
            }
            Message::EmailInput(email) => form::Message::Edit(PersonnelEdit::Email(email)),
            Message::PhoneInput(phone) => form::Message::Edit(PersonnelEdit::Phone(phone)),
            Message::StatusSelected(status) => form::Message::Edit(PersonnelEdit::Status(status)),
            Message::CancelPressed => form::Message::Cancel,
            Message::SavePressed => form::Message::Submit,
        };

        self.form.update(message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let state = self.form.state();
        let confirm = if self.form.is_editing() {
            "Actualizar"
        } else {
            "Guardar"
        };

        container(
            column![
                row![
                    text("Nombre Completo: "),
                    text_input("...", &state.name).on_input(Message::NameInput),
                ],
                row![
                    text("Cargo: "),
                    text_input("...", &state.position).on_input(Message::PositionInput),
                ],
                row![
                    text("Departamento: "),
                    combo_box(
                        &self.department_state,
                        "Seleccionar departamento",
                        state.department.as_ref(),
                        Message::DepartmentSelected
                    ),
                ],
                row![
                    text("Correo Electrónico: "),
                    text_input("...", &state.email).on_input(Message::EmailInput),
                ],
                row![
                    text("Teléfono: "),
                    text_input("...", &state.phone).on_input(Message::PhoneInput),
                ],
                row![
                    text("Estado: "),
                    combo_box(
                        &self.status_state,
                        "Seleccionar estado",
                        Some(&state.status),
                        Message::StatusSelected
                    ),
                ],
                space::vertical(),
                row![
                    space::horizontal(),
                    button("Cancelar").on_press(Message::CancelPressed),
                    button(confirm).on_press_maybe(self.validate().then_some(Message::SavePressed)),
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

    // Name and position are required
    fn validate(&self) -> bool {
        let state = self.form.state();
        !state.name.trim().is_empty() && !state.position.trim().is_empty()
    }
}
