use hrdesk_lib::{
    Directory, form,
    records::{Employee, EmployeeId, Payroll},
};
use iced::{
    Color, Element, Length, Task,
    widget::{button, column, row, scrollable, space, table, text},
};
use tokio::task::spawn_blocking;

use crate::{components::payroll::form_dialog::FormDialog, modal};

mod form_dialog;

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Vec<Payroll>, Vec<Employee>),
    ShowNewDialog,
    ShowEditDialog(Payroll),
    /// The directory refused a submitted payroll
    SaveFailed(Payroll, String),
    // Child messages
    FormDialog(form_dialog::Message),
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    None,
    Save(Payroll),
}

pub enum State {
    Loading,
    Loaded {
        payrolls: Vec<Payroll>,
        employees: Vec<Employee>,
    },
}

pub struct Tab {
    directory: Directory,
    state: State,
    show_dialog: bool,
    /// Why the last submitted payroll was not stored
    error: Option<String>,
    // Components
    dialog: FormDialog,
}

impl Tab {
    pub fn new(directory: Directory) -> (Self, Task<Message>) {
        let dialog = FormDialog::new(&directory);
        let task = list_payrolls(&directory);

        (
            Self {
                directory,
                state: State::Loading,
                show_dialog: false,
                error: None,
                dialog,
            },
            task,
        )
    }

    pub fn refresh(&self) -> Task<Message> {
        list_payrolls(&self.directory)
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Loaded(payrolls, employees) => {
                self.dialog.set_employees(employees.clone());
                self.state = State::Loaded {
                    payrolls,
                    employees,
                };
                Action::None
            }
            Message::ShowNewDialog => {
                self.error = None;
                self.dialog.open(None);
                self.show_dialog = true;
                Action::None
            }
            Message::ShowEditDialog(payroll) => {
                self.error = None;
                self.dialog.open(Some(&payroll));
                self.show_dialog = true;
                Action::None
            }
            // Give the user the rejected payroll back instead of dropping it
            Message::SaveFailed(payroll, error) => {
                self.dialog.open(Some(&payroll));
                self.error = Some(error);
                self.show_dialog = true;
                Action::None
            }
            Message::FormDialog(message) => match self.dialog.update(message) {
                form::Action::None => Action::None,
                form::Action::Submit(payroll) => {
                    self.error = None;
                    self.show_dialog = false;
                    Action::Save(payroll)
                }
                form::Action::Cancel => {
                    self.error = None;
                    self.show_dialog = false;
                    Action::None
                }
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.state {
            State::Loading => column![text("Cargando nóminas...")].into(),
            State::Loaded {
                payrolls,
                employees,
            } => {
                let columns = [
                    table::column(text("Empleado"), move |payroll: Payroll| {
                        text(employee_name(employees, payroll.employee()))
                    }),
                    table::column(text("Período"), |payroll: Payroll| {
                        text(
                            payroll
                                .period()
                                .as_ref()
                                .map(|p| p.to_string())
                                .unwrap_or_else(|| "-".into()),
                        )
                    }),
                    table::column(text("Salario Base"), |payroll: Payroll| {
                        text(amount(payroll.base_salary()))
                    }),
                    table::column(text("Bonificaciones"), |payroll: Payroll| {
                        text(amount(payroll.bonuses()))
                    }),
                    table::column(text("Deducciones"), |payroll: Payroll| {
                        text(amount(payroll.deductions()))
                    }),
                    table::column(text("Salario Neto"), |payroll: Payroll| {
                        text(amount(payroll.net_salary()))
                    }),
                    table::column(text("Estado"), |payroll: Payroll| {
                        text(payroll.status().to_string())
                    }),
                    table::column(text(""), |payroll: Payroll| {
                        button("Editar")
                            .style(button::subtle)
                            .on_press(Message::ShowEditDialog(payroll))
                    }),
                ];

                let list: Element<'_, Message> = if payrolls.is_empty() {
                    text("No se han generado nóminas.").into()
                } else {
                    scrollable(table(columns, payrolls.clone()).width(Length::Fill)).into()
                };

                column![
                    row![
                        text("Nómina").size(24),
                        space::horizontal(),
                        button("Generar Nómina").on_press(Message::ShowNewDialog),
                    ],
                    list,
                ]
                .spacing(10)
                .into()
            }
        };

        if self.show_dialog {
            let dialog = self.dialog.view().map(Message::FormDialog);
            let dialog: Element<'_, Message> = match &self.error {
                Some(e) => column![
                    text(format!("No se pudo guardar la nómina: {e}"))
                        .color(Color::from_rgb8(0x99, 0x1b, 0x1b)),
                    dialog,
                ]
                .spacing(10)
                .into(),
                None => dialog,
            };

            modal(
                content,
                dialog,
                Some(Message::FormDialog(form_dialog::Message::CancelPressed)),
            )
        } else {
            content
        }
    }
}

fn list_payrolls(directory: &Directory) -> Task<Message> {
    let directory = directory.clone();
    Task::perform(
        async move {
            spawn_blocking(move || (directory.payrolls(), directory.employees()))
                .await
                .unwrap_or_default()
        },
        |(payrolls, employees)| Message::Loaded(payrolls, employees),
    )
}

fn employee_name(employees: &[Employee], id: Option<EmployeeId>) -> String {
    id.and_then(|id| employees.iter().find(|e| e.id == id))
        .map(|e| e.name.clone())
        .unwrap_or_else(|| "-".into())
}

fn amount(value: f64) -> String {
    format!("{value:.2}")
}
