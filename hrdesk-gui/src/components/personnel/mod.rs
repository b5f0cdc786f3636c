use hrdesk_lib::{Directory, form, records::Personnel};
use iced::{
    Element, Length, Task,
    widget::{button, column, row, scrollable, space, table, text},
};
use tokio::task::spawn_blocking;

use crate::{
    components::personnel::{
        form_dialog::FormDialog,
        state::{SortColumn, SortState},
    },
    config::Cfg,
    modal,
};

mod form_dialog;
pub mod state;

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Vec<Personnel>),
    SortChanged(SortColumn),
    ShowNewDialog,
    ShowEditDialog(Personnel),
    // Child messages
    FormDialog(form_dialog::Message),
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    None,
    Save(Personnel),
}

pub enum State {
    Loading,
    Loaded(Vec<Personnel>),
}

pub struct Tab {
    directory: Directory,
    cfg: Cfg,
    state: State,
    sort: SortState,
    show_dialog: bool,
    // Components
    dialog: FormDialog,
}

impl Tab {
    pub fn new(directory: Directory, cfg: Cfg) -> (Self, Task<Message>) {
        let sort = cfg.read().personnel.sort_state;
        let dialog = FormDialog::new(&directory);
        let task = list_personnel(&directory);

        (
            Self {
                directory,
                cfg,
                state: State::Loading,
                sort,
                show_dialog: false,
                dialog,
            },
            task,
        )
    }

    pub fn refresh(&self) -> Task<Message> {
        list_personnel(&self.directory)
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Loaded(mut rows) => {
                self.sort.sort(&mut rows);
                self.state = State::Loaded(rows);
                Action::None
            }
            Message::SortChanged(column) => {
                self.sort = self.sort.toggle(column);
                if let State::Loaded(rows) = &mut self.state {
                    self.sort.sort(rows);
                }

                let mut cfg = self.cfg.write();
                cfg.personnel.sort_state = self.sort;
                cfg.save();

                Action::None
            }
            Message::ShowNewDialog => {
                self.dialog.open(None);
                self.show_dialog = true;
                Action::None
            }
            Message::ShowEditDialog(record) => {
                self.dialog.open(Some(&record));
                self.show_dialog = true;
                Action::None
            }
            Message::FormDialog(message) => match self.dialog.update(message) {
                form::Action::None => Action::None,
                form::Action::Submit(record) => {
                    self.show_dialog = false;
                    Action::Save(record)
                }
                form::Action::Cancel => {
                    self.show_dialog = false;
                    Action::None
                }
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.state {
            State::Loading => column![text("Cargando personal...")].into(),
            State::Loaded(rows) => {
                let columns = [
                    table::column(
                        column_header("Nombre", &self.sort, SortColumn::Name),
                        |record: Personnel| text(record.name),
                    ),
                    table::column(text("Cargo"), |record: Personnel| text(record.position)),
                    table::column(
                        column_header("Departamento", &self.sort, SortColumn::Department),
                        |record: Personnel| {
                            text(
                                record
                                    .department
                                    .map(|d| d.to_string())
                                    .unwrap_or_else(|| "-".into()),
                            )
                        },
                    ),
                    table::column(text("Correo"), |record: Personnel| text(record.email)),
                    table::column(text("Teléfono"), |record: Personnel| text(record.phone)),
                    table::column(text("Estado"), |record: Personnel| {
                        text(record.status.to_string())
                    }),
                    table::column(text(""), |record: Personnel| {
                        button("Editar")
                            .style(button::subtle)
                            .on_press(Message::ShowEditDialog(record))
                    }),
                ];

                column![
                    row![
                        text("Personal").size(24),
                        space::horizontal(),
                        button("Nuevo").on_press(Message::ShowNewDialog),
                    ],
                    scrollable(table(columns, rows.clone()).width(Length::Fill)),
                ]
                .spacing(10)
                .into()
            }
        };

        if self.show_dialog {
            modal(
                content,
                self.dialog.view().map(Message::FormDialog),
                Some(Message::FormDialog(form_dialog::Message::CancelPressed)),
            )
        } else {
            content
        }
    }
}

fn list_personnel(directory: &Directory) -> Task<Message> {
    let directory = directory.clone();
    Task::perform(
        async move {
            spawn_blocking(move || directory.personnel())
                .await
                .unwrap_or_default()
        },
        Message::Loaded,
    )
}

fn column_header<'a>(
    name: &'a str,
    sort_state: &'a SortState,
    column: SortColumn,
) -> Element<'a, Message> {
    button(text(format!("{name}{}", sort_state.indicator(column))))
        .style(button::subtle)
        .width(Length::Fill)
        .on_press(Message::SortChanged(column))
        .into()
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use hrdesk_lib::records::EmployeeId;
    use parking_lot::RwLock;

    use crate::config::GuiConfig;

    use super::*;

    fn loaded_tab(directory: &Directory) -> Tab {
        let cfg = Arc::new(RwLock::new(GuiConfig::default()));
        let (mut tab, _) = Tab::new(directory.clone(), cfg);
        tab.update(Message::Loaded(directory.personnel()));
        tab
    }

    #[test]
    fn test_save_closes_dialog() {
        let directory = Directory::bundled().unwrap();
        let mut tab = loaded_tab(&directory);

        tab.update(Message::ShowNewDialog);
        assert!(tab.show_dialog);

        tab.update(Message::FormDialog(form_dialog::Message::NameInput(
            "Lucía Fernández".into(),
        )));
        tab.update(Message::FormDialog(form_dialog::Message::PositionInput(
            "Analista".into(),
        )));

        let Action::Save(record) =
            tab.update(Message::FormDialog(form_dialog::Message::SavePressed))
        else {
            panic!("saving should hand the record to the parent");
        };

        assert!(!tab.show_dialog);
        assert_eq!(record.name, "Lucía Fernández");
        assert_eq!(record.id, None);
    }

    #[test]
    fn test_cancel_closes_dialog() {
        let directory = Directory::bundled().unwrap();
        let mut tab = loaded_tab(&directory);
        let before = directory.personnel();

        tab.update(Message::ShowNewDialog);
        tab.update(Message::FormDialog(form_dialog::Message::NameInput(
            "Nadie".into(),
        )));

        // Clicking outside the modal sends the same message
        let action = tab.update(Message::FormDialog(form_dialog::Message::CancelPressed));

        assert!(matches!(action, Action::None));
        assert!(!tab.show_dialog);
        assert_eq!(directory.personnel(), before);
    }

    #[test]
    fn test_edit_dialog_is_seeded() {
        let directory = Directory::bundled().unwrap();
        let mut tab = loaded_tab(&directory);
        let existing = directory
            .personnel()
            .into_iter()
            .find(|p| p.id == Some(EmployeeId(2)))
            .unwrap();

        tab.update(Message::ShowEditDialog(existing.clone()));
        assert!(tab.show_dialog);

        tab.update(Message::FormDialog(form_dialog::Message::PhoneInput(
            "555-0123".into(),
        )));

        let Action::Save(record) =
            tab.update(Message::FormDialog(form_dialog::Message::SavePressed))
        else {
            panic!("saving should hand the record to the parent");
        };

        assert_eq!(
            record,
            Personnel {
                phone: "555-0123".into(),
                ..existing
            }
        );
    }
}
