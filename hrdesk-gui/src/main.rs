use std::sync::Arc;

use hrdesk_lib::{
    Directory,
    records::{Payroll, Personnel},
};
use iced::{
    Color, Element,
    Length::{self, Fill},
    Task, Theme, application,
    widget::{button, center, column, container, mouse_area, opaque, row, space, stack, text},
};
use parking_lot::RwLock;
use tokio::task::spawn_blocking;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{
        attendance::{self, Attendance},
        payroll, personnel,
    },
    config::{Cfg, GuiConfig},
};

pub mod components;
pub mod config;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    DirectoryLoaded(Result<Directory, String>),
    TabSelected(TabId),
    ThemeToggled,
    PersonnelSaved,
    PayrollSaved(Result<(), (Payroll, String)>),
    // Components
    Attendance(attendance::Message),
    Personnel(personnel::Message),
    Payroll(payroll::Message),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum TabId {
    #[default]
    Attendance,
    Personnel,
    Payroll,
}

enum State {
    Loading,
    Error(String),
    Loaded(Box<Components>),
}

struct Components {
    directory: Directory,
    attendance: Attendance,
    personnel: personnel::Tab,
    payroll: payroll::Tab,
}

struct App {
    title: String,
    cfg: Cfg,
    active_tab: TabId,
    state: State,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        let cfg = Arc::new(RwLock::new(GuiConfig::load()));

        (
            Self {
                title: "Recursos Humanos".into(),
                cfg,
                active_tab: TabId::default(),
                state: State::Loading,
            },
            Task::perform(load_directory(), Message::DirectoryLoaded),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DirectoryLoaded(Ok(directory)) => {
                info!("Directory loaded");

                let (attendance, attendance_task) = Attendance::new(&directory, self.cfg.clone());
                let (personnel, personnel_task) =
                    personnel::Tab::new(directory.clone(), self.cfg.clone());
                let (payroll, payroll_task) = payroll::Tab::new(directory.clone());

                self.state = State::Loaded(Box::new(Components {
                    directory,
                    attendance,
                    personnel,
                    payroll,
                }));

                Task::batch([
                    attendance_task.map(Message::Attendance),
                    personnel_task.map(Message::Personnel),
                    payroll_task.map(Message::Payroll),
                ])
            }
            Message::DirectoryLoaded(Err(e)) => {
                warn!("Failed to load directory: {e}");
                self.state = State::Error(e);
                Task::none()
            }
            Message::TabSelected(id) => {
                self.active_tab = id;
                Task::none()
            }
            Message::ThemeToggled => {
                let mut cfg = self.cfg.write();
                cfg.theme = cfg.theme.toggle();
                cfg.save();
                Task::none()
            }
            message => match &mut self.state {
                State::Loaded(components) => components.update(message),
                // Nothing to route to yet
                State::Loading | State::Error(_) => Task::none(),
            },
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.state {
            State::Loading => text("Cargando...").into(),
            State::Error(e) => text(e).into(),
            State::Loaded(components) => match self.active_tab {
                TabId::Attendance => components.attendance.view().map(Message::Attendance),
                TabId::Personnel => components.personnel.view().map(Message::Personnel),
                TabId::Payroll => components.payroll.view().map(Message::Payroll),
            },
        };

        column![
            // Top bar
            row![
                tab_button("Asistencia", TabId::Attendance, self.active_tab),
                tab_button("Personal", TabId::Personnel, self.active_tab),
                tab_button("Nómina", TabId::Payroll, self.active_tab),
                space::horizontal(),
                button("Tema").on_press(Message::ThemeToggled),
            ]
            .spacing(5),
            container(content).padding(10).height(Fill),
        ]
        .height(Fill)
        .into()
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.cfg.read().theme()
    }
}

impl Components {
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Redirect messages to relevant child components
            Message::Attendance(msg) => self.attendance.update(msg).map(Message::Attendance),
            Message::Personnel(msg) => match self.personnel.update(msg) {
                personnel::Action::None => Task::none(),
                personnel::Action::Save(record) => save_personnel(self.directory.clone(), record),
            },
            Message::Payroll(msg) => match self.payroll.update(msg) {
                payroll::Action::None => Task::none(),
                payroll::Action::Save(record) => save_payroll(self.directory.clone(), record),
            },
            // New or renamed employees show up in the payroll dialog as well
            Message::PersonnelSaved => Task::batch([
                self.personnel.refresh().map(Message::Personnel),
                self.payroll.refresh().map(Message::Payroll),
            ]),
            Message::PayrollSaved(Ok(())) => self.payroll.refresh().map(Message::Payroll),
            Message::PayrollSaved(Err((record, e))) => {
                warn!("Payroll was not stored: {e}");
                self.payroll.update(payroll::Message::SaveFailed(record, e));
                Task::none()
            }
            Message::DirectoryLoaded(_) | Message::TabSelected(_) | Message::ThemeToggled => {
                Task::none()
            }
        }
    }
}

async fn load_directory() -> Result<Directory, String> {
    spawn_blocking(Directory::load)
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())
}

fn save_personnel(directory: Directory, record: Personnel) -> Task<Message> {
    Task::perform(
        async move { spawn_blocking(move || directory.save_personnel(record)).await },
        |_| Message::PersonnelSaved,
    )
}

fn save_payroll(directory: Directory, record: Payroll) -> Task<Message> {
    Task::perform(
        async move {
            let rejected = record.clone();
            spawn_blocking(move || directory.save_payroll(record).map(|_| ()))
                .await
                .map_err(|e| e.to_string())
                .and_then(|result| result.map_err(|e| e.to_string()))
                .map_err(|e| (rejected, e))
        },
        Message::PayrollSaved,
    )
}

fn tab_button(label: &str, id: TabId, active: TabId) -> Element<'_, Message> {
    let style = if id == active {
        button::primary
    } else {
        button::subtle
    };

    button(label)
        .style(style)
        .on_press(Message::TabSelected(id))
        .into()
}

pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_click_outside: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let mouse_area = mouse_area(center(opaque(content)).style(|_theme| {
        container::Style {
            background: Some(
                Color {
                    a: 0.8,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        }
    }));

    stack![
        base.into(),
        opaque(if let Some(msg) = on_click_outside {
            mouse_area.on_press(msg)
        } else {
            mouse_area
        })
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
