use chrono::{Local, NaiveDate};
use hrdesk_lib::{
    AttendanceFilter, Directory, StatusFilter,
    filter::DATE_FORMAT,
    records::{AttendanceRecord, AttendanceStatus},
};
use iced::{
    Color, Element, Length, Task,
    widget::{button, column, combo_box, container, row, scrollable, table, text, text_input},
};
use tracing::warn;

use crate::config::Cfg;

#[derive(Debug, Clone)]
pub enum Message {
    SearchInput(String),
    DateInput(String),
    DateSubmitted,
    PreviousDay,
    NextDay,
    Today,
    StatusSelected(StatusFilter),
}

pub struct Attendance {
    cfg: Cfg,
    records: Vec<AttendanceRecord>,
    filter: AttendanceFilter,
    /// Text in the date field, may be mid-edit
    date_input: String,
    status_state: combo_box::State<StatusFilter>,
}

impl Attendance {
    pub fn new(directory: &Directory, cfg: Cfg) -> (Self, Task<Message>) {
        let mut filter = AttendanceFilter::today();
        filter.set_status(cfg.read().attendance.status_filter);

        (
            Self {
                cfg,
                records: directory.attendance(),
                date_input: filter.date_key(),
                filter,
                status_state: combo_box::State::new(StatusFilter::options()),
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchInput(content) => self.filter.set_search(&content),
            Message::DateInput(content) => self.date_input = content,
            Message::DateSubmitted => {
                match NaiveDate::parse_from_str(self.date_input.trim(), DATE_FORMAT) {
                    Ok(date) => self.set_date(date),
                    Err(e) => {
                        warn!("Ignoring invalid date '{}': {e}", self.date_input);
                        self.date_input = self.filter.date_key();
                    }
                }
            }
            Message::PreviousDay => {
                if let Some(date) = self.filter.date().pred_opt() {
                    self.set_date(date);
                }
            }
            Message::NextDay => {
                if let Some(date) = self.filter.date().succ_opt() {
                    self.set_date(date);
                }
            }
            Message::Today => self.set_date(Local::now().date_naive()),
            Message::StatusSelected(status) => {
                self.filter.set_status(status);

                let mut cfg = self.cfg.write();
                cfg.attendance.status_filter = status;
                cfg.save();
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let filters = row![
            text_input("Buscar empleado...", self.filter.search())
                .on_input(Message::SearchInput)
                .width(Length::FillPortion(2)),
            button("<").on_press(Message::PreviousDay),
            text_input("AAAA-MM-DD", &self.date_input)
                .on_input(Message::DateInput)
                .on_submit(Message::DateSubmitted)
                .width(120),
            button(">").on_press(Message::NextDay),
            button("Hoy").on_press(Message::Today),
            combo_box(
                &self.status_state,
                "Filtrar por estado",
                Some(&self.filter.status()),
                Message::StatusSelected
            )
            .width(Length::FillPortion(1)),
        ]
        .spacing(10);

        let rows: Vec<AttendanceRecord> = self
            .filter
            .apply(&self.records)
            .into_iter()
            .cloned()
            .collect();

        let list: Element<'_, Message> = if rows.is_empty() {
            container(text("No se encontraron registros para esta fecha."))
                .padding(40)
                .center_x(Length::Fill)
                .into()
        } else {
            let columns = [
                table::column(text("Empleado"), |record: AttendanceRecord| {
                    text(record.employee_name().clone())
                }),
                table::column(text("Fecha"), |record: AttendanceRecord| {
                    text(record.date().format(DATE_FORMAT).to_string())
                }),
                table::column(text("Hora Entrada"), |record: AttendanceRecord| {
                    text(record.check_in().clone())
                }),
                table::column(text("Hora Salida"), |record: AttendanceRecord| {
                    text(record.check_out().clone())
                }),
                table::column(text("Estado"), |record: AttendanceRecord| {
                    text(record.status().to_string()).color(status_color(record.status()))
                }),
            ];

            scrollable(table(columns, rows).width(Length::Fill)).into()
        };

        column![text("Control de Asistencia").size(24), filters, list]
            .spacing(10)
            .into()
    }

    fn set_date(&mut self, date: NaiveDate) {
        self.filter.set_date(date);
        self.date_input = self.filter.date_key();
    }
}

fn status_color(status: AttendanceStatus) -> Color {
    match status {
        AttendanceStatus::OnTime => Color::from_rgb8(0x16, 0x65, 0x34),
        AttendanceStatus::Late => Color::from_rgb8(0x85, 0x4d, 0x0e),
        AttendanceStatus::Absent => Color::from_rgb8(0x99, 0x1b, 0x1b),
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use parking_lot::RwLock;

    use crate::config::GuiConfig;

    use super::*;

    fn attendance() -> Attendance {
        let directory = Directory::bundled().unwrap();
        let cfg = Arc::new(RwLock::new(GuiConfig::default()));
        let (mut attendance, _) = Attendance::new(&directory, cfg);
        attendance.set_date(NaiveDate::from_ymd_opt(2023, 4, 10).unwrap());
        attendance
    }

    #[test]
    fn test_date_submitted() {
        let mut attendance = attendance();

        attendance.update(Message::DateInput(" 2023-04-11 ".into()));
        attendance.update(Message::DateSubmitted);

        assert_eq!(attendance.filter.date_key(), "2023-04-11");
        assert_eq!(attendance.date_input, "2023-04-11");
    }

    #[test]
    fn test_invalid_date_is_reverted() {
        let mut attendance = attendance();

        attendance.update(Message::DateInput("10/04/2023".into()));
        attendance.update(Message::DateSubmitted);

        assert_eq!(attendance.filter.date_key(), "2023-04-10");
        assert_eq!(attendance.date_input, "2023-04-10");
    }

    #[test]
    fn test_step_days() {
        let mut attendance = attendance();

        attendance.update(Message::NextDay);
        assert_eq!(attendance.date_input, "2023-04-11");

        attendance.update(Message::PreviousDay);
        attendance.update(Message::PreviousDay);
        assert_eq!(attendance.date_input, "2023-04-09");
    }

    #[test]
    fn test_search_filters_rows() {
        let mut attendance = attendance();

        attendance.update(Message::SearchInput("GARCÍA".into()));

        let names: Vec<&str> = attendance
            .filter
            .apply(&attendance.records)
            .into_iter()
            .map(|r| r.employee_name().as_str())
            .collect();

        assert_eq!(names, ["María García"]);
    }
}
