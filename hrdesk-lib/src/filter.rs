//! Narrowing a list of attendance records down to the ones a user is looking for.

use std::fmt::{self, Display, Formatter};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::records::{AttendanceRecord, AttendanceStatus};

/// Format of the canonical date key
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Either matches every status, or exactly one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AttendanceStatus),
}

impl StatusFilter {
    /// The wildcard followed by every status, in declaration order.
    pub fn options() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(AttendanceStatus::iter().map(StatusFilter::Only))
            .collect()
    }

    pub fn matches(&self, status: AttendanceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "Todos"),
            StatusFilter::Only(status) => write!(f, "{status}"),
        }
    }
}

/// Search criteria for attendance records. A record has to satisfy all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceFilter {
    search: String,
    date: NaiveDate,
    status: StatusFilter,
}

impl AttendanceFilter {
    pub fn new(search: &str, date: NaiveDate, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            date,
            status,
        }
    }

    /// No search term, any status, today's date in local time.
    pub fn today() -> Self {
        Self::new("", Local::now().date_naive(), StatusFilter::All)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The selected date as `YYYY-MM-DD`.
    pub fn date_key(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.into();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
    }

    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        let matches_search = record
            .employee_name()
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        let matches_date = record.date() == self.date;
        let matches_status = self.status.matches(record.status());

        matches_search && matches_date && matches_status
    }

    /// Every matching record, in input order. An empty result is not an error.
    pub fn apply<'a>(&self, records: &'a [AttendanceRecord]) -> Vec<&'a AttendanceRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

impl Default for AttendanceFilter {
    fn default() -> Self {
        Self::today()
    }
}
