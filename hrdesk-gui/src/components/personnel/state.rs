use std::cmp::Ordering;

use hrdesk_lib::records::Personnel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Copy, Serialize, Deserialize)]
pub enum SortColumn {
    Name,
    Department,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    pub fn toggle(&self, column: SortColumn) -> Self {
        if self.column == column {
            let new_direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };

            Self {
                column,
                direction: new_direction,
            }
        } else {
            // A different column than the currently sorted one has been selected
            Self {
                column,
                ..Default::default()
            }
        }
    }

    pub fn indicator(&self, column: SortColumn) -> &'static str {
        if self.column == column {
            match self.direction {
                SortDirection::Ascending => " ▲",
                SortDirection::Descending => " ▼",
            }
        } else {
            ""
        }
    }

    pub fn compare(&self, a: &Personnel, b: &Personnel) -> Ordering {
        let ordering = match self.column {
            SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            // Unassigned departments sort first
            SortColumn::Department => a
                .department
                .cmp(&b.department)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Sort personnel rows in place.
    pub fn sort(&self, rows: &mut [Personnel]) {
        rows.sort_by(|a, b| self.compare(a, b));
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::Name,
            direction: SortDirection::Ascending,
        }
    }
}
