use std::{collections::HashSet, fs, path::Path, sync::Arc};

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::{
    Error, FormRecord, Result,
    directory::models::DirectoryFile,
    fs::data_dir,
    records::{AttendanceRecord, Employee, EmployeeId, PayPeriod, Payroll, PayrollId, Personnel},
};

mod models;

const FILE_NAME: &str = "directory.toml";
const BUNDLED: &str = include_str!("../../data/directory.toml");

/// Central access point for reference data and stored records.
///
/// The [`Directory`] holds the employee list, the pay periods and the attendance log that
/// forms and filters are validated against, along with every personnel and payroll record
/// submitted during the session. Nothing is written back to disk. Cloning is cheap, every
/// clone refers to the same data.
#[derive(Clone, Debug)]
pub struct Directory {
    store: Arc<RwLock<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    periods: Vec<PayPeriod>,
    attendance: Vec<AttendanceRecord>,
    personnel: Vec<Personnel>,
    payrolls: Vec<Payroll>,
}

impl Directory {
    /// Load the data set from the user's data directory, falling back to the bundled one.
    pub fn load() -> Result<Self> {
        let path = data_dir()?.join(FILE_NAME);

        if path.exists() {
            Self::from_file(&path)
        } else {
            debug!("No {} found, using bundled data", path.display());
            Self::bundled()
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// The data set compiled into the library.
    pub fn bundled() -> Result<Self> {
        Self::from_toml(BUNDLED)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: DirectoryFile = toml::from_str(contents)?;

        let mut seen = HashSet::new();
        if let Some(id) = file
            .personnel
            .iter()
            .filter_map(|p| p.id)
            .find(|id| !seen.insert(*id))
        {
            return Err(Error::DuplicateEmployee(id));
        }

        let directory = Self {
            store: Arc::new(RwLock::new(Store {
                periods: file.periods.iter().map(|l| PayPeriod::new(l)).collect(),
                attendance: file.attendance,
                ..Default::default()
            })),
        };

        for record in file.personnel {
            directory.save_personnel(record);
        }

        info!(
            "Loaded directory with {} employees and {} attendance records",
            directory.store.read().personnel.len(),
            directory.store.read().attendance.len()
        );

        Ok(directory)
    }

    /// Every employee as an id/name pair, in storage order.
    pub fn employees(&self) -> Vec<Employee> {
        self.store
            .read()
            .personnel
            .iter()
            .filter_map(|p| {
                p.id.map(|id| Employee {
                    id,
                    name: p.name.clone(),
                })
            })
            .collect()
    }

    pub fn employee(&self, id: EmployeeId) -> Result<Employee> {
        self.employees()
            .into_iter()
            .find(|e| e.id == id)
            .ok_or(Error::UnknownEmployee(id))
    }

    pub fn periods(&self) -> Vec<PayPeriod> {
        self.store.read().periods.clone()
    }

    /// Look up a pay period by its label.
    pub fn period(&self, label: &str) -> Result<PayPeriod> {
        self.store
            .read()
            .periods
            .iter()
            .find(|p| p.label() == label)
            .cloned()
            .ok_or_else(|| Error::UnknownPeriod(label.into()))
    }

    pub fn attendance(&self) -> Vec<AttendanceRecord> {
        self.store.read().attendance.clone()
    }

    pub fn personnel(&self) -> Vec<Personnel> {
        self.store.read().personnel.clone()
    }

    pub fn payrolls(&self) -> Vec<Payroll> {
        self.store.read().payrolls.clone()
    }

    /// Store a personnel record, replacing the one with the same id if there is one. Records
    /// without an id are assigned the next free one.
    pub fn save_personnel(&self, record: Personnel) -> Personnel {
        let mut store = self.store.write();

        let id = record.id.unwrap_or_else(|| {
            EmployeeId(next_id(
                store.personnel.iter().filter_map(|p| p.id).map(|id| id.0),
            ))
        });
        let record = Personnel {
            id: Some(id),
            ..record
        };

        match store.personnel.iter_mut().find(|p| p.id == Some(id)) {
            Some(existing) => {
                *existing = record.clone();
                debug!("Updated personnel record {id}");
            }
            None => {
                store.personnel.push(record.clone());
                debug!("Added personnel record {id}");
            }
        }

        record
    }

    /// Store a payroll record, replacing the one with the same id if there is one. The
    /// employee and period must both be known to the directory.
    pub fn save_payroll(&self, record: Payroll) -> Result<Payroll> {
        let mut store = self.store.write();

        if let Some(employee) = record.employee()
            && !store.personnel.iter().any(|p| p.id == Some(employee))
        {
            return Err(Error::UnknownEmployee(employee));
        }

        if let Some(period) = record.period()
            && !store.periods.contains(period)
        {
            return Err(Error::UnknownPeriod(period.label().into()));
        }

        let id = record.id().unwrap_or_else(|| {
            PayrollId(next_id(
                store.payrolls.iter().filter_map(Payroll::id).map(|id| id.0),
            ))
        });
        let record = Payroll::seed(&record).with_id(id);

        match store.payrolls.iter_mut().find(|p| p.id() == Some(id)) {
            Some(existing) => {
                *existing = record.clone();
                debug!("Updated payroll {id}");
            }
            None => {
                store.payrolls.push(record.clone());
                debug!("Added payroll {id}");
            }
        }

        Ok(record)
    }

    #[cfg(test)]
    /// Return the bundled data set for use in tests.
    pub(crate) fn mock() -> Self {
        Self::bundled().expect("bundled data set must parse")
    }
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max.saturating_add(1))
}
