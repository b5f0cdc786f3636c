use std::{fs, sync::Arc};

use hrdesk_lib::{StatusFilter, fs::config_dir};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{components::personnel::state::SortState, config::theme::Theme};

mod theme;

const FILE_NAME: &str = "gui.toml";

/// Handle to the GUI configuration
pub type Cfg = Arc<RwLock<GuiConfig>>;

/// The GUI configuration, serialized to TOML.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GuiConfig {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub attendance: Attendance,
    #[serde(default)]
    pub personnel: Personnel,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Attendance {
    pub status_filter: StatusFilter,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Personnel {
    pub sort_state: SortState,
}

impl GuiConfig {
    /// Load the configuration file, falling back to the defaults if it is missing or malformed.
    pub fn load() -> Self {
        let path = match config_dir() {
            Ok(dir) => dir.join(FILE_NAME),
            Err(e) => {
                warn!("Using default configuration: {e}");
                return Self::default();
            }
        };

        if path.exists() {
            fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|contents| toml::from_str(&contents).map_err(|e| e.to_string()))
                .unwrap_or_else(|e| {
                    warn!("Ignoring malformed {}: {e}", path.display());
                    Self::default()
                })
        } else {
            let cfg = Self::default();
            cfg.save();
            cfg
        }
    }

    pub fn save(&self) {
        let result = config_dir()
            .map_err(|e| e.to_string())
            .and_then(|dir| {
                let contents = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
                fs::write(dir.join(FILE_NAME), contents).map_err(|e| e.to_string())
            });

        if let Err(e) = result {
            warn!("Failed to save configuration: {e}");
        }
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}
