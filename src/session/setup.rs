//! Session setup and initialization

use crate::config::{Config, get_config_path};
use crate::task::Task;
use crate::task_store::load_tasks;
use crate::ui::dashboard::DashboardTab;
use std::error::Error;
use std::path::PathBuf;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct SessionOverrides {
    /// Task fixture to load instead of the built-in list
    pub tasks_file: Option<PathBuf>,
    pub default_tab: Option<DashboardTab>,
    /// Only ever turns the background on; the file decides otherwise
    pub with_background: bool,
}

/// Session data shared by the TUI and the headless commands
#[derive(Debug)]
pub struct SessionData {
    /// The workspace task list
    pub tasks: Vec<Task>,
    /// Effective configuration after overrides
    pub config: Config,
}

impl SessionOverrides {
    /// Applies the overrides on top of a loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(tab) = self.default_tab {
            config.default_tab = tab;
        }
        if self.with_background {
            config.with_background_color = true;
        }
        config
    }
}

/// Loads the config file and the task list.
///
/// An unreadable config falls back to the defaults with a warning; a bad task
/// fixture is an error.
pub fn setup_session(overrides: &SessionOverrides) -> Result<SessionData, Box<dyn Error>> {
    let file_config = match get_config_path().and_then(|path| Config::load_or_default(&path)) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring unreadable config: {}", e);
            Config::default()
        }
    };
    let config = overrides.apply(file_config);
    let tasks = load_tasks(overrides.tasks_file.as_deref())?;

    Ok(SessionData { tasks, config })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = SessionOverrides {
            tasks_file: None,
            default_tab: Some(DashboardTab::Predict),
            with_background: true,
        };
        let config = overrides.apply(Config::default());
        assert_eq!(config.default_tab, DashboardTab::Predict);
        assert!(config.with_background_color);
    }

    #[test]
    fn test_no_overrides_keep_file_values() {
        let file_config = Config {
            default_tab: DashboardTab::Training,
            with_background_color: true,
        };
        let config = SessionOverrides::default().apply(file_config.clone());
        assert_eq!(config, file_config);
    }
}
