mod aggregator;
mod cli_messages;
mod config;
mod consts;
mod events;
mod logging;
mod session;
mod task;
mod task_store;
mod ui;

use crate::config::{Config, get_config_path};
use crate::session::headless_mode::{run_summary, run_task_detail, run_task_list};
use crate::session::{OutputFormat, SessionOverrides, run_tui_mode, setup_session};
use crate::ui::dashboard::DashboardTab;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// CoreNet workspace dashboard
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(ClapArgs, Debug, Clone, Default)]
struct TaskSource {
    /// JSON file with the task list to show instead of the built-in one
    #[arg(long, value_name = "PATH", env = "CORENET_TASKS_FILE")]
    tasks_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the dashboard in the terminal
    Start {
        /// Tab to open the workspace on
        #[arg(long, value_enum)]
        tab: Option<DashboardTab>,

        /// Paint a dark background behind the dashboard
        #[arg(long)]
        with_background: bool,

        #[command(flatten)]
        source: TaskSource,
    },
    /// Print the workspace totals
    Summary {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: TaskSource,
    },
    /// List the tasks shown under a tab
    Tasks {
        #[arg(long, value_enum, default_value_t = DashboardTab::Overview)]
        tab: DashboardTab,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: TaskSource,
    },
    /// Show one task
    Task {
        /// Task ID
        #[arg(value_name = "ID")]
        id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: TaskSource,
    },
    /// Update saved preferences
    Config {
        /// Tab the workspace opens on
        #[arg(long, value_enum)]
        default_tab: Option<DashboardTab>,

        /// Whether to paint the dark background
        #[arg(long, value_name = "BOOL")]
        with_background: Option<bool>,

        /// Delete the config file and go back to defaults
        #[arg(long, conflicts_with_all = ["default_tab", "with_background"])]
        reset: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            tab,
            with_background,
            source,
        } => {
            let session = load_session(&SessionOverrides {
                tasks_file: source.tasks_file,
                default_tab: tab,
                with_background,
            })?;
            run_tui_mode(session)
        }
        Command::Summary { json, source } => {
            logging::init_headless_logger();
            let session = headless_session(source)?;
            run_summary(&session, OutputFormat::from_json_flag(json))
        }
        Command::Tasks { tab, json, source } => {
            logging::init_headless_logger();
            let session = headless_session(source)?;
            run_task_list(&session, tab, OutputFormat::from_json_flag(json))
        }
        Command::Task { id, json, source } => {
            logging::init_headless_logger();
            let session = headless_session(source)?;
            run_task_detail(&session, &id, OutputFormat::from_json_flag(json))
        }
        Command::Config {
            default_tab,
            with_background,
            reset,
        } => {
            logging::init_headless_logger();
            update_config(default_tab, with_background, reset)
        }
    }
}

fn load_session(overrides: &SessionOverrides) -> Result<session::SessionData, Box<dyn Error>> {
    setup_session(overrides)
        .inspect_err(|e| print_cmd_error!("Failed to load tasks", e.to_string().as_str()))
}

fn headless_session(source: TaskSource) -> Result<session::SessionData, Box<dyn Error>> {
    load_session(&SessionOverrides {
        tasks_file: source.tasks_file,
        ..SessionOverrides::default()
    })
}

fn update_config(
    default_tab: Option<DashboardTab>,
    with_background: Option<bool>,
    reset: bool,
) -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    if reset {
        Config::clear(&config_path)?;
        print_cmd_success!("Preferences reset", "{}", config_path.display());
        return Ok(());
    }

    let mut config = Config::load_or_default(&config_path)
        .map_err(|e| format!("Failed to load config: {}", e))?;
    if let Some(tab) = default_tab {
        config.default_tab = tab;
    }
    if let Some(with_background) = with_background {
        config.with_background_color = with_background;
    }
    config
        .save(&config_path)
        .map_err(|e| format!("Failed to save config: {}", e))?;

    print_cmd_success!("Preferences saved", "{}", config_path.display());
    print_cmd_info!(
        "Current preferences",
        "default tab: {}, background: {}",
        config.default_tab.title(),
        config.with_background_color
    );
    Ok(())
}
