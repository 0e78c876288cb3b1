//! Headless mode execution
//!
//! Plain-text and JSON renditions of the workspace for the `summary`, `tasks`
//! and `task` subcommands.

use super::SessionData;
use crate::aggregator::TaskStats;
use crate::print_cmd_error;
use crate::task::Task;
use crate::task_store::find_task;
use crate::ui::dashboard::DashboardTab;
use crate::ui::dashboard::utils::{
    card_fields, detail_fields, format_compute_units, format_total_cost, status_style,
};
use std::error::Error;
use std::fmt::Write;

/// Output format for headless commands
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

pub fn format_summary(stats: &TaskStats) -> String {
    let rows = [
        ("Total Tasks", stats.total_tasks.to_string()),
        ("Total Compute", format_compute_units(stats.total_compute_units)),
        ("Total Cost", format_total_cost(stats.total_cost)),
        ("Total Models", stats.total_models.to_string()),
    ];
    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(out, "{:<15}{}", label, value);
    }
    out
}

pub fn format_task_list(tab: DashboardTab, tasks: &[&Task]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", tab.title(), tasks.len());
    for task in tasks {
        let style = status_style(task.status);
        let _ = writeln!(
            out,
            "{} {:<10} {:<30} {:<15} {:<10} {:>4}%",
            style.icon,
            task.id,
            task.name,
            task.model,
            task.status.to_string(),
            task.progress
        );
        let fields: Vec<String> = card_fields(task)
            .into_iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        let _ = writeln!(out, "  {}", fields.join(" | "));
    }
    out
}

pub fn format_task_detail(task: &Task) -> String {
    let mut out = String::new();
    for (label, value) in detail_fields(task) {
        let _ = writeln!(out, "{:<15}{}", label, value);
    }
    out
}

/// Prints the aggregate statistics over every task.
pub fn run_summary(session: &SessionData, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let stats = TaskStats::from_tasks(&session.tasks);
    match format {
        OutputFormat::Text => print!("{}", format_summary(&stats)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }
    Ok(())
}

/// Prints the tasks a dashboard tab would show.
pub fn run_task_list(
    session: &SessionData,
    tab: DashboardTab,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let tasks = tab.visible_tasks(&session.tasks);
    log::debug!("{} tasks visible under {}", tasks.len(), tab.title());
    match format {
        OutputFormat::Text => print!("{}", format_task_list(tab, &tasks)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tasks)?),
    }
    Ok(())
}

/// Prints one task by id.
pub fn run_task_detail(
    session: &SessionData,
    id: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let Some(task) = find_task(&session.tasks, id) else {
        let msg = format!("No task with id {}", id);
        print_cmd_error!("Task not found", msg.as_str());
        return Err(Box::from(msg));
    };
    match format {
        OutputFormat::Text => print!("{}", format_task_detail(task)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(task)?),
    }
    Ok(())
}
