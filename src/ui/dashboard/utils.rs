//! Dashboard utility functions
//!
//! Status presentation and value formatting shared by the dashboard
//! components, the task detail screen and the headless commands

use crate::task::{Task, TaskKind, TaskStatus};
use ratatui::prelude::Color;

/// Brand colors from the CoreNet gradient.
pub const BRAND_GREEN: Color = Color::Rgb(0, 255, 163);
pub const BRAND_CYAN: Color = Color::Rgb(0, 229, 255);
pub const BRAND_PURPLE: Color = Color::Rgb(163, 116, 255);

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// How a status is drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StatusStyle {
    pub icon: &'static str,
    pub color: Color,
    /// Animated in place of the static icon.
    pub spinning: bool,
}

/// Get the icon and color for a task status
pub fn status_style(status: TaskStatus) -> StatusStyle {
    match status {
        TaskStatus::Created => StatusStyle {
            icon: "○",
            color: Color::Gray,
            spinning: false,
        },
        TaskStatus::Queued => StatusStyle {
            icon: "◷",
            color: Color::Yellow,
            spinning: false,
        },
        TaskStatus::Running => StatusStyle {
            icon: "⟳",
            color: Color::Blue,
            spinning: true,
        },
        TaskStatus::Completed => StatusStyle {
            icon: "✔",
            color: Color::Green,
            spinning: false,
        },
        TaskStatus::Failed => StatusStyle {
            icon: "✖",
            color: Color::Red,
            spinning: false,
        },
    }
}

impl StatusStyle {
    /// The glyph to draw at animation tick `tick`.
    pub fn glyph(&self, tick: usize) -> &'static str {
        if self.spinning {
            SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
        } else {
            self.icon
        }
    }
}

/// Shorten a "YYYY-MM-DD HH:MM:SS" timestamp to "MM-DD HH:MM"
pub fn format_compact_timestamp(timestamp: &str) -> String {
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Format an integer with thousands separators, e.g. `1200000` -> `1,200,000`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_compute_units(units: u64) -> String {
    format!("{} CU", units)
}

/// Per-task cost, shown as-is.
pub fn format_cost(cost: f64) -> String {
    format!("${}", cost)
}

/// Aggregate cost, always two decimals.
pub fn format_total_cost(cost: f64) -> String {
    format!("{:.2} SOL", cost)
}

/// The one field that depends on the task type.
pub fn kind_field(kind: &TaskKind) -> (&'static str, String) {
    match kind {
        TaskKind::Training { epochs } => ("Epochs", epochs.to_string()),
        TaskKind::Predict { dataset_size } => (
            "Dataset Size",
            format!("{} samples", format_thousands(*dataset_size)),
        ),
    }
}

/// Label/value rows shown on a task card below the progress bar.
pub fn card_fields(task: &Task) -> Vec<(&'static str, String)> {
    vec![
        (
            "Compute Units",
            format_compute_units(task.details.compute_units),
        ),
        ("Cost", format_cost(task.details.cost)),
        kind_field(&task.kind),
    ]
}

/// Label/value rows for the full task detail view.
pub fn detail_fields(task: &Task) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("ID", task.id.clone()),
        ("Name", task.name.clone()),
        ("Model", task.model.clone()),
        ("Type", task.kind.label().to_string()),
        ("Status", task.status.to_string()),
        ("Progress", format!("{}%", task.progress)),
    ];
    fields.extend(card_fields(task));
    fields
}
