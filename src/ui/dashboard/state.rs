//! Dashboard state management
//!
//! Contains the workspace dashboard state struct and the tab enum

use crate::aggregator::{TaskStats, partition_by_kind};
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::task::Task;

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Workspace tabs. Exactly one is active; the workspace opens on `Overview`.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    /// All tasks
    #[default]
    Overview,
    /// Training tasks only
    Training,
    /// Prediction tasks only
    Predict,
}

impl DashboardTab {
    pub fn title(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Training => "Training Tasks",
            DashboardTab::Predict => "Prediction Tasks",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            DashboardTab::Overview => 0,
            DashboardTab::Training => 1,
            DashboardTab::Predict => 2,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            DashboardTab::Overview => DashboardTab::Training,
            DashboardTab::Training => DashboardTab::Predict,
            DashboardTab::Predict => DashboardTab::Overview,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            DashboardTab::Overview => DashboardTab::Predict,
            DashboardTab::Training => DashboardTab::Overview,
            DashboardTab::Predict => DashboardTab::Training,
        }
    }

    /// The tasks shown under this tab, in their original order.
    pub fn visible_tasks<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        match self {
            DashboardTab::Overview => tasks.iter().collect(),
            DashboardTab::Training => partition_by_kind(tasks).training,
            DashboardTab::Predict => partition_by_kind(tasks).predict,
        }
    }
}

/// Workspace dashboard state.
#[derive(Debug)]
pub struct DashboardState {
    /// The task list. Never mutated after construction.
    tasks: Vec<Task>,
    /// Summary over all tasks, independent of the active tab.
    stats: TaskStats,
    /// Currently active tab.
    active_tab: DashboardTab,
    /// Index of the selected card within the active tab.
    selected: usize,
    /// Whether to paint the background color
    pub with_background_color: bool,
    /// Queue of events waiting to be moved into the activity log
    pub pending_events: VecDeque<Event>,
    /// Activity log for display
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    pub fn new(tasks: Vec<Task>, default_tab: DashboardTab, with_background_color: bool) -> Self {
        let stats = TaskStats::from_tasks(&tasks);
        Self {
            tasks,
            stats,
            active_tab: default_tab,
            selected: 0,
            with_background_color,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn stats(&self) -> &TaskStats {
        &self.stats
    }

    pub fn active_tab(&self) -> DashboardTab {
        self.active_tab
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.active_tab.visible_tasks(&self.tasks)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected).copied()
    }

    /// Activates a tab. The selection goes back to the first card.
    pub fn set_active_tab(&mut self, tab: DashboardTab) {
        if tab != self.active_tab {
            self.add_event(Event::workspace(format!("Switched to {}", tab.title())));
        }
        self.active_tab = tab;
        self.selected = 0;
    }

    pub fn set_selected(&mut self, index: usize) {
        let len = self.visible_tasks().len();
        self.selected = if len == 0 { 0 } else { index.min(len - 1) };
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}
