//! Activity events
//!
//! Entries for the dashboard activity log

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// The part of the UI that produced an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// Header navigation between screens.
    Navigation,
    /// Tab and card selection inside the workspace.
    Workspace,
    /// Task actions such as opening a detail view or creating a task.
    TaskAction,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Info,
    Success,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn navigation(msg: impl Into<String>) -> Self {
        Self::new(Source::Navigation, msg.into(), EventType::Info, LogLevel::Debug)
    }

    pub fn workspace(msg: impl Into<String>) -> Self {
        Self::new(Source::Workspace, msg.into(), EventType::Info, LogLevel::Info)
    }

    pub fn task_opened(msg: impl Into<String>) -> Self {
        Self::new(
            Source::TaskAction,
            msg.into(),
            EventType::Success,
            LogLevel::Info,
        )
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::new(
            Source::TaskAction,
            msg.into(),
            EventType::Unavailable,
            LogLevel::Warn,
        )
    }

    pub fn should_display(&self) -> bool {
        if self.event_type == EventType::Success {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_assign_source_and_level() {
        let event = Event::unavailable("Task creation is not available");
        assert_eq!(event.source, Source::TaskAction);
        assert_eq!(event.event_type, EventType::Unavailable);
        assert_eq!(event.log_level, LogLevel::Warn);

        let event = Event::navigation("Home");
        assert_eq!(event.source, Source::Navigation);
        assert_eq!(event.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_success_events_always_display() {
        assert!(Event::task_opened("Opened task-001").should_display());
    }

    #[test]
    fn test_display_includes_type_and_message() {
        let event = Event::workspace("Switched to Training Tasks");
        let text = event.to_string();
        assert!(text.starts_with("Info ["));
        assert!(text.ends_with("Switched to Training Tasks"));
    }
}
