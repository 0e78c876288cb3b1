//! Task Store
//!
//! The workspace task list. By default this is the built-in mock list; a JSON
//! fixture file can be loaded in its place. Either way the list is read once
//! and never mutated afterwards.

use crate::task::{Task, TaskDetails, TaskKind, TaskStatus};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;
use std::{fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskFileError {
    /// The fixture file could not be read
    #[error("Failed to read task file: {0}")]
    Io(#[from] io::Error),

    /// The fixture is not a JSON array of tasks
    #[error("Invalid task file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate task id: {0}")]
    DuplicateId(String),

    #[error("Task {id} has progress {progress}, expected 0-100")]
    InvalidProgress { id: String, progress: u8 },

    #[error("Total compute units overflow at task {0}")]
    ComputeUnitsOverflow(String),
}

static MOCK_TASKS: LazyLock<Vec<Task>> = LazyLock::new(|| {
    vec![
        Task {
            id: "task-001".to_string(),
            name: "Image Classifier Fine-tune".to_string(),
            model: "ResNet-50".to_string(),
            kind: TaskKind::Training { epochs: 50 },
            status: TaskStatus::Running,
            progress: 65,
            details: TaskDetails {
                compute_units: 120,
                cost: 12.5,
            },
        },
        Task {
            id: "task-002".to_string(),
            name: "Sentiment Batch Inference".to_string(),
            model: "BERT-base".to_string(),
            kind: TaskKind::Predict {
                dataset_size: 250_000,
            },
            status: TaskStatus::Completed,
            progress: 100,
            details: TaskDetails {
                compute_units: 40,
                cost: 3.2,
            },
        },
        Task {
            id: "task-003".to_string(),
            name: "LLM Instruction Tuning".to_string(),
            model: "Llama-3-8B".to_string(),
            kind: TaskKind::Training { epochs: 3 },
            status: TaskStatus::Queued,
            progress: 0,
            details: TaskDetails {
                compute_units: 480,
                cost: 48.0,
            },
        },
        Task {
            id: "task-004".to_string(),
            name: "Fraud Scoring".to_string(),
            model: "XGBoost".to_string(),
            kind: TaskKind::Predict {
                dataset_size: 1_200_000,
            },
            status: TaskStatus::Running,
            progress: 42,
            details: TaskDetails {
                compute_units: 25,
                cost: 1.75,
            },
        },
        Task {
            id: "task-005".to_string(),
            name: "Speech Recognition Training".to_string(),
            model: "Whisper-small".to_string(),
            kind: TaskKind::Training { epochs: 20 },
            status: TaskStatus::Failed,
            progress: 23,
            details: TaskDetails {
                compute_units: 200,
                cost: 18.4,
            },
        },
        Task {
            id: "task-006".to_string(),
            name: "Product Image Tagging".to_string(),
            model: "ResNet-50".to_string(),
            kind: TaskKind::Predict {
                dataset_size: 50_000,
            },
            status: TaskStatus::Created,
            progress: 0,
            details: TaskDetails {
                compute_units: 15,
                cost: 0.9,
            },
        },
        Task {
            id: "task-007".to_string(),
            name: "Churn Model Retrain".to_string(),
            model: "XGBoost".to_string(),
            kind: TaskKind::Training { epochs: 100 },
            status: TaskStatus::Completed,
            progress: 100,
            details: TaskDetails {
                compute_units: 60,
                cost: 4.5,
            },
        },
    ]
});

/// The built-in mock task list.
pub fn mock_tasks() -> &'static [Task] {
    &MOCK_TASKS
}

/// Loads the task list, from `path` if given or the mock list otherwise.
///
/// # Errors
/// Returns a [`TaskFileError`] if the file cannot be read, is not valid JSON,
/// contains a duplicate id or an out-of-range progress value, or its compute
/// units do not sum to a value that fits in a `u64`.
pub fn load_tasks(path: Option<&Path>) -> Result<Vec<Task>, TaskFileError> {
    match path {
        Some(path) => {
            let tasks = load_from_file(path)?;
            log::info!("Loaded {} tasks from {}", tasks.len(), path.display());
            Ok(tasks)
        }
        None => {
            log::debug!("Using built-in mock task list");
            Ok(mock_tasks().to_vec())
        }
    }
}

/// Loads a task list from a JSON fixture at the given path.
pub fn load_from_file(path: &Path) -> Result<Vec<Task>, TaskFileError> {
    let buf = fs::read(path)?;
    let tasks: Vec<Task> = serde_json::from_slice(&buf)?;
    validate(&tasks)?;
    Ok(tasks)
}

fn validate(tasks: &[Task]) -> Result<(), TaskFileError> {
    let mut seen = HashSet::new();
    let mut compute_units: u64 = 0;
    for task in tasks {
        if !seen.insert(task.id.as_str()) {
            return Err(TaskFileError::DuplicateId(task.id.clone()));
        }
        if task.progress > 100 {
            return Err(TaskFileError::InvalidProgress {
                id: task.id.clone(),
                progress: task.progress,
            });
        }
        compute_units = compute_units
            .checked_add(task.details.compute_units)
            .ok_or_else(|| TaskFileError::ComputeUnitsOverflow(task.id.clone()))?;
    }
    Ok(())
}

/// Finds a task by id.
pub fn find_task<'a>(tasks: &'a [Task], id: &str) -> Option<&'a Task> {
    tasks.iter().find(|task| task.id == id)
}
