//! Compute Task
//!
//! A task is one compute job (AI training or AI prediction) listed in the
//! workspace. Kind-specific details live on [`TaskKind`], so a training task
//! can never carry a dataset size and a prediction task can never carry epochs.
//!
//! On disk a task keeps its `type` on the record and the kind's field
//! (`epochs` or `datasetSize`) inside `details`, next to the billing figures.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle status of a task. Transitions happen upstream; the dashboard only displays it.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskStatus {
    Created,
    Queued,
    Running,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "created" => Ok(TaskStatus::Created),
            "queued" => Ok(TaskStatus::Queued),
            "running" => Ok(TaskStatus::Running),
            "completed" => Ok(TaskStatus::Completed),
            "failed" => Ok(TaskStatus::Failed),
            _ => Err(ParseTaskStatusError(s.to_string())),
        }
    }
}

/// The type of task, with the detail field that only applies to that type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// Model training run.
    Training { epochs: u32 },
    /// Batch inference over a dataset.
    Predict { dataset_size: u64 },
}

impl TaskKind {
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Training { .. } => "AI Training",
            TaskKind::Predict { .. } => "AI Predict",
        }
    }

    pub fn is_training(&self) -> bool {
        matches!(self, TaskKind::Training { .. })
    }
}

/// Resources billed for a task.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TaskDetails {
    /// Allocated compute units (CU).
    pub compute_units: u64,
    /// Cost in SOL.
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord", into = "TaskRecord")]
pub struct Task {
    /// Unique task ID, also the key of the task-detail view
    pub id: String,

    /// Display name
    pub name: String,

    /// Model the task runs
    pub model: String,

    pub kind: TaskKind,

    pub status: TaskStatus,

    /// Completion percentage, 0 to 100. Not tied to `status`.
    pub progress: u8,

    pub details: TaskDetails,
}

/// A record whose kind-specific detail does not match its `type`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskShapeError {
    #[error("{kind} task {id} is missing details.{field}")]
    MissingDetail {
        id: String,
        kind: &'static str,
        field: &'static str,
    },

    #[error("{kind} task {id} must not have details.{field}")]
    UnexpectedDetail {
        id: String,
        kind: &'static str,
        field: &'static str,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum TaskType {
    #[serde(rename = "AI Training")]
    Training,
    #[serde(rename = "AI Predict")]
    Predict,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct DetailsRecord {
    compute_units: u64,
    cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    epochs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dataset_size: Option<u64>,
}

/// Serialized form of [`Task`].
#[derive(Serialize, Deserialize)]
struct TaskRecord {
    id: String,
    name: String,
    model: String,
    #[serde(rename = "type")]
    task_type: TaskType,
    status: TaskStatus,
    progress: u8,
    details: DetailsRecord,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskShapeError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let details = &record.details;
        let kind = match (record.task_type, details.epochs, details.dataset_size) {
            (TaskType::Training, Some(epochs), None) => TaskKind::Training { epochs },
            (TaskType::Predict, None, Some(dataset_size)) => TaskKind::Predict { dataset_size },
            (TaskType::Training, _, Some(_)) => {
                return Err(TaskShapeError::UnexpectedDetail {
                    id: record.id,
                    kind: "AI Training",
                    field: "datasetSize",
                });
            }
            (TaskType::Predict, Some(_), _) => {
                return Err(TaskShapeError::UnexpectedDetail {
                    id: record.id,
                    kind: "AI Predict",
                    field: "epochs",
                });
            }
            (TaskType::Training, None, None) => {
                return Err(TaskShapeError::MissingDetail {
                    id: record.id,
                    kind: "AI Training",
                    field: "epochs",
                });
            }
            (TaskType::Predict, None, None) => {
                return Err(TaskShapeError::MissingDetail {
                    id: record.id,
                    kind: "AI Predict",
                    field: "datasetSize",
                });
            }
        };

        Ok(Task {
            id: record.id,
            name: record.name,
            model: record.model,
            kind,
            status: record.status,
            progress: record.progress,
            details: TaskDetails {
                compute_units: record.details.compute_units,
                cost: record.details.cost,
            },
        })
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        let (task_type, epochs, dataset_size) = match task.kind {
            TaskKind::Training { epochs } => (TaskType::Training, Some(epochs), None),
            TaskKind::Predict { dataset_size } => (TaskType::Predict, None, Some(dataset_size)),
        };
        TaskRecord {
            id: task.id,
            name: task.name,
            model: task.model,
            task_type,
            status: task.status,
            progress: task.progress,
            details: DetailsRecord {
                compute_units: task.details.compute_units,
                cost: task.details.cost,
                epochs,
                dataset_size,
            },
        }
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Task ID: {}, Name: {}, Model: {}, Type: {}, Status: {}",
            self.id,
            self.name,
            self.model,
            self.kind.label(),
            self.status
        )
    }
}
