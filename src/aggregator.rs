//! Task aggregation
//!
//! Summary statistics and the training/predict partition. Both are pure
//! functions of the task list and are recomputed wholesale whenever needed.

use crate::task::Task;
use serde::Serialize;
use std::collections::HashSet;

/// Summary statistics over the full task list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total_tasks: usize,
    pub total_compute_units: u64,
    /// Total cost in SOL.
    pub total_cost: f64,
    /// Number of distinct models.
    pub total_models: usize,
}

impl TaskStats {
    /// Computes the statistics in a single pass. An empty list yields all zeros.
    ///
    /// The compute-unit total saturates at `u64::MAX`. Loaded task files are
    /// checked so their totals never reach it.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut models = HashSet::new();
        let mut stats = tasks.iter().fold(TaskStats::default(), |mut acc, task| {
            acc.total_tasks += 1;
            acc.total_compute_units = acc
                .total_compute_units
                .saturating_add(task.details.compute_units);
            acc.total_cost += task.details.cost;
            models.insert(task.model.as_str());
            acc
        });
        stats.total_models = models.len();
        stats
    }
}

/// Tasks split by type. Each side keeps the original relative order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPartition<'a> {
    pub training: Vec<&'a Task>,
    pub predict: Vec<&'a Task>,
}

/// Splits tasks into training and predict, preserving order.
pub fn partition_by_kind(tasks: &[Task]) -> TaskPartition<'_> {
    let (training, predict) = tasks.iter().partition(|task| task.kind.is_training());
    TaskPartition { training, predict }
}
