//! Report aggregates: pure reductions over the in-memory task snapshot,
//! recomputed on every call.

use crate::models::status::TaskStatus;
use crate::models::task::Task;
use std::collections::HashSet;

#[derive(Debug, Default, Clone)]
pub struct TaskMetrics {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Subject → count, in first-encountered order.
    pub by_subject: Vec<(String, usize)>,
}

impl TaskMetrics {
    pub fn count_for(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }

    pub fn percentage_for(&self, status: TaskStatus) -> f64 {
        percentage(self.count_for(status), self.total)
    }
}

/// count/total as a percentage rounded to one decimal; 0 when the list is
/// empty (no division by zero).
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}

pub fn task_metrics(tasks: &[Task]) -> TaskMetrics {
    let mut m = TaskMetrics {
        total: tasks.len(),
        ..Default::default()
    };

    for task in tasks {
        match task.status {
            TaskStatus::Pending => m.pending += 1,
            TaskStatus::InProgress => m.in_progress += 1,
            TaskStatus::Completed => m.completed += 1,
        }

        match m.by_subject.iter_mut().find(|(s, _)| *s == task.subject) {
            Some((_, n)) => *n += 1,
            None => m.by_subject.push((task.subject.clone(), 1)),
        }
    }

    m
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ParentMetrics {
    /// Distinct parent emails holding at least one task.
    pub active_parents: usize,
    /// Parents currently holding at least one pending or in-progress task.
    pub parents_with_open_tasks: usize,
}

pub fn parent_metrics(tasks: &[Task]) -> ParentMetrics {
    if tasks.is_empty() {
        return ParentMetrics::default();
    }

    let mut parents = HashSet::new();
    let mut with_open = HashSet::new();

    for task in tasks {
        parents.insert(task.owner_email.as_str());
        if task.status.is_open() {
            with_open.insert(task.owner_email.as_str());
        }
    }

    ParentMetrics {
        active_parents: parents.len(),
        parents_with_open_tasks: with_open.len(),
    }
}
