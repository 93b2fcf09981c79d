use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A unit of tracked work. Fields never change after creation; a task only
/// moves from the pending partition to the completed one.
///
/// Fields are public for construction and display. `TaskStore` only ever
/// hands out `&Task` or clones, never `&mut Task`, so a stored task cannot
/// be edited in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub priority: i64,
    /// Names of tasks that must be completed first. Weak references: the
    /// named task need not exist.
    #[serde(default)]
    pub dependencies: BTreeSet<String>,
    /// Serialized as `YYYY-MM-DD`.
    pub due_date: NaiveDate,
}

/// Ordering key for pending tasks. Lower priority numbers and earlier due
/// dates sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriorityKey {
    pub priority: i64,
    pub due_date: NaiveDate,
}

impl Task {
    pub fn new<I, S>(
        name: impl Into<String>,
        priority: i64,
        dependencies: I,
        due_date: NaiveDate,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut task = Self {
            name: name.into(),
            priority,
            dependencies: dependencies.into_iter().map(Into::into).collect(),
            due_date,
        };
        task.normalize();
        task
    }

    pub fn key(&self) -> PriorityKey {
        PriorityKey {
            priority: self.priority,
            due_date: self.due_date,
        }
    }

    /// Trim the name and every dependency name, dropping dependencies that
    /// end up empty.
    pub fn normalize(&mut self) {
        let trimmed = self.name.trim();
        if trimmed.len() != self.name.len() {
            self.name = trimmed.to_string();
        }
        self.dependencies = std::mem::take(&mut self.dependencies)
            .into_iter()
            .map(|dep| dep.trim().to_string())
            .filter(|dep| !dep.is_empty())
            .collect();
    }
}
