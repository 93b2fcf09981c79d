pub mod files;
pub mod lock;
pub mod queue;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Task;
use queue::PendingQueue;

/// On-disk representation of both partitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub pending_tasks: Vec<Task>,
    #[serde(default)]
    pub completed_tasks: Vec<Task>,
}

/// Where the task manager keeps its snapshot between runs.
pub trait Persistence {
    /// Load the last saved snapshot. Implementations recover from missing or
    /// unreadable data by returning an empty snapshot.
    fn load(&self) -> Result<Snapshot>;

    /// Replace the stored snapshot wholesale.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}

/// Owns every task record, split into a pending and a completed partition.
/// A task lives in exactly one of them.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    pending: PendingQueue,
    completed: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut store = Self::new();
        for task in snapshot.pending_tasks {
            store.insert_pending(task);
        }
        store.completed = snapshot.completed_tasks;
        store
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            pending_tasks: self.pending.insertion_order(),
            completed_tasks: self.completed.clone(),
        }
    }

    /// No uniqueness check; callers validate before inserting.
    pub fn insert_pending(&mut self, task: Task) {
        self.pending.push(task);
    }

    /// Move the named pending task to the completed partition. `None` if no
    /// pending task has that name.
    pub fn mark_completed(&mut self, name: &str) -> Option<&Task> {
        let task = self.pending.remove_by_name(name)?;
        self.completed.push(task);
        self.completed.last()
    }

    /// Move the minimum-key pending task to the completed partition.
    pub fn complete_min(&mut self) -> Option<&Task> {
        let task = self.pending.pop_min()?;
        self.completed.push(task);
        self.completed.last()
    }

    /// Linear scan.
    pub fn find_pending_by_name(&self, name: &str) -> Option<&Task> {
        self.pending.iter().find(|task| task.name == name)
    }

    /// Recomputed on every call.
    pub fn completed_names(&self) -> HashSet<&str> {
        self.completed.iter().map(|task| task.name.as_str()).collect()
    }

    pub fn pending(&self) -> &PendingQueue {
        &self.pending
    }

    /// Completed tasks in completion order.
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }
}
