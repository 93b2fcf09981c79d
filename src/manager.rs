//! Task manager: the single owner of the task store, wiring the priority
//! queue and the completion gate together and saving after every mutation.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::error::{Result, TaskError};
use crate::gate;
use crate::model::Task;
use crate::store::{Persistence, TaskStore};

/// Result of a completion attempt. A blocked or missing task is an
/// expected outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CompletionOutcome {
    Completed { task: Task },
    Blocked { task: Task, missing: Vec<String> },
    NotFound { name: String },
    Empty,
}

pub struct TaskManager<P: Persistence> {
    store: TaskStore,
    persistence: P,
}

impl<P: Persistence> TaskManager<P> {
    /// Load state from `persistence`. Missing or unreadable snapshots start
    /// empty.
    pub fn open(persistence: P) -> Result<Self> {
        let snapshot = persistence.load()?;
        Ok(Self {
            store: TaskStore::from_snapshot(snapshot),
            persistence,
        })
    }

    pub fn add_task<I, S>(
        &mut self,
        name: &str,
        priority: i64,
        dependencies: I,
        due_date: NaiveDate,
    ) -> Result<Task>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let task = Task::new(name, priority, dependencies, due_date);
        if task.name.is_empty() {
            return Err(TaskError::InvalidInput(
                "task name must not be empty".into(),
            ));
        }
        if self.store.find_pending_by_name(&task.name).is_some() {
            return Err(TaskError::DuplicateTask(task.name));
        }

        let mut staged = self.store.clone();
        staged.insert_pending(task.clone());
        self.commit(staged)?;
        info!(name = %task.name, priority = task.priority, "task added");
        Ok(task)
    }

    /// Pending tasks, most urgent first.
    pub fn list_pending(&self) -> Vec<Task> {
        self.store.pending().to_sorted_sequence()
    }

    /// Completed tasks in completion order.
    pub fn list_completed(&self) -> &[Task] {
        self.store.completed()
    }

    pub fn peek_next(&self) -> Option<&Task> {
        self.store.pending().peek_min()
    }

    /// Try to complete the most urgent pending task. Only that task is
    /// considered: if it is blocked nothing else is attempted and it keeps
    /// its place in the queue.
    pub fn complete_highest_priority(&mut self) -> Result<CompletionOutcome> {
        let Some(next) = self.store.pending().peek_min() else {
            return Ok(CompletionOutcome::Empty);
        };

        let completed = self.store.completed_names();
        if !gate::is_eligible(next, &completed) {
            let missing = gate::missing_dependencies(next, &completed);
            info!(name = %next.name, ?missing, "completion blocked");
            return Ok(CompletionOutcome::Blocked {
                task: next.clone(),
                missing,
            });
        }

        let mut staged = self.store.clone();
        let task = match staged.complete_min() {
            Some(task) => task.clone(),
            None => return Ok(CompletionOutcome::Empty),
        };
        self.commit(staged)?;
        info!(name = %task.name, "task completed");
        Ok(CompletionOutcome::Completed { task })
    }

    /// Complete a specific pending task by name.
    pub fn complete_named(&mut self, name: &str) -> Result<CompletionOutcome> {
        let name = name.trim();
        let Some(target) = self.store.find_pending_by_name(name) else {
            return Ok(CompletionOutcome::NotFound {
                name: name.to_string(),
            });
        };

        let completed = self.store.completed_names();
        if !gate::is_eligible(target, &completed) {
            let missing = gate::missing_dependencies(target, &completed);
            info!(name = %target.name, ?missing, "completion blocked");
            return Ok(CompletionOutcome::Blocked {
                task: target.clone(),
                missing,
            });
        }

        let mut staged = self.store.clone();
        let task = match staged.mark_completed(name) {
            Some(task) => task.clone(),
            None => {
                return Ok(CompletionOutcome::NotFound {
                    name: name.to_string(),
                });
            }
        };
        self.commit(staged)?;
        info!(name = %task.name, "task completed");
        Ok(CompletionOutcome::Completed { task })
    }

    #[cfg(test)]
    pub(crate) fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Save `staged` and adopt it only once the save succeeded, so a failed
    /// save leaves the in-memory state untouched.
    fn commit(&mut self, staged: TaskStore) -> Result<()> {
        self.persistence.save(&staged.to_snapshot())?;
        self.store = staged;
        Ok(())
    }
}
