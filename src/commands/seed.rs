use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Result, TaskError};
use crate::manager::TaskManager;
use crate::model::Task;
use crate::output::{self, Format};
use crate::store::Persistence;

/// Sample backlog exercising priorities and dependency chains.
const DEMO_TASKS: &[(&str, i64, &[&str], (i32, u32, u32))] = &[
    ("Task 1", 1, &["Task 3"], (2024, 12, 15)),
    ("Task 2", 3, &[], (2024, 12, 20)),
    ("Task 3", 2, &[], (2024, 12, 18)),
    ("Task 4", 5, &["Task 2", "Task 3"], (2024, 12, 25)),
];

/// Add the demo tasks, skipping any whose name is already pending.
pub fn seed_into<P: Persistence>(manager: &mut TaskManager<P>) -> Result<Vec<Task>> {
    let mut added = Vec::new();
    for &(name, priority, deps, (y, m, d)) in DEMO_TASKS {
        let Some(due_date) = NaiveDate::from_ymd_opt(y, m, d) else {
            continue;
        };
        match manager.add_task(name, priority, deps.iter().copied(), due_date) {
            Ok(task) => added.push(task),
            Err(TaskError::DuplicateTask(name)) => debug!(%name, "demo task already pending"),
            Err(e) => return Err(e),
        }
    }
    Ok(added)
}

pub fn run(file: &Path, format: Format) -> Result<()> {
    let mut manager = super::open(file)?;
    let added = seed_into(&mut manager)?;
    output::write_seeded(&mut std::io::stdout().lock(), &added, format)
}
