//! Completion gate: a task may be completed only once every dependency it
//! names is in the completed set.
//!
//! Dependencies naming tasks that never existed can never be satisfied, so
//! such a task stays blocked until its record is edited out-of-band.

use std::collections::HashSet;

use crate::model::Task;

pub fn is_eligible(task: &Task, completed: &HashSet<&str>) -> bool {
    task.dependencies
        .iter()
        .all(|dep| completed.contains(dep.as_str()))
}

/// Dependencies not yet completed, in name order.
pub fn missing_dependencies(task: &Task, completed: &HashSet<&str>) -> Vec<String> {
    task.dependencies
        .iter()
        .filter(|dep| !completed.contains(dep.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(deps: &[&str]) -> Task {
        let due = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Task::new("subject", 1, deps.iter().copied(), due)
    }

    #[test]
    fn no_dependencies_is_always_eligible() {
        assert!(is_eligible(&task(&[]), &HashSet::new()));
        assert!(missing_dependencies(&task(&[]), &HashSet::new()).is_empty());
    }

    #[test]
    fn eligible_only_when_every_dependency_completed() {
        let t = task(&["T2", "T3"]);
        let partial: HashSet<&str> = ["T3"].into_iter().collect();
        let full: HashSet<&str> = ["T2", "T3", "unrelated"].into_iter().collect();

        assert!(!is_eligible(&t, &partial));
        assert_eq!(missing_dependencies(&t, &partial), vec!["T2"]);
        assert!(is_eligible(&t, &full));
        assert!(missing_dependencies(&t, &full).is_empty());
    }

    #[test]
    fn dangling_dependency_blocks() {
        let t = task(&["never-added"]);
        let completed: HashSet<&str> = ["a", "b"].into_iter().collect();
        assert!(!is_eligible(&t, &completed));
        assert_eq!(missing_dependencies(&t, &completed), vec!["never-added"]);
    }
}
