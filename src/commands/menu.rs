//! Interactive menu loop over a line-oriented reader and writer.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::{Result, TaskError};
use crate::input;
use crate::manager::TaskManager;
use crate::output::{self, Format};
use crate::store::Persistence;

const MENU: &str = "\
Task manager
1. Add a task
2. List pending tasks
3. Complete the highest-priority task
4. Show the next task
5. List completed tasks
6. Complete a task by name
7. Exit";

pub fn run(file: &Path, format: Format) -> Result<()> {
    let mut manager = super::open(file)?;
    let stdin = std::io::stdin();
    run_loop(&mut manager, stdin.lock(), std::io::stdout().lock(), format)
}

/// Serve menu choices until the user exits or input ends.
pub fn run_loop<P, R, W>(
    manager: &mut TaskManager<P>,
    mut reader: R,
    mut out: W,
    format: Format,
) -> Result<()>
where
    P: Persistence,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "\n{MENU}")?;
        let Some(choice) = prompt(&mut reader, &mut out, "Choose an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                if !add(manager, &mut reader, &mut out, format)? {
                    break;
                }
            }
            "2" => output::write_pending(&mut out, &manager.list_pending(), format)?,
            "3" => {
                let outcome = manager.complete_highest_priority()?;
                output::write_outcome(&mut out, &outcome, format)?;
            }
            "4" => output::write_next(&mut out, manager.peek_next(), format)?,
            "5" => output::write_completed(&mut out, manager.list_completed(), format)?,
            "6" => {
                let Some(name) = prompt(&mut reader, &mut out, "Task name to complete: ")? else {
                    break;
                };
                let outcome = manager.complete_named(&name)?;
                output::write_outcome(&mut out, &outcome, format)?;
            }
            "7" => break,
            other => writeln!(out, "Invalid option '{other}', try again.")?,
        }
    }
    writeln!(out, "Goodbye.")?;
    out.flush()?;
    Ok(())
}

/// Returns `None` at end of input.
fn prompt(reader: &mut impl BufRead, out: &mut impl Write, text: &str) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Collect fields for a new task. Rejected input is reported and the menu
/// continues. Returns `false` if input ended mid-way.
fn add<P: Persistence>(
    manager: &mut TaskManager<P>,
    reader: &mut impl BufRead,
    out: &mut impl Write,
    format: Format,
) -> Result<bool> {
    let Some(name) = prompt(reader, out, "Task name: ")? else {
        return Ok(false);
    };
    let Some(priority) = prompt(reader, out, "Priority (integer, lower is more urgent): ")? else {
        return Ok(false);
    };
    let Some(deps) = prompt(reader, out, "Dependencies (comma-separated): ")? else {
        return Ok(false);
    };
    let Some(due) = prompt(reader, out, "Due date (YYYY-MM-DD): ")? else {
        return Ok(false);
    };

    let added = input::parse_priority(&priority).and_then(|priority| {
        let due_date = input::parse_due_date(&due)?;
        manager.add_task(&name, priority, input::parse_dependencies(&deps), due_date)
    });

    match added {
        Ok(task) => output::write_added(out, &task, format)?,
        Err(
            e @ (TaskError::InvalidInput(_)
            | TaskError::MalformedDate(_)
            | TaskError::DuplicateTask(_)),
        ) => writeln!(out, "error: {e}")?,
        Err(e) => return Err(e),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::files::SnapshotFile;
    use tempfile::tempdir;

    fn session(file: &Path, script: &str) -> String {
        let mut manager = TaskManager::open(SnapshotFile::new(file)).unwrap();
        let mut out = Vec::new();
        run_loop(&mut manager, script.as_bytes(), &mut out, Format::Json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_then_peek_then_exit() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("tasks.json");
        let out = session(&file, "1\nWrite docs\n2\n\n2024-05-01\n4\n7\n");

        assert!(out.contains(r#""name":"Write docs""#));
        assert!(out.ends_with("Goodbye.\n"));
        assert!(file.exists());
    }

    #[test]
    fn malformed_date_is_reported_and_nothing_added() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("tasks.json");
        let out = session(&file, "1\nWrite docs\n2\n\n05/01/2024\n2\n7\n");

        assert!(out.contains("error: malformed date '05/01/2024'"));
        assert!(out.contains("[]"));
        assert!(!file.exists());
    }

    #[test]
    fn non_integer_priority_is_reported() {
        let dir = tempdir().unwrap();
        let out = session(&dir.path().join("t.json"), "1\nx\nhigh\n\n2024-01-01\n7\n");
        assert!(out.contains("error: invalid input: priority must be an integer"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let dir = tempdir().unwrap();
        let out = session(&dir.path().join("t.json"), "1\nhalf a task\n");
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn invalid_choice_loops() {
        let dir = tempdir().unwrap();
        let out = session(&dir.path().join("t.json"), "9\n7\n");
        assert!(out.contains("Invalid option '9'"));
        assert_eq!(out.matches("Choose an option: ").count(), 2);
    }

    #[test]
    fn complete_by_name_reports_blocked_then_completes() {
        let dir = tempdir().unwrap();
        let script = "\
1\nship\n1\nbuild\n2024-01-02\n\
1\nbuild\n2\n\n2024-01-01\n\
6\nship\n\
6\nbuild\n\
3\n\
7\n";
        let out = session(&dir.path().join("t.json"), script);
        assert!(out.contains(r#""outcome":"blocked""#));
        assert!(out.contains(r#""missing":["build"]"#));
        assert_eq!(out.matches(r#""outcome":"completed""#).count(), 2);
    }
}
