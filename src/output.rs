use std::io::Write;

use clap::ValueEnum;
use colored::Colorize;

use crate::error::Result;
use crate::manager::CompletionOutcome;
use crate::model::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Pretty,
    Minimal,
}

const NAME_WIDTH: usize = 20;

pub fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() > max_len {
        let truncated: String = name.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        name.to_string()
    }
}

fn dependency_list(task: &Task) -> String {
    if task.dependencies.is_empty() {
        "-".to_string()
    } else {
        task.dependencies.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

fn write_minimal_header(out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "{:>4} {:width$} {:10} DEPENDS ON",
        "PRI",
        "NAME",
        "DUE",
        width = NAME_WIDTH
    )?;
    writeln!(out, "{}", "-".repeat(NAME_WIDTH + 28))?;
    Ok(())
}

fn write_minimal_row(out: &mut impl Write, task: &Task) -> Result<()> {
    writeln!(
        out,
        "{:>4} {:width$} {:10} {}",
        task.priority,
        truncate_name(&task.name, NAME_WIDTH),
        task.due_date,
        dependency_list(task),
        width = NAME_WIDTH
    )?;
    Ok(())
}

pub fn write_task(out: &mut impl Write, task: &Task, format: Format) -> Result<()> {
    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string(task)?)?,
        Format::Pretty => {
            writeln!(
                out,
                "{} {}",
                task.name.bold(),
                format!("(priority {})", task.priority).dimmed()
            )?;
            writeln!(out, "  {} {}", "due:".dimmed(), task.due_date)?;
            if !task.dependencies.is_empty() {
                writeln!(out, "  {} {}", "depends on:".dimmed(), dependency_list(task))?;
            }
        }
        Format::Minimal => write_minimal_row(out, task)?,
    }
    Ok(())
}

fn write_task_list(
    out: &mut impl Write,
    tasks: &[Task],
    format: Format,
    empty_message: &str,
) -> Result<()> {
    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string(tasks)?)?,
        _ if tasks.is_empty() => writeln!(out, "{}", empty_message.dimmed())?,
        Format::Pretty => {
            for task in tasks {
                write_task(out, task, Format::Pretty)?;
            }
        }
        Format::Minimal => {
            write_minimal_header(out)?;
            for task in tasks {
                write_minimal_row(out, task)?;
            }
        }
    }
    Ok(())
}

pub fn write_pending(out: &mut impl Write, tasks: &[Task], format: Format) -> Result<()> {
    write_task_list(out, tasks, format, "No pending tasks.")
}

pub fn write_completed(out: &mut impl Write, tasks: &[Task], format: Format) -> Result<()> {
    write_task_list(out, tasks, format, "No completed tasks.")
}

/// Tasks just added by `seed`.
pub fn write_seeded(out: &mut impl Write, added: &[Task], format: Format) -> Result<()> {
    write_task_list(out, added, format, "Demo tasks already pending.")
}

pub fn write_next(out: &mut impl Write, next: Option<&Task>, format: Format) -> Result<()> {
    match (next, format) {
        (Some(task), Format::Minimal) => {
            write_minimal_header(out)?;
            write_minimal_row(out, task)?;
        }
        (Some(task), _) => write_task(out, task, format)?,
        (None, Format::Json) => writeln!(out, "null")?,
        (None, _) => writeln!(out, "{}", "No pending tasks.".dimmed())?,
    }
    Ok(())
}

pub fn write_added(out: &mut impl Write, task: &Task, format: Format) -> Result<()> {
    if format != Format::Json {
        writeln!(out, "{} {}", "added".green().bold(), task.name)?;
    }
    match format {
        Format::Minimal => Ok(()),
        _ => write_task(out, task, format),
    }
}

pub fn write_outcome(
    out: &mut impl Write,
    outcome: &CompletionOutcome,
    format: Format,
) -> Result<()> {
    if format == Format::Json {
        writeln!(out, "{}", serde_json::to_string(outcome)?)?;
        return Ok(());
    }

    match outcome {
        CompletionOutcome::Completed { task } => {
            writeln!(out, "{} {}", "completed".green().bold(), task.name)?;
        }
        CompletionOutcome::Blocked { task, missing } => {
            writeln!(
                out,
                "{} {} is waiting on: {}",
                "blocked".yellow().bold(),
                task.name,
                missing.join(", ")
            )?;
        }
        CompletionOutcome::NotFound { name } => {
            writeln!(out, "{} no pending task named '{}'", "not found".red().bold(), name)?;
        }
        CompletionOutcome::Empty => {
            writeln!(out, "{}", "No pending tasks to complete.".dimmed())?;
        }
    }
    Ok(())
}
