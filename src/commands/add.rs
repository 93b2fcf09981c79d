use std::path::Path;

use crate::error::Result;
use crate::input;
use crate::output::{self, Format};

pub fn run(
    file: &Path,
    name: String,
    priority: String,
    due: String,
    depends_on: Vec<String>,
    format: Format,
) -> Result<()> {
    let priority = input::parse_priority(&priority)?;
    let due_date = input::parse_due_date(&due)?;

    let mut manager = super::open(file)?;
    let task = manager.add_task(&name, priority, depends_on, due_date)?;
    output::write_added(&mut std::io::stdout().lock(), &task, format)
}
