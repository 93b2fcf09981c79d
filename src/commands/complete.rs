use std::path::Path;

use crate::error::Result;
use crate::output::{self, Format};

/// Complete `name`, or the most urgent pending task when no name is given.
/// Blocked and unknown tasks are reported, not treated as failures.
pub fn run(file: &Path, name: Option<String>, format: Format) -> Result<()> {
    let mut manager = super::open(file)?;
    let outcome = match name {
        Some(name) => manager.complete_named(&name)?,
        None => manager.complete_highest_priority()?,
    };
    output::write_outcome(&mut std::io::stdout().lock(), &outcome, format)
}
