use std::path::Path;

use crate::error::Result;
use crate::output::{self, Format};

pub fn run(file: &Path, format: Format) -> Result<()> {
    let manager = super::open(file)?;
    output::write_pending(&mut std::io::stdout().lock(), &manager.list_pending(), format)
}
