use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{Result, TaskError};
use crate::store::lock::SnapshotLock;
use crate::store::{Persistence, Snapshot};

/// JSON snapshot file holding both partitions.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

/// Decode snapshot bytes, reporting any shape mismatch as
/// `PersistenceUnreadable`.
pub fn parse_snapshot(bytes: &[u8], origin: &Path) -> Result<Snapshot> {
    serde_json::from_slice(bytes).map_err(|e| {
        TaskError::PersistenceUnreadable(origin.display().to_string(), e.to_string())
    })
}

/// Pretty JSON with four-space indentation.
pub fn render_snapshot(snapshot: &Snapshot) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    snapshot.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

impl Persistence for SnapshotFile {
    fn load(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no snapshot yet, starting empty");
            return Ok(Snapshot::default());
        }

        let bytes = fs::read(&self.path)?;
        match parse_snapshot(&bytes, &self.path) {
            Ok(snapshot) => {
                debug!(
                    path = %self.path.display(),
                    pending = snapshot.pending_tasks.len(),
                    completed = snapshot.completed_tasks.len(),
                    "loaded snapshot"
                );
                Ok(snapshot)
            }
            Err(err) => {
                warn!("{err}; starting with an empty task list");
                Ok(Snapshot::default())
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let _lock = SnapshotLock::acquire(&self.path)?;

        let mut tmp = NamedTempFile::new_in(self.dir())?;
        tmp.write_all(&render_snapshot(snapshot)?)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| TaskError::Io(e.error))?;

        debug!(
            path = %self.path.display(),
            pending = snapshot.pending_tasks.len(),
            completed = snapshot.completed_tasks.len(),
            "saved snapshot"
        );
        Ok(())
    }
}
