use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{Result, TaskError};

/// Exclusive advisory lock held for the duration of a snapshot write.
/// Released on drop.
#[derive(Debug)]
pub struct SnapshotLock {
    file: File,
}

impl SnapshotLock {
    /// Lock `<snapshot>.lock`, failing fast if another process holds it.
    pub fn acquire(snapshot: &Path) -> Result<Self> {
        let path = lock_path_for(snapshot);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        file.try_lock_exclusive()
            .map_err(|_| TaskError::Locked(path.display().to_string()))?;

        Ok(Self { file })
    }
}

impl Drop for SnapshotLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

pub fn lock_path_for(snapshot: &Path) -> PathBuf {
    let mut name = snapshot.file_name().unwrap_or_default().to_os_string();
    name.push(".lock");
    snapshot.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lock_path_sits_next_to_snapshot() {
        let path = lock_path_for(Path::new("/data/tasks.json"));
        assert_eq!(path, PathBuf::from("/data/tasks.json.lock"));
    }

    #[test]
    fn second_acquire_fails_until_first_is_dropped() {
        let dir = tempdir().unwrap();
        let snapshot = dir.path().join("tasks.json");

        let held = SnapshotLock::acquire(&snapshot).unwrap();
        assert!(lock_path_for(&snapshot).exists());
        let err = SnapshotLock::acquire(&snapshot).unwrap_err();
        assert!(matches!(err, TaskError::Locked(_)));

        drop(held);
        let _again = SnapshotLock::acquire(&snapshot).unwrap();
    }
}
