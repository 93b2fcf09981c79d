pub mod add;
pub mod complete;
pub mod completed;
pub mod list;
pub mod menu;
pub mod next;
pub mod seed;

use std::path::Path;

use crate::error::Result;
use crate::manager::TaskManager;
use crate::store::files::SnapshotFile;

pub(crate) fn open(file: &Path) -> Result<TaskManager<SnapshotFile>> {
    TaskManager::open(SnapshotFile::new(file))
}
