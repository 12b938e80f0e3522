//! Deleter.
//!
//! Removes every selected snapshot from the directory. Removal is permanent.
//! A file that cannot be removed is recorded and the remaining deletions
//! still run; the caller decides how to surface the failures.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SweepError;
use crate::scan::name::SnapshotFile;

#[derive(Debug, Default)]
pub struct CleanResult {
    pub deleted: Vec<PathBuf>,
    pub errors: Vec<SweepError>,
}

impl CleanResult {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn run(dir: &Path, selected: &[SnapshotFile]) -> CleanResult {
    let mut clean_result = CleanResult::default();

    for snapshot in selected {
        let path = dir.join(&snapshot.name);
        match delete_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), timestamp = snapshot.timestamp, "deleted");
                clean_result.deleted.push(path);
            }
            Err(e) => {
                tracing::warn!("{e}");
                clean_result.errors.push(e);
            }
        }
    }

    clean_result
}

// remove_file refuses directories, so a snapshot path that was swapped for a
// directory after the scan surfaces as an error instead of a recursive delete
fn delete_file(path: &Path) -> Result<(), SweepError> {
    fs::remove_file(path).map_err(|source| SweepError::Deletion {
        path: path.to_path_buf(),
        source,
    })
}
