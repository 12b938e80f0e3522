//! Directory scanner.
//!
//! Lists the entries directly inside the snapshot directory and keeps the
//! ones that follow the naming convention. No recursion; subdirectories are
//! never candidates.

pub mod name;

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, SweepError};
use name::{NameMatch, SnapshotFile};

#[derive(Debug, Default)]
pub struct ScanResult {
    pub entries: Vec<SnapshotFile>,
    pub diagnostics: Vec<String>,
}

/// Names of the non-directory entries in `dir`, in no particular order.
///
/// Fails with `DirectoryAccess` when `dir` is missing, is not a directory, or
/// cannot be listed. Names that are not valid UTF-8 are dropped.
pub fn list_entries(dir: &Path) -> Result<Vec<String>> {
    let access_error = |source: io::Error| SweepError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(dir).map_err(access_error)?;
    if !metadata.is_dir() {
        return Err(access_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a directory",
        )));
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    let mut names = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| access_error(io::Error::from(e)))?;

        if entry.file_type().is_dir() {
            continue;
        }

        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

/// Lists `dir` and parses every snapshot name in it.
///
/// Names that match the convention but carry no usable timestamp are skipped
/// with a diagnostic instead of failing the run.
pub fn run(dir: &Path) -> Result<ScanResult> {
    let mut result = ScanResult::default();

    for file_name in list_entries(dir)? {
        match name::parse(&file_name) {
            Ok(NameMatch::Snapshot(snapshot)) => result.entries.push(snapshot),
            Ok(NameMatch::NoMatch) => {}
            Err(e) => {
                tracing::warn!(name = %file_name, "skipping snapshot: {e}");
                result.diagnostics.push(e.to_string());
            }
        }
    }

    tracing::debug!(
        dir = %dir.display(),
        snapshots = result.entries.len(),
        "scan complete"
    );

    Ok(result)
}
