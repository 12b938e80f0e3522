//! Retention cleaner for directories of timestamped camera snapshots.
//!
//! One run lists the directory, parses `snap_<epoch>.jpg` names, computes
//! `cutoff = now - retention` once, and deletes every snapshot strictly
//! older than the cutoff.

pub mod clean;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod retention;
pub mod scan;

use clean::CleanResult;
use clock::Clock;
use config::Config;
use error::Result;

pub const EXIT_OK: i32 = 0;
/// Config or directory access failure; nothing was deleted.
pub const EXIT_FATAL: i32 = 1;
/// The run completed but some expired snapshots could not be removed.
pub const EXIT_PARTIAL: i32 = 2;

/// Outcome of one completed run.
#[derive(Debug)]
pub struct SweepReport {
    pub cutoff: i64,
    /// Snapshot files found, including those retained.
    pub matched: usize,
    /// Names skipped because no timestamp could be read from them.
    pub diagnostics: Vec<String>,
    pub clean: CleanResult,
}

impl SweepReport {
    pub fn exit_code(&self) -> i32 {
        if self.clean.is_complete() {
            EXIT_OK
        } else {
            EXIT_PARTIAL
        }
    }

    /// Stderr summary of failed deletions, `None` when every deletion succeeded.
    pub fn failure_summary(&self) -> Option<String> {
        if self.clean.is_complete() {
            return None;
        }

        let failed = self.clean.errors.len();
        let mut summary = format!(
            "{failed} of {} expired snapshots could not be deleted:",
            failed + self.clean.deleted.len()
        );
        for error in &self.clean.errors {
            summary.push_str(&format!("\n  {error}"));
        }
        Some(summary)
    }
}

/// Runs the pipeline once: scan, filter by cutoff, delete.
///
/// A `DirectoryAccess` error returns before anything is deleted. Per-file
/// deletion failures do not abort the run; they are in `report.clean.errors`.
pub fn run(config: &Config, clock: &dyn Clock) -> Result<SweepReport> {
    let cutoff = retention::cutoff(clock.now(), config.retention);

    tracing::info!(
        dir = %config.directory.display(),
        window = %humantime::format_duration(config.retention),
        cutoff = %clock::format_epoch(cutoff),
        "sweeping snapshots"
    );

    let scan_result = scan::run(&config.directory)?;
    let matched = scan_result.entries.len();

    let expired = retention::select(scan_result.entries, cutoff);
    let clean = clean::run(&config.directory, &expired);

    tracing::info!(
        matched,
        deleted = clean.deleted.len(),
        failed = clean.errors.len(),
        "sweep complete"
    );

    Ok(SweepReport {
        cutoff,
        matched,
        diagnostics: scan_result.diagnostics,
        clean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SweepError;
    use std::io;
    use std::path::PathBuf;

    fn report(deleted: usize, failed: &[&str]) -> SweepReport {
        SweepReport {
            cutoff: 0,
            matched: deleted + failed.len(),
            diagnostics: Vec::new(),
            clean: CleanResult {
                deleted: (0..deleted)
                    .map(|i| PathBuf::from(format!("/snaps/snap_{i}.jpg")))
                    .collect(),
                errors: failed
                    .iter()
                    .map(|name| SweepError::Deletion {
                        path: PathBuf::from("/snaps").join(name),
                        source: io::Error::from(io::ErrorKind::PermissionDenied),
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn complete_run_exits_ok_without_summary() {
        let report = report(3, &[]);
        assert_eq!(report.exit_code(), EXIT_OK);
        assert!(report.failure_summary().is_none());
    }

    #[test]
    fn zero_deletions_exits_ok() {
        assert_eq!(report(0, &[]).exit_code(), EXIT_OK);
    }

    #[test]
    fn failed_deletion_exits_partial_with_summary() {
        let report = report(2, &["snap_7.jpg"]);
        assert_eq!(report.exit_code(), EXIT_PARTIAL);

        let summary = report.failure_summary().unwrap();
        assert!(summary.starts_with("1 of 3 expired snapshots could not be deleted:"));
        assert!(summary.contains("failed to delete /snaps/snap_7.jpg"));
    }

    #[test]
    fn every_failure_listed() {
        let summary = report(0, &["snap_1.jpg", "snap_2.jpg"])
            .failure_summary()
            .unwrap();
        assert_eq!(summary.lines().count(), 3);
    }
}
