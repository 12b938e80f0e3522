//! Retention filter. Pure comparison against a cutoff computed once per run.

use std::time::Duration;

use crate::scan::name::SnapshotFile;

/// `now - retention`, in epoch seconds.
pub fn cutoff(now: i64, retention: Duration) -> i64 {
    let window = i64::try_from(retention.as_secs()).unwrap_or(i64::MAX);
    now.saturating_sub(window)
}

/// Strictly older than the cutoff. A snapshot stamped exactly at the cutoff is kept.
pub fn is_expired(snapshot: &SnapshotFile, cutoff: i64) -> bool {
    snapshot.timestamp < cutoff
}

pub fn select(snapshots: Vec<SnapshotFile>, cutoff: i64) -> Vec<SnapshotFile> {
    snapshots
        .into_iter()
        .filter(|s| is_expired(s, cutoff))
        .collect()
}
