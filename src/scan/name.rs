//! Snapshot filename parsing.
//!
//! Producers name files `snap_<epoch>.jpg`. A name qualifies when it
//! contains `snap_`, has a digit somewhere after it, and ends in `.jpg`.
//! The timestamp is the last run of digits in the name, which is not
//! necessarily the run right after `snap_` (`snap_v2_1700000000.jpg`
//! carries 1700000000).

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, SweepError};

/// A directory entry that follows the snapshot naming convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFile {
    pub name: String,
    /// Unix epoch seconds.
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatch {
    Snapshot(SnapshotFile),
    NoMatch,
}

fn snapshot_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)snap_.*[0-9].*\.jpg$").expect("valid snapshot pattern"))
}

fn digit_runs() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[0-9]+").expect("valid digit pattern"))
}

pub fn is_snapshot_name(name: &str) -> bool {
    !name.contains('/') && snapshot_pattern().is_match(name)
}

/// Parses the last digit run in `name` as epoch seconds.
pub fn extract_timestamp(name: &str) -> Result<i64> {
    digit_runs()
        .find_iter(name)
        .last()
        .and_then(|run| run.as_str().parse::<i64>().ok())
        .ok_or_else(|| SweepError::MalformedName(name.to_string()))
}

/// Classifies a directory entry name.
///
/// Returns `NoMatch` for names outside the convention. `MalformedName` means
/// the name passed the filter but carries no usable timestamp, e.g. a digit
/// run too large for i64.
pub fn parse(name: &str) -> Result<NameMatch> {
    if !is_snapshot_name(name) {
        return Ok(NameMatch::NoMatch);
    }

    let timestamp = extract_timestamp(name)?;
    Ok(NameMatch::Snapshot(SnapshotFile {
        name: name.to_string(),
        timestamp,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timestamp_of(name: &str) -> Option<i64> {
        match parse(name).unwrap() {
            NameMatch::Snapshot(s) => Some(s.timestamp),
            NameMatch::NoMatch => None,
        }
    }

    #[test]
    fn single_digit_run() {
        assert_eq!(timestamp_of("snap_1700000000.jpg"), Some(1_700_000_000));
        assert_eq!(timestamp_of("snap_0.jpg"), Some(0));
        assert_eq!(timestamp_of("snap_100.jpg"), Some(100));
    }

    #[test]
    fn last_digit_run_wins() {
        assert_eq!(timestamp_of("snap_v2_1700000000.jpg"), Some(1_700_000_000));
        assert_eq!(timestamp_of("cam3_snap_42_7.jpg"), Some(7));
        assert_eq!(timestamp_of("snap_12abc34.jpg"), Some(34));
    }

    #[test]
    fn non_matching_names() {
        for name in [
            "photo.jpg",
            "snap_abc.jpg",
            "snap_123.png",
            "snap_123.jpg.bak",
            "SNAP_123.jpg",
            "snap_123.JPG",
            "snap123.jpg",
            "",
        ] {
            assert_eq!(parse(name).unwrap(), NameMatch::NoMatch, "{name}");
        }
    }

    #[test]
    fn digit_must_follow_prefix() {
        assert!(!is_snapshot_name("1700000000_snap_.jpg"));
        assert!(is_snapshot_name("x_snap_1.jpg"));
    }

    #[test]
    fn newline_in_name_still_matches() {
        assert!(is_snapshot_name("snap_1\n.jpg"));
        assert_eq!(timestamp_of("snap_\n1700000000.jpg"), Some(1_700_000_000));
        assert!(!is_snapshot_name("snap_1.jpg\n"));
    }

    #[test]
    fn path_separators_rejected() {
        assert!(!is_snapshot_name("dir/snap_1.jpg"));
    }

    #[test]
    fn non_ascii_digits_ignored() {
        // Arabic-Indic digits do not count as a timestamp
        assert_eq!(parse("snap_\u{0661}\u{0662}.jpg").unwrap(), NameMatch::NoMatch);
    }

    #[test]
    fn oversized_timestamp_is_malformed() {
        let name = "snap_99999999999999999999999.jpg";
        assert!(is_snapshot_name(name));
        assert!(matches!(parse(name), Err(SweepError::MalformedName(n)) if n == name));
    }

    #[test]
    fn extract_without_digits_is_malformed() {
        assert!(matches!(
            extract_timestamp("snap_.jpg"),
            Err(SweepError::MalformedName(_))
        ));
    }
}
