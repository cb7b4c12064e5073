use crate::core::git::{GitQueries, Scope};
use crate::utils::error::Result;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Strictly earlier than the cutoff: a branch committed exactly at
/// `now - days * 86400` is not stale yet.
pub fn is_stale(timestamp: i64, now: i64, threshold_days: u32) -> bool {
    timestamp < now - i64::from(threshold_days) * SECONDS_PER_DAY
}

/// Classify the given branches by last-commit age. `candidates` must already
/// have the merged set and exclusions removed; `now` is snapshotted once per
/// run so every branch is measured against the same instant.
pub fn classify_stale(
    git: &dyn GitQueries,
    scope: Scope,
    candidates: &[String],
    now: i64,
    threshold_days: u32,
) -> Result<Vec<String>> {
    let mut stale = Vec::new();

    for name in candidates {
        match git.commit_timestamp(scope, name)? {
            Some(timestamp) => {
                if is_stale(timestamp, now, threshold_days) {
                    stale.push(name.clone());
                }
            }
            None => {
                eprintln!(
                    "⚠️  Skipping {} branch '{}' for staleness: last-commit time unknown",
                    scope.label(),
                    name
                );
            }
        }
    }

    Ok(stale)
}
