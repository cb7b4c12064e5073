use crate::core::git::BranchTip;
use std::collections::HashSet;

/// Collect the tips of branches that were merged into the base via a merge
/// commit: every non-first parent of every multi-parent commit on the base's
/// first-parent mainline. A branch merged with a standard two-parent merge
/// commit has its tip recorded exactly as that commit's second parent, so
/// membership is an exact hash match rather than a reachability guess.
///
/// Squash- and rebase-merged branches leave no merge commit on the mainline
/// and are therefore not detected. That is a known limitation; a fuzzy
/// ancestry fallback would reintroduce the false positives this exists to
/// avoid.
pub fn merged_tip_set(mainline: &[Vec<String>]) -> HashSet<String> {
    let mut merged = HashSet::new();

    for hashes in mainline {
        // Each entry is `[commit, parent1, parent2, ...]`; two or more
        // parents marks a merge point.
        if hashes.len() >= 3 {
            for parent in &hashes[2..] {
                merged.insert(parent.clone());
            }
        }
    }

    merged
}

/// Intersect branch tips against the merged set, in inventory order.
/// Excluded names (the base branch, the current checkout) never match.
pub fn merged_branches(
    tips: &[BranchTip],
    merged: &HashSet<String>,
    excluded: &HashSet<String>,
) -> Vec<String> {
    tips.iter()
        .filter(|tip| !excluded.contains(&tip.name))
        .filter(|tip| merged.contains(&tip.tip))
        .map(|tip| tip.name.clone())
        .collect()
}
