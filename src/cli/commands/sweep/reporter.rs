use crate::core::git::Scope;
use crate::core::sweep::{CandidateSet, DeletionOutcome};

pub struct SweepReporter;

impl SweepReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn show_candidates(&self, scope: Scope, candidates: &CandidateSet, stale_days: Option<u32>) {
        if candidates.is_empty() {
            println!("✨ No {} branches to sweep.", scope.label());
            return;
        }

        if !candidates.merged.is_empty() {
            println!(
                "Merged {} branches ({}):",
                scope.label(),
                candidates.merged.len()
            );
            for name in &candidates.merged {
                println!("  🌿 {}", name);
            }
            println!();
        }

        if !candidates.stale.is_empty() {
            let days = stale_days.unwrap_or(0);
            println!(
                "Stale {} branches (no commits in {} days, {}):",
                scope.label(),
                days,
                candidates.stale.len()
            );
            for name in &candidates.stale {
                println!("  💤 {}", name);
            }
            println!();
        }
    }

    pub fn show_dry_run_header(&self) {
        println!("🧹 git-sweep - Dry Run");
        println!("======================\n");
    }

    pub fn show_header(&self) {
        println!("🧹 git-sweep");
        println!("============\n");
    }

    pub fn show_summary(&self, outcome: &DeletionOutcome, dry_run: bool, listed: usize) {
        println!("🧹 Sweep Complete");
        println!("=================\n");

        if dry_run {
            println!(
                "  {} candidate branch(es) listed, no branches were deleted (dry run).",
                listed
            );
            return;
        }

        if outcome.deleted > 0 {
            println!("  ✅ Deleted {} branch(es)", outcome.deleted);
        }

        if !outcome.errors.is_empty() {
            println!("\n⚠️  Some branches couldn't be deleted:");
            for error in &outcome.errors {
                println!("  • {}", error);
            }
        }

        println!(
            "\n  {} attempted, {} deleted, {} failed",
            outcome.attempted, outcome.deleted, outcome.failed
        );

        if outcome.attempted == 0 {
            println!("✨ Nothing was selected for deletion.");
        }
    }
}

impl Default for SweepReporter {
    fn default() -> Self {
        Self::new()
    }
}
