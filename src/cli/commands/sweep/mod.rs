use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::git::{GitQueries, GitService, Scope};
use crate::core::sweep::{
    classify_stale, delete_branches, merged_branches, merged_tip_set, CandidateSet, Category,
    DeletionOutcome,
};
use crate::utils::error::Result;
use std::collections::HashSet;

pub mod interaction;
pub mod reporter;

use interaction::SweepInteraction;
use reporter::SweepReporter;

pub fn execute(config: Config, cli: Cli) -> Result<()> {
    install_interrupt_handler();

    let git_service = GitService::discover(config.git.remote.clone())?;
    let sweeper = BranchSweeper::new(git_service, config, cli);
    sweeper.run()
}

/// An interrupt must stop the whole run, not just the prompt it lands in.
/// Installation can fail when a handler is already registered (repeated
/// invocations inside one test process), which is harmless.
fn install_interrupt_handler() {
    let _ = ctrlc::set_handler(|| {
        eprintln!("\n🛑 Interrupted, no further branches will be deleted.");
        std::process::exit(130);
    });
}

pub struct BranchSweeper<G: GitQueries> {
    git: G,
    config: Config,
    cli: Cli,
}

impl<G: GitQueries> BranchSweeper<G> {
    pub fn new(git: G, config: Config, cli: Cli) -> Self {
        Self { git, config, cli }
    }

    pub fn run(&self) -> Result<()> {
        let reporter = SweepReporter::new();
        let interaction = SweepInteraction::new(self.cli.yes);

        let base = self
            .cli
            .base
            .clone()
            .unwrap_or_else(|| self.config.git.default_base.clone());
        let stale_days = self.cli.stale_days(self.config.sweep.default_stale_days);
        // One snapshot for the whole run keeps staleness deterministic across
        // branches and scopes.
        let now = chrono::Utc::now().timestamp();

        if self.cli.dry_run {
            reporter.show_dry_run_header();
        } else {
            reporter.show_header();
        }

        if self.cli.remote {
            // Drop refs of branches already deleted upstream before we
            // classify against them.
            self.degrade(self.git.prune_remote(), Scope::Remote, "prune")?;
        }

        let mut totals = DeletionOutcome::default();
        let mut listed = 0usize;
        let mut remote_deletions_attempted = false;
        let mut cancelled = false;

        let mut scopes = vec![Scope::Local];
        if self.cli.remote {
            scopes.push(Scope::Remote);
        }

        for scope in scopes {
            let candidates = self.classify_scope(scope, &base, stale_days, now)?;
            reporter.show_candidates(scope, &candidates, stale_days);

            if self.cli.dry_run {
                listed += candidates.len();
                continue;
            }

            if candidates.is_empty() {
                continue;
            }

            let selected = match interaction.select_for_deletion(scope, &candidates)? {
                Some(selected) => selected,
                None => {
                    cancelled = true;
                    break;
                }
            };

            let outcome = self.delete_selected(scope, &selected)?;
            if scope == Scope::Remote && outcome.attempted > 0 {
                remote_deletions_attempted = true;
            }
            totals.absorb(outcome);
        }

        if cancelled {
            println!("Cancelled, remaining branches untouched.");
        }

        if remote_deletions_attempted {
            self.degrade(self.git.prune_remote(), Scope::Remote, "final prune")?;
        }

        reporter.show_summary(&totals, self.cli.dry_run, listed);
        Ok(())
    }

    /// Pure classification for one scope: inventory, merged set, staleness,
    /// precedence and exclusions. No mutations and no prompting happen here.
    fn classify_scope(
        &self,
        scope: Scope,
        base: &str,
        stale_days: Option<u32>,
        now: i64,
    ) -> Result<CandidateSet> {
        let tips = self.degrade(self.git.branch_tips(scope), scope, "branch inventory")?;

        let mut excluded: HashSet<String> = HashSet::new();
        excluded.insert(base.to_string());
        if scope == Scope::Local {
            let current = self.degrade(self.git.current_branch(), scope, "current checkout")?;
            if !current.is_empty() {
                excluded.insert(current);
            }
        }

        let base_present = self.degrade(
            self.git.base_exists(scope, base),
            scope,
            "base branch resolution",
        )?;

        let merged = if base_present {
            let mainline = self.degrade(
                self.git.mainline_parents(scope, base),
                scope,
                "merged classification",
            )?;
            let merged_set = merged_tip_set(&mainline);
            merged_branches(&tips, &merged_set, &excluded)
        } else {
            eprintln!(
                "⚠️  Base branch '{}' not found in {} scope, skipping merged classification",
                base,
                scope.label()
            );
            Vec::new()
        };

        let stale = match stale_days {
            Some(days) => {
                let merged_names: HashSet<&String> = merged.iter().collect();
                let stale_candidates: Vec<String> = tips
                    .iter()
                    .map(|tip| &tip.name)
                    .filter(|name| !excluded.contains(*name))
                    .filter(|name| !merged_names.contains(name))
                    .cloned()
                    .collect();

                self.degrade(
                    classify_stale(&self.git, scope, &stale_candidates, now, days),
                    scope,
                    "stale classification",
                )?
            }
            None => Vec::new(),
        };

        Ok(CandidateSet::build(merged, stale))
    }

    fn delete_selected(
        &self,
        scope: Scope,
        selected: &[(String, Category)],
    ) -> Result<DeletionOutcome> {
        let merged: Vec<String> = selected
            .iter()
            .filter(|(_, category)| *category == Category::Merged)
            .map(|(name, _)| name.clone())
            .collect();
        let stale: Vec<String> = selected
            .iter()
            .filter(|(_, category)| *category == Category::Stale)
            .map(|(name, _)| name.clone())
            .collect();

        let mut outcome = delete_branches(&self.git, scope, Category::Merged, &merged)?;
        outcome.absorb(delete_branches(&self.git, scope, Category::Stale, &stale)?);
        Ok(outcome)
    }

    /// Scoped failures degrade the step to "no candidates" so the run can
    /// continue; only an unusable git executable aborts the whole sweep.
    fn degrade<T: Default>(&self, result: Result<T>, scope: Scope, step: &str) -> Result<T> {
        match result {
            Ok(value) => Ok(value),
            Err(e) if e.is_unrecoverable() => Err(e),
            Err(e) => {
                eprintln!(
                    "⚠️  {} {} failed, continuing without it: {}",
                    scope.label(),
                    step,
                    e
                );
                Ok(T::default())
            }
        }
    }
}
