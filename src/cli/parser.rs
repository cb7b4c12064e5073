use crate::utils::error::{Result, SweepError};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "git-sweep")]
#[command(about = "Delete branches that were merged into a base branch or went stale")]
#[command(
    version,
    long_about = "Classifies local (and optionally remote) branches as merged into a base \
branch or stale, then interactively confirms which ones to delete. Merged detection follows \
the base branch's first-parent history and matches branch tips against merge-commit parents, \
so only branches integrated through a real merge commit qualify."
)]
pub struct Cli {
    /// Base branch for merge classification (defaults to the configured base)
    #[arg(long, value_name = "NAME")]
    pub base: Option<String>,

    /// Also classify and delete branches on the configured remote
    #[arg(long, short = 'r')]
    pub remote: bool,

    /// Also flag branches with no commits in the last DAYS days
    /// (bare flag uses the configured default threshold)
    #[arg(long, value_name = "DAYS")]
    pub stale: Option<Option<u32>>,

    /// Only list candidates, delete nothing
    #[arg(long, help = "Only show what would be deleted (dry run)")]
    pub dry_run: bool,

    /// Skip selection and confirmation prompts, delete every candidate
    #[arg(long, short = 'y', help = "Skip confirmation prompts")]
    pub yes: bool,
}

impl Cli {
    pub fn validate(&self) -> Result<()> {
        if let Some(Some(0)) = self.stale {
            return Err(SweepError::invalid_args(
                "Staleness threshold must be at least one day",
            ));
        }

        if let Some(base) = &self.base {
            if base.is_empty() {
                return Err(SweepError::invalid_args("Base branch name cannot be empty"));
            }
        }

        Ok(())
    }

    /// Resolved staleness threshold: None when the flag is absent, the
    /// configured default when given bare, otherwise the explicit value.
    pub fn stale_days(&self, default_days: u32) -> Option<u32> {
        match self.stale {
            None => None,
            Some(None) => Some(default_days),
            Some(Some(days)) => Some(days),
        }
    }
}
