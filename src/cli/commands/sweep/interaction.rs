use crate::core::git::Scope;
use crate::core::sweep::{CandidateSet, Category};
use crate::utils::error::{Result, SweepError};
use dialoguer::{Confirm, MultiSelect};

pub struct SweepInteraction {
    assume_yes: bool,
}

impl SweepInteraction {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    fn is_non_interactive() -> bool {
        std::env::var("GIT_SWEEP_NON_INTERACTIVE").is_ok()
            || std::env::var("CI").is_ok()
            || !atty::is(atty::Stream::Stdin)
    }

    /// Present the scope's candidates and return the confirmed subset.
    /// `Ok(None)` means the operator cancelled (escape or interrupt inside a
    /// prompt); the caller must stop the remaining pipeline without further
    /// mutations.
    pub fn select_for_deletion(
        &self,
        scope: Scope,
        candidates: &CandidateSet,
    ) -> Result<Option<Vec<(String, Category)>>> {
        let entries = candidates.entries();
        if entries.is_empty() {
            return Ok(Some(Vec::new()));
        }

        if self.assume_yes {
            return Ok(Some(entries));
        }

        if Self::is_non_interactive() {
            return Err(SweepError::invalid_args(
                "Cannot prompt for branch selection in non-interactive mode. \
                 Use --yes to delete all candidates or --dry-run to list them.",
            ));
        }

        let labels: Vec<String> = entries
            .iter()
            .map(|(name, category)| format!("{} [{}]", name, category.label()))
            .collect();
        let defaults = vec![true; labels.len()];

        let selection = MultiSelect::new()
            .with_prompt(format!(
                "Select {} branches to delete (space toggles, enter confirms)",
                scope.label()
            ))
            .items(&labels)
            .defaults(&defaults)
            .interact_opt();

        let indices = match selection {
            Ok(Some(indices)) => indices,
            Ok(None) | Err(_) => return Ok(None),
        };

        if indices.is_empty() {
            println!("No {} branches selected.", scope.label());
            return Ok(Some(Vec::new()));
        }

        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete {} selected {} branch(es)?",
                indices.len(),
                scope.label()
            ))
            .default(false)
            .interact_opt();

        match confirmed {
            Ok(Some(true)) => Ok(Some(
                indices.into_iter().map(|i| entries[i].clone()).collect(),
            )),
            Ok(Some(false)) => Ok(Some(Vec::new())),
            Ok(None) | Err(_) => Ok(None),
        }
    }
}
