use super::candidates::Category;
use crate::core::git::{GitQueries, Scope};
use crate::utils::error::Result;

#[derive(Debug, Default, Clone)]
pub struct DeletionOutcome {
    pub attempted: usize,
    pub deleted: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

impl DeletionOutcome {
    pub fn absorb(&mut self, other: DeletionOutcome) {
        self.attempted += other.attempted;
        self.deleted += other.deleted;
        self.failed += other.failed;
        self.errors.extend(other.errors);
    }
}

/// Delete each branch independently, never aborting the batch on a single
/// failure. Local merged branches use git's non-forcing delete so git's own
/// merged check backs up the classifier; local stale branches are force
/// deleted (the operator confirmed intent against the stale label); remote
/// branches are deleted with a delete push.
///
/// Only an unusable git executable propagates as an error.
pub fn delete_branches(
    git: &dyn GitQueries,
    scope: Scope,
    category: Category,
    branches: &[String],
) -> Result<DeletionOutcome> {
    let mut outcome = DeletionOutcome::default();
    let force = scope == Scope::Local && category == Category::Stale;

    for branch in branches {
        outcome.attempted += 1;
        match git.delete_branch(scope, branch, force) {
            Ok(()) => outcome.deleted += 1,
            Err(e) if e.is_unrecoverable() => return Err(e),
            Err(e) => {
                outcome.failed += 1;
                outcome.errors.push(format!("{}: {}", branch, e));
            }
        }
    }

    Ok(outcome)
}
