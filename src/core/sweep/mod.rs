pub mod candidates;
pub mod delete;
pub mod merged;
pub mod stale;

pub use candidates::{CandidateSet, Category};
pub use delete::{delete_branches, DeletionOutcome};
pub use merged::{merged_branches, merged_tip_set};
pub use stale::{classify_stale, is_stale};
