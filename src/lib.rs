pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use cli::commands::sweep::BranchSweeper;
pub use config::Config;
pub use core::git::{GitQueries, GitService, Scope};
pub use utils::{Result, SweepError};
