use crate::utils::error::{Result, SweepError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured command output larger than this is a hard failure. Truncating a
/// ref listing silently would corrupt the classification downstream.
pub const MAX_OUTPUT_BYTES: usize = 8 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct GitRepository {
    pub root: PathBuf,
    pub git_dir: PathBuf,
}

impl GitRepository {
    pub fn discover() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            SweepError::git_operation(format!("Failed to get current directory: {}", e))
        })?;

        Self::discover_from(&current_dir)
    }

    pub fn discover_from(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .current_dir(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .map_err(|e| SweepError::git_unavailable(format!("Failed to execute git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SweepError::git_operation(format!(
                "Not a git repository or git not found: {}",
                stderr.trim()
            )));
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let root = PathBuf::from(root);

        let git_dir = Self::get_git_dir(&root)?;

        Ok(Self { root, git_dir })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(SweepError::git_operation(
                "Repository root does not exist".to_string(),
            ));
        }

        if !self.git_dir.exists() {
            return Err(SweepError::git_operation(
                "Git directory does not exist".to_string(),
            ));
        }

        let output = Command::new("git")
            .current_dir(&self.root)
            .args(["status", "--porcelain"])
            .output()
            .map_err(|e| {
                SweepError::git_unavailable(format!("Failed to check git status: {}", e))
            })?;

        if !output.status.success() {
            return Err(SweepError::git_operation(
                "Repository is in an invalid state".to_string(),
            ));
        }

        Ok(())
    }

    pub fn get_current_branch(&self) -> Result<String> {
        execute_git_command(self, &["rev-parse", "--abbrev-ref", "HEAD"])
    }

    fn get_git_dir(repo_root: &Path) -> Result<PathBuf> {
        let output = Command::new("git")
            .current_dir(repo_root)
            .args(["rev-parse", "--git-dir"])
            .output()
            .map_err(|e| SweepError::git_unavailable(format!("Failed to get git dir: {}", e)))?;

        if !output.status.success() {
            return Err(SweepError::git_operation(
                "Failed to determine git directory".to_string(),
            ));
        }

        let git_dir = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let git_dir = if git_dir.starts_with('/') {
            PathBuf::from(git_dir)
        } else {
            repo_root.join(git_dir)
        };

        Ok(git_dir)
    }
}

pub fn execute_git_command(repo: &GitRepository, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .current_dir(&repo.root)
        .args(args)
        .output()
        .map_err(|e| SweepError::git_unavailable(format!("Failed to execute git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SweepError::git_operation(format!(
            "Git command failed ({}): {}",
            args.join(" "),
            stderr.trim()
        )));
    }

    if output.stdout.len() > MAX_OUTPUT_BYTES {
        return Err(SweepError::git_operation(format!(
            "Git command output exceeded {} bytes ({})",
            MAX_OUTPUT_BYTES,
            args.join(" ")
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.trim().to_string())
}

/// Ignore-failure mode: a failed command yields empty output instead of an
/// error. Spawn failures still propagate, a missing git binary is never
/// something to paper over.
pub fn execute_git_command_lenient(repo: &GitRepository, args: &[&str]) -> Result<String> {
    match execute_git_command(repo, args) {
        Ok(output) => Ok(output),
        Err(e) if e.is_unrecoverable() => Err(e),
        Err(_) => Ok(String::new()),
    }
}

pub fn execute_git_command_with_status(repo: &GitRepository, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .current_dir(&repo.root)
        .args(args)
        .output()
        .map_err(|e| SweepError::git_unavailable(format!("Failed to execute git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SweepError::git_operation(format!(
            "Git command failed ({}): {}",
            args.join(" "),
            stderr.trim()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup_test_repo() -> (TempDir, GitRepository) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo_path = temp_dir.path();

        Command::new("git")
            .current_dir(repo_path)
            .args(["init", "--initial-branch=main"])
            .status()
            .expect("Failed to init git repo");

        Command::new("git")
            .current_dir(repo_path)
            .args(["config", "user.name", "Test User"])
            .status()
            .expect("Failed to set git user name");

        Command::new("git")
            .current_dir(repo_path)
            .args(["config", "user.email", "test@example.com"])
            .status()
            .expect("Failed to set git user email");

        fs::write(repo_path.join("README.md"), "# Test Repository")
            .expect("Failed to write README");

        Command::new("git")
            .current_dir(repo_path)
            .args(["add", "README.md"])
            .status()
            .expect("Failed to add README");

        Command::new("git")
            .current_dir(repo_path)
            .args(["commit", "-m", "Initial commit"])
            .status()
            .expect("Failed to commit README");

        let repo = GitRepository::discover_from(repo_path).expect("Failed to discover repo");
        (temp_dir, repo)
    }

    #[test]
    fn test_repository_discovery() {
        let (temp_dir, repo) = setup_test_repo();
        assert_eq!(repo.root, temp_dir.path().canonicalize().unwrap());
        assert!(repo.git_dir.exists());
    }

    #[test]
    fn test_repository_validation() {
        let (_temp_dir, repo) = setup_test_repo();
        assert!(repo.validate().is_ok());
    }

    #[test]
    fn test_get_current_branch() {
        let (_temp_dir, repo) = setup_test_repo();
        let branch = repo
            .get_current_branch()
            .expect("Failed to get current branch");
        assert!(branch == "main");
    }

    #[test]
    fn test_discovery_fails_outside_repository() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let result = GitRepository::discover_from(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_git_command_captures_output() {
        let (_temp_dir, repo) = setup_test_repo();
        let output = execute_git_command(&repo, &["rev-parse", "--abbrev-ref", "HEAD"])
            .expect("Failed to run git");
        assert_eq!(output, "main");
    }

    #[test]
    fn test_execute_git_command_failure_carries_stderr() {
        let (_temp_dir, repo) = setup_test_repo();
        let result = execute_git_command(&repo, &["rev-parse", "--verify", "refs/heads/nope"]);
        let err = result.expect_err("verify of missing ref should fail");
        assert!(err.to_string().contains("rev-parse"));
        assert!(!err.is_unrecoverable());
    }

    #[test]
    fn test_lenient_execution_swallows_failure() {
        let (_temp_dir, repo) = setup_test_repo();
        let output = execute_git_command_lenient(&repo, &["remote", "prune", "no-such-remote"])
            .expect("lenient execution must not error on command failure");
        assert_eq!(output, "");
    }

    #[test]
    fn test_lenient_execution_passes_through_success() {
        let (_temp_dir, repo) = setup_test_repo();
        let output = execute_git_command_lenient(&repo, &["rev-parse", "--abbrev-ref", "HEAD"])
            .expect("Failed to run git");
        assert_eq!(output, "main");
    }
}
