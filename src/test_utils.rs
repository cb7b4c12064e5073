pub mod test_helpers {
    use crate::config::{defaults, Config};
    use crate::core::git::{GitRepository, GitService};
    use std::fs;
    use std::path::Path;
    use std::process::Command;
    use tempfile::TempDir;

    pub fn create_test_config() -> Config {
        defaults::default_config()
    }

    pub fn run_git(path: &Path, args: &[&str]) {
        let status = Command::new("git")
            .current_dir(path)
            .args(args)
            .status()
            .expect("Failed to run git");
        assert!(status.success(), "git {:?} failed", args);
    }

    pub fn setup_test_repo() -> (TempDir, GitService) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo_path = temp_dir.path();

        run_git(repo_path, &["init", "--initial-branch=main"]);
        run_git(repo_path, &["config", "user.name", "Test User"]);
        run_git(repo_path, &["config", "user.email", "test@example.com"]);

        fs::write(repo_path.join("README.md"), "# Test Repository")
            .expect("Failed to write README");
        run_git(repo_path, &["add", "README.md"]);
        run_git(repo_path, &["commit", "-m", "Initial commit"]);

        let service = GitService::discover_from(repo_path, "origin".to_string())
            .expect("Failed to discover repo");
        (temp_dir, service)
    }

    pub fn commit_file(path: &Path, file: &str, message: &str) {
        fs::write(path.join(file), message).expect("Failed to write file");
        run_git(path, &["add", file]);
        run_git(path, &["commit", "-m", message]);
    }

    /// Commit with a pinned author and committer date, for staleness
    /// fixtures. `date` is anything git accepts, e.g. "2020-01-01T00:00:00".
    pub fn commit_file_with_date(path: &Path, file: &str, message: &str, date: &str) {
        fs::write(path.join(file), message).expect("Failed to write file");
        run_git(path, &["add", file]);

        let status = Command::new("git")
            .current_dir(path)
            .env("GIT_AUTHOR_DATE", date)
            .env("GIT_COMMITTER_DATE", date)
            .args(["commit", "-m", message])
            .status()
            .expect("Failed to run git commit");
        assert!(status.success(), "backdated commit failed");
    }

    pub fn create_branch(repo: &GitRepository, name: &str) {
        run_git(&repo.root, &["branch", name]);
    }

    /// Branch off the current HEAD, add one commit, return to main.
    pub fn create_branch_with_commit(repo: &GitRepository, name: &str, file: &str) {
        run_git(&repo.root, &["checkout", "-b", name]);
        commit_file(&repo.root, file, "work");
        run_git(&repo.root, &["checkout", "main"]);
    }

    pub fn merge_no_ff(repo: &GitRepository, branch: &str) {
        run_git(&repo.root, &["merge", "--no-ff", "--no-edit", branch]);
    }
}

pub mod fake_git {
    use crate::core::git::{BranchTip, GitQueries, Scope};
    use crate::utils::error::{Result, SweepError};
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    /// Scripted in-memory history implementing the query surface, so the
    /// classification and deletion engine can be exercised without a real
    /// repository.
    pub struct FakeGit {
        current: String,
        branches: RefCell<Vec<(Scope, BranchTip)>>,
        timestamps: HashMap<(Scope, String), i64>,
        mainlines: HashMap<(Scope, String), Vec<Vec<String>>>,
        failing_deletions: HashSet<String>,
        failing_tips: HashSet<Scope>,
        unavailable: bool,
        deletions: RefCell<Vec<(Scope, String, bool)>>,
        prunes: RefCell<usize>,
    }

    impl FakeGit {
        pub fn new() -> Self {
            Self {
                current: "main".to_string(),
                branches: RefCell::new(Vec::new()),
                timestamps: HashMap::new(),
                mainlines: HashMap::new(),
                failing_deletions: HashSet::new(),
                failing_tips: HashSet::new(),
                unavailable: false,
                deletions: RefCell::new(Vec::new()),
                prunes: RefCell::new(0),
            }
        }

        pub fn set_current_branch(&mut self, name: &str) {
            self.current = name.to_string();
        }

        pub fn add_branch(&mut self, scope: Scope, name: &str, tip: &str) {
            self.branches.borrow_mut().push((
                scope,
                BranchTip {
                    name: name.to_string(),
                    tip: tip.to_string(),
                },
            ));
        }

        pub fn set_timestamp(&mut self, scope: Scope, name: &str, timestamp: i64) {
            self.timestamps.insert((scope, name.to_string()), timestamp);
        }

        pub fn set_mainline(&mut self, scope: Scope, base: &str, mainline: Vec<Vec<&str>>) {
            let mainline = mainline
                .into_iter()
                .map(|hashes| hashes.into_iter().map(|h| h.to_string()).collect())
                .collect();
            self.mainlines.insert((scope, base.to_string()), mainline);
        }

        pub fn fail_deletion_of(&mut self, name: &str) {
            self.failing_deletions.insert(name.to_string());
        }

        pub fn fail_branch_tips(&mut self, scope: Scope) {
            self.failing_tips.insert(scope);
        }

        pub fn make_unavailable(&mut self) {
            self.unavailable = true;
        }

        pub fn deleted(&self, scope: Scope) -> Vec<String> {
            self.deletions
                .borrow()
                .iter()
                .filter(|(s, _, _)| *s == scope)
                .map(|(_, name, _)| name.clone())
                .collect()
        }

        pub fn forced_deletions(&self) -> Vec<String> {
            self.deletions
                .borrow()
                .iter()
                .filter(|(_, _, force)| *force)
                .map(|(_, name, _)| name.clone())
                .collect()
        }

        pub fn prune_calls(&self) -> usize {
            *self.prunes.borrow()
        }

        fn check_available(&self) -> Result<()> {
            if self.unavailable {
                Err(SweepError::git_unavailable("simulated missing git"))
            } else {
                Ok(())
            }
        }
    }

    impl Default for FakeGit {
        fn default() -> Self {
            Self::new()
        }
    }

    impl GitQueries for FakeGit {
        fn current_branch(&self) -> Result<String> {
            self.check_available()?;
            Ok(self.current.clone())
        }

        fn branch_tips(&self, scope: Scope) -> Result<Vec<BranchTip>> {
            self.check_available()?;
            if self.failing_tips.contains(&scope) {
                return Err(SweepError::git_operation("simulated inventory failure"));
            }

            Ok(self
                .branches
                .borrow()
                .iter()
                .filter(|(s, _)| *s == scope)
                .map(|(_, tip)| tip.clone())
                .collect())
        }

        fn base_exists(&self, scope: Scope, base: &str) -> Result<bool> {
            self.check_available()?;
            let known_branch = self
                .branches
                .borrow()
                .iter()
                .any(|(s, tip)| *s == scope && tip.name == base);
            Ok(known_branch || self.mainlines.contains_key(&(scope, base.to_string())))
        }

        fn mainline_parents(&self, scope: Scope, base: &str) -> Result<Vec<Vec<String>>> {
            self.check_available()?;
            Ok(self
                .mainlines
                .get(&(scope, base.to_string()))
                .cloned()
                .unwrap_or_default())
        }

        fn commit_timestamp(&self, scope: Scope, branch: &str) -> Result<Option<i64>> {
            self.check_available()?;
            Ok(self.timestamps.get(&(scope, branch.to_string())).copied())
        }

        fn delete_branch(&self, scope: Scope, branch: &str, force: bool) -> Result<()> {
            self.check_available()?;
            if self.failing_deletions.contains(branch) {
                return Err(SweepError::git_operation(format!(
                    "refusing to delete '{}'",
                    branch
                )));
            }

            self.branches
                .borrow_mut()
                .retain(|(s, tip)| !(*s == scope && tip.name == branch));
            self.deletions
                .borrow_mut()
                .push((scope, branch.to_string(), force));
            Ok(())
        }

        fn prune_remote(&self) -> Result<()> {
            self.check_available()?;
            *self.prunes.borrow_mut() += 1;
            Ok(())
        }
    }
}
