use crate::utils::error::Result;
use std::path::Path;

pub mod inventory;
pub mod repository;

pub use inventory::{BranchTip, RefInventory, Scope};
pub use repository::GitRepository;

use repository::{execute_git_command_lenient, execute_git_command_with_status};

/// The narrow query surface the classification and deletion engine runs
/// against. Everything above the adapter reasons over this trait only, so
/// tests can substitute scripted histories.
pub trait GitQueries {
    fn current_branch(&self) -> Result<String>;
    fn branch_tips(&self, scope: Scope) -> Result<Vec<BranchTip>>;
    fn base_exists(&self, scope: Scope, base: &str) -> Result<bool>;
    fn mainline_parents(&self, scope: Scope, base: &str) -> Result<Vec<Vec<String>>>;
    fn commit_timestamp(&self, scope: Scope, branch: &str) -> Result<Option<i64>>;
    fn delete_branch(&self, scope: Scope, branch: &str, force: bool) -> Result<()>;
    fn prune_remote(&self) -> Result<()>;
}

pub struct GitService {
    repo: GitRepository,
    remote: String,
}

impl GitService {
    pub fn discover(remote: String) -> Result<Self> {
        let repo = GitRepository::discover()?;
        repo.validate()?;
        Ok(Self { repo, remote })
    }

    pub fn discover_from(path: &Path, remote: String) -> Result<Self> {
        let repo = GitRepository::discover_from(path)?;
        repo.validate()?;
        Ok(Self { repo, remote })
    }

    pub fn repository(&self) -> &GitRepository {
        &self.repo
    }

    pub fn remote_name(&self) -> &str {
        &self.remote
    }

    fn inventory(&self) -> RefInventory<'_> {
        RefInventory::new(&self.repo, &self.remote)
    }
}

impl GitQueries for GitService {
    fn current_branch(&self) -> Result<String> {
        self.repo.get_current_branch()
    }

    fn branch_tips(&self, scope: Scope) -> Result<Vec<BranchTip>> {
        self.inventory().branch_tips(scope)
    }

    fn base_exists(&self, scope: Scope, base: &str) -> Result<bool> {
        self.inventory().base_exists(scope, base)
    }

    fn mainline_parents(&self, scope: Scope, base: &str) -> Result<Vec<Vec<String>>> {
        self.inventory().mainline_parents(scope, base)
    }

    fn commit_timestamp(&self, scope: Scope, branch: &str) -> Result<Option<i64>> {
        self.inventory().commit_timestamp(scope, branch)
    }

    fn delete_branch(&self, scope: Scope, branch: &str, force: bool) -> Result<()> {
        match scope {
            Scope::Local => {
                let args = if force {
                    vec!["branch", "-D", branch]
                } else {
                    vec!["branch", "-d", branch]
                };
                execute_git_command_with_status(&self.repo, &args)
            }
            Scope::Remote => execute_git_command_with_status(
                &self.repo,
                &["push", &self.remote, "--delete", branch],
            ),
        }
    }

    fn prune_remote(&self) -> Result<()> {
        execute_git_command_lenient(&self.repo, &["remote", "prune", &self.remote])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::*;

    #[test]
    fn test_service_discovery_and_remote_name() {
        let (_temp_dir, service) = setup_test_repo();
        assert_eq!(service.remote_name(), "origin");
        assert_eq!(service.current_branch().unwrap(), "main");
    }

    #[test]
    fn test_branch_tips_through_service() {
        let (_temp_dir, service) = setup_test_repo();
        create_branch(service.repository(), "feature/x");

        let tips = service.branch_tips(Scope::Local).unwrap();
        let names: Vec<&str> = tips.iter().map(|t| t.name.as_str()).collect();
        assert!(names.contains(&"main"));
        assert!(names.contains(&"feature/x"));
    }

    #[test]
    fn test_branch_names_match_tips_order() {
        let (_temp_dir, service) = setup_test_repo();
        create_branch(service.repository(), "feature/x");

        let inventory = RefInventory::new(service.repository(), "origin");
        let names = inventory.branch_names(Scope::Local).unwrap();
        let tips = inventory.branch_tips(Scope::Local).unwrap();

        let tip_names: Vec<String> = tips.into_iter().map(|t| t.name).collect();
        assert_eq!(names, tip_names);
    }

    #[test]
    fn test_base_exists_per_scope() {
        let (_temp_dir, service) = setup_test_repo();
        assert!(service.base_exists(Scope::Local, "main").unwrap());
        assert!(!service.base_exists(Scope::Local, "trunk").unwrap());
        assert!(!service.base_exists(Scope::Remote, "main").unwrap());
    }

    #[test]
    fn test_delete_branch_non_force_refuses_unmerged() {
        let (_temp_dir, service) = setup_test_repo();
        create_branch_with_commit(service.repository(), "dangling", "work.txt");

        let result = service.delete_branch(Scope::Local, "dangling", false);
        assert!(result.is_err());

        // The branch survives the refused delete and yields to -D.
        service
            .delete_branch(Scope::Local, "dangling", true)
            .expect("force delete should succeed");
        let tips = service.branch_tips(Scope::Local).unwrap();
        assert!(tips.iter().all(|t| t.name != "dangling"));
    }

    #[test]
    fn test_mainline_records_merge_second_parent() {
        let (_temp_dir, service) = setup_test_repo();
        create_branch_with_commit(service.repository(), "feature/m", "m.txt");

        let tips = service.branch_tips(Scope::Local).unwrap();
        let feature_tip = tips
            .iter()
            .find(|t| t.name == "feature/m")
            .expect("feature branch listed")
            .tip
            .clone();

        merge_no_ff(service.repository(), "feature/m");

        let mainline = service.mainline_parents(Scope::Local, "main").unwrap();
        // Newest mainline entry is the merge commit: itself, the previous
        // mainline head, then the merged branch's tip.
        assert_eq!(mainline[0].len(), 3);
        assert_eq!(mainline[0][2], feature_tip);
    }

    #[test]
    fn test_commit_timestamp_reads_committer_date() {
        let (_temp_dir, service) = setup_test_repo();
        run_git(&service.repository().root, &["checkout", "-b", "old"]);
        commit_file_with_date(
            &service.repository().root,
            "old.txt",
            "ancient",
            "2020-01-01T00:00:00",
        );
        run_git(&service.repository().root, &["checkout", "main"]);

        let timestamp = service
            .commit_timestamp(Scope::Local, "old")
            .unwrap()
            .expect("timestamp for existing branch");
        // 2020-01-01 is 1577836800; leave slack for the fixture's timezone.
        assert!(timestamp > 1_577_700_000 && timestamp < 1_578_000_000);

        let missing = service.commit_timestamp(Scope::Local, "never-existed").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_prune_remote_is_lenient_without_remote() {
        let (_temp_dir, service) = setup_test_repo();
        assert!(service.prune_remote().is_ok());
    }

    #[test]
    fn test_mainline_parents_reaches_root() {
        let (_temp_dir, service) = setup_test_repo();
        let mainline = service.mainline_parents(Scope::Local, "main").unwrap();

        assert_eq!(mainline.len(), 1);
        assert_eq!(mainline[0].len(), 1);
    }
}
