use super::repository::{execute_git_command, GitRepository};
use crate::utils::error::Result;

/// Branch namespace a classification pass runs against. Local and remote
/// branches with the same name are distinct entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Local,
    Remote,
}

impl Scope {
    pub fn label(&self) -> &'static str {
        match self {
            Scope::Local => "local",
            Scope::Remote => "remote",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTip {
    pub name: String,
    pub tip: String,
}

pub struct RefInventory<'a> {
    repo: &'a GitRepository,
    remote: &'a str,
}

impl<'a> RefInventory<'a> {
    pub fn new(repo: &'a GitRepository, remote: &'a str) -> Self {
        Self { repo, remote }
    }

    /// Branch names with their tip hashes, in ref order. Remote names come
    /// back with the remote prefix stripped and symbolic HEAD entries dropped.
    pub fn branch_tips(&self, scope: Scope) -> Result<Vec<BranchTip>> {
        let pattern = match scope {
            Scope::Local => "refs/heads".to_string(),
            Scope::Remote => format!("refs/remotes/{}", self.remote),
        };

        let output = execute_git_command(
            self.repo,
            &[
                "for-each-ref",
                "--format=%(refname:short) %(objectname)",
                &pattern,
            ],
        )?;

        Ok(parse_ref_lines(&output, scope, self.remote))
    }

    /// Branch names only, in the same order as `branch_tips`.
    pub fn branch_names(&self, scope: Scope) -> Result<Vec<String>> {
        Ok(self
            .branch_tips(scope)?
            .into_iter()
            .map(|tip| tip.name)
            .collect())
    }

    /// Last-commit timestamp in unix seconds, or None when the ref cannot be
    /// resolved (a deleted upstream, a corrupt ref). Callers must treat None
    /// as "cannot prove staleness".
    pub fn commit_timestamp(&self, scope: Scope, name: &str) -> Result<Option<i64>> {
        let refname = self.qualified_ref(scope, name);
        let result = execute_git_command(self.repo, &["log", "-1", "--format=%ct", &refname]);

        match result {
            Ok(output) => Ok(output.parse::<i64>().ok()),
            Err(e) if e.is_unrecoverable() => Err(e),
            Err(_) => Ok(None),
        }
    }

    pub fn base_exists(&self, scope: Scope, base: &str) -> Result<bool> {
        let refname = match scope {
            Scope::Local => format!("refs/heads/{}", base),
            Scope::Remote => format!("refs/remotes/{}/{}", self.remote, base),
        };

        let result = execute_git_command(
            self.repo,
            &["show-ref", "--verify", "--quiet", &refname],
        );

        match result {
            Ok(_) => Ok(true),
            Err(e) if e.is_unrecoverable() => Err(e),
            Err(_) => Ok(false),
        }
    }

    /// First-parent history of the base ref as parent-hash lists, one entry
    /// per mainline commit: `[commit, parent1, parent2, ...]`.
    pub fn mainline_parents(&self, scope: Scope, base: &str) -> Result<Vec<Vec<String>>> {
        let refname = self.qualified_ref(scope, base);
        let output = execute_git_command(
            self.repo,
            &["rev-list", "--first-parent", "--parents", &refname],
        )?;

        Ok(parse_parent_lines(&output))
    }

    pub fn qualified_ref(&self, scope: Scope, name: &str) -> String {
        match scope {
            Scope::Local => name.to_string(),
            Scope::Remote => format!("{}/{}", self.remote, name),
        }
    }
}

fn parse_ref_lines(output: &str, scope: Scope, remote: &str) -> Vec<BranchTip> {
    let mut tips = Vec::new();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let (name, hash) = match (parts.next(), parts.next()) {
            (Some(name), Some(hash)) => (name, hash),
            _ => continue,
        };

        let name = match scope {
            Scope::Local => name.to_string(),
            Scope::Remote => {
                // `refname:short` collapses the symbolic origin/HEAD entry to
                // the bare remote name; real remote heads carry the prefix.
                if name == remote || name.ends_with("/HEAD") {
                    continue;
                }
                match name.strip_prefix(&format!("{}/", remote)) {
                    Some(stripped) => stripped.to_string(),
                    None => continue,
                }
            }
        };

        tips.push(BranchTip {
            name,
            tip: hash.to_string(),
        });
    }

    tips
}

fn parse_parent_lines(output: &str) -> Vec<Vec<String>> {
    output
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(|hash| hash.to_string())
                .collect()
        })
        .filter(|hashes: &Vec<String>| !hashes.is_empty())
        .collect()
}
