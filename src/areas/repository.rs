use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::GIT_DIR_NAME;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Prefix of the single line inside a `.git` file of a linked worktree or submodule
const GITDIR_PREFIX: &str = "gitdir:";

#[derive(Debug)]
pub struct Repository {
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the repository whose working tree is rooted at `path`
    ///
    /// `path/.git` is either the metadata directory itself or, for linked
    /// worktrees and submodules, a file pointing to it with `gitdir: <path>`.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let git_dir = Self::resolve_git_dir(path)?;

        let workspace = Workspace::new(path.into());
        let refs = Refs::new(git_dir);

        Ok(Repository {
            workspace,
            refs,
        })
    }

    fn resolve_git_dir(path: &Path) -> anyhow::Result<Box<Path>> {
        let dot_git = path.join(GIT_DIR_NAME);

        if dot_git.is_dir() {
            return Ok(dot_git.into_boxed_path());
        }

        let content = std::fs::read_to_string(&dot_git)
            .with_context(|| format!("failed to read git file at {:?}", dot_git))?;

        let target = content
            .lines()
            .find_map(|line| line.strip_prefix(GITDIR_PREFIX))
            .map(str::trim)
            .filter(|target| !target.is_empty())
            .with_context(|| format!("git file at {:?} has no gitdir line", dot_git))?;

        let target = PathBuf::from(target);
        let git_dir = if target.is_absolute() {
            target
        } else {
            path.join(target)
        };

        Ok(git_dir.into_boxed_path())
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
