//! Repository discovery
//!
//! Walks from a starting directory up to the filesystem root and stops at the
//! first directory holding a `.git` entry:
//!
//! ```text
//! /home/me/projects/foo/src/bar/.git ??? -> missing
//! /home/me/projects/foo/src/.git     ??? -> missing
//! /home/me/projects/foo/.git         ??? -> found, root is /home/me/projects/foo
//! ```

use crate::artifacts::branch::GIT_DIR_NAME;
use derive_new::new;
use std::path::Path;

/// Where the starting directory sits relative to a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// The starting directory is inside a `.git` metadata directory
    InsideGitDir,
    /// Nearest ancestor (or the directory itself) containing `.git`
    Repository(Box<Path>),
    /// No ancestor up to the filesystem root contains `.git`
    NotFound,
}

#[derive(Debug, new)]
pub struct Locator {
    start: Box<Path>,
}

impl Locator {
    pub fn discover(&self) -> Discovery {
        if self.is_inside_git_dir() {
            return Discovery::InsideGitDir;
        }

        match self
            .start
            .ancestors()
            .find(|dir| dir.join(GIT_DIR_NAME).exists())
        {
            Some(root) => Discovery::Repository(root.into()),
            None => {
                crate::debug_log!("no {} found above {:?}", GIT_DIR_NAME, self.start);
                Discovery::NotFound
            }
        }
    }

    /// Whether one of the start path's components is exactly `.git`
    fn is_inside_git_dir(&self) -> bool {
        self.start
            .components()
            .any(|component| component.as_os_str() == GIT_DIR_NAME)
    }
}
