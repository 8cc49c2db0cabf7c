//! Git references (HEAD)
//!
//! HEAD records what the working tree has checked out. It is stored as a text
//! file containing either:
//! - `ref: refs/heads/<branch>` for a symbolic reference to a branch
//! - A 40-character SHA-1 hash when HEAD is detached
//!
//! Only the symbolic form produces a branch name for the prompt.

use crate::artifacts::branch::HEAD_REF_NAME;
use crate::artifacts::branch::branch_name::BranchName;
use anyhow::Context;
use derive_new::new;
use std::path::Path;

/// Git references reader
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    /// Read the branch HEAD points to
    ///
    /// # Returns
    ///
    /// Some(BranchName) for a symbolic HEAD, None when HEAD is detached.
    /// Fails when the HEAD file cannot be read.
    pub fn read_head_branch(&self) -> anyhow::Result<Option<BranchName>> {
        let head_path = self.head_path();
        let content = std::fs::read(&head_path)
            .with_context(|| format!("failed to read HEAD file at {:?}", head_path))?;

        let branch_name = BranchName::try_parse_head(&content);
        if branch_name.is_none() {
            crate::debug_log!("HEAD at {:?} does not point to a branch", head_path);
        }

        Ok(branch_name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }
}
