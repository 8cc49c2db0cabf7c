use crate::artifacts::branch::{GIT_DIR_NAME, REF_PREFIX};

/// Name of the checked-out branch as shown in the prompt
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    /// Extract the branch name from the raw content of a HEAD file
    ///
    /// The name is everything after the first `refs/heads/` token, trimmed.
    /// A detached HEAD (raw object id), an empty name or a non UTF-8 name
    /// yields `None`.
    pub fn try_parse_head(content: &[u8]) -> Option<Self> {
        let prefix = REF_PREFIX.as_bytes();
        let start = content
            .windows(prefix.len())
            .position(|window| window == prefix)?
            + prefix.len();

        let name = std::str::from_utf8(&content[start..]).ok()?.trim();
        if name.is_empty() {
            None
        } else {
            Some(Self(name.to_string()))
        }
    }

    /// Placeholder shown while the working directory is inside `.git` itself
    pub fn git_dir_sentinel() -> Self {
        Self(GIT_DIR_NAME.to_string())
    }

    pub fn is_git_dir_sentinel(&self) -> bool {
        self.0 == GIT_DIR_NAME
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
