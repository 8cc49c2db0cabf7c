pub mod branch_name;

/// Name of the directory holding the repository metadata
pub const GIT_DIR_NAME: &str = ".git";
/// Name of the head-reference file inside the metadata directory
pub const HEAD_REF_NAME: &str = "HEAD";
/// Token preceding the branch name in a symbolic HEAD
pub const REF_PREFIX: &str = "refs/heads/";
