//! Working tree status inspection
//!
//! - `status_probe`: bounded `git ls-files` invocation deciding whether a tree is dirty

pub mod status_probe;
