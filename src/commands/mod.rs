//! Command implementations
//!
//! - `prompt`: Locate the repository, read its branch, check dirtiness and
//!   print the prompt segment

pub mod prompt;
