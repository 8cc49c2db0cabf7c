//! Prompt data structures and algorithms
//!
//! This module contains the value types the prompt is built from:
//!
//! - `branch`: Branch names parsed from the HEAD file
//! - `core`: Shared utilities (debug logging)
//! - `prompt`: The rendered prompt segment
//! - `status`: Dirty working tree detection

pub mod branch;
pub mod core;
pub mod prompt;
pub mod status;
