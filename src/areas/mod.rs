//! Core repository components
//!
//! This module contains the parts of a Git repository the prompt touches:
//!
//! - `locator`: Upward search for the enclosing repository
//! - `refs`: Reading HEAD to find the checked-out branch
//! - `repository`: Resolution of the metadata directory and coordination
//! - `workspace`: Working directory status

pub mod locator;
pub mod refs;
pub mod repository;
pub mod workspace;
