//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application.

/// Macro for debug logging that is enabled with the debug_prompt feature flag
///
/// A shell prompt must stay quiet on every failure path, so nothing reaches
/// stderr unless the crate is built with `cargo build --features debug_prompt`.
///
/// # Usage
/// ```rust,ignore
/// debug_log!("no repository found above {:?}", path);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_prompt")]
        {
            eprintln!($($arg)*);
        }
        // keeps the arguments type-checked and used without printing anything
        #[cfg(not(feature = "debug_prompt"))]
        {
            let _ = format_args!($($arg)*);
        }
    };
}
