pub mod prompt_line;

/// zsh color escape for the parentheses
pub const PAREN_COLOR: &str = "%F{blue}";
/// zsh color escape for the branch name
pub const BRANCH_COLOR: &str = "%F{red}";
/// zsh escape restoring the default foreground color
pub const RESET_COLOR: &str = "%f";
/// Appended right after the segment when the working tree is dirty
pub const DIRTY_GLYPH: &str = "💩";
