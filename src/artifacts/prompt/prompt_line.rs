use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::prompt::{BRANCH_COLOR, DIRTY_GLYPH, PAREN_COLOR, RESET_COLOR};
use derive_new::new;

/// The prompt segment printed for the current repository
///
/// Renders as ` %F{blue}(%F{red}<branch>%F{blue})%f`, followed directly by the
/// dirty glyph when the working tree has pending changes.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PromptLine {
    branch: BranchName,
    dirty: bool,
}

impl PromptLine {
    pub fn branch(&self) -> &BranchName {
        &self.branch
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl std::fmt::Display for PromptLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            " {PAREN_COLOR}({BRANCH_COLOR}{}{PAREN_COLOR}){RESET_COLOR}",
            self.branch
        )?;

        if self.dirty {
            write!(f, "{DIRTY_GLYPH}")?;
        }

        Ok(())
    }
}
