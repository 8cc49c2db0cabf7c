use crate::areas::locator::{Discovery, Locator};
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::prompt::prompt_line::PromptLine;
use crate::artifacts::status::status_probe::StatusProbe;
use derive_new::new;
use std::io::Write;
use std::path::Path;

/// Prints the prompt segment for a working directory
///
/// Every step either produces a value or ends the flow without output:
/// no repository, an unreadable HEAD and a detached HEAD all print nothing.
#[derive(new)]
pub struct Prompt {
    writer: Box<dyn Write>,
    probe: StatusProbe,
}

impl Prompt {
    pub async fn run(&mut self, working_path: &Path) -> anyhow::Result<()> {
        if let Some(line) = self.resolve(working_path).await? {
            writeln!(self.writer, "{line}")?;
            self.writer.flush()?;
        }

        Ok(())
    }

    /// Build the prompt line for `working_path`, if it belongs to a repository
    pub async fn resolve(&self, working_path: &Path) -> anyhow::Result<Option<PromptLine>> {
        let root = match Locator::new(working_path.into()).discover() {
            // git cannot list files from inside .git, so there is nothing to probe
            Discovery::InsideGitDir => {
                return Ok(Some(PromptLine::new(BranchName::git_dir_sentinel(), false)));
            }
            Discovery::NotFound => return Ok(None),
            Discovery::Repository(root) => root,
        };

        let repository = Repository::open(&root)?;
        let Some(branch_name) = repository.refs().read_head_branch()? else {
            return Ok(None);
        };

        // probed from the repository root, not `working_path`, so changes above
        // the current subdirectory also count as dirty
        let dirty = repository.workspace().is_dirty(&self.probe).await;

        Ok(Some(PromptLine::new(branch_name, dirty)))
    }
}
