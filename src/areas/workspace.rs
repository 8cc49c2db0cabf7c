use crate::artifacts::status::status_probe::StatusProbe;
use derive_new::new;
use std::path::Path;

/// Working tree of a repository
#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the tree has deleted, modified, unmerged, killed or untracked
    /// files, as reported by `probe` run from the workspace root
    pub async fn is_dirty(&self, probe: &StatusProbe) -> bool {
        probe.is_dirty(&self.path).await
    }
}
