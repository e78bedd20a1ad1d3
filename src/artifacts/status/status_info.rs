use crate::artifacts::status::file_change::FileChange;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub type ChangeSet = BTreeMap<PathBuf, FileChange>;

/// Working tree compared against the index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    /// Raw HEAD value: a branch name or a detached commit hash
    pub head: String,
    pub changes: ChangeSet,
    /// Every indexed path, in index order
    pub indexed: Vec<PathBuf>,
}

impl StatusReport {
    /// Lines of the human-readable report
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("HEAD -> {}", self.head)];

        lines.push("Changes not staged for commit:".to_string());
        lines.extend(
            self.changes
                .iter()
                .map(|(path, change)| format!("{} {}", change, path.display())),
        );

        lines.push(String::new());
        lines.push("Index contents:".to_string());
        lines.extend(self.indexed.iter().map(|path| path.display().to_string()));

        lines
    }
}
