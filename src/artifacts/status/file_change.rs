use colored::Colorize;

/// How a working-tree file differs from the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileChange {
    /// Not indexed and not ignored
    NewFile,
    /// Indexed, but the content on disk no longer matches the staged blob
    Modified,
}

impl From<&FileChange> for &str {
    fn from(change: &FileChange) -> Self {
        match change {
            FileChange::NewFile => "new file:",
            FileChange::Modified => "modified:",
        }
    }
}

impl std::fmt::Display for FileChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let colored_label = match self {
            FileChange::NewFile => label.green(),
            FileChange::Modified => label.red(),
        };

        write!(f, "{}", colored_label)
    }
}
