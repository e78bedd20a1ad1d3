use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::FileChange;
use crate::artifacts::status::status_info::{ChangeSet, StatusReport};
use crate::errors::CvsResult;
use std::path::Path;

// Terminology:
// - new files: present in the working tree, absent from the index and not ignored
// - modified files: indexed, but their content on disk hashes differently
// Indexed files deleted from disk are not reported; the next `add` drops them.
impl Repository {
    pub fn status(&self) -> CvsResult<StatusReport> {
        self.ensure_exists()?;

        let head = self.refs().read_head()?;
        let index = self.index()?;

        let mut changes = ChangeSet::new();
        for file in self.workspace().list_files(None)? {
            if let Some(change) = self.detect_change(&file, &index)? {
                changes.insert(file, change);
            }
        }

        let report = StatusReport {
            head,
            changes,
            indexed: index
                .blobs()
                .into_iter()
                .map(|blob| blob.path().to_path_buf())
                .collect(),
        };

        for line in report.lines() {
            self.emit(line)?;
        }

        Ok(report)
    }

    fn detect_change(&self, file: &Path, index: &Index) -> CvsResult<Option<FileChange>> {
        match index.entry_by_path(file) {
            None if index.is_ignored(file) => Ok(None),
            None => Ok(Some(FileChange::NewFile)),
            Some(blob) if !self.workspace().matches_file(blob, file)? => {
                Ok(Some(FileChange::Modified))
            }
            Some(_) => Ok(None),
        }
    }
}
