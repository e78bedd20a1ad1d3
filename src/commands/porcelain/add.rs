use crate::areas::repository::Repository;
use crate::errors::{CvsError, CvsResult};
use std::path::{Path, PathBuf};
use tracing::debug;

impl Repository {
    /// Stage a file, or every file beneath a directory, then refresh the index
    pub fn stage(&self, path: &Path) -> CvsResult<()> {
        self.ensure_exists()?;
        let target = self.resolve_stage_target(path)?;
        let mut index = self.index()?;

        let files = self.workspace().list_files(target.as_deref())?;
        debug!(files = files.len(), "expanding stage target");

        for file in files {
            index.add_file(&file, self.workspace(), self.database())?;
        }

        index.refresh(self.workspace())
    }

    /// Root-relative form of a stage target; `None` stands for the whole tree
    fn resolve_stage_target(&self, path: &Path) -> CvsResult<Option<PathBuf>> {
        let invalid = || CvsError::InvalidPath(path.to_path_buf());

        let absolute = self
            .path()
            .join(path)
            .canonicalize()
            .map_err(|_| invalid())?;
        if !absolute.starts_with(self.path()) {
            return Err(invalid());
        }

        Ok(self.workspace().relative_path(&absolute))
    }
}
