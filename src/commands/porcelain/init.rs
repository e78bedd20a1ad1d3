use crate::areas::repository::Repository;
use crate::config::{DEFAULT_BRANCH, ROOT_PARENT};
use crate::errors::{CvsError, CvsResult};
use std::fs;
use tracing::info;

impl Repository {
    pub fn init(&self) -> CvsResult<()> {
        let layout = self.layout();
        if layout.exists() {
            return Err(CvsError::RepositoryAlreadyExists(self.path().to_path_buf()));
        }

        fs::create_dir_all(layout.metadata_path())?;
        hide_directory(layout.metadata_path());
        fs::create_dir_all(layout.commits_path())?;
        fs::create_dir_all(layout.trees_path())?;
        fs::create_dir_all(layout.refs_path())?;

        fs::write(layout.index_path(), "")?;
        self.refs().write_head(DEFAULT_BRANCH)?;
        self.refs().write_ref(DEFAULT_BRANCH, ROOT_PARENT)?;

        info!(path = %self.path().display(), "repository initialized");
        self.emit(format_args!(
            "Initialized empty repository in {}",
            self.path().display()
        ))
    }
}

#[cfg(windows)]
fn hide_directory(path: &std::path::Path) {
    let status = std::process::Command::new("attrib")
        .arg("+h")
        .arg(path)
        .status();

    if let Err(e) = status {
        tracing::warn!(error = %e, "failed to hide metadata directory");
    }
}

#[cfg(not(windows))]
fn hide_directory(_path: &std::path::Path) {}
