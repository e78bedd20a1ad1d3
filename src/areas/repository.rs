use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::index::ignore::IgnoreRules;
use crate::config::RepositoryLayout;
use crate::errors::{CvsError, CvsResult};
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::Path;

/// Entry point of every operation
///
/// Nothing is cached between invocations: each operation re-reads the index,
/// refs and ignore list from disk.
pub struct Repository {
    layout: RepositoryLayout,
    writer: RefCell<Box<dyn Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(path: &Path, writer: Box<dyn Write>) -> CvsResult<Self> {
        let path = path
            .canonicalize()
            .map_err(|e| CvsError::from_io_or(e, || CvsError::InvalidPath(path.to_path_buf())))?;
        let layout = RepositoryLayout::new(&path);

        Ok(Repository {
            database: Database::new(layout.objects_path().into_boxed_path()),
            workspace: Workspace::new(path.into_boxed_path()),
            refs: Refs::new(layout.metadata_path().into()),
            writer: RefCell::new(writer),
            layout,
        })
    }

    pub fn path(&self) -> &Path {
        self.layout.workdir()
    }

    pub fn layout(&self) -> &RepositoryLayout {
        &self.layout
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Load the index along with the current ignore list
    pub fn index(&self) -> CvsResult<Index> {
        let ignore = IgnoreRules::load(&self.layout.ignore_path())?;

        Index::load(
            self.layout.index_path().into_boxed_path(),
            &self.database,
            ignore,
        )
    }

    pub(crate) fn ensure_exists(&self) -> CvsResult<()> {
        if !self.layout.exists() {
            return Err(CvsError::RepositoryNotFound(self.path().to_path_buf()));
        }

        Ok(())
    }

    /// Write one line to the output sink
    pub(crate) fn emit(&self, line: impl std::fmt::Display) -> CvsResult<()> {
        writeln!(self.writer(), "{line}")?;

        Ok(())
    }
}
