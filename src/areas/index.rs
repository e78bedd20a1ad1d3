//! Staging index
//!
//! The index maps root-relative paths to the blobs staged for the next commit.
//!
//! ## Index File Format
//!
//! Plain text, one `"<path> <hash>"` line per entry, with no trailing newline.
//! On every refresh the lines are re-serialized sorted by that string, and the
//! commit tree is built from the blobs in the same order.

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::index::ignore::IgnoreRules;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{CvsError, CvsResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.cvs/index`)
    path: Box<Path>,
    /// Staged blobs keyed by path
    entries: BTreeMap<PathBuf, Blob>,
    ignore: IgnoreRules,
}

impl Index {
    /// Load the index file, resolving every entry's blob from the store
    pub fn load(path: Box<Path>, database: &Database, ignore: IgnoreRules) -> CvsResult<Self> {
        if !path.is_file() {
            return Err(CvsError::IndexNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(&path)?;
        let mut entries = BTreeMap::new();

        for line in content.lines().filter(|line| !line.trim().is_empty()) {
            let (file_path, hash) = line
                .rsplit_once(' ')
                .ok_or_else(|| CvsError::CorruptIndex(line.to_string()))?;
            let oid =
                ObjectId::try_parse(hash).map_err(|_| CvsError::CorruptIndex(line.to_string()))?;
            let file_path = PathBuf::from(file_path);

            let blob = database.load_blob(&file_path, &oid)?;
            entries.insert(file_path, blob);
        }

        Ok(Index {
            path,
            entries,
            ignore,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_ignored(&self, file_path: &Path) -> bool {
        self.ignore.is_ignored(file_path)
    }

    pub fn entry_by_path(&self, file_path: &Path) -> Option<&Blob> {
        self.entries.get(file_path)
    }

    /// Staged blobs in index-line order, the order the commit tree is built in
    pub fn blobs(&self) -> Vec<&Blob> {
        let mut blobs = self.entries.values().collect::<Vec<_>>();
        blobs.sort_by_cached_key(|blob| blob.index_line());

        blobs
    }

    /// Stage one working-tree file
    ///
    /// Ignored files and files whose content is already staged under the same
    /// path are skipped. Returns whether the index changed.
    pub fn add_file(
        &mut self,
        file_path: &Path,
        workspace: &Workspace,
        database: &Database,
    ) -> CvsResult<bool> {
        if self.is_ignored(file_path) {
            debug!(path = %file_path.display(), "skipping ignored file");
            return Ok(false);
        }

        let blob = workspace.create_blob(file_path)?;
        if self.entries.get(file_path) == Some(&blob) {
            debug!(path = %file_path.display(), "file already staged");
            return Ok(false);
        }

        database.write_blob(&blob)?;
        info!(path = %file_path.display(), oid = %blob.oid(), "staged file");
        self.entries.insert(file_path.to_path_buf(), blob);

        Ok(true)
    }

    /// Drop entries whose file is gone or now ignored, then rewrite the index file
    pub fn refresh(&mut self, workspace: &Workspace) -> CvsResult<()> {
        let ignore = &self.ignore;
        self.entries.retain(|file_path, _| {
            let keep = workspace.exists(file_path) && !ignore.is_ignored(file_path);
            if !keep {
                debug!(path = %file_path.display(), "dropping entry from index");
            }
            keep
        });

        let lines = self
            .blobs()
            .into_iter()
            .map(Blob::index_line)
            .collect::<Vec<_>>();

        self.write_lines(&lines)
    }

    /// Replace every entry, e.g. after a checkout, and rewrite the file sorted by
    /// path string (`a.txt` before `a/b.txt`)
    pub fn replace_entries(&mut self, blobs: impl IntoIterator<Item = Blob>) -> CvsResult<()> {
        self.entries = blobs
            .into_iter()
            .map(|blob| (blob.path().to_path_buf(), blob))
            .collect();

        let mut blobs = self.entries.values().collect::<Vec<_>>();
        blobs.sort_by_cached_key(|blob| blob.path().to_string_lossy().into_owned());
        let lines = blobs.into_iter().map(Blob::index_line).collect::<Vec<_>>();

        self.write_lines(&lines)
    }

    fn write_lines(&self, lines: &[String]) -> CvsResult<()> {
        std::fs::write(&self.path, lines.join("\n"))?;
        debug!(entries = lines.len(), "index file written");

        Ok(())
    }
}
