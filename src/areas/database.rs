//! Content-addressed object store
//!
//! Blobs live directly under `objects/`, commits under `objects/commits/` and
//! tree listings under `objects/trees/`, each file named by its hash. Objects
//! are never rewritten: storing an object that already exists is a no-op.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, CommitHeader};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::tree::{Tree, TreeEntry};
use crate::errors::{CvsError, CvsResult};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn commits_path(&self) -> PathBuf {
        self.path.join("commits")
    }

    pub fn trees_path(&self) -> PathBuf {
        self.path.join("trees")
    }

    /// Read `objects/<hash>` and wrap it with the given display path
    pub fn load_blob(&self, path: &Path, oid: &ObjectId) -> CvsResult<Blob> {
        let compressed = self.read_object(self.path.join(oid.as_ref()), oid)?;

        Ok(Blob::from_stored(path, oid.clone(), compressed.into()))
    }

    pub fn write_blob(&self, blob: &Blob) -> CvsResult<()> {
        self.write_object(self.path.join(blob.oid().as_ref()), blob.compressed())
    }

    /// Persist the listing of every directory node of a built tree
    pub fn write_tree(&self, tree: &Tree) -> CvsResult<()> {
        let trees_path = self.trees_path();

        for id in tree.directories() {
            let hash = tree.node(id).hash();
            debug!(dir = %tree.path_of(id), oid = %hash, "writing tree listing");
            self.write_object(trees_path.join(hash.as_ref()), tree.listing(id).as_bytes())?;
        }

        Ok(())
    }

    pub fn load_tree(&self, oid: &ObjectId) -> CvsResult<Vec<TreeEntry>> {
        let content = self.read_object(self.trees_path().join(oid.as_ref()), oid)?;
        let content = String::from_utf8(content)
            .map_err(|e| CvsError::corrupt_object(oid.as_ref(), e.to_string()))?;

        content
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| TreeEntry::parse(oid.as_ref(), line))
            .collect()
    }

    pub fn write_commit(&self, commit: &Commit) -> CvsResult<ObjectId> {
        let oid = commit.object_id();
        self.write_object(
            self.commits_path().join(oid.as_ref()),
            commit.serialize().as_bytes(),
        )?;

        Ok(oid)
    }

    pub fn has_commit(&self, oid: &ObjectId) -> bool {
        self.commits_path().join(oid.as_ref()).is_file()
    }

    /// Full serialized text of a persisted commit
    pub fn load_commit_text(&self, oid: &ObjectId) -> CvsResult<String> {
        let content = self.read_object(self.commits_path().join(oid.as_ref()), oid)?;

        String::from_utf8(content).map_err(|e| CvsError::corrupt_object(oid.as_ref(), e.to_string()))
    }

    /// Tree and parent pointers of a persisted commit
    pub fn parse_commit(&self, oid: &ObjectId) -> CvsResult<CommitHeader> {
        let content = self.load_commit_text(oid)?;

        CommitHeader::parse(oid.as_ref(), &content)
    }

    fn read_object(&self, object_path: PathBuf, oid: &ObjectId) -> CvsResult<Vec<u8>> {
        std::fs::read(&object_path)
            .map_err(|e| CvsError::from_io_or(e, || CvsError::ObjectNotFound(oid.to_string())))
    }

    fn write_object(&self, object_path: PathBuf, content: &[u8]) -> CvsResult<()> {
        if object_path.exists() {
            debug!(path = %object_path.display(), "object already stored");
            return Ok(());
        }

        if let Some(parent) = object_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&object_path, content)?;
        debug!(path = %object_path.display(), bytes = content.len(), "stored object");

        Ok(())
    }
}
