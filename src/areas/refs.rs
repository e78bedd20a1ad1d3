//! HEAD and branch references
//!
//! A ref is a file under `refs/` holding the latest commit hash of that history
//! line, or `root` before the first commit. HEAD holds either a branch name or,
//! after a checkout, a raw commit hash (detached).
//!
//! Writes are plain truncating writes with no locking: a crash mid-write can
//! leave HEAD or a ref file corrupted.

use crate::artifacts::objects::object_id::ObjectId;
use crate::config::ROOT_PARENT;
use crate::errors::{CvsError, CvsResult};
use derive_new::new;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.cvs`)
    path: Box<Path>,
}

/// What HEAD currently points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// HEAD names a branch whose ref file exists; `None` before its first commit
    Branch {
        name: String,
        target: Option<ObjectId>,
    },
    /// HEAD holds a raw commit hash
    Detached(ObjectId),
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join("HEAD")
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    fn ref_path(&self, name: &str) -> Option<PathBuf> {
        let is_plain_name = !name.is_empty()
            && Path::new(name)
                .components()
                .all(|c| matches!(c, std::path::Component::Normal(_)));

        is_plain_name.then(|| self.refs_path().join(name))
    }

    /// Raw HEAD content: a branch name or a commit hash
    pub fn read_head(&self) -> CvsResult<String> {
        Ok(std::fs::read_to_string(self.head_path())?.trim().to_string())
    }

    pub fn write_head(&self, value: &str) -> CvsResult<()> {
        std::fs::write(self.head_path(), value)?;
        debug!(head = value, "HEAD updated");

        Ok(())
    }

    pub fn is_branch(&self, name: &str) -> bool {
        self.ref_path(name).is_some_and(|path| path.is_file())
    }

    /// Commit a branch points at; `None` while it still holds `root`
    pub fn read_ref(&self, name: &str) -> CvsResult<Option<ObjectId>> {
        let path = self
            .ref_path(name)
            .ok_or_else(|| CvsError::ObjectNotFound(name.to_string()))?;
        let content = std::fs::read_to_string(path)?;

        match content.trim() {
            ROOT_PARENT => Ok(None),
            hash => ObjectId::try_parse(hash).map(Some),
        }
    }

    pub fn write_ref(&self, name: &str, value: &str) -> CvsResult<()> {
        let path = self
            .ref_path(name)
            .ok_or_else(|| CvsError::ObjectNotFound(name.to_string()))?;
        std::fs::write(path, value)?;
        debug!(branch = name, target = value, "ref updated");

        Ok(())
    }

    /// Interpret HEAD: a name with an existing ref file is a branch, anything
    /// else must be a commit hash
    pub fn resolve_head(&self) -> CvsResult<Head> {
        let head = self.read_head()?;

        if self.is_branch(&head) {
            let target = self.read_ref(&head)?;
            return Ok(Head::Branch { name: head, target });
        }

        Ok(Head::Detached(ObjectId::try_parse(&head)?))
    }
}
