use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::tree::EntryKind;
use crate::errors::{CvsError, CvsResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

impl Repository {
    /// Restore the snapshot of a commit and detach HEAD onto it
    ///
    /// Every file of the commit's tree is overwritten in the working tree and
    /// the index is replaced by exactly those files. Working-tree files absent
    /// from the snapshot are left alone. The index and every object of the
    /// snapshot are read before anything on disk changes.
    pub fn checkout(&self, hash: &str) -> CvsResult<ObjectId> {
        self.ensure_exists()?;

        let commit_id =
            ObjectId::try_parse(hash).map_err(|_| CvsError::CommitNotFound(hash.to_string()))?;
        if !self.database().has_commit(&commit_id) {
            return Err(CvsError::CommitNotFound(hash.to_string()));
        }

        let mut index = self.index()?;
        let header = self.database().parse_commit(&commit_id)?;
        let mut snapshot = Vec::new();
        self.collect_snapshot(&header.tree, Path::new(""), &mut snapshot)?;

        if self.refs().read_head()? == commit_id.as_ref() {
            self.emit("Already on this commit")?;
        }

        for (blob, content) in &snapshot {
            self.workspace().write_file(blob.path(), content)?;
            debug!(path = %blob.path().display(), oid = %blob.oid(), "restored file");
        }

        self.refs().write_head(commit_id.as_ref())?;
        index.replace_entries(snapshot.into_iter().map(|(blob, _)| blob))?;

        info!(oid = %commit_id, "checked out commit");
        self.emit(format_args!("HEAD is now at {}", commit_id.to_short_oid()))?;

        Ok(commit_id)
    }

    /// Every file of a stored tree with its decompressed content
    fn collect_snapshot(
        &self,
        tree_id: &ObjectId,
        prefix: &Path,
        snapshot: &mut Vec<(Blob, Vec<u8>)>,
    ) -> CvsResult<()> {
        for entry in self.database().load_tree(tree_id)? {
            let entry_path = join_relative(prefix, &entry.name);

            match entry.kind {
                EntryKind::Tree => self.collect_snapshot(&entry.oid, &entry_path, snapshot)?,
                EntryKind::Blob => {
                    let blob = self.database().load_blob(&entry_path, &entry.oid)?;
                    let content = blob.decompressed()?;

                    snapshot.push((blob, content));
                }
            }
        }

        Ok(())
    }
}

/// `/`-joined path below `prefix`, matching the form index paths take
fn join_relative(prefix: &Path, name: &str) -> PathBuf {
    if prefix.as_os_str().is_empty() {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{}/{}", prefix.display(), name))
    }
}
