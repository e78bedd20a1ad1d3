use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::tree::Tree;
use crate::config;
use crate::errors::CvsResult;
use tracing::{info, warn};

impl Repository {
    /// Commit the staged snapshot
    ///
    /// Returns `None` when there was nothing to commit: an empty index, or a tree
    /// byte-identical to the parent's.
    pub fn commit(&self, message: &str) -> CvsResult<Option<ObjectId>> {
        self.ensure_exists()?;
        let index = self.index()?;

        if index.is_empty() {
            self.emit("Nothing to commit - index is empty")?;
            return Ok(None);
        }

        let tree = Tree::build(index.blobs());
        let head = self.refs().read_head()?;
        let parent = self.resolve_parent(&head)?;
        let commit = Commit::new(
            tree.root_hash(),
            parent,
            config::commit_timestamp(),
            message.to_string(),
        );

        if self.is_duplicate_of_parent(&commit)? {
            self.emit("Nothing to commit - no changes")?;
            return Ok(None);
        }

        self.database().write_tree(&tree)?;
        let commit_id = self.database().write_commit(&commit)?;
        self.advance_head(&head, &commit, &commit_id)?;

        info!(oid = %commit_id, tree = %commit.tree(), parent = commit.parent_value(), "created commit");
        self.emit(format_args!("New commit: {commit_id}"))?;

        Ok(Some(commit_id))
    }

    /// Parent of a new commit given the current HEAD value
    ///
    /// A branch name yields the branch's stored commit. A detached HEAD yields
    /// the *parent* of the commit HEAD names, not that commit itself, which
    /// skips one generation of history.
    fn resolve_parent(&self, head: &str) -> CvsResult<Option<ObjectId>> {
        if self.refs().is_branch(head) {
            return self.refs().read_ref(head);
        }

        let detached = ObjectId::try_parse(head)?;
        Ok(self.database().parse_commit(&detached)?.parent)
    }

    fn is_duplicate_of_parent(&self, commit: &Commit) -> CvsResult<bool> {
        match commit.parent() {
            None => Ok(false),
            Some(parent) => {
                let parent_text = self.database().load_commit_text(parent)?;
                Ok(commit.has_same_tree_as(&parent_text))
            }
        }
    }

    /// Move HEAD directly when it equals the resolved parent, otherwise move the
    /// ref HEAD names
    fn advance_head(&self, head: &str, commit: &Commit, commit_id: &ObjectId) -> CvsResult<()> {
        if head == commit.parent_value() {
            return self.refs().write_head(commit_id.as_ref());
        }

        if !self.refs().is_branch(head) {
            warn!(
                head,
                "HEAD is detached; recording the new commit under a ref named after it"
            );
        }

        self.refs().write_ref(head, commit_id.as_ref())
    }
}
