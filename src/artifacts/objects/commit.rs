//! Commit object
//!
//! ## Format
//!
//! ```text
//! tree <tree-hash>
//! parent <parent-hash | root>
//! date <%Y-%m-%d %H:%M:%S %z>
//!
//! <message>
//! ```
//!
//! The commit ID is the SHA-1 of exactly this text.

use crate::artifacts::objects::object_id::ObjectId;
use crate::config::{DATE_FORMAT, ROOT_PARENT};
use crate::errors::{CvsError, CvsResult};
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    tree: ObjectId,
    /// `None` marks the first commit of a history line
    parent: Option<ObjectId>,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    message: String,
}

/// Tree and parent pointers read back from a persisted commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHeader {
    pub tree: ObjectId,
    pub parent: Option<ObjectId>,
}

impl Commit {
    pub fn tree(&self) -> &ObjectId {
        &self.tree
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Parent pointer as written to disk
    pub fn parent_value(&self) -> &str {
        self.parent.as_ref().map_or(ROOT_PARENT, |p| p.as_ref())
    }

    pub fn tree_line(&self) -> String {
        format!("tree {}", self.tree)
    }

    pub fn serialize(&self) -> String {
        format!(
            "{}\nparent {}\ndate {}\n\n{}",
            self.tree_line(),
            self.parent_value(),
            self.timestamp.format(DATE_FORMAT),
            self.message
        )
    }

    pub fn object_id(&self) -> ObjectId {
        ObjectId::digest(self.serialize().as_bytes())
    }

    /// True when `parent_text` records the byte-identical tree of this commit
    pub fn has_same_tree_as(&self, parent_text: &str) -> bool {
        parent_text.lines().next() == Some(self.tree_line().as_str())
    }
}

impl CommitHeader {
    /// Extract tree and parent pointers from the first two lines of a commit
    pub fn parse(hash: &str, content: &str) -> CvsResult<Self> {
        let mut lines = content.lines();

        let tree = Self::field(hash, lines.next(), "tree")?;
        let tree = ObjectId::try_parse(tree)
            .map_err(|_| CvsError::corrupt_object(hash, format!("invalid tree hash {tree:?}")))?;

        let parent = match Self::field(hash, lines.next(), "parent")? {
            ROOT_PARENT => None,
            parent => Some(ObjectId::try_parse(parent).map_err(|_| {
                CvsError::corrupt_object(hash, format!("invalid parent hash {parent:?}"))
            })?),
        };

        Ok(CommitHeader { tree, parent })
    }

    fn field<'c>(hash: &str, line: Option<&'c str>, key: &str) -> CvsResult<&'c str> {
        line.and_then(|line| line.strip_prefix(key))
            .and_then(|rest| rest.strip_prefix(' '))
            .map(str::trim)
            .ok_or_else(|| CvsError::corrupt_object(hash, format!("missing {key} line")))
    }
}
