use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::tree::EntryKind;
use sha1::{Digest, Sha1};

/// Index of a node inside its owning [`Tree`](super::Tree) arena
pub type NodeId = usize;

/// One path segment of a tree being built
///
/// Children are owned by the arena and referenced by index; `parent` is a
/// back-reference only.
#[derive(Debug, Clone)]
pub struct TreeNode {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    hasher: Sha1,
}

impl TreeNode {
    pub(super) fn new(name: String, parent: Option<NodeId>) -> Self {
        TreeNode {
            name,
            parent,
            children: Vec::new(),
            hasher: Sha1::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn kind(&self) -> EntryKind {
        if self.is_leaf() {
            EntryKind::Blob
        } else {
            EntryKind::Tree
        }
    }

    /// Hash of everything fed so far
    pub fn hash(&self) -> ObjectId {
        ObjectId::from_hasher(self.hasher.clone())
    }

    pub(super) fn feed(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    pub(super) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}
