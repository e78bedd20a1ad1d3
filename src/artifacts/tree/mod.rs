//! Merkle tree built from staged blobs
//!
//! Each staged blob is walked from the root down its path segments. The blob's
//! compressed bytes are fed into every node on that walk, root included, in
//! staging order. A node's hash is therefore a function of the ordered
//! concatenation of every blob beneath it, not a hash of its children's hashes:
//! a change to any nested file, or to the staging order, changes every ancestor
//! up to the root.
//!
//! Leaves are files (`blob`), every other node is a directory (`tree`). Only the
//! directory listings get persisted, one line per child:
//! `"<type> <hash> <name>"`.

mod tree_entry;
mod tree_node;

pub use tree_entry::{EntryKind, TreeEntry};
pub use tree_node::{NodeId, TreeNode};

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::VecDeque;

/// Name given to the root node
pub const ROOT_NAME: &str = ".";

/// Arena holding every node of one build; the root lives at [`Tree::ROOT`]
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

impl Default for Tree {
    fn default() -> Self {
        Tree {
            nodes: vec![TreeNode::new(ROOT_NAME.to_string(), None)],
        }
    }
}

impl Tree {
    pub const ROOT: NodeId = 0;

    /// Fold an ordered sequence of staged blobs into a tree
    pub fn build<'b>(blobs: impl IntoIterator<Item = &'b Blob>) -> Self {
        let mut tree = Self::default();

        for blob in blobs {
            tree.add_blob(blob);
        }

        tree
    }

    fn add_blob(&mut self, blob: &Blob) {
        let content = blob.compressed();
        let path = blob.path().to_string_lossy();

        let mut current = Self::ROOT;
        self.nodes[current].feed(content);

        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = match self.child_by_name(current, segment) {
                Some(child) => child,
                None => self.add_child(current, segment),
            };
            self.nodes[current].feed(content);
        }
    }

    fn child_by_name(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[parent]
            .children()
            .iter()
            .copied()
            .find(|&child| self.nodes[child].name() == name)
    }

    fn add_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(TreeNode::new(name.to_string(), Some(parent)));
        self.nodes[parent].push_child(id);

        id
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id]
    }

    pub fn root_hash(&self) -> ObjectId {
        self.nodes[Self::ROOT].hash()
    }

    /// `"<type> <hash> <name>"` for one node
    pub fn entry_line(&self, id: NodeId) -> String {
        let node = &self.nodes[id];
        format!("{} {} {}", node.kind().as_str(), node.hash(), node.name())
    }

    /// Persisted form of a directory node: one entry line per child
    pub fn listing(&self, id: NodeId) -> String {
        self.nodes[id]
            .children()
            .iter()
            .map(|&child| self.entry_line(child))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Directory nodes in level order, starting at the root
    pub fn directories(&self) -> Vec<NodeId> {
        let mut queue = VecDeque::from([Self::ROOT]);
        let mut directories = Vec::new();

        while let Some(id) = queue.pop_front() {
            let node = &self.nodes[id];
            if node.is_leaf() {
                continue;
            }

            directories.push(id);
            queue.extend(node.children().iter().copied());
        }

        directories
    }

    /// Slash-joined path of a node relative to the root
    pub fn path_of(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut current = Some(id);

        while let Some(node_id) = current {
            if node_id == Self::ROOT {
                break;
            }
            segments.push(self.nodes[node_id].name());
            current = self.nodes[node_id].parent();
        }

        segments.reverse();
        segments.join("/")
    }
}
