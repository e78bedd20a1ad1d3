use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{CvsError, CvsResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Blob,
    Tree,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Blob => "blob",
            EntryKind::Tree => "tree",
        }
    }
}

/// One line of a persisted tree listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub kind: EntryKind,
    pub oid: ObjectId,
    pub name: String,
}

impl TreeEntry {
    /// Parse `"<type> <hash> <name>"`; the name may itself contain spaces
    pub fn parse(tree_hash: &str, line: &str) -> CvsResult<Self> {
        let corrupt = || CvsError::corrupt_object(tree_hash, format!("invalid entry {line:?}"));
        let mut parts = line.splitn(3, ' ');

        let kind = match parts.next() {
            Some("blob") => EntryKind::Blob,
            Some("tree") => EntryKind::Tree,
            _ => return Err(corrupt()),
        };
        let oid = parts
            .next()
            .and_then(|hash| ObjectId::try_parse(hash).ok())
            .ok_or_else(corrupt)?;
        let name = parts
            .next()
            .filter(|name| !name.is_empty())
            .ok_or_else(corrupt)?
            .to_string();

        Ok(TreeEntry { kind, oid, name })
    }
}
