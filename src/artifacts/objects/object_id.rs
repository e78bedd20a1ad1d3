//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. Every object in the
//! store (blob, tree, commit) is named by the SHA-1 of its own persisted bytes.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::{CvsError, CvsResult};
use sha1::{Digest, Sha1};

/// SHA-1 object identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    pub fn try_parse(id: &str) -> CvsResult<Self> {
        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CvsError::ObjectNotFound(id.to_string()));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Hash arbitrary bytes into an object ID
    pub fn digest(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);

        Self::from_hasher(hasher)
    }

    /// Finalize a running hasher into an object ID
    pub fn from_hasher(hasher: Sha1) -> Self {
        Self(format!("{:x}", hasher.finalize()))
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0[..7].to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
