//! Blob object
//!
//! A blob is the zlib-compressed snapshot of one file. Its ID is the SHA-1 of the
//! compressed bytes, and those same bytes are what gets written to the store.
//! The path is a display name only; it takes no part in the hash.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{CvsError, CvsResult};
use bytes::Bytes;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    /// Root-relative path, `/`-separated
    path: PathBuf,
    /// zlib-compressed file content
    compressed: Bytes,
    oid: ObjectId,
}

impl Blob {
    /// Compress raw file content and hash the result
    pub fn from_content(path: &Path, raw: &[u8]) -> CvsResult<Self> {
        let compressed = Self::compress(raw)?;
        let oid = ObjectId::digest(&compressed);

        Ok(Blob {
            path: path.to_path_buf(),
            compressed,
            oid,
        })
    }

    /// Wrap bytes already in the store, trusting the given hash
    pub fn from_stored(path: &Path, oid: ObjectId, compressed: Bytes) -> Self {
        Blob {
            path: path.to_path_buf(),
            compressed,
            oid,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn compressed(&self) -> &Bytes {
        &self.compressed
    }

    pub fn decompressed(&self) -> CvsResult<Vec<u8>> {
        Self::decompress(&self.compressed)
            .map_err(|e| CvsError::corrupt_object(self.oid.as_ref(), e.to_string()))
    }

    /// Index line for this blob: `"<path> <hash>"`
    pub fn index_line(&self) -> String {
        format!("{} {}", self.path.display(), self.oid)
    }

    fn compress(data: &[u8]) -> CvsResult<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data)?;

        Ok(encoder.finish()?.into())
    }

    pub(crate) fn decompress(data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content)
    }
}

impl std::fmt::Display for Blob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index_line())
    }
}
