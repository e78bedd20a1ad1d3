//! Object types held by the store
//!
//! - `blob`: compressed file content
//! - `commit`: tree pointer, parent pointer, timestamp and message
//! - `object_id`: SHA-1 identifiers naming every object

pub mod blob;
pub mod commit;
pub mod object_id;

/// Length of a hex-encoded SHA-1 hash
pub const OBJECT_ID_LENGTH: usize = 40;
