//! A minimal local version control system
//!
//! Files are staged into an index, snapshotted into commits identified by the
//! hash of a Merkle tree over their compressed contents, and restored by
//! checking a commit out. All state lives in a `.cvs` directory at the root of
//! the working tree.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging;
