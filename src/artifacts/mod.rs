//! Data structures and algorithms
//!
//! - `index`: Ignore rules applied while staging
//! - `objects`: Object ids, blobs and commits
//! - `status`: Working tree status reports
//! - `tree`: Merkle tree built from the staged blobs

pub mod index;
pub mod objects;
pub mod status;
pub mod tree;
