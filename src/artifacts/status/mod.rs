//! Working tree status
//!
//! - `file_change`: per-file change kinds and their labels
//! - `status_info`: the full report produced by `status`

pub mod file_change;
pub mod status_info;
