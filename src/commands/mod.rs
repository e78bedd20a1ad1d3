//! Command implementations
//!
//! Every command is an inherent method on `Repository`, defined in its own
//! module under `porcelain`.

pub mod porcelain;
