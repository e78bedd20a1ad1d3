//! Staging index data structures
//!
//! The index itself lives in `areas::index`; this module holds the ignore rules
//! it filters with.

pub mod ignore;
