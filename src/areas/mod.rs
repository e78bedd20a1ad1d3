//! Core repository components
//!
//! - `database`: Object store for blobs, tree listings and commits
//! - `index`: Staging area mapping paths to blobs
//! - `refs`: HEAD and branch references
//! - `repository`: Entry point coordinating the other areas
//! - `workspace`: Working tree file operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
