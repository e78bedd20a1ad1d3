//! User-facing commands
//!
//! ## Commands
//!
//! - `init`: Create the metadata directory
//! - `add`: Stage a file or a directory
//! - `commit`: Snapshot the index into a commit
//! - `log`: Walk the history from HEAD
//! - `status`: Compare the working tree with the index
//! - `checkout`: Restore a commit's snapshot and detach HEAD

pub mod add;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod status;
