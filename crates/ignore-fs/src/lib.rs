//! Filesystem support for the ignore-zone workspace
//!
//! Provides atomic whole-file writes, tolerant reads, and project-root
//! discovery. The zone logic itself lives in `ignore-zone`; this crate only
//! knows about files and directories.

pub mod error;
pub mod io;
pub mod root;

pub use error::{Error, Result};
pub use root::RootResolver;
