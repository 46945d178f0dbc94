//! Managed-zone editing for `.gitignore`-style files.
//!
//! Maintains a machine-owned block ("zone") inside an otherwise hand-edited
//! ignore file:
//!
//! ```text
//! # user content, never touched
//! node_modules/
//!
//! # ========== ADHD MANAGED v1 - DO NOT EDIT ==========
//! *.log
//! build/
//! # ========== END ADHD MANAGED ==========
//! ```
//!
//! Everything outside the markers is preserved verbatim; everything between
//! them is rewritten canonically on every mutation (blank and comment lines
//! a user sneaks into the zone are dropped). A file with only one of the two
//! markers is treated as having no zone: reads return nothing, and the next
//! write rebuilds a well-formed zone at end-of-file, leaving the stray
//! marker line in place.
//!
//! [`IgnoreFile`] is the entry point for file-backed operations; the
//! [`locator`], [`reader`], and [`writer`] modules expose the underlying
//! pure functions over file content.

pub mod error;
pub mod file;
pub mod locator;
pub mod marker;
pub mod reader;
pub mod writer;

pub use ignore_fs::RootResolver;

pub use error::{Error, Result};
pub use file::IgnoreFile;
pub use locator::{Corruption, ZoneLocation, locate_zone};
pub use marker::{ZONE_END, ZONE_START};
pub use reader::{all_entries, zone_entries};
pub use writer::splice_zone;
