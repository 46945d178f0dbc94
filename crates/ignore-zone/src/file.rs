//! The [`IgnoreFile`] handle and its public operations.

use std::path::{Path, PathBuf};

use ignore_fs::{RootResolver, io};

use crate::error::Result;
use crate::{reader, writer};

/// File name managed when the target is resolved from a project root.
pub const DEFAULT_FILE_NAME: &str = ".gitignore";

/// Handle on one ignore file with a managed zone.
///
/// Holds only the path. Every operation re-reads the file, so the file on
/// disk stays the single source of truth and edits made between calls are
/// picked up. Operations are individually consistent but there is no guard
/// against interleaved read-modify-write cycles from concurrent writers;
/// callers needing that must serialize externally.
#[derive(Debug, Clone)]
pub struct IgnoreFile {
    path: PathBuf,
}

impl IgnoreFile {
    /// Manage the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Manage `<project root>/.gitignore`, with the root resolved from
    /// `start` by the given resolver.
    pub fn discover(start: &Path, resolver: &RootResolver) -> Self {
        Self {
            path: resolver.resolve(start).join(DEFAULT_FILE_NAME),
        }
    }

    /// The managed file's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Adds `pattern` to the zone if not already present.
    ///
    /// Returns `true` if the entry was added, `false` if it was already in
    /// the zone. A pattern that is blank after trimming or starts with `#`
    /// can never be a zone entry and is rejected as a no-op.
    pub fn ensure_ignored(&self, pattern: &str) -> Result<bool> {
        let pattern = reader::normalize_pattern(pattern);
        if !reader::is_entry_line(&pattern) {
            tracing::debug!("Rejected non-entry pattern: {pattern:?}");
            return Ok(false);
        }

        let content = io::read_text_or_empty(&self.path)?;
        let mut entries = reader::zone_entries(&content);
        if entries.contains(&pattern) {
            tracing::debug!("Already in zone: {pattern}");
            return Ok(false);
        }

        io::ensure_file(&self.path)?;
        entries.push(pattern.clone());
        io::write_text(&self.path, &writer::splice_zone(&content, &entries))?;
        tracing::info!("Added to zone: {pattern}");
        Ok(true)
    }

    /// Whether `pattern` is an entry of the managed zone.
    pub fn is_ignored(&self, pattern: &str) -> Result<bool> {
        let pattern = reader::normalize_pattern(pattern);
        let content = io::read_text_or_empty(&self.path)?;
        Ok(reader::zone_entries(&content).contains(&pattern))
    }

    /// Whether `pattern` is an entry anywhere in the file, inside the zone
    /// or outside it.
    pub fn is_globally_ignored(&self, pattern: &str) -> Result<bool> {
        let pattern = reader::normalize_pattern(pattern);
        let content = io::read_text_or_empty(&self.path)?;
        Ok(reader::all_entries(&content).contains(&pattern))
    }

    /// Removes the first occurrence of `pattern` from the zone.
    ///
    /// Returns `true` if an entry was removed, `false` if none matched. The
    /// markers stay in place when the zone becomes empty.
    pub fn remove_entry(&self, pattern: &str) -> Result<bool> {
        let pattern = reader::normalize_pattern(pattern);
        let content = io::read_text_or_empty(&self.path)?;
        let mut entries = reader::zone_entries(&content);

        let Some(position) = entries.iter().position(|entry| *entry == pattern) else {
            tracing::debug!("Not found in zone: {pattern}");
            return Ok(false);
        };

        entries.remove(position);
        io::write_text(&self.path, &writer::splice_zone(&content, &entries))?;
        tracing::info!("Removed from zone: {pattern}");
        Ok(true)
    }

    /// Ordered entries of the managed zone, possibly empty.
    pub fn list_entries(&self) -> Result<Vec<String>> {
        let content = io::read_text_or_empty(&self.path)?;
        Ok(reader::zone_entries(&content))
    }

    /// Applies [`IgnoreFile::ensure_ignored`] to each pattern in input
    /// order.
    ///
    /// Results are keyed by the pattern exactly as given, in input order.
    /// The batch is not atomic: each pattern is its own read-modify-write
    /// cycle, and a failure mid-batch leaves the earlier additions in place.
    pub fn ensure_multiple<I, S>(&self, patterns: I) -> Result<Vec<(String, bool)>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut results = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let added = self.ensure_ignored(pattern)?;
            results.push((pattern.to_string(), added));
        }
        Ok(results)
    }
}
