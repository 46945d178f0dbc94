//! Project-root discovery by ancestor walk.
//!
//! Walks from a starting directory toward the filesystem root, looking for a
//! marker entry (a version-control directory or a sentinel project file).
//! Which markers count is the caller's choice; the resolver never inspects
//! ambient process state such as the current working directory on its own.

use std::path::{Path, PathBuf};

/// Resolves the project root for a given starting directory.
#[derive(Debug, Clone)]
pub struct RootResolver {
    markers: Vec<String>,
}

impl Default for RootResolver {
    fn default() -> Self {
        Self {
            markers: vec![".git".to_string()],
        }
    }
}

impl RootResolver {
    /// A resolver that recognizes the given marker names (file or directory).
    pub fn with_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    /// Nearest ancestor of `start` (including `start` itself) containing one
    /// of the marker entries. Falls back to `start` when none is found.
    pub fn resolve(&self, start: &Path) -> PathBuf {
        for dir in start.ancestors() {
            if self.markers.iter().any(|m| dir.join(m).exists()) {
                tracing::debug!("Resolved project root: {}", dir.display());
                return dir.to_path_buf();
            }
        }
        start.to_path_buf()
    }
}
