//! Entry extraction from file content.

use crate::locator::{self, ZoneLocation};

/// Normalizes a pattern for comparison and storage: surrounding whitespace
/// is trimmed, nothing else. `build/` and `build` stay distinct entries.
pub fn normalize_pattern(pattern: &str) -> String {
    pattern.trim().to_string()
}

/// Whether `line`, trimmed, counts as an entry: non-empty and not a comment.
pub fn is_entry_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

/// Ordered entries strictly between the zone markers.
///
/// Blank and comment lines inside the zone are dropped; they will not be
/// reproduced by the next write. An absent or corrupted zone reads as empty.
/// Duplicates are preserved as-is.
pub fn zone_entries(content: &str) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();
    match locator::locate_zone(&lines) {
        ZoneLocation::Found { start, end } => lines[start + 1..end]
            .iter()
            .filter(|line| is_entry_line(line))
            .map(|line| line.trim().to_string())
            .collect(),
        ZoneLocation::Absent | ZoneLocation::Corrupted(_) => Vec::new(),
    }
}

/// Ordered entries from the entire file, zone and non-zone alike.
///
/// Used for the global membership check; marker lines are comments and are
/// filtered out with the rest.
pub fn all_entries(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| is_entry_line(line))
        .map(|line| line.trim().to_string())
        .collect()
}
