//! Zone marker literals and recognition.
//!
//! Markers are matched by trimmed-line prefix against the family prefixes,
//! not by exact literal, so a file written with a later marker version (for
//! example a `v2` start marker) is still recognized as containing a zone.

/// Opening marker written at the top of the managed zone.
pub const ZONE_START: &str = "# ========== ADHD MANAGED v1 - DO NOT EDIT ==========";

/// Closing marker written at the bottom of the managed zone.
pub const ZONE_END: &str = "# ========== END ADHD MANAGED ==========";

/// Family prefix identifying any version of the start marker.
pub const ZONE_START_PREFIX: &str = "# ========== ADHD MANAGED";

/// Family prefix identifying any version of the end marker.
pub const ZONE_END_PREFIX: &str = "# ========== END ADHD MANAGED";

/// Whether `line`, trimmed, is a start marker of any version.
pub fn is_start_marker(line: &str) -> bool {
    line.trim().starts_with(ZONE_START_PREFIX)
}

/// Whether `line`, trimmed, is an end marker of any version.
pub fn is_end_marker(line: &str) -> bool {
    line.trim().starts_with(ZONE_END_PREFIX)
}
