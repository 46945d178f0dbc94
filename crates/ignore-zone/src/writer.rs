//! Zone reconstruction and splicing.

use crate::locator::{self, ZoneLocation};
use crate::marker;

/// Canonical zone block: start marker, entries in order, end marker.
fn zone_block(entries: &[String]) -> Vec<String> {
    let mut block = Vec::with_capacity(entries.len() + 2);
    block.push(marker::ZONE_START.to_string());
    block.extend(entries.iter().cloned());
    block.push(marker::ZONE_END.to_string());
    block
}

/// Replaces the managed zone in `content` with the canonical block built
/// from `entries`, returning the new full file content.
///
/// An existing zone is replaced in place; everything before and after it is
/// preserved verbatim. With no zone (or a corrupted one), the block is
/// appended at end-of-file, preceded by one blank separator line when the
/// file is non-empty and its last line is non-blank. Stray corrupted marker
/// lines are left where they are.
///
/// The result is `\n`-joined and ends with exactly one trailing newline.
pub fn splice_zone(content: &str, entries: &[String]) -> String {
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    let block = zone_block(entries);

    match locator::locate_zone(&lines) {
        ZoneLocation::Found { start, end } => {
            lines.splice(start..=end, block);
        }
        ZoneLocation::Absent | ZoneLocation::Corrupted(_) => {
            if lines.last().is_some_and(|last| !last.trim().is_empty()) {
                lines.push(String::new());
            }
            lines.extend(block);
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
