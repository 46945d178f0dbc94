//! Zone location by linear scan over file lines.

use crate::marker;

/// Outcome of scanning a file for the managed zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneLocation {
    /// Both markers present. `start` and `end` are the indices of the marker
    /// lines themselves; entries lie strictly between them.
    Found { start: usize, end: usize },
    /// No marker present anywhere in the file.
    Absent,
    /// Exactly one of the two markers present.
    Corrupted(Corruption),
}

/// Which half of the zone is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corruption {
    StartWithoutEnd,
    EndWithoutStart,
}

/// Locates the managed zone in `lines`.
///
/// Single forward scan: the first start marker wins, and the first end
/// marker at or after it closes the zone and stops the scan. A second start
/// marker before that end is ignored rather than opening a nested zone.
///
/// Corruption (one marker without the other) is reported, not fatal; callers
/// treat it as "no zone" and the next write rebuilds a well-formed zone.
pub fn locate_zone<S: AsRef<str>>(lines: &[S]) -> ZoneLocation {
    let mut start = None;
    let mut end = None;

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if marker::is_start_marker(line) {
            if start.is_none() {
                start = Some(i);
            }
        } else if marker::is_end_marker(line) {
            end = Some(i);
            break;
        }
    }

    match (start, end) {
        (Some(start), Some(end)) => ZoneLocation::Found { start, end },
        (Some(_), None) => {
            tracing::warn!("Corrupted zone: start marker without end; will rebuild on next write");
            ZoneLocation::Corrupted(Corruption::StartWithoutEnd)
        }
        (None, Some(_)) => {
            tracing::warn!("Corrupted zone: end marker without start; will rebuild on next write");
            ZoneLocation::Corrupted(Corruption::EndWithoutStart)
        }
        (None, None) => ZoneLocation::Absent,
    }
}
