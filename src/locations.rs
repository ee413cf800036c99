//! Location reconciliation.
//!
//! Scored school names rarely match the schedule roster exactly, so
//! resolution runs through a chain of fallbacks. The roster stays a Vec:
//! the substring step is best-effort and "first match" must mean first in
//! schedule order, which a hash map would not guarantee.

use crate::types::RosterEntry;
use std::collections::HashSet;

pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Resolve a scored school's home location against the event roster.
pub fn resolve(school: &str, roster: &[RosterEntry]) -> String {
    let normalized = school.trim().to_lowercase();

    // exact key match
    if let Some(entry) = roster.iter().find(|e| e.normalized_name == normalized) {
        return entry.location.clone();
    }

    // the scored name may be a shortened form of the roster name
    if let Some(entry) = roster
        .iter()
        .find(|e| e.normalized_name.contains(&normalized))
    {
        return entry.location.clone();
    }

    // school names usually embed the town; strip the suffix and use it
    if school.contains("High School") {
        return school.replace("High School", "").trim().to_string();
    }

    UNKNOWN_LOCATION.to_string()
}

/// Drop repeated ", "-separated segments, keeping first occurrence order.
/// Some rosters print the town twice ("Trenton, NJ, Trenton, NJ").
pub fn dedupe_segments(location: &str) -> String {
    let mut seen = HashSet::new();
    let mut parts = Vec::new();

    for part in location.split(", ") {
        if seen.insert(part) {
            parts.push(part);
        }
    }

    parts.join(", ")
}
