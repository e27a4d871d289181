//! Overlap detection between custom events and scheduled periods.

use serde::{Deserialize, Serialize};

use super::CustomEvent;
use crate::schedule::ScheduleEntry;

/// How badly an event collides with a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictSeverity {
    /// Some overlap, under half of the shorter interval.
    Minor,
    /// Overlap of at least half of the shorter interval.
    Major,
    /// One interval contains the other.
    Complete,
}

/// One event/period pairing that overlaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventConflict {
    /// Position of the event in the slice passed to [`detect_conflicts`].
    pub event_index: usize,
    pub conflicting_entry: ScheduleEntry,
    pub severity: ConflictSeverity,
}

/// Classify the overlap of two `(start, end)` second spans.
///
/// Returns `None` when they do not overlap.
pub fn classify_overlap(a: (u32, u32), b: (u32, u32)) -> Option<ConflictSeverity> {
    let overlap = a.1.min(b.1).saturating_sub(a.0.max(b.0));
    if overlap == 0 {
        return None;
    }

    let contains = |outer: (u32, u32), inner: (u32, u32)| outer.0 <= inner.0 && outer.1 >= inner.1;
    if contains(a, b) || contains(b, a) {
        return Some(ConflictSeverity::Complete);
    }

    let shorter = (a.1 - a.0).min(b.1 - b.0);
    if overlap * 2 >= shorter {
        Some(ConflictSeverity::Major)
    } else {
        Some(ConflictSeverity::Minor)
    }
}

/// Every overlapping pairing of an enabled event with a timed class or
/// passing-period entry, in event order then entry order.
pub fn detect_conflicts(events: &[CustomEvent], entries: &[ScheduleEntry]) -> Vec<EventConflict> {
    let mut conflicts = Vec::new();

    for (event_index, event) in events.iter().enumerate() {
        if !event.is_enabled {
            continue;
        }
        for entry in entries.iter().filter(|e| e.is_period()) {
            let Some(span) = entry.span() else {
                continue;
            };
            if let Some(severity) = classify_overlap(event.span(), span) {
                conflicts.push(EventConflict {
                    event_index,
                    conflicting_entry: entry.clone(),
                    severity,
                });
            }
        }
    }

    if !conflicts.is_empty() {
        tracing::debug!("{} event conflicts detected", conflicts.len());
    }
    conflicts
}
