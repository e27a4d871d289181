//! Entry selection for compact ("now + next") surfaces.

use crate::schedule::ScheduleEntry;

/// Pick at most two entries for a glanceable view at `now_seconds`.
///
/// Current/progress are re-evaluated first, since `entries` may have been
/// resolved earlier. In priority order the result is:
/// the last entry with its predecessor when the last entry is current;
/// the current entry with its successor; the next entry to start with its
/// successor; otherwise the final two entries of the day.
pub fn select_for_compact_view(entries: &[ScheduleEntry], now_seconds: u32) -> Vec<ScheduleEntry> {
    let refreshed: Vec<ScheduleEntry> = entries
        .iter()
        .cloned()
        .map(|mut entry| {
            entry.refresh(now_seconds, true);
            entry
        })
        .collect();

    let Some(last) = refreshed.len().checked_sub(1) else {
        return Vec::new();
    };

    let range = match refreshed.iter().position(|e| e.is_current) {
        Some(current) if current == last => current.saturating_sub(1)..=current,
        Some(current) => current..=current + 1,
        None => match refreshed
            .iter()
            .position(|e| e.start_seconds.is_some_and(|start| start > now_seconds))
        {
            Some(upcoming) => upcoming..=(upcoming + 1).min(last),
            None => last.saturating_sub(1)..=last,
        },
    };

    refreshed[range].to_vec()
}
