//! Second-lunch overrides.
//!
//! On days where the student's lunch preference selects the second lunch
//! shift, lunch and brunch move to fixed windows and the class periods
//! that trade places with them move too. The display text of every forced
//! window is fixed rather than derived from the forced times.

use crate::schedule::{class_index, ScheduleEntry};
use crate::time::TimeOfDay;

pub const LUNCH_LABEL: &str = "Lunch";
pub const BRUNCH_LABEL: &str = "Brunch";

/// A fixed window with its fixed display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForcedSpan {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub time_range: &'static str,
}

pub const SECOND_LUNCH: ForcedSpan = ForcedSpan {
    start: TimeOfDay::hms(12, 25, 0),
    end: TimeOfDay::hms(13, 5, 0),
    time_range: "12:25 to 1:05",
};

pub const SECOND_BRUNCH: ForcedSpan = ForcedSpan {
    start: TimeOfDay::hms(11, 10, 0),
    end: TimeOfDay::hms(11, 35, 0),
    time_range: "11:10 to 11:35",
};

/// Class 4 or 5 on a lunch day, moved ahead of the second lunch.
pub const CLASS_BEFORE_LUNCH: ForcedSpan = ForcedSpan {
    start: TimeOfDay::hms(11, 0, 0),
    end: TimeOfDay::hms(12, 20, 0),
    time_range: "11:00 to 12:20",
};

/// Class 4 on a brunch day, moved ahead of the second brunch.
pub const CLASS_BEFORE_BRUNCH: ForcedSpan = ForcedSpan {
    start: TimeOfDay::hms(9, 45, 0),
    end: TimeOfDay::hms(11, 5, 0),
    time_range: "9:45 to 11:05",
};

/// Window an entry is forced into, if any.
///
/// Class 4 on a day carrying both lunch and brunch takes the brunch swap.
pub fn forced_span(
    entry: &ScheduleEntry,
    has_lunch: bool,
    has_brunch: bool,
) -> Option<ForcedSpan> {
    match entry.class_name() {
        LUNCH_LABEL => return Some(SECOND_LUNCH),
        BRUNCH_LABEL => return Some(SECOND_BRUNCH),
        _ => {}
    }
    match class_index(&entry.source_code) {
        Some(4) if has_brunch => Some(CLASS_BEFORE_BRUNCH),
        Some(4 | 5) if has_lunch => Some(CLASS_BEFORE_LUNCH),
        _ => None,
    }
}

/// Produce the second-lunch version of a resolved day.
pub fn apply_second_lunch(
    entries: Vec<ScheduleEntry>,
    now: TimeOfDay,
    is_today: bool,
) -> Vec<ScheduleEntry> {
    let has_lunch = entries.iter().any(|e| e.class_name() == LUNCH_LABEL);
    let has_brunch = entries.iter().any(|e| e.class_name() == BRUNCH_LABEL);
    let now_seconds = now.to_seconds();

    entries
        .into_iter()
        .map(|entry| match forced_span(&entry, has_lunch, has_brunch) {
            Some(span) => {
                tracing::trace!(
                    "forcing '{}' to {}",
                    entry.class_name(),
                    span.time_range
                );
                entry.retime(span.start, span.end, span.time_range, now_seconds, is_today)
            }
            None => entry,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{format_range, EntryKind};

    fn t(text: &str) -> TimeOfDay {
        text.parse().unwrap()
    }

    fn literal(code: &str, start: &str, end: &str) -> ScheduleEntry {
        ScheduleEntry::timed(
            code,
            EntryKind::Literal { label: code.into() },
            t(start),
            t(end),
            t("8:00"),
            false,
        )
    }

    fn class(index: usize, start: &str, end: &str) -> ScheduleEntry {
        ScheduleEntry::timed(
            format!("${index}"),
            EntryKind::Class {
                class_name: format!("Class {index}"),
                teacher: String::new(),
                room: String::new(),
            },
            t(start),
            t(end),
            t("8:00"),
            false,
        )
    }

    #[test]
    fn fixed_text_matches_forced_times() {
        for span in [SECOND_LUNCH, SECOND_BRUNCH, CLASS_BEFORE_LUNCH, CLASS_BEFORE_BRUNCH] {
            assert_eq!(format_range(span.start, span.end), span.time_range);
        }
    }

    #[test]
    fn lunch_day_moves_lunch_and_classes_four_and_five() {
        let day = vec![
            class(3, "9:50", "11:20"),
            literal("Lunch", "11:20", "12:00"),
            class(4, "12:05", "1:25"),
            class(5, "12:05", "1:25"),
            class(6, "1:30", "2:50"),
        ];
        let out = apply_second_lunch(day, t("8:00"), false);

        assert_eq!(out[0].time_range, "9:50 to 11:20");
        assert_eq!(out[1].time_range, "12:25 to 1:05");
        assert_eq!(out[1].span(), Some((44_700, 47_100)));
        assert_eq!(out[2].time_range, "11:00 to 12:20");
        assert_eq!(out[3].time_range, "11:00 to 12:20");
        assert_eq!(out[4].time_range, "1:30 to 2:50");
    }

    #[test]
    fn brunch_day_moves_brunch_and_class_four_only() {
        let day = vec![
            class(4, "9:45", "11:05"),
            literal("Brunch", "9:40", "10:05"),
            class(5, "11:10", "12:30"),
        ];
        let out = apply_second_lunch(day, t("8:00"), false);

        assert_eq!(out[0].time_range, "9:45 to 11:05");
        assert_eq!(out[1].time_range, "11:10 to 11:35");
        assert_eq!(out[1].span(), Some((40_200, 41_700)));
        assert_eq!(out[2].time_range, "11:10 to 12:30");
    }

    #[test]
    fn class_four_takes_brunch_window_when_day_has_both() {
        let day = vec![
            literal("Brunch", "9:40", "10:05"),
            class(4, "10:10", "11:30"),
            literal("Lunch", "11:35", "12:15"),
            class(5, "12:20", "1:40"),
        ];
        let out = apply_second_lunch(day, t("8:00"), false);

        assert_eq!(out[0].time_range, SECOND_BRUNCH.time_range);
        assert_eq!(out[1].time_range, CLASS_BEFORE_BRUNCH.time_range);
        assert_eq!(
            out[1].span(),
            Some((
                CLASS_BEFORE_BRUNCH.start.to_seconds(),
                CLASS_BEFORE_BRUNCH.end.to_seconds()
            ))
        );
        assert_eq!(out[2].time_range, SECOND_LUNCH.time_range);
        assert_eq!(out[3].time_range, CLASS_BEFORE_LUNCH.time_range);
    }

    #[test]
    fn classes_stay_put_without_lunch_or_brunch() {
        let day = vec![class(4, "10:00", "11:00"), class(5, "11:05", "12:00")];
        let out = apply_second_lunch(day.clone(), t("8:00"), false);
        assert_eq!(out, day);
    }

    #[test]
    fn forced_entries_are_reevaluated_against_now() {
        let day = vec![literal("Lunch", "11:20", "12:00")];
        let out = apply_second_lunch(day, t("12:45"), true);
        assert!(out[0].is_current);
        assert_eq!(out[0].progress, Some(0.5));
    }
}
