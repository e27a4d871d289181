//! User-defined events layered over the period schedule.

mod conflict;

pub use conflict::{classify_overlap, detect_conflicts, ConflictSeverity, EventConflict};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::schedule::{renumber, EntryKind, ScheduleEntry};
use crate::time::{self, TimeOfDay};

/// Source code carried by merged custom entries.
pub const CUSTOM_SOURCE_CODE: &str = "custom";

/// How often a custom event recurs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatPattern {
    #[default]
    Once,
    Daily,
    Weekdays,
    Weekly,
}

/// A user-defined event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEvent {
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(with = "time::clock")]
    pub start_time: TimeOfDay,
    #[serde(with = "time::clock")]
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub repeat: RepeatPattern,
    /// Anchor date: the day of a one-off event, or the first occurrence of a
    /// repeating one. Without it the event applies to any day.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub is_enabled: bool,
}

fn default_color() -> String {
    "#3b82f6".into()
}

fn default_true() -> bool {
    true
}

impl CustomEvent {
    pub fn new(title: impl Into<String>, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Self {
            title: title.into(),
            location: String::new(),
            color: default_color(),
            start_time,
            end_time,
            repeat: RepeatPattern::Once,
            date: None,
            is_enabled: true,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_repeat(mut self, repeat: RepeatPattern, date: NaiveDate) -> Self {
        self.repeat = repeat;
        self.date = Some(date);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }

    pub fn span(&self) -> (u32, u32) {
        (self.start_time.to_seconds(), self.end_time.to_seconds())
    }

    /// Whether the event happens on `day`.
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        let Some(anchor) = self.date else {
            return true;
        };
        if day < anchor {
            return false;
        }
        match self.repeat {
            RepeatPattern::Once => day == anchor,
            RepeatPattern::Daily => true,
            RepeatPattern::Weekdays => !matches!(day.weekday(), Weekday::Sat | Weekday::Sun),
            RepeatPattern::Weekly => day.weekday() == anchor.weekday(),
        }
    }

    /// The event as a timed schedule entry.
    pub fn to_entry(&self, now: TimeOfDay, is_today: bool) -> ScheduleEntry {
        ScheduleEntry::timed(
            CUSTOM_SOURCE_CODE,
            EntryKind::Custom {
                title: self.title.clone(),
                location: self.location.clone(),
                color: self.color.clone(),
            },
            self.start_time,
            self.end_time,
            now,
            is_today,
        )
    }
}

/// Merge the enabled events occurring on `day` into a resolved sequence.
///
/// Each event lands before the first timed entry that starts strictly
/// later, so the resolver's own order is never disturbed. Ids are
/// reassigned over the merged sequence.
pub fn merge_custom_events(
    entries: &[ScheduleEntry],
    events: &[CustomEvent],
    day: NaiveDate,
    now: TimeOfDay,
    is_today: bool,
) -> Vec<ScheduleEntry> {
    let mut merged = entries.to_vec();

    for event in events.iter().filter(|e| e.is_enabled && e.occurs_on(day)) {
        let entry = event.to_entry(now, is_today);
        let start = event.start_time.to_seconds();
        let position = merged
            .iter()
            .position(|e| e.start_seconds.is_some_and(|s| s > start))
            .unwrap_or(merged.len());
        merged.insert(position, entry);
    }

    renumber(merged)
}
