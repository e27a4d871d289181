//! Renderable schedule entries.

use serde::{Deserialize, Serialize};

use crate::time::{progress_value, TimeOfDay};

/// Display name of a synthesized passing period.
pub const PASSING_PERIOD_NAME: &str = "Passing Period";

/// What an entry represents, carrying only the fields that kind needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EntryKind {
    /// A slot resolved to one of the student's classes.
    #[serde(rename_all = "camelCase")]
    Class {
        class_name: String,
        teacher: String,
        room: String,
    },
    /// The gap between two periods.
    PassingPeriod,
    /// A slot shown by its raw code ("Lunch", an unresolved "$9").
    Literal { label: String },
    /// A user-defined event merged into the day.
    Custom {
        title: String,
        location: String,
        color: String,
    },
}

/// One row of a resolved day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Position-based id, unique within one resolution.
    pub id: usize,
    pub source_code: String,
    pub time_range: String,
    pub start_seconds: Option<u32>,
    pub end_seconds: Option<u32>,
    pub is_current: bool,
    pub progress: Option<f64>,
    #[serde(flatten)]
    pub kind: EntryKind,
}

impl ScheduleEntry {
    /// A timed entry over `[start, end)` with current/progress evaluated at `now`.
    pub fn timed(
        source_code: impl Into<String>,
        kind: EntryKind,
        start: TimeOfDay,
        end: TimeOfDay,
        now: TimeOfDay,
        is_today: bool,
    ) -> Self {
        let mut entry = Self {
            id: 0,
            source_code: source_code.into(),
            time_range: format_range(start, end),
            start_seconds: Some(start.to_seconds()),
            end_seconds: Some(end.to_seconds()),
            is_current: false,
            progress: None,
            kind,
        };
        entry.refresh(now.to_seconds(), is_today);
        entry
    }

    /// Name shown for the entry, whatever its kind.
    pub fn class_name(&self) -> &str {
        match &self.kind {
            EntryKind::Class { class_name, .. } => class_name,
            EntryKind::PassingPeriod => PASSING_PERIOD_NAME,
            EntryKind::Literal { label } => label,
            EntryKind::Custom { title, .. } => title,
        }
    }

    pub fn teacher(&self) -> &str {
        match &self.kind {
            EntryKind::Class { teacher, .. } => teacher,
            _ => "",
        }
    }

    pub fn room(&self) -> &str {
        match &self.kind {
            EntryKind::Class { room, .. } => room,
            EntryKind::Custom { location, .. } => location,
            _ => "",
        }
    }

    /// Class and passing-period entries; the ones custom events conflict with.
    pub fn is_period(&self) -> bool {
        matches!(self.kind, EntryKind::Class { .. } | EntryKind::PassingPeriod)
    }

    pub fn span(&self) -> Option<(u32, u32)> {
        self.start_seconds.zip(self.end_seconds)
    }

    /// Replace the entry's span, keeping a caller-supplied range text.
    pub(crate) fn retime(
        mut self,
        start: TimeOfDay,
        end: TimeOfDay,
        time_range: &str,
        now_seconds: u32,
        is_today: bool,
    ) -> Self {
        self.start_seconds = Some(start.to_seconds());
        self.end_seconds = Some(end.to_seconds());
        self.time_range = time_range.to_string();
        self.refresh(now_seconds, is_today);
        self
    }

    /// Recompute `is_current` and `progress` at `now_seconds`.
    ///
    /// Entries without a full span are never current and carry no progress.
    pub fn refresh(&mut self, now_seconds: u32, is_today: bool) {
        match self.span() {
            Some((start, end)) => {
                self.is_current = is_today && start <= now_seconds && now_seconds < end;
                self.progress = Some(progress_value(start, end, now_seconds));
            }
            None => {
                self.is_current = false;
                self.progress = None;
            }
        }
    }
}

/// Assign position-based ids.
pub(crate) fn renumber(entries: Vec<ScheduleEntry>) -> Vec<ScheduleEntry> {
    entries
        .into_iter()
        .enumerate()
        .map(|(id, entry)| ScheduleEntry { id, ..entry })
        .collect()
}

/// `"<start> to <end>"` in 12-hour display text.
pub fn format_range(start: TimeOfDay, end: TimeOfDay) -> String {
    format!("{} to {}", start.format(false), end.format(false))
}
