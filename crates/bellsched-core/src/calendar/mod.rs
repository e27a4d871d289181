//! Calendar lookup and the schedule book.
//!
//! The resolver never looks dates up itself. A [`DayCalendar`] maps a date
//! to its day code, and a [`ScheduleBook`] bundles one calendar with the
//! templates its codes refer to, loadable from TOML.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::resolver;
use crate::schedule::{ClassRoster, LunchPreference, ScheduleEntry, TemplateSet};
use crate::time::TimeOfDay;

/// Calendar rows are keyed by `MM-dd-yy`.
pub const CALENDAR_KEY_FORMAT: &str = "%m-%d-%y";

/// What the calendar says about one date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInfo {
    pub day_code: String,
    #[serde(default)]
    pub note: String,
}

/// Date → day code lookup.
pub trait DayCalendar {
    fn day_info(&self, date: NaiveDate) -> Option<DayInfo>;
}

/// Calendar key for `date`, e.g. `10-19-26`.
pub fn calendar_key(date: NaiveDate) -> String {
    date.format(CALENDAR_KEY_FORMAT).to_string()
}

/// In-memory calendar keyed by [`calendar_key`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarTable {
    days: BTreeMap<String, DayInfo>,
}

impl CalendarTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, info: DayInfo) {
        self.days.insert(calendar_key(date), info);
    }

    pub fn with(mut self, date: NaiveDate, day_code: &str) -> Self {
        self.insert(
            date,
            DayInfo {
                day_code: day_code.to_string(),
                note: String::new(),
            },
        );
        self
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl DayCalendar for CalendarTable {
    fn day_info(&self, date: NaiveDate) -> Option<DayInfo> {
        self.days.get(&calendar_key(date)).cloned()
    }
}

/// Look `date` up in `calendar` and resolve its template.
///
/// Dates without a calendar row resolve to an empty schedule.
pub fn resolve_date<C: DayCalendar + ?Sized>(
    calendar: &C,
    templates: &TemplateSet,
    date: NaiveDate,
    roster: &ClassRoster,
    lunch: LunchPreference,
    now: TimeOfDay,
    is_today: bool,
) -> Vec<ScheduleEntry> {
    match calendar.day_info(date) {
        Some(info) => resolver::resolve(templates, &info.day_code, roster, lunch, now, is_today),
        None => {
            tracing::debug!("no calendar entry for {}", calendar_key(date));
            Vec::new()
        }
    }
}

/// Templates plus the calendar that selects among them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBook {
    #[serde(default)]
    pub templates: TemplateSet,
    #[serde(default)]
    pub calendar: CalendarTable,
}

impl ScheduleBook {
    /// Parse a book from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let book: ScheduleBook = toml::from_str(content)?;
        Ok(Self {
            templates: book.templates.normalized(),
            calendar: book.calendar,
        })
    }

    /// Load a book from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let book = Self::from_toml_str(&content)?;
        tracing::debug!(
            "loaded schedule book from {}: {} templates, {} calendar days",
            path.display(),
            book.templates.len(),
            book.calendar.len()
        );
        Ok(book)
    }

    pub fn day_info(&self, date: NaiveDate) -> Option<DayInfo> {
        self.calendar.day_info(date)
    }

    /// Resolve the schedule for `date`.
    pub fn resolve_date(
        &self,
        date: NaiveDate,
        roster: &ClassRoster,
        lunch: LunchPreference,
        now: TimeOfDay,
        is_today: bool,
    ) -> Vec<ScheduleEntry> {
        resolve_date(&self.calendar, &self.templates, date, roster, lunch, now, is_today)
    }
}
