//! # Bellsched Core Library
//!
//! This library turns a school's day-type period templates into the ordered
//! list of entries a schedule view renders for one student at one instant.
//! Everything here is a pure function of its inputs: "now", the roster and
//! the lunch preference are always passed in, never read from ambient state.
//!
//! ## Architecture
//!
//! - **Time**: [`TimeOfDay`] with the school-clock parsing and display rules
//! - **Schedule**: templates, roster, lunch preference and [`ScheduleEntry`]
//! - **Resolver**: template → entries, with passing periods and second-lunch
//!   overrides
//! - **Events**: custom events, merging, and conflict classification
//! - **Display**: "now + next" selection for compact surfaces
//! - **Calendar**: date → day code lookup and the TOML schedule book
//! - **Storage**: TOML-based user configuration
//!
//! ## Key Components
//!
//! - [`resolve`]: Period template resolution
//! - [`detect_conflicts`]: Custom event overlap classification
//! - [`select_for_compact_view`]: Compact view selection
//! - [`ScheduleBook`]: Templates plus calendar
//! - [`Config`]: User configuration management

pub mod calendar;
pub mod display;
pub mod error;
pub mod events;
pub mod resolver;
pub mod schedule;
pub mod storage;
pub mod time;

pub use calendar::{calendar_key, resolve_date, CalendarTable, DayCalendar, DayInfo, ScheduleBook};
pub use display::select_for_compact_view;
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::{
    detect_conflicts, merge_custom_events, ConflictSeverity, CustomEvent, EventConflict,
    RepeatPattern,
};
pub use resolver::{resolve, resolve_template};
pub use schedule::{
    ClassRoster, DayType, EntryKind, LunchPreference, PeriodSlot, PeriodTemplate, RosterClass,
    ScheduleEntry, TemplateSet,
};
pub use storage::{Config, DisplayConfig};
pub use time::{progress_value, TimeOfDay};
