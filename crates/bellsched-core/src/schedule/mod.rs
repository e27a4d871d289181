//! Schedule data model: day templates, the student's roster, and the
//! entries a resolution produces.

mod entry;
mod roster;
mod template;

pub(crate) use entry::renumber;
pub use entry::{format_range, EntryKind, ScheduleEntry, PASSING_PERIOD_NAME};
pub use roster::{
    ClassRoster, LunchPreference, RosterClass, B_LUNCH_DAYS, G_LUNCH_DAYS, UNSET_SENTINEL,
};
pub use template::{
    class_index, normalize_code, DayType, PeriodSlot, PeriodTemplate, TemplateSet,
    CLASS_REF_PREFIX,
};
