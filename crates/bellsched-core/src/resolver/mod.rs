//! Period template resolution.
//!
//! Turns a day template, the student's roster and "now" into the ordered
//! list of entries a schedule view renders:
//!
//! 1. Each slot becomes a class entry (roster reference in range) or a
//!    literal entry (anything else), evaluated against `now`.
//! 2. When `now` falls in a short mid-day gap before a slot, a passing
//!    period entry is inserted ahead of that slot.
//! 3. On second-lunch days the lunch/brunch windows and the classes that
//!    trade places with them are forced to fixed times.
//!
//! Output follows template order, not time order.

pub mod overrides;

use crate::schedule::{
    renumber, ClassRoster, DayType, EntryKind, LunchPreference, PeriodSlot, PeriodTemplate,
    ScheduleEntry, TemplateSet,
};
use crate::time::TimeOfDay;

pub use overrides::{apply_second_lunch, forced_span, ForcedSpan};

/// Gaps must start after this time to count as passing periods.
pub const PASSING_EARLIEST_START: TimeOfDay = TimeOfDay::hms(8, 0, 0);
/// Gaps must end before this time to count as passing periods.
pub const PASSING_LATEST_END: TimeOfDay = TimeOfDay::hms(14, 30, 0);
/// Longest gap, in seconds, that counts as a passing period.
pub const PASSING_MAX_SECONDS: u32 = 600;

/// Resolve the template for `day_code`.
///
/// An unknown day code yields an empty schedule.
pub fn resolve(
    templates: &TemplateSet,
    day_code: &str,
    roster: &ClassRoster,
    lunch: LunchPreference,
    now: TimeOfDay,
    is_today: bool,
) -> Vec<ScheduleEntry> {
    let Some(template) = templates.get(day_code) else {
        tracing::warn!("no template for day code '{day_code}'");
        return Vec::new();
    };
    let day_type = day_code.parse::<DayType>().ok();
    resolve_template(template, day_type, roster, lunch, now, is_today)
}

/// Resolve an already looked-up template.
///
/// `day_type` feeds the second-lunch predicate; `None` never swaps.
pub fn resolve_template(
    template: &PeriodTemplate,
    day_type: Option<DayType>,
    roster: &ClassRoster,
    lunch: LunchPreference,
    now: TimeOfDay,
    is_today: bool,
) -> Vec<ScheduleEntry> {
    let base = base_entries(template, roster, now, is_today);
    let swap = day_type.is_some_and(|day| lunch.should_swap(day));

    tracing::debug!(
        "resolved '{}' ({:?}): {} entries, second lunch: {}",
        template.display_name,
        day_type,
        base.len(),
        swap
    );

    let entries = if swap {
        apply_second_lunch(base, now, is_today)
    } else {
        base
    };
    renumber(entries)
}

/// Slot-by-slot pass with passing periods interleaved.
fn base_entries(
    template: &PeriodTemplate,
    roster: &ClassRoster,
    now: TimeOfDay,
    is_today: bool,
) -> Vec<ScheduleEntry> {
    let mut entries = Vec::with_capacity(template.slots.len() + 1);

    for (i, slot) in template.slots.iter().enumerate() {
        if is_today && i > 0 {
            if let Some(passing) = passing_period(&template.slots[i - 1], slot, now) {
                entries.push(passing);
            }
        }
        entries.push(slot_entry(slot, roster, now, is_today));
    }

    entries
}

/// The passing period between `previous` and `next`, if `now` is inside a
/// gap short and central enough to be one.
fn passing_period(
    previous: &PeriodSlot,
    next: &PeriodSlot,
    now: TimeOfDay,
) -> Option<ScheduleEntry> {
    let (start, end) = (previous.end, next.start);
    if !(start <= now && now < end) {
        return None;
    }
    if !is_passing_gap(start, end) {
        return None;
    }

    tracing::trace!("passing period {start} - {end}");
    Some(ScheduleEntry::timed(
        "",
        EntryKind::PassingPeriod,
        start,
        end,
        now,
        true,
    ))
}

/// Whether a gap qualifies as a passing period rather than a long break.
pub fn is_passing_gap(start: TimeOfDay, end: TimeOfDay) -> bool {
    start > PASSING_EARLIEST_START
        && end < PASSING_LATEST_END
        && end.to_seconds().saturating_sub(start.to_seconds()) <= PASSING_MAX_SECONDS
}

fn slot_entry(
    slot: &PeriodSlot,
    roster: &ClassRoster,
    now: TimeOfDay,
    is_today: bool,
) -> ScheduleEntry {
    let kind = match slot.class_index() {
        Some(index) => match roster.get(index) {
            Some(class) if !class.name.is_empty() => EntryKind::Class {
                class_name: class.name.clone(),
                teacher: class.display_teacher().to_string(),
                room: class.display_room().to_string(),
            },
            Some(_) => {
                tracing::warn!("slot '{}' references an unnamed class", slot.code);
                literal(slot)
            }
            None => {
                tracing::warn!(
                    "slot '{}' references class {index} but roster has {}",
                    slot.code,
                    roster.len()
                );
                literal(slot)
            }
        },
        None => literal(slot),
    };

    ScheduleEntry::timed(slot.code.clone(), kind, slot.start, slot.end, now, is_today)
}

fn literal(slot: &PeriodSlot) -> EntryKind {
    EntryKind::Literal {
        label: slot.code.clone(),
    }
}
