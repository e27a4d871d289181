//! Student roster and lunch-shift preference.

use serde::{Deserialize, Serialize};

use super::template::DayType;

/// Teacher/room value meaning "unset".
pub const UNSET_SENTINEL: &str = "N";

/// Day types whose lunch sits in the G-period group.
pub const G_LUNCH_DAYS: [DayType; 8] = [
    DayType::G1,
    DayType::G2,
    DayType::A1,
    DayType::A2,
    DayType::A3,
    DayType::A4,
    DayType::L1,
    DayType::L2,
];

/// Day types whose lunch sits in the B-period group.
pub const B_LUNCH_DAYS: [DayType; 2] = [DayType::B1, DayType::B2];

/// One assigned class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterClass {
    pub name: String,
    #[serde(default)]
    pub teacher: String,
    #[serde(default)]
    pub room: String,
}

impl RosterClass {
    pub fn new(
        name: impl Into<String>,
        teacher: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            teacher: teacher.into(),
            room: room.into(),
        }
    }

    /// Teacher for display; empty when unset.
    pub fn display_teacher(&self) -> &str {
        suppress_unset(&self.teacher)
    }

    /// Room for display; empty when unset.
    pub fn display_room(&self) -> &str {
        suppress_unset(&self.room)
    }
}

fn suppress_unset(value: &str) -> &str {
    if value == UNSET_SENTINEL {
        ""
    } else {
        value
    }
}

/// The student's assigned classes, referenced 1-based by slot codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassRoster {
    classes: Vec<RosterClass>,
}

impl ClassRoster {
    pub fn new(classes: Vec<RosterClass>) -> Self {
        Self { classes }
    }

    /// Class at a 1-based index, if in range.
    pub fn get(&self, index: usize) -> Option<&RosterClass> {
        index.checked_sub(1).and_then(|i| self.classes.get(i))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Two independent "second lunch" flags: `[G-period group, B-period group]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LunchPreference(pub [bool; 2]);

impl LunchPreference {
    pub fn new(g_second_lunch: bool, b_second_lunch: bool) -> Self {
        Self([g_second_lunch, b_second_lunch])
    }

    pub fn g_second_lunch(&self) -> bool {
        self.0[0]
    }

    pub fn b_second_lunch(&self) -> bool {
        self.0[1]
    }

    /// Whether the lunch/brunch overrides apply on `day`.
    pub fn should_swap(&self, day: DayType) -> bool {
        (self.g_second_lunch() && G_LUNCH_DAYS.contains(&day))
            || (self.b_second_lunch() && B_LUNCH_DAYS.contains(&day))
    }
}
