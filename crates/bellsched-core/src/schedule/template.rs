//! Day types and period templates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::time::{self, TimeOfDay};

/// Prefix marking a slot code as a roster reference, e.g. `$1` for the
/// first assigned class.
pub const CLASS_REF_PREFIX: char = '$';

/// The fixed table of day types. Discriminants are the day-type indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    G1 = 0,
    B1 = 1,
    G2 = 2,
    B2 = 3,
    A1 = 4,
    A2 = 5,
    A3 = 6,
    A4 = 7,
    L1 = 8,
    L2 = 9,
    S1 = 10,
}

impl DayType {
    pub const ALL: [DayType; 11] = [
        Self::G1,
        Self::B1,
        Self::G2,
        Self::B2,
        Self::A1,
        Self::A2,
        Self::A3,
        Self::A4,
        Self::L1,
        Self::L2,
        Self::S1,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::G1 => "G1",
            Self::B1 => "B1",
            Self::G2 => "G2",
            Self::B2 => "B2",
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::A3 => "A3",
            Self::A4 => "A4",
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::S1 => "S1",
        }
    }
}

impl FromStr for DayType {
    type Err = ValidationError;

    /// Case-insensitive: `g1`, `G1` and ` g1 ` all name the same day type.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_code(code);
        Self::ALL
            .iter()
            .copied()
            .find(|day| day.code() == normalized)
            .ok_or_else(|| ValidationError::UnknownDayCode(code.to_string()))
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Canonical form of a day code used for every lookup.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// One period slot of a day template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSlot {
    /// Literal label ("Lunch") or roster reference ("$1").
    pub code: String,
    #[serde(with = "time::text")]
    pub start: TimeOfDay,
    #[serde(with = "time::text")]
    pub end: TimeOfDay,
}

impl PeriodSlot {
    pub fn new(code: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            code: code.into(),
            start,
            end,
        }
    }

    /// 1-based roster index this slot refers to, if its code is a reference.
    pub fn class_index(&self) -> Option<usize> {
        class_index(&self.code)
    }
}

/// Parse a roster reference token. `$0`, `$` and `$x` are not references.
pub fn class_index(code: &str) -> Option<usize> {
    let digits = code.strip_prefix(CLASS_REF_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok().filter(|index| *index > 0)
}

/// Immutable description of one day type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTemplate {
    pub display_name: String,
    #[serde(default)]
    pub slots: Vec<PeriodSlot>,
    #[serde(default)]
    pub note: String,
}

impl PeriodTemplate {
    pub fn new(display_name: impl Into<String>, slots: Vec<PeriodSlot>) -> Self {
        Self {
            display_name: display_name.into(),
            slots,
            note: String::new(),
        }
    }
}

/// Templates keyed by normalized day code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateSet {
    templates: BTreeMap<String, PeriodTemplate>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: &str, template: PeriodTemplate) {
        self.templates.insert(normalize_code(code), template);
    }

    pub fn with(mut self, code: &str, template: PeriodTemplate) -> Self {
        self.insert(code, template);
        self
    }

    pub fn get(&self, code: &str) -> Option<&PeriodTemplate> {
        self.templates.get(&normalize_code(code))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Re-key after deserialization so lookups stay case-insensitive.
    pub(crate) fn normalized(self) -> Self {
        let templates = self
            .templates
            .into_iter()
            .map(|(code, template)| (normalize_code(&code), template))
            .collect();
        Self { templates }
    }
}
