//! Wall-clock time of day.
//!
//! [`TimeOfDay`] is the only time type the resolver works with. Period
//! templates are authored as bare 12-hour clock text ("8:05", "1:40")
//! without an am/pm marker, so parsing treats hours below 7 as afternoon
//! school hours and adds 12. Formatting goes the other way and prints a
//! 12-hour clock without a marker.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Seconds in one day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Parsed hours below this value are shifted into the afternoon.
pub const AFTERNOON_CUTOFF_HOUR: u32 = 7;

/// A validated hour/minute/second triple.
///
/// Ordering is lexicographic on (hour, minute, second).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "RawTime")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Midnight, also the value malformed text degrades to.
    pub const MIDNIGHT: Self = Self::hms(0, 0, 0);

    /// Build a time from components, rejecting out-of-range values.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, ValidationError> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return Err(ValidationError::InvalidTime {
                text: format!("{hour}:{minute:02}:{second:02}"),
                reason: "component out of range".into(),
            });
        }
        Ok(Self::hms(hour as u8, minute as u8, second as u8))
    }

    /// Unchecked constructor for in-crate constants.
    pub(crate) const fn hms(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour as u32
    }

    pub fn minute(&self) -> u32 {
        self.minute as u32
    }

    pub fn second(&self) -> u32 {
        self.second as u32
    }

    /// Lenient parse: never fails, malformed text becomes [`TimeOfDay::MIDNIGHT`].
    ///
    /// Use [`str::parse`] instead when the caller needs to tell a degraded
    /// value apart from a real midnight.
    pub fn parse(text: &str) -> Self {
        match text.parse() {
            Ok(time) => time,
            Err(e) => {
                tracing::warn!("{e}; using {}", Self::MIDNIGHT);
                Self::MIDNIGHT
            }
        }
    }

    /// Seconds since midnight, in `0..86400`.
    pub fn to_seconds(&self) -> u32 {
        self.hour() * 3600 + self.minute() * 60 + self.second()
    }

    /// Inverse of [`to_seconds`](Self::to_seconds). Values past the end of
    /// the day wrap around.
    pub fn from_seconds(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_PER_DAY;
        Self::hms(
            (seconds / 3600) as u8,
            (seconds % 3600 / 60) as u8,
            (seconds % 60) as u8,
        )
    }

    /// 12-hour display text without an am/pm marker.
    ///
    /// Hours after noon drop by 12; hour 0 prints as `0`. The seconds
    /// segment appears when requested or when it is non-zero.
    pub fn format(&self, include_seconds: bool) -> String {
        let hour = if self.hour > 12 {
            self.hour - 12
        } else {
            self.hour
        };
        if include_seconds || self.second != 0 {
            format!("{hour}:{:02}:{:02}", self.minute, self.second)
        } else {
            format!("{hour}:{:02}", self.minute)
        }
    }

    /// Strict 24-hour parse with no afternoon shift.
    ///
    /// Inverse of the [`Display`](fmt::Display) text, for stored values.
    pub fn parse_24h(text: &str) -> Result<Self, ValidationError> {
        let (hour, minute, second) = split_clock(text)?;
        checked(text, hour, minute, second)
    }
}

/// Component form accepted by `Deserialize`, validated through [`TimeOfDay::new`].
#[derive(Deserialize)]
struct RawTime {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TryFrom<RawTime> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(raw: RawTime) -> Result<Self, Self::Error> {
        Self::new(raw.hour, raw.minute, raw.second)
    }
}

/// Split `h`, `h:m` or `h:m:s` text. Parts past the third are ignored.
fn split_clock(text: &str) -> Result<(u32, u32, u32), ValidationError> {
    let parts = text
        .trim()
        .split(':')
        .take(3)
        .map(|part| part.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ValidationError::InvalidTime {
            text: text.to_string(),
            reason: "not a number".into(),
        })?;

    Ok((
        parts[0],
        parts.get(1).copied().unwrap_or(0),
        parts.get(2).copied().unwrap_or(0),
    ))
}

fn checked(text: &str, hour: u32, minute: u32, second: u32) -> Result<TimeOfDay, ValidationError> {
    TimeOfDay::new(hour, minute, second).map_err(|_| ValidationError::InvalidTime {
        text: text.to_string(),
        reason: "component out of range".into(),
    })
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    /// Strict parse of template clock text. Hours below 7 are shifted by 12
    /// before validation.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (mut hour, minute, second) = split_clock(text)?;
        if hour < AFTERNOON_CUTOFF_HOUR {
            hour += 12;
        }
        checked(text, hour, minute, second)
    }
}

impl fmt::Display for TimeOfDay {
    /// 24-hour `H:MM:SS`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::hms(time.hour() as u8, time.minute() as u8, time.second() as u8)
    }
}

/// Fraction of `[start, end)` elapsed at `now`, clamped to `[0, 1]`.
///
/// Degenerate spans (`end <= start`) report 0.
pub fn progress_value(start: u32, end: u32, now: u32) -> f64 {
    if end <= start || now <= start {
        return 0.0;
    }
    if now >= end {
        return 1.0;
    }
    (now - start) as f64 / (end - start) as f64
}

/// Serde adapter for authored template time text.
///
/// Reads with the lenient [`TimeOfDay::parse`] rule and writes 24-hour
/// `H:MM:SS`. Written times before 7:00 read back 12 hours later, so this
/// is only for hand-written schedule books.
pub mod text {
    use super::TimeOfDay;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &TimeOfDay, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(time)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeOfDay, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(TimeOfDay::parse(&raw))
    }
}

/// Serde adapter for stored 24-hour `H:MM:SS` text.
///
/// Lossless: every time reads back unchanged. Out-of-range text is an error.
pub mod clock {
    use super::TimeOfDay;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &TimeOfDay, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(time)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeOfDay, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TimeOfDay::parse_24h(&raw).map_err(de::Error::custom)
    }
}
