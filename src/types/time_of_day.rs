// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong type for clock times expressed as minutes since local midnight
//!
//! Every window boundary, scan time, and "current time" is converted into a
//! [`MinuteOfDay`] before comparison, so all schedule arithmetic happens in a
//! single unit.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::constants::{MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::errors::TimeParseError;

/// A time of day, stored as minutes since local midnight (`0..1440`)
///
/// Parsed from and displayed as a 24-hour `HH:MM` string. Ordering follows the
/// clock, so an earlier time on the same day always compares less.
///
/// # Examples
///
/// ```
/// use mealscan::MinuteOfDay;
///
/// let noon: MinuteOfDay = "12:00".parse().unwrap();
/// assert_eq!(noon.as_minutes(), 720);
/// assert_eq!(noon.to_string(), "12:00");
/// assert_eq!(noon.to_12_hour(), "12:00 PM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MinuteOfDay(u32);

impl MinuteOfDay {
    /// 00:00
    pub const MIDNIGHT: Self = Self(0);

    /// Creates a time of day from an hour (`0..=23`) and minute (`0..=59`)
    ///
    /// Returns `None` if either component is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use mealscan::MinuteOfDay;
    ///
    /// assert_eq!(MinuteOfDay::from_hm(19, 30).unwrap().as_minutes(), 1170);
    /// assert!(MinuteOfDay::from_hm(24, 0).is_none());
    /// ```
    pub const fn from_hm(hours: u32, minutes: u32) -> Option<Self> {
        if hours >= 24 || minutes >= MINUTES_PER_HOUR {
            return None;
        }
        Some(Self(hours * MINUTES_PER_HOUR + minutes))
    }

    /// Creates a time of day from a raw minute count, rejecting values past 23:59
    pub const fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes >= MINUTES_PER_DAY {
            return None;
        }
        Some(Self(minutes))
    }

    /// Truncates any chrono time value to its minute of the day (seconds are dropped)
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveTime;
    /// use mealscan::MinuteOfDay;
    ///
    /// let t = NaiveTime::from_hms_opt(12, 30, 59).unwrap();
    /// assert_eq!(MinuteOfDay::from_timelike(&t).to_string(), "12:30");
    /// ```
    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        Self(time.hour() * MINUTES_PER_HOUR + time.minute())
    }

    /// Minutes since midnight
    pub const fn as_minutes(&self) -> u32 {
        self.0
    }

    /// Hour component (`0..=23`)
    pub const fn hour(&self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    /// Minute component (`0..=59`)
    pub const fn minute(&self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    /// The same time as a chrono `NaiveTime` (seconds zero)
    pub fn to_naive_time(&self) -> NaiveTime {
        // Always in range: MinuteOfDay holds 00:00..=23:59
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or_default()
    }

    /// Formats as a 12-hour clock string with an AM/PM suffix, e.g. `"01:30 PM"`
    pub fn to_12_hour(&self) -> String {
        self.to_naive_time().format("%I:%M %p").to_string()
    }
}

impl FromStr for MinuteOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono skips leading whitespace; scan times must be exact
        if s.trim() != s {
            return Err(TimeParseError::invalid_format(s));
        }

        NaiveTime::parse_from_str(s, "%H:%M")
            .map(|time| Self::from_timelike(&time))
            .map_err(|e| TimeParseError::from_chrono(s, e))
    }
}

impl TryFrom<String> for MinuteOfDay {
    type Error = TimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MinuteOfDay> for String {
    fn from(value: MinuteOfDay) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Converts an `HH:MM` string into minutes since midnight
///
/// # Examples
///
/// ```
/// use mealscan::time_to_minutes;
///
/// assert_eq!(time_to_minutes("00:00").unwrap(), 0);
/// assert_eq!(time_to_minutes("14:15").unwrap(), 855);
/// assert!(time_to_minutes("14-15").is_err());
/// ```
pub fn time_to_minutes(time: &str) -> Result<u32, TimeParseError> {
    time.parse::<MinuteOfDay>().map(|t| t.as_minutes())
}
