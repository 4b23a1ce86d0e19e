// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong type for countdowns until a meal opens

use serde::{Deserialize, Serialize};

use crate::config::constants::MINUTES_PER_HOUR;
use crate::errors::ScheduleError;

/// A non-negative number of minutes until some upcoming event
///
/// Displays as `"{h}h {m}m"` when at least one hour remains, otherwise `"{m}m"`.
///
/// # Examples
///
/// ```
/// use mealscan::MinutesUntil;
///
/// assert_eq!(MinutesUntil::new(125).to_string(), "2h 5m");
/// assert_eq!(MinutesUntil::new(45).to_string(), "45m");
/// assert_eq!(MinutesUntil::new(60).to_string(), "1h 0m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct MinutesUntil(u64);

impl MinutesUntil {
    /// Zero minutes
    pub const ZERO: Self = Self(0);

    pub const fn new(minutes: u64) -> Self {
        Self(minutes)
    }

    /// Total minutes
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Whole hours remaining
    pub const fn hours(&self) -> u64 {
        self.0 / MINUTES_PER_HOUR as u64
    }

    /// Minutes left over after the whole hours
    pub const fn remainder_minutes(&self) -> u64 {
        self.0 % MINUTES_PER_HOUR as u64
    }
}

impl TryFrom<i64> for MinutesUntil {
    type Error = ScheduleError;

    fn try_from(minutes: i64) -> Result<Self, Self::Error> {
        u64::try_from(minutes)
            .map(Self)
            .map_err(|_| ScheduleError::negative_duration(minutes))
    }
}

impl From<u32> for MinutesUntil {
    fn from(value: u32) -> Self {
        Self(u64::from(value))
    }
}

impl std::fmt::Display for MinutesUntil {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.hours();
        if hours > 0 {
            write!(f, "{}h {}m", hours, self.remainder_minutes())
        } else {
            write!(f, "{}m", self.remainder_minutes())
        }
    }
}

/// Formats a countdown in minutes for display
///
/// Negative input is rejected with [`ScheduleError::NegativeDuration`].
///
/// # Examples
///
/// ```
/// use mealscan::format_time_until;
///
/// assert_eq!(format_time_until(125).unwrap(), "2h 5m");
/// assert_eq!(format_time_until(0).unwrap(), "0m");
/// assert!(format_time_until(-1).is_err());
/// ```
pub fn format_time_until(minutes: i64) -> Result<String, ScheduleError> {
    Ok(MinutesUntil::try_from(minutes)?.to_string())
}
