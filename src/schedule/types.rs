// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Values returned by [`MealSchedule`](crate::MealSchedule) queries

use serde::{Deserialize, Serialize};

use crate::config::MealWindowConfig;
use crate::types::duration::MinutesUntil;
use crate::types::time_of_day::MinuteOfDay;

/// Display strings for a meal window, copied from `display_start`/`display_end`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDisplayTimes {
    pub start: String,
    pub end: String,
}

/// Parsed boundaries of a meal window
///
/// Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTimings {
    pub start: MinuteOfDay,
    pub end: MinuteOfDay,
}

impl MealTimings {
    /// Whether `time` falls within `[start, end]`
    pub fn contains(&self, time: MinuteOfDay) -> bool {
        self.start <= time && time <= self.end
    }
}

/// The next meal to open, relative to the schedule's clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextMeal {
    /// Meal-type key, e.g. "lunch"
    pub meal_type: String,

    /// Display label
    pub name: String,

    /// Display start string (`display_start`)
    pub start_time: String,

    /// Minutes until the window opens
    pub time_until: MinutesUntil,

    /// True when no meal opens later today and this is tomorrow's first meal
    pub next_day: bool,
}

impl NextMeal {
    pub(crate) fn new(
        meal_type: &str,
        window: &MealWindowConfig,
        time_until: MinutesUntil,
        next_day: bool,
    ) -> Self {
        Self {
            meal_type: meal_type.to_string(),
            name: window.name.clone(),
            start_time: window.display_start.clone(),
            time_until,
            next_day,
        }
    }
}

/// One row of the timings overview: a meal's window as 12-hour clock strings
///
/// Unlike [`MealDisplayTimes`], these strings are derived from the parsed
/// `start_time`/`end_time`, e.g. `"12:30 PM"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTimingSummary {
    pub meal_type: String,
    pub start_time: String,
    pub end_time: String,
}

/// Where a scan falls relative to a meal window and its tolerances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    /// Before `start - early_threshold`
    Early,
    /// Within the window, tolerances included
    OnTime,
    /// After `end + late_threshold`
    Late,
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanStatus::Early => write!(f, "early"),
            ScanStatus::OnTime => write!(f, "on time"),
            ScanStatus::Late => write!(f, "late"),
        }
    }
}
