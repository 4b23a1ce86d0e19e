//! Meal schedule configuration
//!
//! This module provides the typed form of the meal timings document: one
//! [`MealWindowConfig`] per meal type plus the global [`MealWindowThresholds`].
//! The configuration is plain data; reading it from disk or elsewhere is the
//! caller's job.
//!
//! # Example: Decoding a document
//!
//! ```rust
//! use mealscan::ScheduleConfig;
//!
//! let config = ScheduleConfig::from_json_str(r#"{
//!     "lunch": {
//!         "name": "Lunch",
//!         "description": "Midday meal",
//!         "start_time": "12:00",
//!         "end_time": "14:00",
//!         "display_start": "12:00 PM",
//!         "display_end": "2:00 PM"
//!     },
//!     "meal_window": { "early_threshold": 10, "late_threshold": 15 }
//! }"#).unwrap();
//!
//! assert_eq!(config.meal("lunch").unwrap().name, "Lunch");
//! assert_eq!(config.meal_window.late_threshold, 15);
//! ```
//!
//! # Example: Building in code
//!
//! ```rust
//! use mealscan::{MealWindowConfig, MealWindowThresholds, ScheduleConfig};
//!
//! let config = ScheduleConfig::new(MealWindowThresholds::new(10, 15))
//!     .with_meal(
//!         "dinner",
//!         MealWindowConfig::new("Dinner", "Evening meal", "19:00", "21:00", "7:00 PM", "9:00 PM"),
//!     );
//!
//! assert!(config.contains_meal("dinner"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{ScheduleError, TimeParseError};
use crate::types::time_of_day::MinuteOfDay;

pub mod constants;

/// Service window for a single meal type
///
/// `display_start` and `display_end` are free-form strings shown to users; they
/// are not derived from `start_time`/`end_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealWindowConfig {
    /// Display label, e.g. "Lunch"
    pub name: String,

    /// Display text
    pub description: String,

    /// Window start, `HH:MM` 24-hour (inclusive)
    pub start_time: String,

    /// Window end, `HH:MM` 24-hour (inclusive)
    pub end_time: String,

    /// Human-formatted start, e.g. "12:00 PM"
    pub display_start: String,

    /// Human-formatted end
    pub display_end: String,
}

impl MealWindowConfig {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        display_start: impl Into<String>,
        display_end: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            display_start: display_start.into(),
            display_end: display_end.into(),
        }
    }

    /// Parsed window start
    pub fn start(&self) -> Result<MinuteOfDay, TimeParseError> {
        self.start_time.parse()
    }

    /// Parsed window end
    pub fn end(&self) -> Result<MinuteOfDay, TimeParseError> {
        self.end_time.parse()
    }
}

/// Global tolerance settings shared by every meal type
///
/// Stored under the `meal_window` key of the configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MealWindowThresholds {
    /// Minutes before a window's start that a scan still counts as on time
    ///
    /// A negative value pulls the early cutoff inside the window.
    pub early_threshold: i32,

    /// Minutes after a window's end that a scan still counts as on time
    ///
    /// A negative value pulls the late cutoff inside the window.
    pub late_threshold: i32,
}

impl MealWindowThresholds {
    pub const fn new(early_threshold: i32, late_threshold: i32) -> Self {
        Self {
            early_threshold,
            late_threshold,
        }
    }
}

/// The complete meal timings configuration
///
/// Meal entries sit at the top level of the document next to `meal_window`,
/// keyed by meal type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Global early/late tolerances
    pub meal_window: MealWindowThresholds,

    /// Windows keyed by meal type ("lunch", "dinner", ...)
    #[serde(flatten)]
    pub meals: BTreeMap<String, MealWindowConfig>,
}

impl ScheduleConfig {
    /// Creates a configuration with no meal windows
    pub fn new(meal_window: MealWindowThresholds) -> Self {
        Self {
            meal_window,
            meals: BTreeMap::new(),
        }
    }

    /// Decodes a JSON configuration document
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Config`] if the document does not have the
    /// expected shape.
    pub fn from_json_str(json: &str) -> Result<Self, ScheduleError> {
        serde_json::from_str(json).map_err(|e| {
            let details = format!("Failed to decode meal timings document: {e}");
            ScheduleError::config(details, e)
        })
    }

    /// Adds or replaces the window for `meal_type`
    pub fn with_meal(mut self, meal_type: impl Into<String>, window: MealWindowConfig) -> Self {
        self.meals.insert(meal_type.into(), window);
        self
    }

    /// Looks up the window for `meal_type`
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::UnknownMealType`] if no window is configured.
    pub fn meal(&self, meal_type: &str) -> Result<&MealWindowConfig, ScheduleError> {
        self.meals
            .get(meal_type)
            .ok_or_else(|| ScheduleError::unknown_meal_type(meal_type))
    }

    pub fn contains_meal(&self, meal_type: &str) -> bool {
        self.meals.contains_key(meal_type)
    }
}
