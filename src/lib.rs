//! # mealscan
//!
//! Meal service window evaluation for meal-tracking scanners and displays.
//!
//! Given a [`ScheduleConfig`] (one window per meal type plus global early/late
//! tolerances), a [`MealSchedule`] answers:
//!
//! - whether a meal is being served right now ([`MealSchedule::is_meal_time_valid`])
//! - whether a scan was early or late ([`MealSchedule::is_meal_early`],
//!   [`MealSchedule::is_meal_late`], [`MealSchedule::classify_scan`])
//! - which meals are active and which opens next ([`MealSchedule::active_meals`],
//!   [`MealSchedule::next_meal`])
//! - display strings and countdowns ([`MealSchedule::meal_display_times`],
//!   [`format_time_until`])
//!
//! "Now" comes from an injected [`Clock`]: [`SystemClock`] in production,
//! [`FixedClock`] wherever results must be reproducible.

mod clock;
mod config;
mod errors;
mod schedule;
mod tracing;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::constants;
pub use config::{MealWindowConfig, MealWindowThresholds, ScheduleConfig};
pub use errors::{ScheduleError, TimeParseError};
pub use schedule::{
    MealDisplayTimes, MealSchedule, MealScheduleBuilder, MealTimingSummary, MealTimings, NextMeal,
    ScanStatus,
};
pub use types::duration::{format_time_until, MinutesUntil};
pub use types::time_of_day::{time_to_minutes, MinuteOfDay};
