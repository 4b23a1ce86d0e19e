// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Meal schedule evaluation
//!
//! [`MealSchedule`] answers every question the scanning and display code asks
//! about meal windows: is a meal being served right now, was a scan early or
//! late, which meals are active, and how long until the next one opens.
//!
//! All clock times are compared as minutes since local midnight. Queries that
//! depend on "now" read the schedule's [`Clock`]; queries about a scan take the
//! scan time from the caller.
//!
//! # Examples
//!
//! ```rust
//! use mealscan::{FixedClock, MealScheduleBuilder, MinuteOfDay, ScheduleConfig};
//!
//! let config = ScheduleConfig::from_json_str(r#"{
//!     "lunch":  { "name": "Lunch",  "description": "", "start_time": "12:00", "end_time": "14:00",
//!                 "display_start": "12:00 PM", "display_end": "2:00 PM" },
//!     "dinner": { "name": "Dinner", "description": "", "start_time": "19:00", "end_time": "21:00",
//!                 "display_start": "7:00 PM", "display_end": "9:00 PM" },
//!     "meal_window": { "early_threshold": 10, "late_threshold": 15 }
//! }"#).unwrap();
//!
//! let schedule = MealScheduleBuilder::new(config)
//!     .clock(FixedClock::at(MinuteOfDay::from_hm(10, 45).unwrap()))
//!     .build()
//!     .unwrap();
//!
//! let next = schedule.next_meal().unwrap();
//! assert_eq!(next.meal_type, "lunch");
//! assert_eq!(next.time_until.to_string(), "1h 15m");
//!
//! assert!(schedule.is_meal_late("lunch", "14:16").unwrap());
//! assert!(!schedule.is_meal_early("dinner", "18:50").unwrap());
//! ```

mod builder;
mod types;

pub use builder::MealScheduleBuilder;
pub use types::{MealDisplayTimes, MealTimingSummary, MealTimings, NextMeal, ScanStatus};

use std::sync::Arc;

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::constants::MINUTES_PER_DAY;
use crate::config::ScheduleConfig;
use crate::errors::ScheduleError;
use crate::tracing::spans;
use crate::types::duration::{format_time_until, MinutesUntil};
use crate::types::time_of_day::{time_to_minutes, MinuteOfDay};

/// Evaluates meal windows against a shared, immutable configuration
///
/// Build one with [`MealScheduleBuilder`] (or [`MealSchedule::new`] for the
/// defaults) at startup and reuse it for every query. The schedule holds no
/// mutable state, so it can be shared across threads whenever its clock can.
#[derive(Debug, Clone)]
pub struct MealSchedule<C = SystemClock> {
    config: Arc<ScheduleConfig>,
    meal_order: Vec<String>,
    clock: C,
}

impl MealSchedule<SystemClock> {
    /// Creates a schedule over `config` with the default meal order and the local wall clock
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::UnknownMealType`] if the configuration lacks one
    /// of the default meal types.
    pub fn new(config: impl Into<Arc<ScheduleConfig>>) -> Result<Self, ScheduleError> {
        MealScheduleBuilder::new(config).build()
    }
}

impl<C> MealSchedule<C> {
    /// The configuration this schedule evaluates
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Meal types considered by [`active_meals`](Self::active_meals) and
    /// [`next_meal`](Self::next_meal), in order
    pub fn meal_order(&self) -> &[String] {
        &self.meal_order
    }

    /// Converts an `HH:MM` string into minutes since midnight
    pub fn time_to_minutes(&self, time: &str) -> Result<u32, ScheduleError> {
        Ok(time_to_minutes(time)?)
    }

    /// Parsed start and end of a meal's window
    pub fn meal_timings(&self, meal_type: &str) -> Result<MealTimings, ScheduleError> {
        let window = self.config.meal(meal_type)?;
        Ok(MealTimings {
            start: window.start()?,
            end: window.end()?,
        })
    }

    /// Whether `time` lies within the meal's window, both ends inclusive
    pub fn is_meal_time_valid_at(
        &self,
        meal_type: &str,
        time: MinuteOfDay,
    ) -> Result<bool, ScheduleError> {
        Ok(self.meal_timings(meal_type)?.contains(time))
    }

    /// Whether a scan at `scan_time` (`HH:MM`) is past the window end plus the late threshold
    pub fn is_meal_late(&self, meal_type: &str, scan_time: &str) -> Result<bool, ScheduleError> {
        let end = self.config.meal(meal_type)?.end()?;
        let scan: MinuteOfDay = scan_time.parse()?;
        Ok(self.past_late_threshold(end, scan))
    }

    /// Same as [`is_meal_late`](Self::is_meal_late) for an already-parsed scan time
    pub fn is_meal_late_at(
        &self,
        meal_type: &str,
        scan_time: MinuteOfDay,
    ) -> Result<bool, ScheduleError> {
        let end = self.config.meal(meal_type)?.end()?;
        Ok(self.past_late_threshold(end, scan_time))
    }

    /// Whether a scan at `scan_time` (`HH:MM`) is before the window start minus the early threshold
    pub fn is_meal_early(&self, meal_type: &str, scan_time: &str) -> Result<bool, ScheduleError> {
        let start = self.config.meal(meal_type)?.start()?;
        let scan: MinuteOfDay = scan_time.parse()?;
        Ok(self.before_early_threshold(start, scan))
    }

    /// Same as [`is_meal_early`](Self::is_meal_early) for an already-parsed scan time
    pub fn is_meal_early_at(
        &self,
        meal_type: &str,
        scan_time: MinuteOfDay,
    ) -> Result<bool, ScheduleError> {
        let start = self.config.meal(meal_type)?.start()?;
        Ok(self.before_early_threshold(start, scan_time))
    }

    /// Classifies a scan as early, on time, or late for the given meal
    ///
    /// A scan inside the tolerances on either side of the window counts as on time.
    pub fn classify_scan(
        &self,
        meal_type: &str,
        scan_time: &str,
    ) -> Result<ScanStatus, ScheduleError> {
        let scan: MinuteOfDay = scan_time.parse()?;
        let span = spans::classify_scan(meal_type, scan);
        let _guard = span.enter();

        let timings = self.meal_timings(meal_type)?;
        let status = if self.before_early_threshold(timings.start, scan) {
            ScanStatus::Early
        } else if self.past_late_threshold(timings.end, scan) {
            ScanStatus::Late
        } else {
            ScanStatus::OnTime
        };

        debug!(meal_type, scan_time = %scan, status = %status, "Classified scan");
        Ok(status)
    }

    /// Display label of a meal
    pub fn meal_name(&self, meal_type: &str) -> Result<&str, ScheduleError> {
        Ok(self.config.meal(meal_type)?.name.as_str())
    }

    /// Display description of a meal
    pub fn meal_description(&self, meal_type: &str) -> Result<&str, ScheduleError> {
        Ok(self.config.meal(meal_type)?.description.as_str())
    }

    /// Configured display strings for a meal's window
    pub fn meal_display_times(&self, meal_type: &str) -> Result<MealDisplayTimes, ScheduleError> {
        let window = self.config.meal(meal_type)?;
        Ok(MealDisplayTimes {
            start: window.display_start.clone(),
            end: window.display_end.clone(),
        })
    }

    /// Every meal in order with its window as 12-hour clock strings
    pub fn timings_summary(&self) -> Result<Vec<MealTimingSummary>, ScheduleError> {
        self.meal_order
            .iter()
            .map(|meal_type| {
                let timings = self.meal_timings(meal_type)?;
                Ok(MealTimingSummary {
                    meal_type: meal_type.clone(),
                    start_time: timings.start.to_12_hour(),
                    end_time: timings.end.to_12_hour(),
                })
            })
            .collect()
    }

    /// Formats a countdown, e.g. `125` as `"2h 5m"`
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::NegativeDuration`] for negative input.
    pub fn format_time_until(&self, minutes: i64) -> Result<String, ScheduleError> {
        format_time_until(minutes)
    }

    // Thresholds are signed and may push a cutoff past midnight either way

    fn past_late_threshold(&self, end: MinuteOfDay, scan: MinuteOfDay) -> bool {
        let late = i64::from(self.config.meal_window.late_threshold);
        i64::from(scan.as_minutes()) > i64::from(end.as_minutes()) + late
    }

    fn before_early_threshold(&self, start: MinuteOfDay, scan: MinuteOfDay) -> bool {
        let early = i64::from(self.config.meal_window.early_threshold);
        i64::from(scan.as_minutes()) < i64::from(start.as_minutes()) - early
    }
}

impl<C: Clock> MealSchedule<C> {
    /// Current minute of the day, from the schedule's clock
    pub fn current_minutes(&self) -> MinuteOfDay {
        MinuteOfDay::from_timelike(&self.clock.now())
    }

    /// Whether the meal is being served right now
    pub fn is_meal_time_valid(&self, meal_type: &str) -> Result<bool, ScheduleError> {
        self.is_meal_time_valid_at(meal_type, self.current_minutes())
    }

    /// Meals whose window contains the current time, in meal order
    pub fn active_meals(&self) -> Result<Vec<&str>, ScheduleError> {
        let now = self.current_minutes();
        let span = spans::active_meals(now);
        let _guard = span.enter();

        let mut active = Vec::new();
        for meal_type in &self.meal_order {
            if self.is_meal_time_valid_at(meal_type, now)? {
                active.push(meal_type.as_str());
            }
        }

        debug!(now = %now, active = ?active, "Resolved active meals");
        Ok(active)
    }

    /// The first meal in order whose window has not opened yet today
    ///
    /// Once every start time today has passed, this is the first meal in order
    /// tomorrow, with the countdown running through midnight.
    pub fn next_meal(&self) -> Result<NextMeal, ScheduleError> {
        let now = self.current_minutes();
        let span = spans::next_meal(now);
        let _guard = span.enter();

        for meal_type in &self.meal_order {
            let window = self.config.meal(meal_type)?;
            let start = window.start()?;
            if now < start {
                let until = MinutesUntil::from(start.as_minutes() - now.as_minutes());
                debug!(meal_type = %meal_type, time_until = %until, "Next meal is today");
                return Ok(NextMeal::new(meal_type, window, until, false));
            }
        }

        let first = self
            .meal_order
            .first()
            .ok_or(ScheduleError::EmptyMealOrder)?;
        let window = self.config.meal(first)?;
        let start = window.start()?;
        let until = MinutesUntil::from(MINUTES_PER_DAY - now.as_minutes() + start.as_minutes());

        debug!(meal_type = %first, time_until = %until, "Next meal is tomorrow");
        Ok(NextMeal::new(first, window, until, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::{MealWindowConfig, MealWindowThresholds};

    fn config() -> ScheduleConfig {
        ScheduleConfig::new(MealWindowThresholds::new(10, 15))
            .with_meal(
                "lunch",
                MealWindowConfig::new(
                    "Lunch",
                    "Midday meal",
                    "12:00",
                    "14:00",
                    "12:00 PM",
                    "2:00 PM",
                ),
            )
            .with_meal(
                "dinner",
                MealWindowConfig::new(
                    "Dinner",
                    "Evening meal",
                    "19:00",
                    "21:00",
                    "7:00 PM",
                    "9:00 PM",
                ),
            )
    }

    fn schedule_at(hours: u32, minutes: u32) -> MealSchedule<FixedClock> {
        let now = MinuteOfDay::from_hm(hours, minutes).unwrap();
        MealScheduleBuilder::new(config())
            .clock(FixedClock::at(now))
            .build()
            .unwrap()
    }

    #[test]
    fn test_current_minutes_reads_clock() {
        assert_eq!(schedule_at(13, 5).current_minutes().as_minutes(), 785);
    }

    #[test]
    fn test_meal_time_valid_boundaries() {
        assert!(!schedule_at(11, 59).is_meal_time_valid("lunch").unwrap());
        assert!(schedule_at(12, 0).is_meal_time_valid("lunch").unwrap());
        assert!(schedule_at(14, 0).is_meal_time_valid("lunch").unwrap());
        assert!(!schedule_at(14, 1).is_meal_time_valid("lunch").unwrap());
    }

    #[test]
    fn test_late_threshold() {
        let schedule = schedule_at(0, 0);
        assert!(!schedule.is_meal_late("lunch", "14:15").unwrap());
        assert!(schedule.is_meal_late("lunch", "14:16").unwrap());
    }

    #[test]
    fn test_early_threshold() {
        let schedule = schedule_at(0, 0);
        assert!(!schedule.is_meal_early("dinner", "18:50").unwrap());
        assert!(schedule.is_meal_early("dinner", "18:49").unwrap());
    }

    #[test]
    fn test_early_threshold_reaching_past_midnight() {
        let config = ScheduleConfig::new(MealWindowThresholds::new(30, 0)).with_meal(
            "snack",
            MealWindowConfig::new("Snack", "", "00:10", "00:40", "", ""),
        );
        let schedule = MealScheduleBuilder::new(config)
            .meal_order(["snack"])
            .build()
            .unwrap();

        assert!(!schedule.is_meal_early("snack", "00:00").unwrap());
    }

    #[test]
    fn test_negative_thresholds_narrow_on_time_band() {
        let config = ScheduleConfig::new(MealWindowThresholds::new(-5, -10)).with_meal(
            "lunch",
            MealWindowConfig::new("Lunch", "", "12:00", "14:00", "", ""),
        );
        let schedule = MealScheduleBuilder::new(config)
            .meal_order(["lunch"])
            .build()
            .unwrap();

        assert!(schedule.is_meal_early("lunch", "12:02").unwrap());
        assert!(!schedule.is_meal_early("lunch", "12:05").unwrap());
        assert!(!schedule.is_meal_late("lunch", "13:50").unwrap());
        assert!(schedule.is_meal_late("lunch", "13:51").unwrap());
        assert_eq!(schedule.classify_scan("lunch", "12:02").unwrap(), ScanStatus::Early);
        assert_eq!(schedule.classify_scan("lunch", "13:00").unwrap(), ScanStatus::OnTime);
        assert_eq!(schedule.classify_scan("lunch", "13:55").unwrap(), ScanStatus::Late);
    }

    #[test]
    fn test_classify_scan() {
        let schedule = schedule_at(0, 0);
        assert_eq!(schedule.classify_scan("lunch", "11:49").unwrap(), ScanStatus::Early);
        assert_eq!(schedule.classify_scan("lunch", "11:50").unwrap(), ScanStatus::OnTime);
        assert_eq!(schedule.classify_scan("lunch", "14:15").unwrap(), ScanStatus::OnTime);
        assert_eq!(schedule.classify_scan("lunch", "14:16").unwrap(), ScanStatus::Late);
    }

    #[test]
    fn test_malformed_scan_time() {
        let err = schedule_at(0, 0).is_meal_late("lunch", "2pm").unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidTime(_)));
    }

    #[test]
    fn test_passthrough_fields() {
        let schedule = schedule_at(0, 0);
        assert_eq!(schedule.meal_name("dinner").unwrap(), "Dinner");
        assert_eq!(schedule.meal_description("lunch").unwrap(), "Midday meal");
        assert_eq!(
            schedule.meal_display_times("dinner").unwrap(),
            MealDisplayTimes {
                start: "7:00 PM".to_string(),
                end: "9:00 PM".to_string(),
            }
        );
    }

    #[test]
    fn test_active_meals() {
        assert_eq!(schedule_at(12, 30).active_meals().unwrap(), vec!["lunch"]);
        assert_eq!(schedule_at(20, 0).active_meals().unwrap(), vec!["dinner"]);
        assert!(schedule_at(16, 0).active_meals().unwrap().is_empty());
    }

    #[test]
    fn test_next_meal_today() {
        let next = schedule_at(10, 0).next_meal().unwrap();
        assert_eq!(next.meal_type, "lunch");
        assert_eq!(next.name, "Lunch");
        assert_eq!(next.start_time, "12:00 PM");
        assert_eq!(next.time_until, MinutesUntil::new(120));
        assert!(!next.next_day);

        // Lunch has started, dinner is next
        let next = schedule_at(12, 0).next_meal().unwrap();
        assert_eq!(next.meal_type, "dinner");
        assert_eq!(next.time_until, MinutesUntil::new(420));
    }

    #[test]
    fn test_next_meal_wraps_to_tomorrow() {
        let next = schedule_at(19, 0).next_meal().unwrap();
        assert_eq!(next.meal_type, "lunch");
        assert!(next.next_day);
        // 1440 - 1140 + 720
        assert_eq!(next.time_until, MinutesUntil::new(1020));
    }

    #[test]
    fn test_next_meal_wraps_to_first_in_order() {
        let schedule = MealScheduleBuilder::new(config())
            .meal_order(["dinner", "lunch"])
            .clock(FixedClock::at(MinuteOfDay::from_hm(22, 0).unwrap()))
            .build()
            .unwrap();

        let next = schedule.next_meal().unwrap();
        assert_eq!(next.meal_type, "dinner");
        assert_eq!(next.time_until, MinutesUntil::new(1440 - 1320 + 1140));
    }

    #[test]
    fn test_timings_summary() {
        let summary = schedule_at(0, 0).timings_summary().unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].meal_type, "lunch");
        assert_eq!(summary[0].start_time, "12:00 PM");
        assert_eq!(summary[0].end_time, "02:00 PM");
        assert_eq!(summary[1].start_time, "07:00 PM");
        assert_eq!(summary[1].end_time, "09:00 PM");
    }

    #[test]
    fn test_unknown_meal_type_everywhere() {
        let schedule = schedule_at(12, 0);
        let is_unknown = |err: ScheduleError| matches!(err, ScheduleError::UnknownMealType { .. });

        assert!(is_unknown(schedule.is_meal_time_valid("brunch").unwrap_err()));
        assert!(is_unknown(schedule.is_meal_late("brunch", "12:00").unwrap_err()));
        assert!(is_unknown(schedule.is_meal_early("brunch", "12:00").unwrap_err()));
        assert!(is_unknown(schedule.meal_name("brunch").unwrap_err()));
        assert!(is_unknown(schedule.meal_description("brunch").unwrap_err()));
        assert!(is_unknown(schedule.meal_display_times("brunch").unwrap_err()));
        assert!(is_unknown(schedule.meal_timings("brunch").unwrap_err()));
        assert!(is_unknown(schedule.classify_scan("brunch", "12:00").unwrap_err()));
    }

    #[test]
    fn test_malformed_config_time_surfaces_on_query() {
        let config = ScheduleConfig::new(MealWindowThresholds::default())
            .with_meal("lunch", MealWindowConfig::new("Lunch", "", "12:00", "2pm", "", ""))
            .with_meal("dinner", MealWindowConfig::new("Dinner", "", "19:00", "21:00", "", ""));
        let schedule = MealScheduleBuilder::new(config)
            .clock(FixedClock::at(MinuteOfDay::from_hm(12, 30).unwrap()))
            .build()
            .unwrap();

        assert!(matches!(
            schedule.active_meals().unwrap_err(),
            ScheduleError::InvalidTime(_)
        ));
        // Fields unrelated to the broken time still resolve
        assert_eq!(schedule.meal_name("lunch").unwrap(), "Lunch");
    }

    #[test]
    fn test_schedule_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MealSchedule<SystemClock>>();
        assert_send_sync::<MealSchedule<FixedClock>>();
    }
}
