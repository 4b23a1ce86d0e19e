// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Builder for [`MealSchedule`]

use std::sync::Arc;

use tracing::debug;

use super::MealSchedule;
use crate::clock::{Clock, SystemClock};
use crate::config::constants::DEFAULT_MEAL_ORDER;
use crate::config::ScheduleConfig;
use crate::errors::ScheduleError;

/// Builder for [`MealSchedule`]
///
/// Provides a fluent API for choosing the meal order and the clock. Defaults to
/// [`DEFAULT_MEAL_ORDER`] and the local wall clock.
///
/// # Example
///
/// ```rust
/// use mealscan::{FixedClock, MealScheduleBuilder, MealWindowConfig, MealWindowThresholds, MinuteOfDay, ScheduleConfig};
///
/// let config = ScheduleConfig::new(MealWindowThresholds::new(10, 15))
///     .with_meal("breakfast", MealWindowConfig::new("Breakfast", "", "07:00", "09:00", "7 AM", "9 AM"))
///     .with_meal("lunch", MealWindowConfig::new("Lunch", "", "12:00", "14:00", "12 PM", "2 PM"));
///
/// let schedule = MealScheduleBuilder::new(config)
///     .meal_order(["breakfast", "lunch"])
///     .clock(FixedClock::at(MinuteOfDay::from_hm(8, 0).unwrap()))
///     .build()
///     .unwrap();
///
/// assert_eq!(schedule.active_meals().unwrap(), vec!["breakfast"]);
/// ```
#[derive(Debug)]
pub struct MealScheduleBuilder<C = SystemClock> {
    config: Arc<ScheduleConfig>,
    meal_order: Vec<String>,
    clock: C,
}

impl MealScheduleBuilder<SystemClock> {
    /// Create a new builder over `config` with the default meal order and system clock
    pub fn new(config: impl Into<Arc<ScheduleConfig>>) -> Self {
        Self {
            config: config.into(),
            meal_order: DEFAULT_MEAL_ORDER.iter().map(|m| m.to_string()).collect(),
            clock: SystemClock,
        }
    }
}

impl<C> MealScheduleBuilder<C> {
    /// Set the meal types considered by active/next-meal queries, in service order
    ///
    /// The first entry is also the meal reported when every start time today has
    /// already passed.
    pub fn meal_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meal_order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the time source
    pub fn clock<N: Clock>(self, clock: N) -> MealScheduleBuilder<N> {
        MealScheduleBuilder {
            config: self.config,
            meal_order: self.meal_order,
            clock,
        }
    }

    /// Build the schedule
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::EmptyMealOrder`] if the meal order is empty
    /// - [`ScheduleError::UnknownMealType`] if the meal order names a meal type
    ///   missing from the configuration
    pub fn build(self) -> Result<MealSchedule<C>, ScheduleError> {
        if self.meal_order.is_empty() {
            return Err(ScheduleError::EmptyMealOrder);
        }
        if let Some(missing) = self
            .meal_order
            .iter()
            .find(|meal_type| !self.config.contains_meal(meal_type))
        {
            return Err(ScheduleError::unknown_meal_type(missing.as_str()));
        }

        debug!(
            meals = self.config.meals.len(),
            meal_order = ?self.meal_order,
            "Built meal schedule"
        );

        Ok(MealSchedule {
            config: self.config,
            meal_order: self.meal_order,
            clock: self.clock,
        })
    }
}
