// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for meal schedule queries.
//!
//! This module provides the error type returned by [`MealSchedule`](crate::MealSchedule)
//! queries and by [`MealScheduleBuilder::build`](crate::MealScheduleBuilder::build).

use super::TimeParseError;

/// Errors that can occur while evaluating a meal schedule.
///
/// # Examples
///
/// ```rust,ignore
/// use mealscan::{MealSchedule, ScheduleError};
///
/// match schedule.is_meal_late("brunch", "11:30") {
///     Ok(late) => println!("late: {late}"),
///     Err(ScheduleError::UnknownMealType { meal_type }) => {
///         eprintln!("No window configured for {meal_type}");
///     }
///     Err(ScheduleError::InvalidTime(e)) => eprintln!("Bad scan time: {e}"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// A meal-type key was requested that has no window in the configuration.
    #[error("Unknown meal type: '{meal_type}'")]
    UnknownMealType {
        /// The requested key
        meal_type: String,
    },

    /// A configured window time or a caller-supplied scan time is not a valid `HH:MM` value.
    #[error("Invalid time: {0}")]
    InvalidTime(#[from] TimeParseError),

    /// A countdown was requested for a negative number of minutes.
    #[error("Negative duration: {minutes} minutes")]
    NegativeDuration {
        /// The rejected value
        minutes: i64,
    },

    /// The evaluator was built without any meal types to consider.
    #[error("Meal order must contain at least one meal type")]
    EmptyMealOrder,

    /// The configuration document could not be decoded.
    #[error("Configuration error: {details}")]
    Config {
        /// Details about the decoding failure
        details: String,
        /// The underlying serialization error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ScheduleError {
    /// Create an `UnknownMealType` error for the given key.
    pub fn unknown_meal_type(meal_type: impl Into<String>) -> Self {
        ScheduleError::UnknownMealType {
            meal_type: meal_type.into(),
        }
    }

    /// Create a `NegativeDuration` error.
    pub fn negative_duration(minutes: i64) -> Self {
        ScheduleError::NegativeDuration { minutes }
    }

    /// Create a `Config` error from any serialization error.
    pub fn config(
        details: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ScheduleError::Config {
            details: details.into(),
            source: Box::new(source),
        }
    }
}
