// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for mealscan queries.
//!
//! Telemetry is kept out of the query logic: each instrumented query has a
//! matching helper here instead of an `#[instrument]` attribute.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_query(&self, meal_type: &str) -> Result<T, ScheduleError> {
//!     let span = spans::my_query(meal_type);
//!     let _guard = span.enter();
//!     // Query logic here
//! }
//! ```

use tracing::Span;

use crate::types::time_of_day::MinuteOfDay;

/// Create span for listing the meals whose window contains the current time.
///
/// Parent: None (root span for this query)
/// Children: None
#[inline]
pub(crate) fn active_meals(now: MinuteOfDay) -> Span {
    tracing::debug_span!("mealscan.active_meals", now = %now)
}

/// Create span for finding the next meal to open.
///
/// Parent: None (root span for this query)
/// Children: None
#[inline]
pub(crate) fn next_meal(now: MinuteOfDay) -> Span {
    tracing::debug_span!("mealscan.next_meal", now = %now)
}

/// Create span for classifying a scan against a meal window.
///
/// Parent: None (root span for this query)
/// Children: None
#[inline]
pub(crate) fn classify_scan(meal_type: &str, scan_time: MinuteOfDay) -> Span {
    tracing::debug_span!(
        "mealscan.classify_scan",
        meal_type = meal_type,
        scan_time = %scan_time,
    )
}
