// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known constants
//!
//! This module centralizes the clock arithmetic constants and the default meal
//! ordering used throughout the mealscan crate.

/// Minutes in one hour
pub const MINUTES_PER_HOUR: u32 = 60;

/// Minutes in one day, used for the next-day wraparound
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// Meal types considered by active/next-meal queries, in service order
///
/// Configuration maps carry no reliable ordering, so the evaluator walks this
/// list instead. Override it with
/// [`MealScheduleBuilder::meal_order`](crate::MealScheduleBuilder::meal_order).
pub const DEFAULT_MEAL_ORDER: [&str; 2] = ["lunch", "dinner"];
