// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across mealscan.
//!
//! This module provides newtype wrappers for the two time quantities the
//! schedule works in:
//! - Clock times as minutes since midnight ([`time_of_day::MinuteOfDay`])
//! - Countdowns until an upcoming meal ([`duration::MinutesUntil`])

pub mod duration;
pub mod time_of_day;

// Note: Public types are re-exported from lib.rs, not here
