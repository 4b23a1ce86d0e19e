// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Time sources for "current time" queries
//!
//! [`MealSchedule`](crate::MealSchedule) never reads the wall clock directly; it
//! asks its [`Clock`]. Production code uses [`SystemClock`], tests and replays
//! pin the time with [`FixedClock`].

use chrono::{Local, NaiveTime};

use crate::types::time_of_day::MinuteOfDay;

/// Source of the current local time of day
pub trait Clock {
    /// Current local time of day
    fn now(&self) -> NaiveTime;
}

/// Reads the local wall clock on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Always reports the same time of day
///
/// # Examples
///
/// ```
/// use mealscan::{Clock, FixedClock, MinuteOfDay};
///
/// let clock = FixedClock::at(MinuteOfDay::from_hm(12, 30).unwrap());
/// assert_eq!(MinuteOfDay::from_timelike(&clock.now()).to_string(), "12:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveTime);

impl FixedClock {
    pub const fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Pins the clock to the start of the given minute
    pub fn at(minute: MinuteOfDay) -> Self {
        Self(minute.to_naive_time())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> NaiveTime {
        (**self).now()
    }
}
