// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for mealscan integration tests
//!
//! Provides the reference meal timings document and pinned-clock schedules so
//! tests never depend on the wall clock.

use mealscan::{FixedClock, MealSchedule, MealScheduleBuilder, MinuteOfDay, ScheduleConfig};

/// Lunch 12:00-14:00, dinner 19:00-21:00, 10 minutes early / 15 minutes late tolerance
pub const MEAL_TIMINGS_JSON: &str = r#"{
    "lunch": {
        "name": "Lunch",
        "description": "Lunch service in the main hall",
        "start_time": "12:00",
        "end_time": "14:00",
        "display_start": "12:00 PM",
        "display_end": "2:00 PM"
    },
    "dinner": {
        "name": "Dinner",
        "description": "Dinner service in the main hall",
        "start_time": "19:00",
        "end_time": "21:00",
        "display_start": "7:00 PM",
        "display_end": "9:00 PM"
    },
    "meal_window": {
        "early_threshold": 10,
        "late_threshold": 15
    }
}"#;

/// Decode the reference document
#[allow(dead_code)]
pub fn sample_config() -> ScheduleConfig {
    ScheduleConfig::from_json_str(MEAL_TIMINGS_JSON).expect("reference config must decode")
}

/// Schedule over the reference config with the clock pinned to `minute`
#[allow(dead_code)]
pub fn schedule_at_minute(minute: MinuteOfDay) -> MealSchedule<FixedClock> {
    MealScheduleBuilder::new(sample_config())
        .clock(FixedClock::at(minute))
        .build()
        .expect("reference config contains lunch and dinner")
}

/// Schedule over the reference config with the clock pinned to `hours:minutes`
#[allow(dead_code)]
pub fn schedule_at(hours: u32, minutes: u32) -> MealSchedule<FixedClock> {
    schedule_at_minute(MinuteOfDay::from_hm(hours, minutes).expect("valid test time"))
}

/// Install a test subscriber so `RUST_LOG=mealscan=debug` shows query logs
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
