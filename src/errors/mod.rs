//! Error types for the mealscan library.
//!
//! - [`TimeParseError`] - Errors from parsing `HH:MM` time-of-day strings
//! - [`ScheduleError`] - Errors from meal schedule queries (wraps [`TimeParseError`])
//!
//! Every query that used to silently produce a garbage value for a missing meal
//! type or a malformed time now returns one of these instead.
//!
//! # Examples
//!
//! ```
//! use mealscan::{time_to_minutes, ScheduleError, TimeParseError};
//!
//! fn scan_minutes(input: &str) -> Result<u32, ScheduleError> {
//!     // TimeParseError converts into ScheduleError via From
//!     Ok(time_to_minutes(input)?)
//! }
//!
//! assert_eq!(scan_minutes("12:30").unwrap(), 750);
//! assert!(matches!(
//!     scan_minutes("12:75"),
//!     Err(ScheduleError::InvalidTime(TimeParseError::OutOfRange { .. }))
//! ));
//! ```

mod schedule;
mod time;

pub use schedule::ScheduleError;
pub use time::TimeParseError;
