// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for `HH:MM` time-of-day parsing.

use chrono::format::{ParseError, ParseErrorKind};

/// Errors that can occur when parsing an `HH:MM` time-of-day string.
///
/// Every variant keeps the original input so callers can report exactly which
/// configuration entry or scan time was rejected.
///
/// # Examples
///
/// ```
/// use mealscan::{MinuteOfDay, TimeParseError};
///
/// let err = "24:00".parse::<MinuteOfDay>().unwrap_err();
/// assert!(matches!(err, TimeParseError::OutOfRange { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    /// The input is not an `HH:MM` string.
    #[error("Invalid time format '{input}': expected HH:MM")]
    InvalidFormat {
        /// The rejected input
        input: String,
        /// The underlying chrono error, absent when rejected before parsing
        #[source]
        source: Option<ParseError>,
    },

    /// The hour is outside `0..=23` or the minute outside `0..=59`.
    #[error("Time out of range '{input}': hours must be 0-23 and minutes 0-59")]
    OutOfRange {
        /// The rejected input
        input: String,
        /// The underlying chrono error
        #[source]
        source: ParseError,
    },
}

impl TimeParseError {
    /// Create an `InvalidFormat` error for input rejected before reaching chrono.
    pub fn invalid_format(input: impl Into<String>) -> Self {
        TimeParseError::InvalidFormat {
            input: input.into(),
            source: None,
        }
    }

    /// Classify a chrono parse failure for the given input.
    pub fn from_chrono(input: impl Into<String>, source: ParseError) -> Self {
        let input = input.into();
        match source.kind() {
            ParseErrorKind::OutOfRange => TimeParseError::OutOfRange { input, source },
            _ => TimeParseError::InvalidFormat {
                input,
                source: Some(source),
            },
        }
    }
}
