//! Expiration date validation.
//!
//! An expiration date is entered as two two-character parts, `MM` and `YY`.
//! It is accepted when both parts are two digits, the month is a calendar
//! month, and the first day of that month falls inside the window from now
//! to now plus ten years.
//!
//! # Example
//!
//! ```
//! use card_form::clock::FixedClock;
//! use card_form::expiry::{validate_expiration_date_at, ExpirationDate};
//!
//! let now = FixedClock::from_ymd(2024, 1, 1).unwrap();
//!
//! assert!(validate_expiration_date_at(&ExpirationDate::new("06", "26"), &now).is_valid());
//! assert!(!validate_expiration_date_at(&ExpirationDate::new("01", "35"), &now).is_valid());
//! assert!(!validate_expiration_date_at(&ExpirationDate::new("13", "25"), &now).is_valid());
//! ```

use std::fmt;

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use zeroize::Zeroize;

use crate::clock::{Clock, SystemClock};
use crate::error::ExpiryError;
use crate::format::{is_blank, is_digit_field, strip_whitespace};
use crate::validate::ValidationResult;

/// Default width of the acceptance window, in years after now.
pub const DEFAULT_MAX_YEARS: u32 = 10;

/// Two-digit years up to this value belong to the 2000s; the rest to the
/// 1900s.
pub const TWO_DIGIT_YEAR_PIVOT: u8 = 68;

/// The raw month and year parts of an expiration date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpirationDate {
    /// Two-digit month, `"01"` to `"12"`.
    #[cfg_attr(feature = "serde", serde(alias = "mm", default))]
    pub month: String,
    /// Two-digit year.
    #[cfg_attr(feature = "serde", serde(alias = "yy", default))]
    pub year: String,
}

impl ExpirationDate {
    /// Creates an expiration date from raw parts.
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            year: year.into(),
        }
    }
}

impl fmt::Display for ExpirationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

/// Expands a two-digit year.
///
/// # Example
///
/// ```
/// use card_form::expiry::expand_year;
///
/// assert_eq!(expand_year(26), 2026);
/// assert_eq!(expand_year(68), 2068);
/// assert_eq!(expand_year(69), 1969);
/// ```
#[inline]
pub const fn expand_year(yy: u8) -> i32 {
    if yy <= TWO_DIGIT_YEAR_PIVOT {
        2000 + yy as i32
    } else {
        1900 + yy as i32
    }
}

/// Parses the parts into the first day of the expiration month.
///
/// Only the shape and the calendar are checked; the window is not.
pub fn parse_expiration_date(date: &ExpirationDate) -> Result<NaiveDate, ExpiryError> {
    if is_blank(&date.month) || is_blank(&date.year) {
        return Err(ExpiryError::Empty);
    }
    if !is_digit_field(&date.month, 2) || !is_digit_field(&date.year, 2) {
        return Err(ExpiryError::InvalidFormat);
    }

    let month: u8 = strip_whitespace(&date.month)
        .parse()
        .map_err(|_| ExpiryError::InvalidFormat)?;
    let yy: u8 = strip_whitespace(&date.year)
        .parse()
        .map_err(|_| ExpiryError::InvalidFormat)?;

    NaiveDate::from_ymd_opt(expand_year(yy), month as u32, 1).ok_or(ExpiryError::InvalidMonth(month))
}

/// Checks that the expiration moment lies inside `[now, now + max_years]`.
///
/// The expiration moment is local midnight on the first day of the month.
/// A card expiring in the current month is therefore rejected once that
/// month has started.
pub fn check_window(
    expires: NaiveDate,
    now: NaiveDateTime,
    max_years: u32,
) -> Result<NaiveDate, ExpiryError> {
    let moment = expires.and_time(NaiveTime::MIN);

    if moment < now {
        return Err(ExpiryError::Expired {
            month: expires.month() as u8,
            year: expires.year(),
        });
    }

    let limit = now.checked_add_months(Months::new(max_years.saturating_mul(12)));
    if matches!(limit, Some(limit) if moment > limit) {
        return Err(ExpiryError::TooFarFuture {
            year: expires.year(),
            max_years,
        });
    }

    Ok(expires)
}

/// Checks an expiration date against `clock` with a custom window.
pub fn check_expiration_date_with<C: Clock>(
    date: &ExpirationDate,
    clock: &C,
    max_years: u32,
) -> Result<NaiveDate, ExpiryError> {
    let expires = parse_expiration_date(date)?;
    check_window(expires, clock.now(), max_years)
}

/// Checks an expiration date against `clock` with the ten-year window.
#[inline]
pub fn check_expiration_date_at<C: Clock>(
    date: &ExpirationDate,
    clock: &C,
) -> Result<NaiveDate, ExpiryError> {
    check_expiration_date_with(date, clock, DEFAULT_MAX_YEARS)
}

/// Validates an expiration date against `clock`.
///
/// Structural and window failures share the message
/// `"Invalid expiration date"`; use [`check_expiration_date_at`] to tell
/// them apart.
#[inline]
pub fn validate_expiration_date_at<C: Clock>(date: &ExpirationDate, clock: &C) -> ValidationResult {
    check_expiration_date_at(date, clock).into()
}

/// Validates an expiration date against the system clock.
#[inline]
pub fn validate_expiration_date(date: &ExpirationDate) -> ValidationResult {
    validate_expiration_date_at(date, &SystemClock)
}
