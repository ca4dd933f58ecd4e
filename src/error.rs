//! Error types for card form validation.
//!
//! Every field has exactly one user-facing error with a fixed message.
//! Expiration dates additionally carry an [`ExpiryError`] describing which
//! check rejected them; it collapses into the same message.

use std::fmt;

/// The reason a single form field was rejected.
///
/// The `Display` output is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// The cardholder name is blank, too short, or contains characters
    /// other than letters, spaces, hyphens and underscores.
    InvalidName,

    /// The card number is not exactly 16 digits.
    InvalidCardNumber,

    /// The CVV is not exactly 3 digits.
    InvalidCvv,

    /// The expiration date is malformed or outside the accepted window.
    InvalidExpirationDate,
}

impl FieldError {
    /// Returns the fixed message for this error.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidName => "Invalid name",
            Self::InvalidCardNumber => "Invalid card number",
            Self::InvalidCvv => "Invalid cvv number",
            Self::InvalidExpirationDate => "Invalid expiration date",
        }
    }

    /// Looks up the error whose fixed message is `message`.
    pub fn from_message(message: &str) -> Option<Self> {
        [
            Self::InvalidName,
            Self::InvalidCardNumber,
            Self::InvalidCvv,
            Self::InvalidExpirationDate,
        ]
        .into_iter()
        .find(|e| e.message() == message)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}

/// Detailed reason an expiration date was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryError {
    /// The month or the year is blank.
    Empty,
    /// A part is not exactly two digits.
    InvalidFormat,
    /// The month is not a calendar month (00 or 13-99).
    InvalidMonth(u8),
    /// The first day of the expiration month lies before now.
    Expired {
        /// The expiry month.
        month: u8,
        /// The four-digit expiry year.
        year: i32,
    },
    /// The first day of the expiration month lies beyond the window.
    TooFarFuture {
        /// The four-digit expiry year.
        year: i32,
        /// Number of years the window extends past now.
        max_years: u32,
    },
}

impl fmt::Display for ExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "expiration date is empty"),
            Self::InvalidFormat => {
                write!(f, "invalid expiration format (expected two-digit MM and YY)")
            }
            Self::InvalidMonth(m) => write!(f, "invalid month {:02}: must be 01-12", m),
            Self::Expired { month, year } => {
                write!(f, "expiration date {:02}/{} is in the past", month, year)
            }
            Self::TooFarFuture { year, max_years } => {
                write!(
                    f,
                    "expiration year {} is more than {} years in the future",
                    year, max_years
                )
            }
        }
    }
}

impl std::error::Error for ExpiryError {}

impl From<ExpiryError> for FieldError {
    fn from(_: ExpiryError) -> Self {
        FieldError::InvalidExpirationDate
    }
}
