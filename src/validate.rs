//! Field validators for the card form.
//!
//! Each field has a `check_*` function returning `Result` for callers that
//! want `?`, and a `validate_*` function returning a [`ValidationResult`]
//! for callers that collect every verdict before showing them. Neither
//! ever panics; malformed input is simply invalid.
//!
//! The expiration-date validators live in [`crate::expiry`] because they
//! also need a clock.

use std::fmt;

use crate::error::FieldError;
use crate::format::{is_blank, is_digit_field, is_name_text};

/// Number of digits a card number must have.
pub const CARD_NUMBER_DIGITS: usize = 16;

/// Number of digits a CVV must have.
pub const CVV_DIGITS: usize = 3;

/// A cardholder name must be longer than this many characters, counted on
/// the raw input including spaces.
pub const MIN_NAME_EXCLUSIVE: usize = 5;

/// The verdict for one field.
///
/// `error()` is empty exactly when `is_valid()` is true. The default value
/// is valid, which is what a form shows before its first submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ValidationResult {
    error: Option<FieldError>,
}

impl ValidationResult {
    /// A passing verdict.
    #[inline]
    pub const fn valid() -> Self {
        Self { error: None }
    }

    /// A failing verdict carrying `error`.
    #[inline]
    pub const fn invalid(error: FieldError) -> Self {
        Self { error: Some(error) }
    }

    /// Returns true if the field passed.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the message to show, or `""` when valid.
    #[inline]
    pub const fn error(&self) -> &'static str {
        match self.error {
            Some(e) => e.message(),
            None => "",
        }
    }

    /// Returns the failure kind, if any.
    #[inline]
    pub const fn field_error(&self) -> Option<FieldError> {
        self.error
    }
}

impl<T, E: Into<FieldError>> From<Result<T, E>> for ValidationResult {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::valid(),
            Err(e) => Self::invalid(e.into()),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error {
            None => f.write_str("valid"),
            Some(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("error", self.error())?;
        state.end()
    }
}

/// Reads `{isValid, error}`. The error must be one of the fixed messages
/// when `isValid` is false and empty (or absent) when it is true.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ValidationResult {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire {
            is_valid: bool,
            #[serde(default)]
            error: String,
        }

        let wire = Wire::deserialize(deserializer)?;
        match (wire.is_valid, wire.error.as_str()) {
            (true, "") => Ok(Self::valid()),
            (true, message) => Err(D::Error::custom(format!(
                "valid result carries error {:?}",
                message
            ))),
            (false, "") => Err(D::Error::custom("invalid result without an error message")),
            (false, message) => FieldError::from_message(message)
                .map(Self::invalid)
                .ok_or_else(|| D::Error::custom(format!("unknown error message {:?}", message))),
        }
    }
}

/// Checks a cardholder name.
///
/// The name fails when it is blank, when its raw length (spaces included)
/// is 5 or less, or when it contains anything other than ASCII letters,
/// spaces, `-` and `_`.
///
/// # Example
///
/// ```
/// use card_form::validate::check_card_holder_name;
///
/// assert!(check_card_holder_name("John Smith").is_ok());
/// assert!(check_card_holder_name("Jo Do").is_err());
/// ```
pub fn check_card_holder_name(name: &str) -> Result<(), FieldError> {
    if is_blank(name) || name.chars().count() <= MIN_NAME_EXCLUSIVE || !is_name_text(name) {
        return Err(FieldError::InvalidName);
    }
    Ok(())
}

/// Validates a cardholder name. See [`check_card_holder_name`].
#[inline]
pub fn validate_card_holder_name(name: &str) -> ValidationResult {
    check_card_holder_name(name).into()
}

/// Checks a card number: exactly 16 digits once whitespace is removed.
///
/// No checksum or brand check is made.
///
/// # Example
///
/// ```
/// use card_form::validate::check_card_number;
///
/// assert!(check_card_number("4111111111111111").is_ok());
/// assert!(check_card_number("4111 1111 1111 1111").is_ok());
/// assert!(check_card_number("411111111111111").is_err());
/// ```
pub fn check_card_number(number: &str) -> Result<(), FieldError> {
    if !is_digit_field(number, CARD_NUMBER_DIGITS) {
        return Err(FieldError::InvalidCardNumber);
    }
    Ok(())
}

/// Validates a card number. See [`check_card_number`].
#[inline]
pub fn validate_card_number(number: &str) -> ValidationResult {
    check_card_number(number).into()
}

/// Checks a CVV: exactly 3 digits once whitespace is removed.
///
/// # Example
///
/// ```
/// use card_form::validate::check_cvv;
///
/// assert!(check_cvv("123").is_ok());
/// assert!(check_cvv("12").is_err());
/// assert!(check_cvv("12a").is_err());
/// ```
pub fn check_cvv(cvv: &str) -> Result<(), FieldError> {
    if !is_digit_field(cvv, CVV_DIGITS) {
        return Err(FieldError::InvalidCvv);
    }
    Ok(())
}

/// Validates a CVV. See [`check_cvv`].
#[inline]
pub fn validate_cvv(cvv: &str) -> ValidationResult {
    check_cvv(cvv).into()
}
