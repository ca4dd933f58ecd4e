//! Whole-form validation.
//!
//! [`FormValidator::validate`] runs all four field validators, never
//! stopping at the first failure, so a shell can show every error at once.
//!
//! # Example
//!
//! ```
//! use card_form::clock::FixedClock;
//! use card_form::{ExpirationDate, Field, FormValidator, FormValues};
//!
//! let validator = FormValidator::with_clock(FixedClock::from_ymd(2024, 1, 1).unwrap());
//! let values = FormValues::new("John Smith", "4111111111111111", "12", ExpirationDate::new("06", "26"));
//!
//! let report = validator.validate(&values);
//! assert!(!report.is_form_valid);
//! assert_eq!(report.results.invalid_fields(), vec![Field::Cvv]);
//! assert_eq!(report.results.cvv.error(), "Invalid cvv number");
//! ```

use std::fmt;

use zeroize::Zeroize;

use crate::clock::{Clock, SystemClock};
use crate::expiry::{check_expiration_date_with, ExpirationDate, DEFAULT_MAX_YEARS};
use crate::mask::{mask_card_number, mask_cvv};
use crate::validate::{
    validate_card_holder_name, validate_card_number, validate_cvv, ValidationResult,
};

/// One of the four form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Field {
    /// The name printed on the card.
    CardHolderName,
    /// The 16-digit card number.
    CardNumber,
    /// The 3-digit security code.
    Cvv,
    /// The `MM/YY` expiration date.
    ExpirationDate,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [
        Field::CardHolderName,
        Field::CardNumber,
        Field::Cvv,
        Field::ExpirationDate,
    ];

    /// Returns the camelCase key used by shells and serialized output.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::CardHolderName => "cardHolderName",
            Self::CardNumber => "cardNumber",
            Self::Cvv => "cvv",
            Self::ExpirationDate => "expirationDate",
        }
    }

    /// Returns the label shown next to the input.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CardHolderName => "Card Holder Name",
            Self::CardNumber => "Card Number",
            Self::Cvv => "CVV",
            Self::ExpirationDate => "Expiration date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The raw values of a card form.
///
/// `Debug` masks the card number and CVV. The card number, CVV and
/// expiration date are zeroed when the value is dropped.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FormValues {
    /// Name as typed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub card_holder_name: String,
    /// Card number as typed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub card_number: String,
    /// CVV as typed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cvv: String,
    /// Month and year parts as typed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub expiration_date: ExpirationDate,
}

impl FormValues {
    /// Creates a value set from raw field contents.
    pub fn new(
        card_holder_name: impl Into<String>,
        card_number: impl Into<String>,
        cvv: impl Into<String>,
        expiration_date: ExpirationDate,
    ) -> Self {
        Self {
            card_holder_name: card_holder_name.into(),
            card_number: card_number.into(),
            cvv: cvv.into(),
            expiration_date,
        }
    }
}

impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValues")
            .field("card_holder_name", &self.card_holder_name)
            .field("card_number", &mask_card_number(&self.card_number))
            .field("cvv", &mask_cvv(&self.cvv))
            .field("expiration_date", &self.expiration_date)
            .finish()
    }
}

impl Drop for FormValues {
    fn drop(&mut self) {
        self.card_number.zeroize();
        self.cvv.zeroize();
        self.expiration_date.zeroize();
    }
}

/// One verdict per field.
///
/// The default is all-valid: the state a form shows before its first
/// submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FormErrors {
    /// Verdict for the cardholder name.
    pub card_holder_name: ValidationResult,
    /// Verdict for the card number.
    pub card_number: ValidationResult,
    /// Verdict for the CVV.
    pub cvv: ValidationResult,
    /// Verdict for the expiration date.
    pub expiration_date: ValidationResult,
}

impl FormErrors {
    /// Returns the verdict for `field`.
    pub const fn get(&self, field: Field) -> &ValidationResult {
        match field {
            Field::CardHolderName => &self.card_holder_name,
            Field::CardNumber => &self.card_number,
            Field::Cvv => &self.cvv,
            Field::ExpirationDate => &self.expiration_date,
        }
    }

    /// Iterates over `(field, verdict)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationResult)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Returns true if every field passed.
    pub fn all_valid(&self) -> bool {
        self.iter().all(|(_, r)| r.is_valid())
    }

    /// Returns the failing fields in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        self.iter()
            .filter(|(_, r)| !r.is_valid())
            .map(|(f, _)| f)
            .collect()
    }
}

/// The outcome of validating a whole form.
///
/// The default report is the all-valid one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FormReport {
    /// Per-field verdicts.
    pub results: FormErrors,
    /// True exactly when all four verdicts are valid.
    pub is_form_valid: bool,
}

impl Default for FormReport {
    fn default() -> Self {
        FormErrors::default().into()
    }
}

impl From<FormErrors> for FormReport {
    fn from(results: FormErrors) -> Self {
        Self {
            is_form_valid: results.all_valid(),
            results,
        }
    }
}

/// Validates complete forms.
///
/// The validator is cheap to build and holds no per-form state; the clock
/// and the expiration window are its only settings.
#[derive(Debug, Clone)]
pub struct FormValidator<C = SystemClock> {
    clock: C,
    max_years: u32,
}

impl FormValidator<SystemClock> {
    /// Creates a validator reading the system clock with the ten-year
    /// expiration window.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FormValidator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FormValidator<C> {
    /// Creates a validator reading `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            max_years: DEFAULT_MAX_YEARS,
        }
    }

    /// Sets how many years past now an expiration date may lie.
    #[must_use]
    pub fn max_years(mut self, years: u32) -> Self {
        self.max_years = years;
        self
    }

    /// Returns the clock in use.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Validates the expiration date alone with this validator's settings.
    pub fn validate_expiration_date(&self, date: &ExpirationDate) -> ValidationResult {
        check_expiration_date_with(date, &self.clock, self.max_years).into()
    }

    /// Validates every field of `values`.
    ///
    /// All four validators always run. The result depends only on `values`
    /// and the clock, so repeated calls agree.
    pub fn validate(&self, values: &FormValues) -> FormReport {
        let results = FormErrors {
            card_holder_name: validate_card_holder_name(&values.card_holder_name),
            card_number: validate_card_number(&values.card_number),
            cvv: validate_cvv(&values.cvv),
            expiration_date: self.validate_expiration_date(&values.expiration_date),
        };
        let report = FormReport::from(results);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            card_number = %mask_card_number(&values.card_number),
            is_form_valid = report.is_form_valid,
            invalid = ?report.results.invalid_fields(),
            "card form validated"
        );

        report
    }
}
