//! The state container a form shell owns.
//!
//! A shell keeps one [`FormState`], feeds it a [`FormUpdate`] for every
//! edit, and calls [`FormState::submit`] when the user submits. Rendering
//! reads the state; nothing else mutates it.
//!
//! Field errors are only recomputed on submit. Between submits they keep
//! whatever the last submit produced, even if the user has since fixed the
//! field.
//!
//! # Example
//!
//! ```
//! use card_form::clock::FixedClock;
//! use card_form::state::{FormState, FormUpdate, SubmitOutcome};
//! use card_form::{Field, FormValidator};
//!
//! let validator = FormValidator::with_clock(FixedClock::from_ymd(2024, 1, 1).unwrap());
//! let mut state = FormState::new();
//!
//! state.apply(FormUpdate::CardHolderName("John Smith".into()));
//! let outcome = state.submit(&validator);
//! assert_eq!(outcome, SubmitOutcome::Rejected { first_invalid: Field::CardNumber });
//! assert!(state.summary_visible());
//! ```

use crate::clock::Clock;
use crate::form::{Field, FormErrors, FormValidator, FormValues};

/// Message shown above the form while any field is invalid.
pub const SUMMARY_MESSAGE: &str = "Please enter valid data";

/// A single edit coming from the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormUpdate {
    /// New cardholder name text.
    CardHolderName(String),
    /// New card number text.
    CardNumber(String),
    /// New CVV text.
    Cvv(String),
    /// New expiration month text; the year is kept.
    ExpirationMonth(String),
    /// New expiration year text; the month is kept.
    ExpirationYear(String),
    /// Restore every field to empty and every error to valid.
    Reset,
}

impl FormUpdate {
    /// Returns the field this update edits, if it edits one.
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::CardHolderName(_) => Some(Field::CardHolderName),
            Self::CardNumber(_) => Some(Field::CardNumber),
            Self::Cvv(_) => Some(Field::Cvv),
            Self::ExpirationMonth(_) | Self::ExpirationYear(_) => Some(Field::ExpirationDate),
            Self::Reset => None,
        }
    }
}

/// What a submit produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; carries a snapshot of the accepted values.
    Accepted(FormValues),
    /// At least one field failed.
    Rejected {
        /// The first failing field in form order, for the shell to focus.
        first_invalid: Field,
    },
}

impl SubmitOutcome {
    /// Returns true for [`SubmitOutcome::Accepted`].
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Values, last-submit errors, and the summary notice flag.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: FormValues,
    errors: FormErrors,
    summary_visible: bool,
    submissions: u32,
}

impl FormState {
    /// Creates an empty form with all-valid errors and the notice hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form pre-filled with `values`.
    pub fn with_values(values: FormValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Current field values.
    #[inline]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Errors from the last submit, or all-valid before the first one.
    #[inline]
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Whether the summary notice should be shown.
    #[inline]
    pub fn summary_visible(&self) -> bool {
        self.summary_visible
    }

    /// The summary text to render, if visible.
    pub fn summary(&self) -> Option<&'static str> {
        self.summary_visible.then_some(SUMMARY_MESSAGE)
    }

    /// Number of submits so far.
    #[inline]
    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    /// Applies one edit. Errors are left untouched.
    pub fn apply(&mut self, update: FormUpdate) {
        match update {
            FormUpdate::CardHolderName(v) => self.values.card_holder_name = v,
            FormUpdate::CardNumber(v) => self.values.card_number = v,
            FormUpdate::Cvv(v) => self.values.cvv = v,
            FormUpdate::ExpirationMonth(v) => self.values.expiration_date.month = v,
            FormUpdate::ExpirationYear(v) => self.values.expiration_date.year = v,
            FormUpdate::Reset => *self = Self::default(),
        }
    }

    /// Validates the current values and stores the verdicts.
    ///
    /// Shows the summary notice when anything failed and hides it when
    /// everything passed.
    pub fn submit<C: Clock>(&mut self, validator: &FormValidator<C>) -> SubmitOutcome {
        let report = validator.validate(&self.values);
        self.errors = report.results;
        self.submissions = self.submissions.saturating_add(1);

        match report.results.invalid_fields().first() {
            Some(&first_invalid) => {
                self.summary_visible = true;
                #[cfg(feature = "tracing")]
                tracing::debug!(%first_invalid, submissions = self.submissions, "submit rejected");
                SubmitOutcome::Rejected { first_invalid }
            }
            None => {
                self.summary_visible = false;
                #[cfg(feature = "tracing")]
                tracing::debug!(submissions = self.submissions, "submit accepted");
                SubmitOutcome::Accepted(self.values.clone())
            }
        }
    }
}
