//! # card_form
//!
//! Validation for a payment card form: cardholder name, card number, CVV
//! and expiration date.
//!
//! ## Features
//!
//! - One pure validator per field, each returning a verdict instead of
//!   failing fast
//! - Whole-form validation that reports every field at once
//! - Expiration window checked against an injectable clock
//! - A state container for form shells (edits, submit, summary notice)
//! - Standalone card network lookup (Visa / Mastercard)
//! - Card number and CVV masked in `Debug` output and zeroed on drop
//!
//! ## Quick Start
//!
//! ```rust
//! use card_form::clock::FixedClock;
//! use card_form::{ExpirationDate, FormValidator, FormValues};
//!
//! let validator = FormValidator::with_clock(FixedClock::from_ymd(2024, 1, 1).unwrap());
//! let values = FormValues::new(
//!     "John Smith",
//!     "4111111111111111",
//!     "123",
//!     ExpirationDate::new("06", "26"),
//! );
//!
//! let report = validator.validate(&values);
//! assert!(report.is_form_valid);
//! assert_eq!(report.results.card_number.error(), "");
//! ```
//!
//! ## Field Validation
//!
//! ```rust
//! use card_form::{validate_card_holder_name, validate_card_number, validate_cvv};
//!
//! assert!(validate_card_holder_name("John Smith").is_valid());
//! assert_eq!(validate_card_holder_name("Jo").error(), "Invalid name");
//!
//! assert!(validate_card_number("4111 1111 1111 1111").is_valid());
//! assert_eq!(validate_card_number("411111111111111").error(), "Invalid card number");
//!
//! assert!(validate_cvv("123").is_valid());
//! assert_eq!(validate_cvv("12a").error(), "Invalid cvv number");
//! ```
//!
//! ## Card Type
//!
//! ```rust
//! use card_form::{get_card_type, CardType};
//!
//! assert_eq!(get_card_type("4111111111111111"), CardType::Visa);
//! assert_eq!(get_card_type("2223000048400011"), CardType::Mastercard);
//! assert_eq!(get_card_type("1234567890123456").name(), "Unknown card");
//! ```
//!
//! ## Error Messages
//!
//! | Field | Message |
//! |-------|---------|
//! | Cardholder name | Invalid name |
//! | Card number | Invalid card number |
//! | CVV | Invalid cvv number |
//! | Expiration date | Invalid expiration date |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize reports, (de)serialize form values |
//! | `tracing` | Debug events on validation and submit |
//! | `parallel` | Rayon-based batch validation |
//! | `wasm` | WebAssembly bindings |
//! | `cli` | Command-line tool |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod clock;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod form;
pub mod format;
pub mod mask;
pub mod state;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use clock::{Clock, FixedClock, SystemClock};
pub use detect::{get_card_type, CardType};
pub use error::{ExpiryError, FieldError};
pub use expiry::{validate_expiration_date, validate_expiration_date_at, ExpirationDate};
pub use form::{Field, FormErrors, FormReport, FormValidator, FormValues};
pub use state::{FormState, FormUpdate, SubmitOutcome};
pub use validate::{
    validate_card_holder_name, validate_card_number, validate_cvv, ValidationResult,
};
