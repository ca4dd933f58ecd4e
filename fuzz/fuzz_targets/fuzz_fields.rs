//! Fuzz target for the single-field validators.
//!
//! Tests that field validation never panics and always keeps the
//! error/validity invariant.

#![no_main]

use card_form::{validate_card_holder_name, validate_card_number, validate_cvv, format, mask};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for result in [
        validate_card_holder_name(data),
        validate_card_number(data),
        validate_cvv(data),
    ] {
        assert_eq!(result.is_valid(), result.error().is_empty());
    }

    let _ = format::strip_whitespace(data);
    let _ = format::group_digits(data);
    let _ = mask::mask_card_number(data);
    let _ = mask::mask_cvv(data);
});
