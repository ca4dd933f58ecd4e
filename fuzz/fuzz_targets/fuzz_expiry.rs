//! Fuzz target for expiration date validation.
//!
//! Tests that arbitrary month/year parts and clock readings never panic.

#![no_main]

use arbitrary::Arbitrary;
use card_form::{expiry, ExpirationDate, FixedClock};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    month: String,
    year: String,
    now_year: u16,
    now_month: u8,
    now_day: u8,
    max_years: u32,
}

fuzz_target!(|input: Input| {
    let Some(clock) = FixedClock::from_ymd(
        input.now_year as i32,
        input.now_month as u32,
        input.now_day as u32,
    ) else {
        return;
    };
    let date = ExpirationDate::new(input.month, input.year);

    let _ = expiry::parse_expiration_date(&date);
    let _ = expiry::check_expiration_date_with(&date, &clock, input.max_years);
    let result = expiry::validate_expiration_date_at(&date, &clock);
    assert_eq!(result.is_valid(), result.error().is_empty());
});
