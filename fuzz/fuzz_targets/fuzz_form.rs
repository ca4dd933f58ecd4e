//! Fuzz target for whole-form validation and card type lookup.

#![no_main]

use arbitrary::Arbitrary;
use card_form::{get_card_type, ExpirationDate, FixedClock, FormValidator, FormValues};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    name: String,
    number: String,
    cvv: String,
    month: String,
    year: String,
}

fuzz_target!(|input: Input| {
    let _ = get_card_type(&input.number);

    let values = FormValues::new(
        input.name,
        input.number,
        input.cvv,
        ExpirationDate::new(input.month, input.year),
    );
    let Some(clock) = FixedClock::from_ymd(2024, 1, 1) else {
        return;
    };
    let validator = FormValidator::with_clock(clock);

    let report = validator.validate(&values);
    assert_eq!(report, validator.validate(&values));
    assert_eq!(report.is_form_valid, report.results.all_valid());
    let _ = format!("{:?}", values);
});
