//! Integration tests for card_form.
//!
//! These cover whole-form submits, the shell state cycle, and the edge
//! cases of each field through the public API only.

use card_form::{
    batch, expiry, get_card_type, validate_card_holder_name, validate_card_number, validate_cvv,
    validate_expiration_date_at, CardType, ExpirationDate, ExpiryError, Field, FieldError,
    FixedClock, FormErrors, FormState, FormUpdate, FormValidator, FormValues, SubmitOutcome,
};

// =============================================================================
// FIXTURES
// =============================================================================

mod fixtures {
    pub const NAME: &str = "John Smith";
    pub const VISA: &str = "4111111111111111";
    pub const MASTERCARD: &str = "5500000000000004";
    pub const MASTERCARD_2SERIES: &str = "2223000048400011";
    pub const UNKNOWN: &str = "1234567890123456";
    pub const CVV: &str = "123";
}

fn jan_2024() -> FixedClock {
    FixedClock::from_ymd(2024, 1, 1).unwrap()
}

fn validator() -> FormValidator<FixedClock> {
    FormValidator::with_clock(jan_2024())
}

fn good_form() -> FormValues {
    FormValues::new(
        fixtures::NAME,
        fixtures::VISA,
        fixtures::CVV,
        ExpirationDate::new("06", "26"),
    )
}

// =============================================================================
// END-TO-END SUBMIT
// =============================================================================

#[test]
fn test_valid_submit_has_no_errors() {
    let report = validator().validate(&good_form());

    assert!(report.is_form_valid);
    for (field, result) in report.results.iter() {
        assert!(result.is_valid(), "{} should be valid", field);
        assert_eq!(result.error(), "", "{} should have no message", field);
    }
}

#[test]
fn test_every_field_reported_on_empty_submit() {
    let report = validator().validate(&FormValues::default());

    assert!(!report.is_form_valid);
    assert_eq!(report.results.invalid_fields(), Field::ALL.to_vec());
    let messages: Vec<&str> = report.results.iter().map(|(_, r)| r.error()).collect();
    assert_eq!(
        messages,
        [
            "Invalid name",
            "Invalid card number",
            "Invalid cvv number",
            "Invalid expiration date"
        ]
    );
}

#[test]
fn test_each_field_fails_independently() {
    let v = validator();

    let mut values = good_form();
    values.card_holder_name = "J".into();
    assert_eq!(v.validate(&values).results.invalid_fields(), [Field::CardHolderName]);

    let mut values = good_form();
    values.card_number = "4111".into();
    assert_eq!(v.validate(&values).results.invalid_fields(), [Field::CardNumber]);

    let mut values = good_form();
    values.cvv = "12a".into();
    assert_eq!(v.validate(&values).results.invalid_fields(), [Field::Cvv]);

    let mut values = good_form();
    values.expiration_date = ExpirationDate::new("01", "20");
    assert_eq!(v.validate(&values).results.invalid_fields(), [Field::ExpirationDate]);
}

#[test]
fn test_validate_is_idempotent() {
    let v = validator();
    let values = FormValues::new("Jane", "5500 0000 0000 0004", "99", ExpirationDate::new("13", "25"));
    let first = v.validate(&values);
    let second = v.validate(&values);
    assert_eq!(first, second);
    assert_eq!(first.results, second.results);
}

#[test]
fn test_form_ignores_card_network() {
    let mut values = good_form();
    values.card_number = fixtures::UNKNOWN.into();
    assert_eq!(get_card_type(&values.card_number), CardType::Unknown);
    assert!(validator().validate(&values).is_form_valid);
}

// =============================================================================
// FIELD EDGE CASES
// =============================================================================

#[test]
fn test_name_boundaries() {
    assert!(!validate_card_holder_name("abcde").is_valid());
    assert!(validate_card_holder_name("abcdef").is_valid());
    assert!(validate_card_holder_name("a    b").is_valid());
    assert!(!validate_card_holder_name("      ").is_valid());
    assert!(!validate_card_holder_name("John Smith!").is_valid());
    assert!(!validate_card_holder_name("John\nSmith").is_valid());
}

#[test]
fn test_card_number_examples() {
    assert!(validate_card_number("4111111111111111").is_valid());
    assert!(!validate_card_number("411111111111111").is_valid());
    assert!(!validate_card_number("4111 1111 1111 111a").is_valid());
    assert!(!validate_card_number("４１１１１１１１１１１１１１１１").is_valid());
}

#[test]
fn test_cvv_examples() {
    assert!(validate_cvv("123").is_valid());
    assert!(!validate_cvv("12").is_valid());
    assert!(!validate_cvv("12a").is_valid());
}

#[test]
fn test_expiration_examples() {
    let now = jan_2024();
    let check = |mm: &str, yy: &str| validate_expiration_date_at(&ExpirationDate::new(mm, yy), &now);

    assert!(!check("13", "25").is_valid());
    assert!(!check("01", "20").is_valid());
    assert!(check("06", "26").is_valid());
    assert!(!check("01", "35").is_valid());
}

#[test]
fn test_expiration_reasons_are_distinguishable() {
    let now = jan_2024();
    let detail =
        |mm: &str, yy: &str| expiry::check_expiration_date_at(&ExpirationDate::new(mm, yy), &now);

    assert_eq!(detail("13", "25"), Err(ExpiryError::InvalidMonth(13)));
    assert_eq!(detail("1", "25"), Err(ExpiryError::InvalidFormat));
    assert_eq!(detail("", "25"), Err(ExpiryError::Empty));
    assert!(matches!(detail("01", "20"), Err(ExpiryError::Expired { .. })));
    assert!(matches!(detail("01", "35"), Err(ExpiryError::TooFarFuture { .. })));
}

#[test]
fn test_expiration_window_moves_with_clock() {
    let date = ExpirationDate::new("06", "26");
    let before = FixedClock::from_ymd(2026, 5, 31).unwrap();
    let after = FixedClock::from_ymd(2026, 6, 2).unwrap();
    assert!(validate_expiration_date_at(&date, &before).is_valid());
    assert!(!validate_expiration_date_at(&date, &after).is_valid());
}

#[test]
fn test_field_error_messages_are_fixed() {
    assert_eq!(FieldError::InvalidName.message(), "Invalid name");
    assert_eq!(
        FieldError::from(ExpiryError::InvalidFormat),
        FieldError::InvalidExpirationDate
    );
}

// =============================================================================
// CARD TYPE
// =============================================================================

#[test]
fn test_card_type_examples() {
    assert_eq!(get_card_type(fixtures::VISA).to_string(), "Visa");
    assert_eq!(get_card_type(fixtures::MASTERCARD).to_string(), "Mastercard");
    assert_eq!(get_card_type(fixtures::MASTERCARD_2SERIES), CardType::Mastercard);
    assert_eq!(get_card_type(fixtures::UNKNOWN).to_string(), "Unknown card");
}

// =============================================================================
// SHELL STATE CYCLE
// =============================================================================

#[test]
fn test_state_cycle() {
    let v = validator();
    let mut state = FormState::new();

    state.apply(FormUpdate::CardHolderName(fixtures::NAME.into()));
    state.apply(FormUpdate::CardNumber(fixtures::VISA.into()));
    state.apply(FormUpdate::Cvv("12".into()));
    state.apply(FormUpdate::ExpirationMonth("06".into()));
    state.apply(FormUpdate::ExpirationYear("26".into()));

    // Nothing is validated while typing.
    assert_eq!(state.errors(), &FormErrors::default());

    let outcome = state.submit(&v);
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            first_invalid: Field::Cvv
        }
    );
    assert!(state.summary_visible());

    state.apply(FormUpdate::Cvv(fixtures::CVV.into()));
    match state.submit(&v) {
        SubmitOutcome::Accepted(values) => assert_eq!(values, good_form()),
        other => panic!("expected Accepted, got {:?}", other),
    }
    assert!(!state.summary_visible());
}

// =============================================================================
// BATCH
// =============================================================================

#[test]
fn test_batch_counts() {
    let forms = vec![good_form(), FormValues::default(), good_form()];
    assert_eq!(batch::count_valid(&validator(), &forms), (2, 1));
}

// =============================================================================
// SECURITY
// =============================================================================

#[test]
fn test_debug_never_exposes_card_data() {
    let values = good_form();
    let debug = format!("{:?}", values);
    assert!(!debug.contains(fixtures::VISA));
    assert!(!debug.contains("\"123\""));

    let state = FormState::with_values(values);
    let debug = format!("{:?}", state);
    assert!(!debug.contains(fixtures::VISA));
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn test_report_json_shape() {
        let mut values = good_form();
        values.cvv = "1".into();
        let report = validator().validate(&values);
        let json = serde_json::to_value(report).unwrap();

        assert_eq!(json["isFormValid"], false);
        assert_eq!(json["results"]["cvv"]["isValid"], false);
        assert_eq!(json["results"]["cvv"]["error"], "Invalid cvv number");
        assert_eq!(json["results"]["cardHolderName"]["error"], "");
    }

    #[test]
    fn test_report_json_reads_back() {
        let mut values = good_form();
        values.card_number = "4111".into();
        values.expiration_date = ExpirationDate::new("01", "20");
        let report = validator().validate(&values);

        let json = serde_json::to_string(&report).unwrap();
        let back: card_form::FormReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert_eq!(
            back.results.invalid_fields(),
            [Field::CardNumber, Field::ExpirationDate]
        );
    }

    #[test]
    fn test_result_json_rejects_broken_verdicts() {
        use card_form::ValidationResult;

        let read = |json: &str| serde_json::from_str::<ValidationResult>(json);

        assert_eq!(read(r#"{"isValid":true,"error":""}"#).unwrap(), ValidationResult::valid());
        assert_eq!(read(r#"{"isValid":true}"#).unwrap(), ValidationResult::valid());
        assert_eq!(
            read(r#"{"isValid":false,"error":"Invalid name"}"#).unwrap(),
            ValidationResult::invalid(FieldError::InvalidName)
        );
        assert!(read(r#"{"isValid":true,"error":"Invalid name"}"#).is_err());
        assert!(read(r#"{"isValid":false,"error":""}"#).is_err());
        assert!(read(r#"{"isValid":false,"error":"Bad name"}"#).is_err());
    }

    #[test]
    fn test_values_accept_short_expiry_keys() {
        let values: FormValues = serde_json::from_str(
            r#"{"cardHolderName":"John Smith","cardNumber":"4111111111111111","cvv":"123","expirationDate":{"mm":"06","yy":"26"}}"#,
        )
        .unwrap();
        assert_eq!(values, good_form());
    }

    #[test]
    fn test_values_missing_fields_default_to_empty() {
        let values: FormValues = serde_json::from_str(r#"{"cvv":"123"}"#).unwrap();
        assert_eq!(values.cvv, "123");
        assert_eq!(values.card_number, "");
        assert_eq!(values.expiration_date, ExpirationDate::default());
    }
}
