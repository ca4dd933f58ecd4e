//! WebAssembly bindings for a browser form shell.
//!
//! Results come back as plain JavaScript objects shaped the way a shell
//! renders them: `{ isValid, error }` per field, and
//! `{ results: { cardHolderName, cardNumber, cvv, expirationDate }, isFormValid }`
//! for a whole form.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { validateForm, getCardType } from 'card_form';
//!
//! await init();
//!
//! const report = validateForm("John Smith", "4111111111111111", "123", "06", "26");
//! if (!report.isFormValid) {
//!     console.log(report.results.cvv.error);
//! }
//!
//! getCardType("5500000000000004"); // "Mastercard"
//! ```

#![cfg(feature = "wasm")]

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::expiry::ExpirationDate;
use crate::form::{FormReport, FormValidator, FormValues};
use crate::validate::ValidationResult;

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

fn result_object(result: &ValidationResult) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    set(&obj, "isValid", &JsValue::from_bool(result.is_valid()))?;
    set(&obj, "error", &JsValue::from_str(result.error()))?;
    Ok(obj.into())
}

fn report_object(report: &FormReport) -> Result<JsValue, JsValue> {
    let results = Object::new();
    for (field, result) in report.results.iter() {
        set(&results, field.key(), &result_object(result)?)?;
    }

    let obj = Object::new();
    set(&obj, "results", &results)?;
    set(&obj, "isFormValid", &JsValue::from_bool(report.is_form_valid))?;
    Ok(obj.into())
}

/// Validates a cardholder name.
#[wasm_bindgen(js_name = validateCardHolderName)]
pub fn validate_card_holder_name(name: &str) -> Result<JsValue, JsValue> {
    result_object(&crate::validate::validate_card_holder_name(name))
}

/// Validates a card number.
#[wasm_bindgen(js_name = validateCardNumber)]
pub fn validate_card_number(number: &str) -> Result<JsValue, JsValue> {
    result_object(&crate::validate::validate_card_number(number))
}

/// Validates a CVV.
#[wasm_bindgen(js_name = validateCvv)]
pub fn validate_cvv(cvv: &str) -> Result<JsValue, JsValue> {
    result_object(&crate::validate::validate_cvv(cvv))
}

/// Validates an expiration date against the browser's local time.
#[wasm_bindgen(js_name = validateExpirationDate)]
pub fn validate_expiration_date(month: &str, year: &str) -> Result<JsValue, JsValue> {
    result_object(&crate::expiry::validate_expiration_date(&ExpirationDate::new(
        month, year,
    )))
}

/// Validates a whole form on submit.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(
    card_holder_name: &str,
    card_number: &str,
    cvv: &str,
    month: &str,
    year: &str,
) -> Result<JsValue, JsValue> {
    let values = FormValues::new(
        card_holder_name,
        card_number,
        cvv,
        ExpirationDate::new(month, year),
    );
    report_object(&FormValidator::new().validate(&values))
}

/// Returns "Visa", "Mastercard" or "Unknown card".
#[wasm_bindgen(js_name = getCardType)]
pub fn get_card_type(number: &str) -> String {
    crate::detect::get_card_type(number).name().to_string()
}
