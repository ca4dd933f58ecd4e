//! Whole-form validation example.
//!
//! Run with: `cargo run --example submit`

use card_form::{ExpirationDate, FormValidator, FormValues};

fn main() {
    println!("=== Card Form Submit ===\n");

    let validator = FormValidator::new();

    let submissions = [
        (
            "Complete form",
            FormValues::new("John Smith", "4111111111111111", "123", ExpirationDate::new("12", "30")),
        ),
        (
            "Short name, bad CVV",
            FormValues::new("Jo", "4111111111111111", "12a", ExpirationDate::new("12", "30")),
        ),
        (
            "Expired card",
            FormValues::new("Jane Doe", "5500000000000004", "321", ExpirationDate::new("01", "20")),
        ),
        (
            "Empty form",
            FormValues::default(),
        ),
    ];

    for (description, values) in &submissions {
        println!("{}: {:?}", description, values);

        let report = validator.validate(values);
        if report.is_form_valid {
            println!("  Accepted");
        } else {
            println!("  Please enter valid data");
            for (field, result) in report.results.iter() {
                if !result.is_valid() {
                    println!("    {}: {}", field.label(), result.error());
                }
            }
        }
        println!();
    }
}
