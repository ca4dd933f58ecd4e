//! Card network lookup example.
//!
//! Run with: `cargo run --example card_type`

use card_form::get_card_type;

fn main() {
    println!("=== Card Type Lookup ===\n");

    let numbers = [
        ("4111111111111111", "Visa test card"),
        ("5500000000000004", "Mastercard classic range"),
        ("2223000048400011", "Mastercard 2-series"),
        ("550000000000000", "Mastercard prefix, 15 digits"),
        ("378282246310005", "American Express"),
        ("1234567890123456", "No network"),
    ];

    for (number, description) in numbers {
        println!("  {} - {}: {}", number, description, get_card_type(number));
    }
}
