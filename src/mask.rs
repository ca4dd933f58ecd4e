//! PCI-DSS friendly masking for card data in logs and debug output.
//!
//! Only the last four digits of a card number may ever be shown. The CVV
//! is never shown.

use crate::format::is_form_whitespace;

/// Masks a raw card number, keeping only the last four digits.
///
/// Every other digit or symbol is replaced with `*`; whitespace and hyphens
/// are kept so the grouping of the raw input stays readable. Inputs with
/// four digits or fewer are masked completely.
///
/// # Example
///
/// ```
/// use card_form::mask::mask_card_number;
///
/// assert_eq!(mask_card_number("4111111111111111"), "************1111");
/// assert_eq!(mask_card_number("4111 1111 1111 1111"), "**** **** **** 1111");
/// assert_eq!(mask_card_number("1234"), "****");
/// ```
pub fn mask_card_number(input: &str) -> String {
    let digit_count = input.chars().filter(|c| c.is_ascii_digit()).count();
    let visible_from = if digit_count > 4 { digit_count - 4 } else { usize::MAX };

    let mut seen = 0usize;
    input
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                let keep = seen >= visible_from;
                seen += 1;
                if keep {
                    c
                } else {
                    '*'
                }
            } else if is_form_whitespace(c) || c == '-' {
                c
            } else {
                '*'
            }
        })
        .collect()
}

/// Masks a CVV entirely.
///
/// # Example
///
/// ```
/// use card_form::mask::mask_cvv;
///
/// assert_eq!(mask_cvv("123"), "***");
/// assert_eq!(mask_cvv(""), "");
/// ```
#[inline]
pub fn mask_cvv(input: &str) -> String {
    "*".repeat(input.chars().count())
}
