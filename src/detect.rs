//! Card network lookup from the IIN prefix.
//!
//! This helper is independent of form validation: nothing in
//! [`crate::form`] calls it. It works on the raw string exactly as typed,
//! without stripping whitespace.
//!
//! # Rules
//!
//! | Network | Rule |
//! |---------|------|
//! | Visa | starts with `4` (any length, any tail) |
//! | Mastercard | exactly 16 digits, prefix 51-55 or 2221-2720 |
//! | Unknown card | everything else |

use std::fmt;

/// The card network a number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CardType {
    /// Visa - prefix 4.
    Visa,
    /// Mastercard - 51-55 and 2221-2720, 16 digits.
    Mastercard,
    /// No known network matched.
    #[cfg_attr(feature = "serde", serde(rename = "Unknown card"))]
    Unknown,
}

impl CardType {
    /// Returns the display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Unknown => "Unknown card",
        }
    }

    /// Returns true unless the type is [`CardType::Unknown`].
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Length a Mastercard number must have to be recognized.
const MASTERCARD_DIGITS: usize = 16;

/// Classifies a raw card number.
///
/// # Example
///
/// ```
/// use card_form::detect::{get_card_type, CardType};
///
/// assert_eq!(get_card_type("4111111111111111"), CardType::Visa);
/// assert_eq!(get_card_type("5500000000000004"), CardType::Mastercard);
/// assert_eq!(get_card_type("1234567890123456").to_string(), "Unknown card");
/// ```
pub fn get_card_type(number: &str) -> CardType {
    let bytes = number.as_bytes();

    if bytes.first() == Some(&b'4') {
        return CardType::Visa;
    }

    if bytes.len() == MASTERCARD_DIGITS
        && bytes.iter().all(u8::is_ascii_digit)
        && is_mastercard_prefix(bytes)
    {
        return CardType::Mastercard;
    }

    CardType::Unknown
}

/// Matches the Mastercard IIN ranges on ASCII digits.
///
/// Order matters: 2221-2229 is matched before the broader 22x0 patterns.
fn is_mastercard_prefix(digits: &[u8]) -> bool {
    matches!(
        digits,
        [b'5', b'1'..=b'5', ..]
            | [b'2', b'2', b'2', b'1'..=b'9', ..] // 2221-2229
            | [b'2', b'2', b'3'..=b'9', ..] // 2230-2299
            | [b'2', b'3'..=b'6', ..] // 2300-2699
            | [b'2', b'7', b'0'..=b'1', ..] // 2700-2719
            | [b'2', b'7', b'2', b'0', ..] // 2720
    )
}
