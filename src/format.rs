//! Input normalization and character-class checks shared by the field
//! validators.
//!
//! Whitespace is the set a browser's `\s` matches: Unicode `White_Space`
//! plus U+FEFF, minus U+0085 (NEXT LINE).

/// Removes every whitespace character from the input.
///
/// # Example
///
/// ```
/// use card_form::format::strip_whitespace;
///
/// assert_eq!(strip_whitespace("4111 1111\t1111 1111"), "4111111111111111");
/// assert_eq!(strip_whitespace("  "), "");
/// ```
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|&c| !is_form_whitespace(c)).collect()
}

/// Returns true for characters a browser's `\s` matches.
///
/// ```
/// use card_form::format::is_form_whitespace;
///
/// assert!(is_form_whitespace('\u{FEFF}'));
/// assert!(!is_form_whitespace('\u{0085}'));
/// ```
pub const fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Returns true if nothing but whitespace remains after stripping.
///
/// # Example
///
/// ```
/// use card_form::format::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \n "));
/// assert!(!is_blank(" a "));
/// ```
#[inline]
pub fn is_blank(input: &str) -> bool {
    input.chars().all(is_form_whitespace)
}

/// Returns true if the input is non-empty and made only of ASCII digits.
#[inline]
pub fn is_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if the input is non-empty and made only of ASCII letters,
/// spaces, hyphens and underscores.
#[inline]
pub fn is_name_text(input: &str) -> bool {
    !input.is_empty()
        && input
            .bytes()
            .all(|b| b.is_ascii_alphabetic() || matches!(b, b' ' | b'_' | b'-'))
}

/// Returns true if the stripped input is exactly `len` ASCII digits.
///
/// This is the shared shape check behind card number, CVV and the two
/// expiration parts.
pub fn is_digit_field(input: &str, len: usize) -> bool {
    let stripped = strip_whitespace(input);
    stripped.len() == len && is_digits(&stripped)
}

/// Groups a 16-digit number in blocks of four for display.
///
/// Input that is not a plain digit string is returned unchanged.
///
/// # Example
///
/// ```
/// use card_form::format::group_digits;
///
/// assert_eq!(group_digits("4111111111111111"), "4111 1111 1111 1111");
/// assert_eq!(group_digits("41x1"), "41x1");
/// ```
pub fn group_digits(input: &str) -> String {
    if !is_digits(input) {
        return input.to_string();
    }

    let mut result = String::with_capacity(input.len() + input.len() / 4);
    for (i, c) in input.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}
