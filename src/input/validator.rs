use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Optional sign followed by one or more digits
    static ref INTEGER_PATTERN: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();

    /// Optional sign, digits and at most one decimal point anywhere among them
    static ref FLOAT_PATTERN: Regex = Regex::new(r"^[+-]?[0-9]*\.?[0-9]*$").unwrap();
}

/// Check if text is a plain decimal integer such as "42", "-5" or "+7"
pub fn is_integer(text: &str) -> bool {
    INTEGER_PATTERN.is_match(text)
}

/// Check if text is a decimal number such as "3.14", "-0.5", "5." or "42"
/// At least one digit is required, so "." and "+" are rejected.
pub fn is_float(text: &str) -> bool {
    FLOAT_PATTERN.is_match(text) && text.bytes().any(|b| b.is_ascii_digit())
}
