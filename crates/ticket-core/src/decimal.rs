//! Strict decimal validation for price / amount text.
//!
//! The accepted language is exactly: one or more ASCII digits,
//! optionally followed by a single dot and one or more ASCII digits
//! (`^\d+(\.\d+)?$`). No sign, no exponent, no whitespace, no bare or
//! trailing dot. `"0"`, `"007"`, `"100.5"` pass; `""`, `"."`, `"5."`,
//! `".5"`, `"1.2.3"`, `"abc"`, `"+1"` fail.

/// Returns true iff `s` is a strictly-positive-decimal literal as
/// defined above.
pub fn is_strict_decimal(s: &str) -> bool {
    match s.split_once('.') {
        // A second dot ends up in `fraction` and fails the digit scan.
        Some((integer, fraction)) => all_digits(integer) && all_digits(fraction),
        None => all_digits(s),
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
