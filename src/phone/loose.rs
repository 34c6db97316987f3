// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Loose scalar semantics of phone values.
//!
//! Codes may arrive as integers or numeric strings and numbers as arbitrary
//! strings, so validation, emptiness and equality follow "loose" scalar rules:
//! a numeric string is compared by value, `null` equals the empty value of the
//! other side. The rules are spelled out here as named predicates instead of
//! being left to implicit conversions.

use super::phone_regexps::PHONE_REGEXPS;

/// A scalar taking part in a loose comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LooseValue<'a> {
    Null,
    Int(i64),
    Str(&'a str),
}

impl From<Option<i64>> for LooseValue<'_> {
    fn from(value: Option<i64>) -> Self {
        value.map_or(LooseValue::Null, LooseValue::Int)
    }
}

impl<'a> From<Option<&'a str>> for LooseValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(LooseValue::Null, LooseValue::Str)
    }
}

/// Whether the string is a numeric token: optional surrounding whitespace,
/// optional sign, a decimal mantissa and an optional exponent.
///
/// `"42"`, `"042"`, `" 1.5"`, `"-3"`, `"1e3"` are numeric; `""`, `"0x1A"`,
/// `"12a"`, `"."` are not.
pub fn is_numeric_token(s: &str) -> bool {
    PHONE_REGEXPS.numeric_token_pattern.is_match(s)
}

/// Integer value of a numeric token, truncated toward zero.
///
/// Integral tokens that overflow `i64` saturate, fractional and exponent
/// forms go through `f64`. Returns `None` for non-numeric input.
pub fn to_integer(s: &str) -> Option<i64> {
    if !is_numeric_token(s) {
        return None;
    }
    let token = s.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    let unsigned = token.trim_start_matches(['+', '-']);
    if unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Some(token.parse::<i64>().unwrap_or_else(|_| {
            if token.starts_with('-') { i64::MIN } else { i64::MAX }
        }));
    }
    // `as` saturates and maps NaN to zero
    token.parse::<f64>().ok().map(|value| value.trunc() as i64)
}

/// Emptiness of a string value: `""` and `"0"` are empty.
pub fn is_falsy(s: &str) -> bool {
    s.is_empty() || s == "0"
}

/// Value of a numeric token. Integral tokens that fit `i64` stay exact.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    fn equals(self, other: Numeric) -> bool {
        match (self, other) {
            (Numeric::Int(x), Numeric::Int(y)) => x == y,
            (x, y) => x.as_f64() == y.as_f64(),
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(value) => value as f64,
            Numeric::Float(value) => value,
        }
    }
}

/// Numeric value of a string for comparisons, if it is a numeric token.
fn numeric_value(s: &str) -> Option<Numeric> {
    if !is_numeric_token(s) {
        return None;
    }
    let token = s.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    if let Ok(value) = token.parse::<i64>() {
        return Some(Numeric::Int(value));
    }
    token.parse::<f64>().ok().map(Numeric::Float)
}

/// Loose equality of two scalars.
///
/// - `Null` equals `Null`, `Int(0)` and `Str("")`.
/// - An integer equals a numeric string of the same value, otherwise its
///   decimal form is compared with the string.
/// - Two numeric strings compare by value (`"007" == "7"`, `"1e1" == "10"`),
///   any other pair of strings compares byte-wise.
pub fn loose_equals(a: LooseValue<'_>, b: LooseValue<'_>) -> bool {
    use LooseValue::{Int, Null, Str};

    match (a, b) {
        (Null, Null) => true,
        (Null, Int(i)) | (Int(i), Null) => i == 0,
        (Null, Str(s)) | (Str(s), Null) => s.is_empty(),
        (Int(x), Int(y)) => x == y,
        (Int(i), Str(s)) | (Str(s), Int(i)) => match numeric_value(s) {
            Some(value) => value.equals(Numeric::Int(i)),
            None => {
                let mut buf = itoa::Buffer::new();
                buf.format(i) == s
            }
        },
        (Str(x), Str(y)) => match (numeric_value(x), numeric_value(y)) {
            (Some(x), Some(y)) => x.equals(y),
            _ => x == y,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{is_falsy, is_numeric_token, loose_equals, to_integer, LooseValue};

    #[test]
    fn numeric_tokens() {
        for token in ["42", "042", "-3", "+7", " 12", "12 ", "1.5", ".5", "5.", "1e3", "2E-2"] {
            assert!(is_numeric_token(token), "{token:?} should be numeric");
        }
        for token in ["", " ", ".", "abc", "12a", "0x1A", "1e", "--1", "1 2", "\u{0664}\u{0669}"] {
            assert!(!is_numeric_token(token), "{token:?} should not be numeric");
        }
    }

    #[test]
    fn integer_truncation() {
        assert_eq!(to_integer("42"), Some(42));
        assert_eq!(to_integer("042"), Some(42));
        assert_eq!(to_integer("1.9"), Some(1));
        assert_eq!(to_integer("-1.9"), Some(-1));
        assert_eq!(to_integer("1e3"), Some(1000));
        assert_eq!(to_integer(" 495 "), Some(495));
        assert_eq!(to_integer("99999999999999999999"), Some(i64::MAX));
        assert_eq!(to_integer("abc"), None);
    }

    #[test]
    fn falsy_strings() {
        assert!(is_falsy(""));
        assert!(is_falsy("0"));
        assert!(!is_falsy("00"));
        assert!(!is_falsy("000"));
        assert!(!is_falsy("1"));
    }

    #[test]
    fn loose_comparisons() {
        use LooseValue::{Int, Null, Str};

        assert!(loose_equals(Str("007"), Int(7)));
        assert!(loose_equals(Str("007"), Str("7")));
        assert!(loose_equals(Str("1234567"), Str("1234567.0")));
        assert!(loose_equals(Null, Int(0)));
        assert!(loose_equals(Null, Str("")));
        assert!(!loose_equals(Null, Str("0")));
        assert!(!loose_equals(Int(7), Str("7a")));
        assert!(!loose_equals(Str("abc"), Str("ABC")));
        assert!(loose_equals(Str("abc"), Str("abc")));
        assert!(!loose_equals(Int(1), Int(2)));
        assert!(loose_equals(Str("1e1"), Int(10)));
        assert!(loose_equals(Str(" 10"), Str("10.0")));
    }

    #[test]
    fn large_integers_compare_exactly() {
        use LooseValue::{Int, Str};

        assert!(!loose_equals(Int(9007199254740992), Str("9007199254740993")));
        assert!(!loose_equals(Str("9007199254740992"), Str("9007199254740993")));
        assert!(loose_equals(Int(9007199254740993), Str("9007199254740993")));
        assert!(loose_equals(Int(i64::MAX), Str("9223372036854775807")));
    }
}
