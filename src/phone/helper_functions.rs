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

use std::borrow::Cow;

use log::trace;

use crate::string_util::{is_ascii_digits, strip_chars};

use super::{helper_constants::STRIPPED_CHARS, phone_regexps::PHONE_REGEXPS};

/// Drops the punctuation people type around phone numbers: `(`, `)`,
/// space, `+`, `-`, `_`, `[`, `]`. Nothing else is touched.
pub fn normalize(raw: &str) -> Cow<'_, str> {
    strip_chars(raw, &STRIPPED_CHARS)
}

/// Code and number found in a raw string by the fixed fallback shape:
/// optional `7`/`8` trunk digit, 3 code digits and 7 number digits.
///
/// Only inputs that are all digits after [`normalize`] are searched; the
/// first match inside them wins, extra digits around it are ignored.
pub fn extract_fallback(raw: &str) -> Option<(String, String)> {
    let normalized = normalize(raw);
    if !is_ascii_digits(&normalized) {
        trace!("Input {:?} is not numeric after normalization", raw);
        return None;
    }
    let captures = PHONE_REGEXPS.fallback_phone_pattern.captures(&normalized)?;
    Some((captures["code"].to_owned(), captures["number"].to_owned()))
}

#[cfg(test)]
mod tests {
    use super::{extract_fallback, normalize};

    #[test]
    fn normalization_removes_only_listed_chars() {
        assert_eq!(normalize("+7 (495) 123-45-67"), "74951234567");
        assert_eq!(normalize("[8]_495_1234567"), "84951234567");
        assert_eq!(normalize("495.123.4567"), "495.123.4567");
        assert_eq!(normalize("\t495"), "\t495");
        assert_eq!(normalize(""), "");
    }

    fn parts(code: &str, number: &str) -> Option<(String, String)> {
        Some((code.to_owned(), number.to_owned()))
    }

    #[test]
    fn fallback_shapes() {
        assert_eq!(extract_fallback("74951234567"), parts("495", "1234567"));
        assert_eq!(extract_fallback("84951234567"), parts("495", "1234567"));
        assert_eq!(extract_fallback("4951234567"), parts("495", "1234567"));
        assert_eq!(extract_fallback("+7 (495) 123-45-67"), parts("495", "1234567"));
        // the first ten digits win when no trunk digit leads
        assert_eq!(extract_fallback("123456789012"), parts("123", "4567890"));
    }

    #[test]
    fn fallback_rejects() {
        assert_eq!(extract_fallback("495123456"), None);
        assert_eq!(extract_fallback("495.1234567"), None);
        assert_eq!(extract_fallback("tel:4951234567"), None);
        assert_eq!(extract_fallback(""), None);
        assert_eq!(extract_fallback("\u{0664}\u{0669}\u{0665}1234567"), None);
    }
}
