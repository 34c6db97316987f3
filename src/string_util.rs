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

/// Removes every occurrence of the given characters from the string.
///
/// Returns `Cow::Borrowed` when nothing had to be removed, so already
/// compact input is not copied.
pub fn strip_chars<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| !chars.contains(c)).collect())
}

/// Replaces each `(from, to)` pair in one left-to-right pass.
pub fn replace_pairs<'a>(s: &'a str, pairs: &[(&str, &str)]) -> Cow<'a, str> {
    if !pairs.iter().any(|(from, _)| s.contains(from)) {
        return Cow::Borrowed(s);
    }
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    'outer: while !rest.is_empty() {
        for (from, to) in pairs {
            if let Some(stripped) = rest.strip_prefix(from) {
                result.push_str(to);
                rest = stripped;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            result.push(c);
        }
        rest = chars.as_str();
    }
    Cow::Owned(result)
}

/// True for a non-empty string made of ASCII decimal digits only.
pub fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
