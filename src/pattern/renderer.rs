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

use std::{borrow::Cow, collections::HashMap};

use regex::Captures;

use crate::{
    phone::{helper_constants::DISPLAY_UNESCAPES, phone_regexps::PHONE_REGEXPS},
    string_util::replace_pairs,
};

use super::enums::Placeholder;

/// Turns a stored template into display form: `\+`, `\s`, `\(`, `\)` become
/// `+`, space, `(`, `)`.
pub fn unescape_display(template: &str) -> Cow<'_, str> {
    replace_pairs(template, &DISPLAY_UNESCAPES)
}

/// Digits of `number` picked by `positions`.
///
/// Each character of `positions` is a separate 1-based index, so `"12"`
/// selects the first and second characters and `"10"` selects only the
/// first one. Index `0` and indices past the end contribute nothing.
pub fn select_positions(number: &str, positions: &str) -> String {
    positions
        .chars()
        .filter_map(|position| position.to_digit(10))
        .filter(|&position| position >= 1)
        .filter_map(|position| number.chars().nth(position as usize - 1))
        .collect()
}

/// Renders a display template.
///
/// `{code}` and `{number}` take the whole values, every `{numberD+}` takes
/// the digits picked by [`select_positions`]. Substitution is a single pass
/// over the template, so substituted values are never scanned again.
pub fn render(template: &str, code: Option<i64>, number: Option<&str>) -> String {
    let mut code_buf = itoa::Buffer::new();
    let code = match code {
        Some(code) => code_buf.format(code),
        None => "",
    };
    let number = number.unwrap_or("");

    let mut replacements: HashMap<Cow<'_, str>, String> = HashMap::new();
    replacements.insert(Cow::Borrowed(Placeholder::Code.token()), code.to_owned());
    replacements.insert(Cow::Borrowed(Placeholder::Number.token()), number.to_owned());

    for captures in PHONE_REGEXPS.positional_placeholder_pattern.captures_iter(template) {
        let positions = &captures["positions"];
        replacements
            .entry(Cow::Owned(fast_cat::concat_str!("{number", positions, "}")))
            .or_insert_with(|| select_positions(number, positions));
    }

    PHONE_REGEXPS
        .substitution_token_pattern
        .replace_all(template, |captures: &Captures<'_>| {
            let token = &captures[0];
            replacements
                .get(token)
                .cloned()
                .unwrap_or_else(|| token.to_owned())
        })
        .into_owned()
}

/// Rendering without a template: code and number glued together and
/// trimmed.
pub fn render_plain(code: Option<i64>, number: Option<&str>) -> String {
    let mut code_buf = itoa::Buffer::new();
    let code = match code {
        Some(code) => code_buf.format(code),
        None => "",
    };
    fast_cat::concat_str!(code, number.unwrap_or("")).trim().to_owned()
}
