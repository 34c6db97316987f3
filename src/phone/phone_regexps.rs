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

use std::sync::LazyLock;

use regex::Regex;

use super::helper_constants::{
    FALLBACK_PHONE_PATTERN, NUMERIC_TOKEN_PATTERN, POSITIONAL_PLACEHOLDER_PATTERN,
    SUBSTITUTION_TOKEN_PATTERN,
};

/// Constant expressions used by parsing and rendering. Built once per
/// process; user templates go through the regex cache instead.
pub(crate) struct PhoneRegExps {
    /// Optional trunk digit, 3 code digits, 7 number digits. Unanchored, the
    /// first match inside the digit string wins.
    pub fallback_phone_pattern: Regex,

    /// `is_numeric` for strings.
    pub numeric_token_pattern: Regex,

    /// Finds `{numberD+}` placeholders and captures the digit string.
    pub positional_placeholder_pattern: Regex,

    /// Finds every substitutable token of a display template.
    pub substitution_token_pattern: Regex,
}

impl PhoneRegExps {
    fn new() -> Self {
        Self {
            fallback_phone_pattern: Regex::new(FALLBACK_PHONE_PATTERN).unwrap(),
            numeric_token_pattern: Regex::new(NUMERIC_TOKEN_PATTERN).unwrap(),
            positional_placeholder_pattern: Regex::new(POSITIONAL_PLACEHOLDER_PATTERN).unwrap(),
            substitution_token_pattern: Regex::new(SUBSTITUTION_TOKEN_PATTERN).unwrap(),
        }
    }
}

pub(crate) static PHONE_REGEXPS: LazyLock<PhoneRegExps> = LazyLock::new(PhoneRegExps::new);

#[cfg(test)]
mod tests {
    #[test]
    fn check_regexps_are_compiling() {
        super::PhoneRegExps::new();
    }
}
