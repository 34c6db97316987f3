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

use std::sync::Arc;

use log::{error, trace};
use regex::Regex;

use crate::{
    interfaces::{Extraction, PatternMatcher},
    pattern::CompiledPattern,
    phone::helper_constants::{CODE_GROUP, NUMBER_GROUP, REGEX_CACHE_CAPACITY},
    regexp_cache::{InvalidRegexError, RegexCache},
};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(REGEX_CACHE_CAPACITY) }
    }

    /// Number of compiled expressions currently kept.
    #[cfg(test)]
    pub fn cached_expressions(&self) -> usize {
        self.cache.len()
    }

    fn regex_for(&self, compiled: &CompiledPattern) -> Result<Arc<Regex>, InvalidRegexError> {
        self.cache.get_regex(compiled.expression())
    }
}

impl PatternMatcher for RegexBasedMatcher {
    fn extract<'a>(&self, input: &'a str, compiled: &CompiledPattern) -> Option<Extraction<'a>> {
        let regex = match self.regex_for(compiled) {
            Ok(regex) => regex,
            Err(err) => {
                error!("Invalid regex! {}: {}", compiled.expression(), err);
                return None;
            }
        };
        let Some(captures) = regex.captures(input) else {
            trace!("Input {:?} does not match {}", input, compiled.expression());
            return None;
        };
        Some(Extraction {
            code: captures.name(CODE_GROUP).map(|m| m.as_str()),
            number: captures.name(NUMBER_GROUP).map(|m| m.as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RegexBasedMatcher;
    use crate::phone::helper_constants::REGEX_CACHE_CAPACITY;
    use crate::{interfaces::PatternMatcher, pattern::{compile_pattern, CompiledPattern}};

    #[test]
    fn extracts_named_groups() {
        let matcher = RegexBasedMatcher::new();
        let compiled = compile_pattern("+7({code})-{number}", r"\d{3}", r"\d{7}");
        let extraction = matcher.extract("+7(495)-1234567", &compiled).unwrap();
        assert_eq!(extraction.code, Some("495"));
        assert_eq!(extraction.number, Some("1234567"));
    }

    #[test]
    fn match_is_anchored() {
        let matcher = RegexBasedMatcher::new();
        let compiled = compile_pattern("{code}{number}", r"\d{3}", r"\d{7}");
        assert!(matcher.extract("4951234567", &compiled).is_some());
        assert!(matcher.extract("74951234567", &compiled).is_none());
        assert!(matcher.extract("4951234567 ", &compiled).is_none());
    }

    #[test]
    fn missing_group_is_none() {
        let matcher = RegexBasedMatcher::new();
        let compiled = compile_pattern("{code}", r"\d{3}", r"\d{7}");
        let extraction = matcher.extract("495", &compiled).unwrap();
        assert_eq!(extraction.number, None);
    }

    #[test]
    fn broken_expression_never_matches() {
        let matcher = RegexBasedMatcher::new();
        let compiled = CompiledPattern::from_expression(r"^(?<code>(\d{3})$");
        assert!(matcher.extract("495", &compiled).is_none());
    }

    #[test]
    fn many_templates_keep_cache_bounded() {
        let matcher = RegexBasedMatcher::new();
        for tag in 0..5000 {
            let template = format!("{{code}}-{{number}}#{tag}");
            let compiled = compile_pattern(&template, r"\d{3}", r"\d{7}");
            assert!(matcher.extract(&format!("495-1234567#{tag}"), &compiled).is_some());
            assert!(matcher.cached_expressions() <= REGEX_CACHE_CAPACITY);
        }
    }
}
