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

use dashmap::DashMap;
use log::debug;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Compiled template expressions shared by every phone number.
///
/// Keys come from user templates and sub-patterns, so the cache is bounded:
/// once `capacity` distinct expressions are held, it is emptied before the
/// next one is added. Regexes already handed out stay alive through their
/// `Arc`.
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>,
    capacity: usize,
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        // compile outside of the map so a broken expression never takes a slot
        let regex = Arc::new(regex::Regex::new(pattern)?);
        if self.cache.len() >= self.capacity {
            debug!("Regex cache reached {} expressions, clearing", self.capacity);
            self.cache.clear();
        }
        let entry = self.cache.entry(pattern.to_string()).or_insert(regex);
        Ok(entry.value().clone())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::RegexCache;

    #[test]
    fn same_expression_compiled_once() {
        let cache = RegexCache::with_capacity(4);
        let first = cache.get_regex(r"^(?<code>\d{3})$").unwrap();
        let second = cache.get_regex(r"^(?<code>\d{3})$").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn invalid_expression_is_not_cached() {
        let cache = RegexCache::with_capacity(4);
        assert!(cache.get_regex("^(?<code>\\d{3}$").is_err());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn cache_is_bounded_by_capacity() {
        let cache = RegexCache::with_capacity(8);
        let kept = cache.get_regex(r"^\d{1}$").unwrap();
        for width in 2..500 {
            cache.get_regex(&format!(r"^\d{{{width}}}$")).unwrap();
            assert!(cache.len() <= 8);
        }
        // handed out regexes keep working after eviction
        assert!(kept.is_match("5"));
        let again = cache.get_regex(r"^\d{1}$").unwrap();
        assert!(again.is_match("7"));
    }
}
