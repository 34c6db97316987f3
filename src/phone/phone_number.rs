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

use std::{borrow::Cow, fmt};

use log::trace;

use crate::{
    interfaces::PatternMatcher,
    pattern::{
        renderer::{render, render_plain, unescape_display},
        PatternConfig, PatternSettings, PATTERN_MATCHER,
    },
    record::PhoneRecord,
};

use super::{
    errors::InvalidCodeError,
    helper_constants::{DEFAULT_CODE_PATTERN, DEFAULT_NUMBER_PATTERN},
    helper_functions::extract_fallback,
    loose::{is_falsy, loose_equals, to_integer, LooseValue},
};

/// Value accepted as a code: an integer or a numeric string.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeValue<'a> {
    Int(i64),
    Text(Cow<'a, str>),
}

impl CodeValue<'_> {
    /// Integer value of the code. Numeric strings are truncated toward
    /// zero, so `"042"` gives `42` and `"1.9"` gives `1`.
    pub fn to_code(&self) -> Result<i64, InvalidCodeError> {
        match self {
            CodeValue::Int(code) => Ok(*code),
            CodeValue::Text(text) => to_integer(text).ok_or_else(|| InvalidCodeError::new(text.to_string())),
        }
    }
}

impl From<i64> for CodeValue<'_> {
    fn from(value: i64) -> Self {
        CodeValue::Int(value)
    }
}

impl From<i32> for CodeValue<'_> {
    fn from(value: i32) -> Self {
        CodeValue::Int(value.into())
    }
}

impl From<u32> for CodeValue<'_> {
    fn from(value: u32) -> Self {
        CodeValue::Int(value.into())
    }
}

impl From<u16> for CodeValue<'_> {
    fn from(value: u16) -> Self {
        CodeValue::Int(value.into())
    }
}

impl<'a> From<&'a str> for CodeValue<'a> {
    fn from(value: &'a str) -> Self {
        CodeValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for CodeValue<'a> {
    fn from(value: &'a String) -> Self {
        CodeValue::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for CodeValue<'_> {
    fn from(value: String) -> Self {
        CodeValue::Text(Cow::Owned(value))
    }
}

/// A phone number split into a country/region code and a subscriber number.
///
/// The number is kept as a string so its leading zeros survive; the code is
/// an integer and loses them (`"042"` is stored as `42`).
///
/// Every instance owns its own [`PatternSettings`]: a template such as
/// `+7 ({code}) {number}` used to render the number and, once set through
/// [`PhoneNumber::set_pattern`], to validate and parse strings.
///
/// ```
/// use phone_pattern::PhoneNumber;
///
/// let mut phone = PhoneNumber::from_parts(495, "1234567").unwrap();
/// assert_eq!(phone.to_string(), "+74951234567");
///
/// phone.set_pattern("+7 ({code}) {number123}-{number45}-{number67}");
/// assert_eq!(phone.to_string(), "+7 (495) 123-45-67");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PhoneNumber {
    code: Option<i64>,
    number: Option<String>,
    pattern_settings: PatternSettings,
}

impl PhoneNumber {
    /// An empty phone number with the default pattern settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// A phone number seeded with whichever parts are given. A missing part
    /// stays unset.
    ///
    /// ```
    /// use phone_pattern::PhoneNumber;
    ///
    /// let phone = PhoneNumber::create(None::<i64>, Some("1234567")).unwrap();
    /// assert_eq!(phone.code(), None);
    /// assert_eq!(phone.number(), Some("1234567"));
    /// ```
    pub fn create<'a, N: ToString>(
        code: Option<impl Into<CodeValue<'a>>>,
        number: Option<N>,
    ) -> Result<Self, InvalidCodeError> {
        let mut phone = Self::new();
        if let Some(code) = code {
            phone.set_code(code)?;
        }
        if let Some(number) = number {
            phone.set_number(number);
        }
        Ok(phone)
    }

    /// A phone number seeded with both code and number.
    pub fn from_parts<'a>(
        code: impl Into<CodeValue<'a>>,
        number: impl ToString,
    ) -> Result<Self, InvalidCodeError> {
        let mut phone = Self::new();
        phone.set_code(code)?.set_number(number);
        Ok(phone)
    }

    /// Extracts code and number from free-form input with the fixed
    /// fallback shape (`[7|8]?` + 3 code digits + 7 number digits) after
    /// dropping punctuation. Anything that does not fit gives an empty
    /// phone number.
    pub fn create_from_string(raw: &str) -> Self {
        let mut phone = Self::new();
        if let Some((code, number)) = extract_fallback(raw) {
            trace!("Extracted code {} and number {} from {:?}", code, number, raw);
            phone.code = to_integer(&code);
            phone.number = Some(number);
        }
        phone
    }

    /// Whether [`PhoneNumber::create_from_string`] finds both parts.
    pub fn is_valid_from_string(raw: &str) -> bool {
        !Self::create_from_string(raw).is_empty()
    }

    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// Sets the code from an integer or a numeric string. Fractional
    /// strings are truncated toward zero.
    pub fn set_code<'a>(&mut self, code: impl Into<CodeValue<'a>>) -> Result<&mut Self, InvalidCodeError> {
        self.code = Some(code.into().to_code()?);
        Ok(self)
    }

    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    /// Sets the number as given, without any validation.
    pub fn set_number(&mut self, number: impl ToString) -> &mut Self {
        self.number = Some(number.to_string());
        self
    }

    /// True when the code is missing or zero, or the number is missing,
    /// empty or `"0"`.
    pub fn is_empty(&self) -> bool {
        self.code.is_none_or(|code| code == 0)
            || self.number.as_deref().is_none_or(is_falsy)
    }

    pub fn pattern_settings(&self) -> &PatternSettings {
        &self.pattern_settings
    }

    /// Mutable access to the settings. Editing the config here does not
    /// recompile; the compiled pattern stays as it was until the next
    /// [`PhoneNumber::set_pattern`].
    pub fn pattern_settings_mut(&mut self) -> &mut PatternSettings {
        &mut self.pattern_settings
    }

    /// Replaces the settings with `pattern` and the default sub-patterns
    /// (`\d{3}` for the code, `\d{7}` for the number) and compiles them.
    pub fn set_pattern(&mut self, pattern: &str) -> &mut Self {
        self.set_pattern_with(pattern, DEFAULT_CODE_PATTERN, DEFAULT_NUMBER_PATTERN)
    }

    /// Replaces the settings with the given template and sub-patterns and
    /// compiles them. Sub-patterns are not checked here: a broken one makes
    /// every later match fail.
    pub fn set_pattern_with(
        &mut self,
        pattern: &str,
        code_pattern: &str,
        number_pattern: &str,
    ) -> &mut Self {
        let config = PatternConfig::new(pattern, code_pattern, number_pattern);
        self.pattern_settings = PatternSettings::from_config(config);
        self
    }

    pub fn has_pattern(&self) -> bool {
        self.pattern_settings.has_pattern()
    }

    /// Code and number of `s` as matched by the compiled pattern, if both
    /// are present and non-empty.
    fn matched_parts<'a>(&self, s: &'a str) -> Option<(&'a str, &'a str)> {
        let compiled = self.pattern_settings.compiled.as_ref()?;
        let extraction = PATTERN_MATCHER.extract(s, compiled)?;
        match (extraction.code, extraction.number) {
            (Some(code), Some(number)) if !is_falsy(code) && !is_falsy(number) => Some((code, number)),
            _ => None,
        }
    }

    /// Whether `s` matches the compiled pattern with a non-empty code and
    /// number. Always false before a pattern is set.
    pub fn is_valid(&self, s: &str) -> bool {
        self.matched_parts(s).is_some()
    }

    /// Sets code and number from `s` when it is valid for the compiled
    /// pattern, through the regular setters. Invalid input leaves the phone
    /// number unchanged.
    ///
    /// Fails with [`InvalidCodeError`] when the captured code is not numeric
    /// (possible with a custom code sub-pattern); neither part is changed
    /// then.
    pub fn fill_from_string(&mut self, s: &str) -> Result<&mut Self, InvalidCodeError> {
        let Some((code, number)) = self.matched_parts(s) else {
            trace!("Input {:?} is not valid for the compiled pattern", s);
            return Ok(self);
        };
        self.set_code(code)?.set_number(number);
        Ok(self)
    }

    /// Renders the phone number.
    ///
    /// With no pattern (or an empty one) the stored template is used, after
    /// turning its escaped punctuation (`\+`, `\s`, `\(`, `\)`) into plain
    /// characters. Without any template the result is code and number
    /// concatenated.
    pub fn format(&self, pattern: Option<&str>) -> String {
        let stored = self.pattern_settings.config.pattern.as_deref();
        let template = match (pattern, stored) {
            (None, Some(stored)) => Some(unescape_display(stored)),
            (Some(pattern), Some(stored)) if is_falsy(pattern) => Some(unescape_display(stored)),
            (pattern, _) => pattern.map(Cow::Borrowed),
        };
        match template {
            Some(template) => render(&template, self.code, self.number()),
            None => render_plain(self.code, self.number()),
        }
    }

    /// Snapshot of code, number and the current pattern settings.
    pub fn to_record(&self) -> PhoneRecord {
        PhoneRecord {
            code: self.code,
            number: self.number.clone(),
            pattern_settings: Some(self.pattern_settings.clone()),
        }
    }

    /// Applies the parts present in `record`. Settings are taken as they
    /// are, without recompiling.
    pub fn apply_record(&mut self, record: PhoneRecord) -> &mut Self {
        if let Some(code) = record.code {
            self.code = Some(code);
        }
        if let Some(number) = record.number {
            self.number = Some(number);
        }
        if let Some(pattern_settings) = record.pattern_settings {
            self.pattern_settings = pattern_settings;
        }
        self
    }

    /// Loose comparison of code and number: `"007"` and `7` are equal,
    /// pattern settings are ignored.
    pub fn equals(&self, other: &PhoneNumber) -> bool {
        loose_equals(LooseValue::from(self.code), LooseValue::from(other.code))
            && loose_equals(LooseValue::from(self.number()), LooseValue::from(other.number()))
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(None))
    }
}

impl From<PhoneRecord> for PhoneNumber {
    fn from(record: PhoneRecord) -> Self {
        let mut phone = Self::new();
        phone.apply_record(record);
        phone
    }
}
