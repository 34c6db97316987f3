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

use crate::phone::helper_constants::{DEFAULT_CODE_PATTERN, DEFAULT_NUMBER_PATTERN, DEFAULT_PATTERN};

use super::compiler::compile_pattern;

/// Raw pattern settings as given by the user.
///
/// Changing these fields does not touch the compiled pattern of the owning
/// [`PatternSettings`]; only [`PatternSettings::from_config`] (used by
/// `PhoneNumber::set_pattern`) compiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternConfig {
    /// Display/extraction template, e.g. `+7 ({code}) {number}`.
    pub pattern: Option<String>,
    /// Expression the `{code}` placeholder matches.
    pub code_pattern: String,
    /// Expression the `{number}` placeholder matches.
    pub number_pattern: String,
}

impl PatternConfig {
    pub fn new(
        pattern: impl Into<String>,
        code_pattern: impl Into<String>,
        number_pattern: impl Into<String>,
    ) -> Self {
        Self {
            pattern: Some(pattern.into()),
            code_pattern: code_pattern.into(),
            number_pattern: number_pattern.into(),
        }
    }

    /// Compiles the current fields, `None` when there is no template.
    pub fn compile(&self) -> Option<CompiledPattern> {
        self.pattern
            .as_deref()
            .map(|pattern| compile_pattern(pattern, &self.code_pattern, &self.number_pattern))
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN, DEFAULT_CODE_PATTERN, DEFAULT_NUMBER_PATTERN)
    }
}

/// Anchored extraction expression with `code` and `number` named groups.
///
/// Only the expression text is kept. The regex behind it is compiled when
/// it is first matched, so a broken sub-pattern shows up as a failed match
/// rather than at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompiledPattern {
    expression: String,
}

impl CompiledPattern {
    /// Wraps an expression that was compiled elsewhere (e.g. read back from
    /// a record). It is not checked against any template.
    pub fn from_expression(expression: impl Into<String>) -> Self {
        Self { expression: expression.into() }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }
}

/// Pattern settings owned by a phone number: the raw config and the
/// compiled pattern derived from it the last time it was set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatternSettings {
    pub config: PatternConfig,
    pub compiled: Option<CompiledPattern>,
}

impl PatternSettings {
    /// Settings with `config` compiled right away.
    pub fn from_config(config: PatternConfig) -> Self {
        let compiled = config.compile();
        Self { config, compiled }
    }

    pub fn has_pattern(&self) -> bool {
        self.compiled.is_some()
    }
}
