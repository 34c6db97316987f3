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

use protobuf::{Message, MessageField};

use crate::{
    pattern::{CompiledPattern, PatternConfig, PatternSettings},
    phone::{
        errors::RecordError,
        helper_constants::{DEFAULT_CODE_PATTERN, DEFAULT_NUMBER_PATTERN},
    },
    proto_gen::phone_record::{StoredPatternSettings, StoredPhone},
};

/// Plain snapshot of a phone number: code, number and pattern settings.
///
/// Produced by `PhoneNumber::to_record` and applied back with
/// `PhoneNumber::apply_record`. Parts set to `None` are left untouched when
/// the record is applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhoneRecord {
    pub code: Option<i64>,
    pub number: Option<String>,
    pub pattern_settings: Option<PatternSettings>,
}

impl PhoneRecord {
    /// Encodes the record as a protobuf `StoredPhone` message.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        let mut stored = StoredPhone::new();
        stored.code = self.code;
        stored.number = self.number.clone();
        stored.pattern_settings = match &self.pattern_settings {
            Some(settings) => MessageField::some(stored_settings(settings)),
            None => MessageField::none(),
        };
        stored.write_to_bytes().map_err(RecordError::Encode)
    }

    /// Decodes a record written by [`PhoneRecord::to_bytes`].
    ///
    /// Sub-patterns missing from the message fall back to the defaults; the
    /// compiled pattern is restored as written, without recompiling.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        let stored = StoredPhone::parse_from_bytes(bytes).map_err(RecordError::Decode)?;
        Ok(Self {
            code: stored.code,
            number: stored.number,
            pattern_settings: stored.pattern_settings.into_option().map(settings_from_stored),
        })
    }
}

fn stored_settings(settings: &PatternSettings) -> StoredPatternSettings {
    let mut stored = StoredPatternSettings::new();
    stored.pattern = settings.config.pattern.clone();
    stored.code_pattern = Some(settings.config.code_pattern.clone());
    stored.number_pattern = Some(settings.config.number_pattern.clone());
    stored.compiled_pattern = settings
        .compiled
        .as_ref()
        .map(|compiled| compiled.expression().to_owned());
    stored
}

fn settings_from_stored(stored: StoredPatternSettings) -> PatternSettings {
    PatternSettings {
        config: PatternConfig {
            pattern: stored.pattern,
            code_pattern: stored.code_pattern.unwrap_or_else(|| DEFAULT_CODE_PATTERN.to_owned()),
            number_pattern: stored.number_pattern.unwrap_or_else(|| DEFAULT_NUMBER_PATTERN.to_owned()),
        },
        compiled: stored.compiled_pattern.map(CompiledPattern::from_expression),
    }
}
