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

use thiserror::Error;

/// Returned by `PhoneNumber::set_code` when the given value is not numeric.
///
/// This is the only failure of the phone number API; malformed phone
/// strings never raise, they leave the value empty or unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Code must be numeric, got {value:?}")]
pub struct InvalidCodeError {
    pub value: String,
}

impl InvalidCodeError {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// Failure to write or read a binary phone record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Failed to encode phone record: {0}")]
    Encode(#[source] protobuf::Error),
    #[error("Failed to decode phone record: {0}")]
    Decode(#[source] protobuf::Error),
}
