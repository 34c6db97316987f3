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

use strum::EnumIter;

use crate::phone::helper_constants::{CODE_GROUP, NUMBER_GROUP};

/// Whole-part placeholders of a template. Positional `{numberD+}` tokens
/// are only meaningful for rendering and are handled by the renderer.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{code}`, the country/region code.
    Code,
    /// `{number}`, the full subscriber number.
    Number,
}

impl Placeholder {
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Code => "{code}",
            Placeholder::Number => "{number}",
        }
    }

    /// Name of the capture group the placeholder compiles into.
    pub fn group_name(self) -> &'static str {
        match self {
            Placeholder::Code => CODE_GROUP,
            Placeholder::Number => NUMBER_GROUP,
        }
    }
}
