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

use strum::IntoEnumIterator;

use super::{enums::Placeholder, pattern_settings::CompiledPattern};

/// Builds the anchored extraction expression of a template.
///
/// `{code}` and `{number}` become `(?<code>code_pattern)` and
/// `(?<number>number_pattern)`. Any other template text matches literally:
/// regex metacharacters are escaped, except backslash pairs such as `\+`
/// or `\s`, which are kept as written so templates stored in escaped form
/// behave the same as plain ones.
///
/// Sub-patterns are inserted verbatim and are not validated here.
pub fn compile_pattern(template: &str, code_pattern: &str, number_pattern: &str) -> CompiledPattern {
    let mut expression = String::with_capacity(
        template.len() + code_pattern.len() + number_pattern.len() + 24
    );
    expression.push('^');

    let mut rest = template;
    while let Some(current) = rest.chars().next() {
        if current == '\\' {
            match rest[1..].chars().next() {
                Some(escaped) => {
                    let len = 1 + escaped.len_utf8();
                    expression.push_str(&rest[..len]);
                    rest = &rest[len..];
                }
                None => {
                    // trailing lone backslash
                    expression.push_str(r"\\");
                    rest = "";
                }
            }
            continue;
        }

        if let Some(placeholder) = Placeholder::iter().find(|p| rest.starts_with(p.token())) {
            let sub_pattern = match placeholder {
                Placeholder::Code => code_pattern,
                Placeholder::Number => number_pattern,
            };
            expression.push_str("(?<");
            expression.push_str(placeholder.group_name());
            expression.push('>');
            expression.push_str(sub_pattern);
            expression.push(')');
            rest = &rest[placeholder.token().len()..];
            continue;
        }

        let len = current.len_utf8();
        expression.push_str(&regex::escape(&rest[..len]));
        rest = &rest[len..];
    }

    expression.push('$');
    CompiledPattern::from_expression(expression)
}
