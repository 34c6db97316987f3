/// Template used until `set_pattern` is called.
pub const DEFAULT_PATTERN: &'static str = "+7{code}{number}";
/// Default sub-pattern for the code part of a template.
pub const DEFAULT_CODE_PATTERN: &'static str = r"\d{3}";
/// Default sub-pattern for the number part of a template.
pub const DEFAULT_NUMBER_PATTERN: &'static str = r"\d{7}";

/// Distinct template expressions kept compiled at once.
pub const REGEX_CACHE_CAPACITY: usize = 128;

pub const CODE_GROUP: &'static str = "code";
pub const NUMBER_GROUP: &'static str = "number";

// Characters dropped from raw input before the fallback extraction. Only
// these are removed, so dots, slashes and letters still make the input
// non-numeric.
pub const STRIPPED_CHARS: [char; 8] = ['(', ')', ' ', '+', '-', '_', '[', ']'];

// Fallback shape of a raw number: an optional trunk digit, three code digits
// and seven number digits. The leading class is kept exactly as `[7|8]`, so
// the pipe itself is a valid trunk character.
pub const FALLBACK_PHONE_PATTERN: &'static str = "[7|8]?(?<code>[0-9]{3})(?<number>[0-9]{7})";

// `is_numeric` grammar for strings: surrounding whitespace, sign, integer or
// decimal mantissa and an optional exponent. ASCII digits only.
pub const NUMERIC_TOKEN_PATTERN: &'static str =
    r"^[ \t\n\r\x0B\x0C]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$";

// Positional placeholders such as `{number12}`, searched case-insensitively.
pub const POSITIONAL_PLACEHOLDER_PATTERN: &'static str = r"(?i)\{number(?<positions>[0-9]+)\}";
// Every token a rendered template can substitute.
pub const SUBSTITUTION_TOKEN_PATTERN: &'static str = r"\{(?:code|number[0-9]*)\}";

// Regex-escaped punctuation a stored template may carry for matching, and
// the display characters it renders as.
pub const DISPLAY_UNESCAPES: [(&'static str, &'static str); 4] = [
    (r"\+", "+"),
    (r"\s", " "),
    (r"\(", "("),
    (r"\)", ")"),
];
