mod compiler;
pub mod enums;
mod pattern_settings;
pub(crate) mod renderer;

use std::sync::LazyLock;

pub use compiler::compile_pattern;
pub use enums::Placeholder;
pub use pattern_settings::{CompiledPattern, PatternConfig, PatternSettings};

use crate::regex_based_matcher::RegexBasedMatcher;

pub(crate) static PATTERN_MATCHER: LazyLock<RegexBasedMatcher> = LazyLock::new(|| {
    RegexBasedMatcher::new()
});
