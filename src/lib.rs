mod interfaces;
mod pattern;
mod phone;
/// This module is automatically generated from /resources/*.proto
mod proto_gen;
mod record;
mod regexp_cache;
mod regex_based_matcher;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use pattern::{compile_pattern, CompiledPattern, PatternConfig, PatternSettings, Placeholder};
pub use phone::{
    errors::{InvalidCodeError, RecordError},
    loose::{is_falsy, is_numeric_token, loose_equals, LooseValue},
    normalize, CodeValue, PhoneNumber,
};
pub use record::PhoneRecord;
