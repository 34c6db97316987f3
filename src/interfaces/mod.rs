use crate::pattern::CompiledPattern;

/// Groups captured by a compiled pattern. A group is `None` when it did
/// not take part in the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extraction<'a> {
    pub code: Option<&'a str>,
    pub number: Option<&'a str>,
}

/// Internal matching API used to isolate the regex engine from the
/// phone number logic, so a different implementation can be swapped in.
pub(crate) trait PatternMatcher: Send + Sync {
    /// Matches the whole input against the compiled pattern and returns
    /// its groups, or `None` when the input does not match or the
    /// pattern cannot be compiled.
    fn extract<'a>(&self, input: &'a str, compiled: &CompiledPattern) -> Option<Extraction<'a>>;
}
