//! Pattern compilation and matching

use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid pattern: {0}")]
    Invalid(#[from] regex::Error),
}

/// A pattern compiled once, before any search work begins.
///
/// An empty (or all-whitespace) pattern string is the match-any mode: the
/// caller wants any address and no search loop is needed. A pattern using
/// characters outside the base58 alphabet compiles fine but can never match
/// an address; such a search only terminates via cancellation.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Option<Regex>,
}

impl CompiledPattern {
    /// Compile a regex pattern. Surrounding whitespace is ignored; an empty
    /// pattern yields the match-any mode.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Ok(Self::any());
        }
        Ok(Self { regex: Some(Regex::new(trimmed)?) })
    }

    /// The match-any mode: accept any address, no search needed
    pub fn any() -> Self {
        Self { regex: None }
    }

    /// True when any address is acceptable
    pub fn is_match_any(&self) -> bool {
        self.regex.is_none()
    }

    /// Test a candidate address
    pub fn matches(&self, address: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(address),
            None => true,
        }
    }

    /// The pattern source, empty for match-any
    pub fn as_str(&self) -> &str {
        self.regex.as_ref().map(|r| r.as_str()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_match() {
        let pattern = CompiledPattern::compile("^1A").unwrap();
        assert!(pattern.matches("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"));
        assert!(!pattern.matches("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"));
    }

    #[test]
    fn test_substring_match() {
        let pattern = CompiledPattern::compile("cafe").unwrap();
        assert!(pattern.matches("1xxcafexx"));
        assert!(!pattern.matches("1xxxxxx"));
    }

    #[test]
    fn test_empty_pattern_is_match_any() {
        let pattern = CompiledPattern::compile("").unwrap();
        assert!(pattern.is_match_any());
        assert!(pattern.matches("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"));

        let padded = CompiledPattern::compile("   ").unwrap();
        assert!(padded.is_match_any());
    }

    #[test]
    fn test_invalid_pattern_rejected_at_compile() {
        assert!(matches!(
            CompiledPattern::compile("[unterminated"),
            Err(PatternError::Invalid(_))
        ));
    }

    #[test]
    fn test_compiled_pattern_is_not_match_any() {
        let pattern = CompiledPattern::compile("^1A").unwrap();
        assert!(!pattern.is_match_any());
        assert_eq!(pattern.as_str(), "^1A");
    }
}
