//! Error types for match discovery.

use thiserror::Error;

/// Errors that can occur while locating matches.
///
/// The combine and gap-fill stages are infallible; the only failure point in
/// the pipeline is compiling a search term into a pattern.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A search term failed to compile as a regular expression.
    #[error("invalid search pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern after sanitization and escaping.
        pattern: String,
        /// Underlying regex compile error.
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    #[test]
    fn invalid_pattern_display() {
        let source = Regex::new("(").unwrap_err();
        let err = MatchError::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };
        let display = err.to_string();
        assert!(display.contains("invalid search pattern"));
        assert!(display.contains("`(`"));
    }
}
