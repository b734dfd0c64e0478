//! Raw match discovery.
//!
//! The first pipeline stage: locate every occurrence of every search term in
//! the text and emit one raw chunk per occurrence. Raw chunks may overlap
//! arbitrarily (across terms, and with caller-supplied spans under the split
//! policy); resolving those overlaps is the combiner's job.

use log::trace;
use regex::{Regex, RegexBuilder};

use crate::{
    chunk::Chunk,
    error::MatchError,
    options::Options,
};

/// Characters escaped when `auto_escape` is set, so a term matches itself
/// literally.
const METACHARACTERS: [char; 16] = [
    '-', '[', ']', '/', '{', '}', '(', ')', '*', '+', '?', '.', '\\', '^', '$', '|',
];

/// A strategy for locating raw match intervals in text.
///
/// The pipeline is parameterized over this trait so callers can substitute
/// their own discovery logic (token-based matching, fuzzy matching, a
/// different pattern engine) while keeping the combine and gap-fill stages.
/// [`RegexFinder`] is the default implementation.
pub trait MatchFinder {
    /// Returns every raw match interval for `terms` in `text`, plus one
    /// interval per span in `options.spans` when the split policy is
    /// selected.
    ///
    /// Returned chunks may overlap and may arrive in any order; the combiner
    /// re-sorts. Their `highlight` flag is a placeholder and must be `false`.
    fn find_chunks(
        &self,
        text: &str,
        terms: &[&str],
        options: &Options,
    ) -> Result<Vec<Chunk>, MatchError>;
}

/// The default [`MatchFinder`], backed by the `regex` crate.
///
/// Terms are compiled as regular expressions (case-insensitive unless
/// configured otherwise, literal when `auto_escape` is set) and scanned for
/// leftmost-first, greedy, non-overlapping occurrences.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexFinder;

impl MatchFinder for RegexFinder {
    fn find_chunks(
        &self,
        text: &str,
        terms: &[&str],
        options: &Options,
    ) -> Result<Vec<Chunk>, MatchError> {
        let text = options.sanitized(text);
        let mut chunks = Vec::new();

        for (term_index, term) in terms.iter().enumerate() {
            let term = options.sanitized(term);
            if term.is_empty() {
                continue;
            }
            let pattern = if options.auto_escape {
                escape(&term)
            } else {
                term.into_owned()
            };
            let regex = compile(&pattern, options.case_sensitive)?;
            let found_before = chunks.len();
            scan(&regex, &text, |start, end| {
                chunks.push(if options.split_intersecting {
                    Chunk::from_term(start, end, term_index)
                } else {
                    Chunk::new(start, end)
                });
            });
            trace!(
                "term {term_index} `{pattern}` matched {} times",
                chunks.len() - found_before
            );
        }

        // Spans only carry meaning under the split policy; the merge policy
        // has no use for their provenance.
        if options.split_intersecting {
            for (span_index, span) in options.spans.iter().enumerate() {
                chunks.push(Chunk::from_span(span.start, span.end, span_index));
            }
        }

        Ok(chunks)
    }
}

/// Locates raw match chunks with the default [`RegexFinder`].
///
/// Exposed for callers composing the pipeline stages by hand; [`find_all`]
/// runs all three stages.
///
/// [`find_all`]: crate::find_all
pub fn find_chunks(
    text: &str,
    terms: &[&str],
    options: &Options,
) -> Result<Vec<Chunk>, MatchError> {
    RegexFinder.find_chunks(text, terms, options)
}

/// Compiles a term pattern, defaulting to case-insensitive matching.
fn compile(pattern: &str, case_sensitive: bool) -> Result<Regex, MatchError> {
    RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|source| MatchError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Feeds every non-overlapping occurrence of `regex` in `text` to `emit`.
///
/// Zero-length matches are discarded, but the scan position is forcibly
/// advanced past one character whenever one occurs: a pattern like `.*` can
/// match empty at the same offset forever, and this is the single place in
/// the pipeline where an unbounded loop is possible.
fn scan(regex: &Regex, text: &str, mut emit: impl FnMut(usize, usize)) {
    let mut at = 0;
    while at <= text.len() {
        let Some(found) = regex.find_at(text, at) else {
            break;
        };
        if found.is_empty() {
            at = past_next_char(text, found.end());
        } else {
            emit(found.start(), found.end());
            at = found.end();
        }
    }
}

/// Returns the offset just past the character at `at`, or one past the end
/// of `text` when no character remains.
fn past_next_char(text: &str, at: usize) -> usize {
    match text[at..].chars().next() {
        Some(next) => at + next.len_utf8(),
        None => text.len() + 1,
    }
}

/// Escapes every pattern metacharacter in `term`.
fn escape(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if METACHARACTERS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shorthand for the plain `(start, end)` pairs of found chunks.
    fn bounds(chunks: &[Chunk]) -> Vec<(usize, usize)> {
        chunks.iter().map(|c| (c.start, c.end)).collect()
    }

    #[test]
    fn finds_all_occurrences_case_insensitive() {
        let chunks = find_chunks(
            "This is a string with words to search.",
            &["th"],
            &Options::new(),
        )
        .unwrap();
        assert_eq!(bounds(&chunks), vec![(0, 2), (19, 21)]);
    }

    #[test]
    fn case_sensitive_matching() {
        let options = Options::new().case_sensitive(true);
        let chunks = find_chunks("Thatch hatch Thatch", &["Th"], &options).unwrap();
        assert_eq!(bounds(&chunks), vec![(0, 2), (13, 15)]);
    }

    #[test]
    fn occurrences_do_not_overlap() {
        // "aaaa" contains three positions where "aa" occurs, but scanning
        // resumes after each match.
        let chunks = find_chunks("aaaa", &["aa"], &Options::new()).unwrap();
        assert_eq!(bounds(&chunks), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn empty_terms_are_skipped() {
        let chunks = find_chunks("abc abc", &["", "abc"], &Options::new()).unwrap();
        assert_eq!(bounds(&chunks), vec![(0, 3), (4, 7)]);
    }

    #[test]
    fn term_indexes_use_original_positions() {
        let options = Options::new().split_intersecting(true);
        let chunks = find_chunks("abc", &["", "abc"], &options).unwrap();
        assert_eq!(chunks, vec![Chunk::from_term(0, 3, 1)]);
    }

    #[test]
    fn terms_are_patterns_by_default() {
        let chunks = find_chunks("cat cut cot", &["c.t"], &Options::new()).unwrap();
        assert_eq!(bounds(&chunks), vec![(0, 3), (4, 7), (8, 11)]);
    }

    #[test]
    fn auto_escape_makes_terms_literal() {
        let options = Options::new().auto_escape(true);
        let chunks = find_chunks("c.t cat", &["c.t"], &options).unwrap();
        assert_eq!(bounds(&chunks), vec![(0, 3)]);
    }

    #[test]
    fn auto_escape_handles_unbalanced_metacharacters() {
        let options = Options::new().auto_escape(true);
        let chunks = find_chunks("f(x) = y", &["(x"], &options).unwrap();
        assert_eq!(bounds(&chunks), vec![(1, 3)]);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = find_chunks("text", &["("], &Options::new()).unwrap_err();
        let MatchError::InvalidPattern { pattern, .. } = err;
        assert_eq!(pattern, "(");
    }

    #[test]
    fn escape_covers_the_metacharacter_set() {
        assert_eq!(escape(r"a-b"), r"a\-b");
        assert_eq!(
            escape(r"-[]/{}()*+?.\^$|"),
            r"\-\[\]\/\{\}\(\)\*\+\?\.\\\^\$\|"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn zero_length_matches_terminate_and_emit_nothing() {
        // `.*` matches empty at every offset of a newline-only text; the
        // scan must advance and finish with no chunks.
        let chunks = find_chunks("\n\n", &[".*"], &Options::new()).unwrap();
        assert_eq!(chunks, Vec::new());
    }

    #[test]
    fn zero_length_guard_preserves_real_matches() {
        let chunks = find_chunks("ab\ncd", &[".*"], &Options::new()).unwrap();
        assert_eq!(bounds(&chunks), vec![(0, 2), (3, 5)]);
    }

    #[test]
    fn zero_length_guard_advances_over_multibyte_characters() {
        let chunks = find_chunks("日\n本", &[".*"], &Options::new()).unwrap();
        assert_eq!(bounds(&chunks), vec![(0, 3), (4, 7)]);
    }

    #[test]
    fn sanitize_applies_to_text_and_terms() {
        /// Maps dashes to spaces, preserving length.
        fn dashes_to_spaces(text: &str) -> String {
            text.replace('-', " ")
        }

        let options = Options::new().sanitize(dashes_to_spaces);
        let chunks = find_chunks("foo-bar", &["foo bar"], &options).unwrap();
        assert_eq!(bounds(&chunks), vec![(0, 7)]);

        // A term that is empty once sanitized contributes nothing.
        let options = Options::new().sanitize(|_| String::new());
        let chunks = find_chunks("foo", &["foo"], &options).unwrap();
        assert_eq!(chunks, Vec::new());
    }

    #[test]
    fn spans_emitted_only_under_split_policy() {
        let merged = Options::new().spans([(1, 3)]);
        let chunks = find_chunks("abcdef", &[], &merged).unwrap();
        assert_eq!(chunks, Vec::new());

        let split = Options::new().spans([(1, 3)]).split_intersecting(true);
        let chunks = find_chunks("abcdef", &[], &split).unwrap();
        assert_eq!(chunks, vec![Chunk::from_span(1, 3, 0)]);
    }

    #[test]
    fn caret_only_matches_text_start() {
        let chunks = find_chunks("aba", &["^a"], &Options::new()).unwrap();
        assert_eq!(bounds(&chunks), vec![(0, 1)]);
    }
}
