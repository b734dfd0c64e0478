//! Pipeline configuration.

use std::borrow::Cow;

use crate::chunk::Span;

/// A text normalization function applied to the text and to every term
/// before matching.
///
/// The sanitizer must preserve byte offsets (replace characters, never insert
/// or delete bytes) for the resulting chunks to line up with the original
/// text.
pub type Sanitizer = fn(&str) -> String;

/// Configuration shared by every pipeline stage.
///
/// The defaults mirror the common case: case-insensitive matching, terms
/// interpreted as regular-expression patterns, merge policy, no spans.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Match terms case-sensitively. Defaults to false.
    pub case_sensitive: bool,
    /// Escape pattern metacharacters in each term so it matches itself
    /// literally. Defaults to false (terms are patterns).
    pub auto_escape: bool,
    /// Use the split combination policy, decomposing overlaps into atomic
    /// sub-intervals that keep per-term and per-span provenance. Defaults to
    /// false (merge policy, provenance discarded).
    pub split_intersecting: bool,
    /// Externally supplied highlight intervals.
    ///
    /// Spans only participate under the split policy; with the merge policy
    /// they are silently ignored, matching the behavior this library was
    /// modeled on.
    pub spans: Vec<Span>,
    /// Optional sanitizer applied to the text and to every term. `None`
    /// means identity.
    pub sanitize: Option<Sanitizer>,
}

impl Options {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets case-sensitive matching.
    #[must_use]
    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    /// Sets literal (escaped) term matching.
    #[must_use]
    pub fn auto_escape(mut self, yes: bool) -> Self {
        self.auto_escape = yes;
        self
    }

    /// Selects the split combination policy.
    #[must_use]
    pub fn split_intersecting(mut self, yes: bool) -> Self {
        self.split_intersecting = yes;
        self
    }

    /// Sets the externally supplied spans.
    #[must_use]
    pub fn spans<I>(mut self, spans: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Span>,
    {
        self.spans = spans.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the sanitizer.
    #[must_use]
    pub fn sanitize(mut self, sanitizer: Sanitizer) -> Self {
        self.sanitize = Some(sanitizer);
        self
    }

    /// Applies the configured sanitizer, or returns the input unchanged.
    pub(crate) fn sanitized<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.sanitize {
            Some(sanitizer) => Cow::Owned(sanitizer(text)),
            None => Cow::Borrowed(text),
        }
    }
}
