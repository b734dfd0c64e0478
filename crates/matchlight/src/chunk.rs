//! Chunk and span types for the highlight pipeline.
//!
//! A [`Chunk`] is the unit flowing through every pipeline stage: the match
//! finder emits raw (possibly overlapping) chunks, the combiner reduces them
//! to disjoint chunks, and the gap filler completes them into a total
//! partition of the text.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A labeled half-open interval `[start, end)` over the searched text.
///
/// Offsets are byte offsets into the text. Chunks produced by the default
/// finder always lie on UTF-8 character boundaries.
///
/// The `highlight` flag is only meaningful on gap-filler output. Earlier
/// stages carry `false` as a placeholder, so intermediate chunks must not be
/// read as "not highlighted" — final status is assigned when gaps are filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Byte offset where the interval starts (inclusive).
    pub start: usize,
    /// Byte offset where the interval ends (exclusive).
    pub end: usize,
    /// True if this chunk covers matched text.
    #[serde(default)]
    pub highlight: bool,
    /// Indexes into the search-term list of every term whose match covers
    /// this chunk.
    ///
    /// Populated only under the split policy. Sorted ascending and never
    /// empty when present; absence means "no term provenance", which keeps
    /// equality comparisons in tests exact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_indexes: Option<Vec<usize>>,
    /// Indexes into the caller-supplied span list of every span covering
    /// this chunk.
    ///
    /// Populated only under the split policy, with the same conventions as
    /// `term_indexes`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span_indexes: Option<Vec<usize>>,
}

impl Chunk {
    /// Creates an unhighlighted chunk with no provenance.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            highlight: false,
            term_indexes: None,
            span_indexes: None,
        }
    }

    /// Creates a raw chunk recording a single term occurrence.
    pub(crate) fn from_term(start: usize, end: usize, term_index: usize) -> Self {
        Self {
            term_indexes: Some(vec![term_index]),
            ..Self::new(start, end)
        }
    }

    /// Creates a raw chunk recording a single caller-supplied span.
    pub(crate) fn from_span(start: usize, end: usize, span_index: usize) -> Self {
        Self {
            span_indexes: Some(vec![span_index]),
            ..Self::new(start, end)
        }
    }

    /// Returns the length of the interval in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the interval covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// An externally supplied highlight interval, not derived from term matching.
///
/// Spans participate in the pipeline only under the split policy, where they
/// are another labeled interval source alongside search terms. A degenerate
/// span (`start >= end`) covers nothing and is silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset where the span starts (inclusive).
    pub start: usize,
    /// Byte offset where the span ends (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a span covering `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}
