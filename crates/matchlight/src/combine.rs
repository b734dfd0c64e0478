//! Overlap resolution for raw match chunks.
//!
//! Raw chunks from the finder can overlap arbitrarily: across terms, within
//! one term's occurrences never, but between terms and caller-supplied spans
//! in any combination, including nesting and exact adjacency. This stage
//! reduces them to a sorted, disjoint sequence under one of two policies:
//!
//! - **merge**: union overlapping and touching intervals, discarding which
//!   term produced what;
//! - **split**: decompose overlaps into atomic sub-intervals, each tagged
//!   with exactly the terms and spans covering it.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use crate::chunk::Chunk;

/// Reduces raw chunks to a sorted, disjoint sequence.
///
/// With `split_intersecting` false the merge policy applies; otherwise the
/// split policy. Under the split policy every input chunk is expected to
/// carry term or span provenance, as produced by the finder — a chunk with
/// neither identifies no interval source and contributes nothing.
pub fn combine_chunks(chunks: Vec<Chunk>, split_intersecting: bool) -> Vec<Chunk> {
    let raw = chunks.len();
    let combined = if split_intersecting {
        split(&chunks)
    } else {
        merge(chunks)
    };
    trace!("combined {raw} raw chunks into {}", combined.len());
    combined
}

/// Merge policy: union of all raw intervals.
///
/// Sorts by start (stable, so equal starts keep input order) and folds
/// left to right. A chunk starting at or before the current end extends the
/// current interval; touching chunks merge too, so the output is not just
/// disjoint but non-adjacent, which the gap filler relies on.
fn merge(mut chunks: Vec<Chunk>) -> Vec<Chunk> {
    chunks.sort_by_key(|chunk| chunk.start);

    let mut merged: Vec<Chunk> = Vec::with_capacity(chunks.len());
    for next in chunks {
        match merged.last_mut() {
            Some(current) if next.start <= current.end => {
                current.end = current.end.max(next.end);
            }
            // Per-term identity is dropped: only the interval survives.
            _ => merged.push(Chunk::new(next.start, next.end)),
        }
    }
    merged
}

/// Interval endpoints registered at one boundary offset.
#[derive(Debug, Default)]
struct Boundary {
    /// Term indexes whose interval starts here.
    term_starts: Vec<usize>,
    /// Term indexes whose interval ends here.
    term_ends: Vec<usize>,
    /// Span indexes whose interval starts here.
    span_starts: Vec<usize>,
    /// Span indexes whose interval ends here.
    span_ends: Vec<usize>,
}

/// Split policy: maximal decomposition into atomic sub-intervals.
///
/// Every distinct chunk endpoint is a boundary on the integer line; the
/// sweep walks consecutive boundary pairs keeping the set of active term and
/// span indexes, and emits one chunk per atomic interval with non-empty
/// coverage. Intervals are end-exclusive: at each boundary, deactivations
/// fire before activations, so a term ending exactly where another begins
/// never double-covers the boundary.
fn split(chunks: &[Chunk]) -> Vec<Chunk> {
    // BTreeMap keeps boundaries deduplicated and numerically ordered.
    let mut boundaries: BTreeMap<usize, Boundary> = BTreeMap::new();
    for chunk in chunks {
        if chunk.is_empty() {
            // Degenerate intervals (malformed spans) cover nothing.
            continue;
        }
        if let Some(indexes) = &chunk.term_indexes {
            for &index in indexes {
                boundaries.entry(chunk.start).or_default().term_starts.push(index);
                boundaries.entry(chunk.end).or_default().term_ends.push(index);
            }
        }
        if let Some(indexes) = &chunk.span_indexes {
            for &index in indexes {
                boundaries.entry(chunk.start).or_default().span_starts.push(index);
                boundaries.entry(chunk.end).or_default().span_ends.push(index);
            }
        }
    }

    let mut active_terms: BTreeSet<usize> = BTreeSet::new();
    let mut active_spans: BTreeSet<usize> = BTreeSet::new();
    let mut combined = Vec::new();

    let mut walker = boundaries.iter().peekable();
    while let Some((&offset, boundary)) = walker.next() {
        for index in &boundary.term_ends {
            active_terms.remove(index);
        }
        for index in &boundary.span_ends {
            active_spans.remove(index);
        }
        active_terms.extend(&boundary.term_starts);
        active_spans.extend(&boundary.span_starts);

        let Some(&(&next_offset, _)) = walker.peek() else {
            break;
        };
        if active_terms.is_empty() && active_spans.is_empty() {
            continue;
        }
        combined.push(Chunk {
            term_indexes: snapshot(&active_terms),
            span_indexes: snapshot(&active_spans),
            ..Chunk::new(offset, next_offset)
        });
    }
    combined
}

/// Ascending snapshot of an active index set; an empty set becomes `None`.
fn snapshot(active: &BTreeSet<usize>) -> Option<Vec<usize>> {
    if active.is_empty() {
        None
    } else {
        Some(active.iter().copied().collect())
    }
}
