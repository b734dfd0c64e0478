//! Gap filling: completing the partition.
//!
//! The final pipeline stage turns the combiner's sorted, disjoint chunks
//! into a total partition of `[0, total_length)`: every offset of the text
//! is covered by exactly one chunk, highlighted or not. This is the stage
//! that assigns the definitive `highlight` flag.

use log::trace;

use crate::chunk::Chunk;

/// Fills the gaps between `chunks` with non-highlighted chunks.
///
/// Input chunks must be sorted by start and disjoint (the combiner
/// guarantees both). Each input chunk is re-emitted with `highlight: true`
/// and its provenance carried through unchanged; every uncovered interval
/// between them, before the first, and after the last becomes a
/// `highlight: false` chunk. Zero-length gaps are suppressed, so an empty
/// input over an empty text yields an empty partition.
pub fn fill_in_chunks(chunks: Vec<Chunk>, total_length: usize) -> Vec<Chunk> {
    let mut filled = Vec::with_capacity(chunks.len() * 2 + 1);
    let mut last_end = 0;

    for chunk in chunks {
        append(&mut filled, Chunk::new(last_end, chunk.start));
        last_end = chunk.end;
        append(
            &mut filled,
            Chunk {
                highlight: true,
                ..chunk
            },
        );
    }
    append(&mut filled, Chunk::new(last_end, total_length));

    trace!("filled partition has {} chunks over {total_length} bytes", filled.len());
    filled
}

/// Pushes `chunk` unless it is zero-length.
fn append(filled: &mut Vec<Chunk>, chunk: Chunk) {
    if !chunk.is_empty() {
        filled.push(chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_covers_whole_text() {
        let filled = fill_in_chunks(Vec::new(), 10);
        assert_eq!(filled, vec![Chunk::new(0, 10)]);
    }

    #[test]
    fn empty_input_over_empty_text_is_empty() {
        assert_eq!(fill_in_chunks(Vec::new(), 0), Vec::new());
    }

    #[test]
    fn gaps_filled_before_between_and_after() {
        let filled = fill_in_chunks(vec![Chunk::new(2, 4), Chunk::new(6, 8)], 10);
        let expected = vec![
            Chunk::new(0, 2),
            Chunk {
                highlight: true,
                ..Chunk::new(2, 4)
            },
            Chunk::new(4, 6),
            Chunk {
                highlight: true,
                ..Chunk::new(6, 8)
            },
            Chunk::new(8, 10),
        ];
        assert_eq!(filled, expected);
    }

    #[test]
    fn full_coverage_emits_no_gaps() {
        let filled = fill_in_chunks(vec![Chunk::new(0, 5)], 5);
        assert_eq!(
            filled,
            vec![Chunk {
                highlight: true,
                ..Chunk::new(0, 5)
            }]
        );
    }

    #[test]
    fn chunk_starting_at_zero_emits_no_leading_gap() {
        let filled = fill_in_chunks(vec![Chunk::new(0, 3)], 8);
        assert_eq!(filled[0].start, 0);
        assert!(filled[0].highlight);
        assert_eq!(filled[1], Chunk::new(3, 8));
    }

    #[test]
    fn provenance_carried_through() {
        let combined = vec![Chunk {
            term_indexes: Some(vec![0, 2]),
            span_indexes: Some(vec![1]),
            ..Chunk::new(1, 4)
        }];
        let filled = fill_in_chunks(combined, 6);
        assert_eq!(filled.len(), 3);
        assert!(filled[1].highlight);
        assert_eq!(filled[1].term_indexes, Some(vec![0, 2]));
        assert_eq!(filled[1].span_indexes, Some(vec![1]));
        assert_eq!(filled[0].term_indexes, None);
        assert_eq!(filled[2].term_indexes, None);
    }

    #[test]
    fn adjacent_split_chunks_stay_adjacent() {
        // Split-policy output can contain touching highlighted chunks; no
        // zero-length filler may appear between them.
        let combined = vec![
            Chunk {
                term_indexes: Some(vec![0]),
                ..Chunk::new(0, 3)
            },
            Chunk {
                term_indexes: Some(vec![1]),
                ..Chunk::new(3, 6)
            },
        ];
        let filled = fill_in_chunks(combined, 6);
        assert_eq!(filled.len(), 2);
        assert!(filled.iter().all(|chunk| chunk.highlight));
        assert_eq!(filled[0].end, filled[1].start);
    }

    #[test]
    fn partition_is_contiguous_from_zero_to_total_length() {
        let filled = fill_in_chunks(vec![Chunk::new(1, 2), Chunk::new(4, 9)], 12);
        assert_eq!(filled.first().map(|c| c.start), Some(0));
        assert_eq!(filled.last().map(|c| c.end), Some(12));
        for pair in filled.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert!(filled.iter().all(|chunk| !chunk.is_empty()));
    }
}
