//! Slicing a finished partition back into text fragments.
//!
//! The smallest useful consumer of a [`find_all`] partition: pair every
//! chunk with the text it covers, ready for a renderer to style.
//!
//! [`find_all`]: crate::find_all

use serde::Serialize;

use crate::chunk::Chunk;

/// A fragment of the original text with its highlight status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Part<'a> {
    /// The text covered by the chunk.
    pub text: &'a str,
    /// True if this fragment is matched text.
    pub highlight: bool,
}

/// Slices `text` by a partition produced over it.
///
/// Concatenating the returned fragments in order reproduces `text` exactly
/// when `chunks` is a complete partition, as produced by [`find_all`].
///
/// # Panics
///
/// Panics if a chunk's offsets fall outside `text` or off UTF-8 character
/// boundaries, i.e. if the chunks were produced over a different text.
///
/// [`find_all`]: crate::find_all
pub fn split_parts<'a>(text: &'a str, chunks: &[Chunk]) -> Vec<Part<'a>> {
    chunks
        .iter()
        .map(|chunk| Part {
            text: &text[chunk.start..chunk.end],
            highlight: chunk.highlight,
        })
        .collect()
}
