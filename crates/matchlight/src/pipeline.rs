//! The composed find → combine → fill pipeline.

use log::debug;

use crate::{
    chunk::Chunk,
    combine::combine_chunks,
    error::MatchError,
    fill::fill_in_chunks,
    find::{MatchFinder, RegexFinder},
    options::Options,
};

/// Runs the whole pipeline with the default [`RegexFinder`].
///
/// Returns a total, ordered partition of `text`: contiguous chunks covering
/// every byte exactly once, with `highlight` set on those covering matches.
/// An empty `text` yields an empty partition.
///
/// # Example
///
/// ```
/// use matchlight::{Options, find_all};
///
/// let text = "This is a string with words to search.";
/// let chunks = find_all(text, &["thi", "is"], &Options::new())?;
/// let matched: Vec<_> = chunks
///     .iter()
///     .filter(|chunk| chunk.highlight)
///     .map(|chunk| &text[chunk.start..chunk.end])
///     .collect();
/// assert_eq!(matched, vec!["This", "is"]);
/// # Ok::<(), matchlight::MatchError>(())
/// ```
pub fn find_all(text: &str, terms: &[&str], options: &Options) -> Result<Vec<Chunk>, MatchError> {
    find_all_with(&RegexFinder, text, terms, options)
}

/// Runs the whole pipeline with a caller-supplied [`MatchFinder`].
///
/// The finder replaces only the discovery stage; combining and gap filling
/// behave as in [`find_all`]. Errors from the finder propagate unmodified.
pub fn find_all_with(
    finder: &dyn MatchFinder,
    text: &str,
    terms: &[&str],
    options: &Options,
) -> Result<Vec<Chunk>, MatchError> {
    let raw = finder.find_chunks(text, terms, options)?;
    let combined = combine_chunks(raw, options.split_intersecting);
    let filled = fill_in_chunks(combined, text.len());
    debug!(
        "partitioned {} bytes into {} chunks for {} terms",
        text.len(),
        filled.len(),
        terms.len()
    );
    Ok(filled)
}
