//! Search-term highlighting for text.
//!
//! Locates every occurrence of a set of search terms (and, optionally, a set
//! of caller-supplied spans) inside a text string and partitions the whole
//! string into ordered, non-overlapping [`Chunk`]s labeled as matched or
//! unmatched. A rendering layer can walk the partition without reasoning
//! about overlaps itself.
//!
//! The pipeline has three pure stages, each usable on its own:
//!
//! 1. [`find_chunks`] — raw match discovery (overridable via [`MatchFinder`]);
//! 2. [`combine_chunks`] — overlap resolution, either **merging** overlapping
//!    and touching intervals or **splitting** them into atomic sub-intervals
//!    that keep per-term and per-span provenance;
//! 3. [`fill_in_chunks`] — gap filling into a total partition of the text.
//!
//! [`find_all`] composes all three.
//!
//! # Example
//!
//! ```
//! use matchlight::{Options, find_all};
//!
//! let chunks = find_all(
//!     "Tom Johnson Tom test",
//!     &["Tom", "om Joh", "Tom"],
//!     &Options::new().split_intersecting(true),
//! )?;
//!
//! // Overlapping matches are decomposed; each piece knows which terms
//! // cover it.
//! assert_eq!(chunks[1].term_indexes, Some(vec![0, 1, 2]));
//! # Ok::<(), matchlight::MatchError>(())
//! ```

#![warn(missing_docs)]

mod chunk;
mod combine;
mod error;
mod fill;
mod find;
mod options;
mod parts;
mod pipeline;

pub use chunk::{Chunk, Span};
pub use combine::combine_chunks;
pub use error::MatchError;
pub use fill::fill_in_chunks;
pub use find::{MatchFinder, RegexFinder, find_chunks};
pub use options::{Options, Sanitizer};
pub use parts::{Part, split_parts};
pub use pipeline::{find_all, find_all_with};
