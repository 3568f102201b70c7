//! Heuristic grammar, punctuation and style passes.
//!
//! Each pass is a pure function of the text. Passes share no state and never
//! see each other's findings, so they can run on separate threads.

pub mod grammar;
pub mod punctuation;
pub mod style;

use crate::checker::tokenizer::char_offset;

/// Character offset of the first occurrence of `needle` in `text`.
pub(crate) fn locate(text: &str, needle: &str) -> Option<usize> {
    text.find(needle).map(|byte_idx| char_offset(text, byte_idx))
}
