//! Text analysis for the analysis service.
//!
//! This crate holds the pure part of the service:
//! - word counting over Unicode whitespace
//! - character counting in code points
//! - the `TextAnalysis` value combining both
//!
//! Nothing here performs I/O or can fail.

pub mod analysis;
pub mod words;

pub use analysis::{TextAnalysis, character_count};
pub use words::{is_word_separator, word_count, words};
