//! Combined text statistics.

use serde::{Deserialize, Serialize};

use crate::words::word_count;

/// Counts the characters in `text` as Unicode code points, not bytes.
pub fn character_count(text: &str) -> usize {
    text.chars().count()
}

/// Word and character statistics for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub word_count: usize,
    pub character_count: usize,
}

impl TextAnalysis {
    /// Analyzes `text`.
    pub fn of(text: &str) -> Self {
        Self {
            word_count: word_count(text),
            character_count: character_count(text),
        }
    }

    /// Returns `true` if the text contained no words.
    pub fn is_blank(&self) -> bool {
        self.word_count == 0
    }
}
