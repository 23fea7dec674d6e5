//! Word splitting.

/// Returns `true` if `c` separates words.
///
/// Covers every character with the Unicode `White_Space` property plus the
/// ASCII information separators U+001C..=U+001F, which common string
/// libraries also treat as whitespace when splitting.
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Iterates over the words of `text`: maximal runs of non-separator characters.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_separator).filter(|word| !word.is_empty())
}

/// Counts the words in `text`. Empty and whitespace-only input has zero words.
pub fn word_count(text: &str) -> usize {
    words(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_simple_sentence() {
        assert_eq!(word_count("I love cloud engineering!"), 4);
    }

    #[test]
    fn empty_text_has_no_words() {
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn whitespace_only_text_has_no_words() {
        assert_eq!(word_count("   \t\n\r  "), 0);
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(word_count("  one \t\t two\n\nthree  "), 3);
        let collected: Vec<&str> = words("  one \t\t two\n\nthree  ").collect();
        assert_eq!(collected, vec!["one", "two", "three"]);
    }

    #[test]
    fn punctuation_stays_attached() {
        assert_eq!(word_count("hello,world - again!"), 3);
    }

    #[test]
    fn unicode_whitespace_separates() {
        // no-break space, ideographic space, line separator
        assert_eq!(word_count("a\u{a0}b\u{3000}c\u{2028}d"), 4);
    }

    #[test]
    fn information_separators_separate() {
        assert_eq!(word_count("a\u{1c}b\u{1d}c\u{1e}d\u{1f}e"), 5);
        assert!(is_word_separator('\u{1f}'));
    }

    #[test]
    fn zero_width_space_is_not_a_separator() {
        assert!(!is_word_separator('\u{200b}'));
        assert_eq!(word_count("a\u{200b}b"), 1);
    }

    #[test]
    fn non_latin_words() {
        assert_eq!(word_count("こんにちは 世界"), 2);
        assert_eq!(word_count("Привет мир"), 2);
    }
}
