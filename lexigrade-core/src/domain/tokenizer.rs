//! Word and sentence tokenization
//!
//! Every formula counts words and sentences through these functions, so all
//! scores agree on what a word and a sentence are.

use regex::Regex;
use std::sync::OnceLock;

/// Delimiters used for general word splitting
const WORD_DELIMITERS: [char; 4] = [',', ' ', '\n', '\r'];

/// Segments with this many words or fewer are not counted as sentences
const MIN_SENTENCE_WORDS: usize = 2;

/// Terminal punctuation, closing quotes/brackets, then the separator
const SENTENCE_BREAK_PATTERN: &str = r#" *[.?!]['")\]]*[ |\n]"#;

fn sentence_break() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(SENTENCE_BREAK_PATTERN).expect("valid sentence pattern"))
}

/// Check whether a character belongs to the fixed punctuation class
///
/// The class covers the General Punctuation and Supplemental Punctuation
/// blocks plus ASCII punctuation.
#[inline]
pub fn is_punctuation(ch: char) -> bool {
    matches!(ch, '\u{2000}'..='\u{206F}' | '\u{2E00}'..='\u{2E7F}') || ch.is_ascii_punctuation()
}

/// Remove every punctuation character from the text
pub fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|&ch| !is_punctuation(ch)).collect()
}

/// Split text into words on commas, spaces and line breaks
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(WORD_DELIMITERS)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Split text into sentence segments
///
/// A break is terminal punctuation (optionally preceded by spaces and followed
/// by closing quotes or brackets), then a space, `|` or newline, with an ASCII
/// capital letter as the next character. The break itself is dropped.
/// "Dr. Smith" splits after "Dr." since only the capital is checked.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let pattern = sentence_break();
    let mut segments = Vec::new();
    let mut segment_start = 0;
    let mut search_from = 0;

    while let Some(found) = pattern.find_at(text, search_from) {
        let followed_by_capital = text[found.end()..]
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_uppercase());

        if followed_by_capital {
            segments.push(&text[segment_start..found.start()]);
            segment_start = found.end();
            search_from = found.end();
        } else {
            // Retry one character later, like a lookahead failing in place
            search_from = found.start()
                + text[found.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
        }
    }

    segments.push(&text[segment_start..]);
    segments
}

/// Count words, optionally stripping punctuation first
pub fn word_count(text: &str, strip_punctuation: bool) -> usize {
    if strip_punctuation {
        split_words(&remove_punctuation(text)).len()
    } else {
        split_words(text).len()
    }
}

/// Count sentences with more than two words, never less than one
pub fn sentence_count(text: &str) -> usize {
    let counted = split_sentences(text)
        .into_iter()
        .filter(|segment| word_count(segment, true) > MIN_SENTENCE_WORDS)
        .count();
    counted.max(1)
}

/// Count characters, optionally ignoring ASCII spaces
///
/// Counts Unicode scalar values, so a character outside the Basic
/// Multilingual Plane (an emoji) counts once, not as two UTF-16 units.
pub fn char_count(text: &str, ignore_spaces: bool) -> usize {
    if ignore_spaces {
        text.chars().filter(|&ch| ch != ' ').count()
    } else {
        text.chars().count()
    }
}

/// Count characters that are not punctuation, optionally ignoring ASCII spaces
///
/// Counts Unicode scalar values, like [`char_count`].
pub fn letter_count(text: &str, ignore_spaces: bool) -> usize {
    text.chars()
        .filter(|&ch| !(ignore_spaces && ch == ' '))
        .filter(|&ch| !is_punctuation(ch))
        .count()
}

/// Count split words longer than six characters, punctuation included
pub fn long_word_count(text: &str) -> usize {
    split_words(text)
        .into_iter()
        .filter(|word| word.chars().count() > 6)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_drops_empty_tokens() {
        let words = split_words("Hello,  world\r\nagain, ");
        assert_eq!(words, vec!["Hello", "world", "again"]);
    }

    #[test]
    fn test_split_words_keeps_tabs_inside_tokens() {
        assert_eq!(split_words("a\tb c"), vec!["a\tb", "c"]);
    }

    #[test]
    fn test_word_count_sample() {
        assert_eq!(word_count("This is a sample text.", true), 5);
        assert_eq!(word_count("", true), 0);
        assert_eq!(word_count(" , \n", false), 0);
    }

    #[test]
    fn test_word_count_punctuation_only_tokens() {
        assert_eq!(word_count("Wait - what ?", false), 4);
        assert_eq!(word_count("Wait - what ?", true), 2);
    }

    #[test]
    fn test_remove_punctuation() {
        assert_eq!(remove_punctuation("Don't stop!"), "Dont stop");
        assert_eq!(remove_punctuation("well-known \u{2019}quote\u{2019}"), "wellknown quote");
        assert_eq!(remove_punctuation("caf\u{e9}"), "caf\u{e9}");
    }

    #[test]
    fn test_split_sentences_requires_capital() {
        let segments = split_sentences("It was late. the end. Then we left.");
        assert_eq!(segments, vec!["It was late. the end", "Then we left."]);
    }

    #[test]
    fn test_split_sentences_closing_quote() {
        let segments = split_sentences("He said \"stop.\" Then he left.");
        assert_eq!(segments, vec!["He said \"stop", "Then he left."]);
    }

    #[test]
    fn test_split_sentences_abbreviation_is_split() {
        let segments = split_sentences("Dr. Smith went home.");
        assert_eq!(segments, vec!["Dr", "Smith went home."]);
    }

    #[test]
    fn test_split_sentences_retries_after_failed_lookahead() {
        let segments = split_sentences("one. . Two three four.");
        assert_eq!(segments, vec!["one.", "Two three four."]);
    }

    #[test]
    fn test_sentence_count_ignores_short_segments() {
        let text = "The cat sat on the mat. Yes. The dog ran to the cat.";
        assert_eq!(sentence_count(text), 2);
    }

    #[test]
    fn test_sentence_count_floor() {
        assert_eq!(sentence_count(""), 1);
        assert_eq!(sentence_count("Hi."), 1);
        assert_eq!(sentence_count("This is a sample text."), 1);
    }

    #[test]
    fn test_char_and_letter_count() {
        assert_eq!(char_count("a b.", true), 3);
        assert_eq!(char_count("a b.", false), 4);
        assert_eq!(letter_count("a b.", true), 2);
        assert_eq!(letter_count("a b.", false), 3);
    }

    #[test]
    fn test_char_count_is_per_char_not_byte() {
        assert_eq!(char_count("na\u{ef}ve", true), 5);
    }

    #[test]
    fn test_astral_characters_count_once() {
        assert_eq!(char_count("hi \u{1F600}", true), 3);
        assert_eq!(letter_count("hi \u{1F600}.", true), 3);
    }

    #[test]
    fn test_long_word_count() {
        assert_eq!(long_word_count("The elephants wandered home."), 2);
        assert_eq!(long_word_count("seven. sevens"), 0);
        assert_eq!(long_word_count("sevens."), 1);
    }
}
