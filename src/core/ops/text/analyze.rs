//! Descriptive text analysis

use serde::Serialize;

use crate::core::primitives::{round_to, AVERAGE_DECIMALS};

/// Punctuation stripped from both ends of a word before measuring it
const WORD_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '"', '(', ')', '[', ']', '{', '}'];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterAnalysis {
    pub total_chars: usize,
    pub chars_no_spaces: usize,
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    pub special_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub character_analysis: CharacterAnalysis,
    pub longest_word: String,
    pub shortest_word: String,
}

/// Word, sentence, paragraph and character metrics for `text`
pub fn analyze(text: &str) -> TextAnalysis {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentence_count = text.split('.').filter(|s| !s.trim().is_empty()).count();
    let paragraph_count = text.split("\n\n").count();

    let avg_word_length = if words.is_empty() {
        0.0
    } else {
        let total: usize = words
            .iter()
            .map(|w| w.trim_matches(WORD_PUNCTUATION).chars().count())
            .sum();
        round_to(total as f64 / words.len() as f64, AVERAGE_DECIMALS)
    };

    let avg_sentence_length = if sentence_count == 0 {
        0.0
    } else {
        round_to(words.len() as f64 / sentence_count as f64, AVERAGE_DECIMALS)
    };

    TextAnalysis {
        word_count: words.len(),
        sentence_count,
        paragraph_count,
        avg_word_length,
        avg_sentence_length,
        character_analysis: character_analysis(text),
        longest_word: pick_word(&words, |len, best| len > best),
        shortest_word: pick_word(&words, |len, best| len < best),
    }
}

fn character_analysis(text: &str) -> CharacterAnalysis {
    let mut counts = CharacterAnalysis {
        total_chars: 0,
        chars_no_spaces: 0,
        uppercase: 0,
        lowercase: 0,
        digits: 0,
        special_chars: 0,
    };

    for c in text.chars() {
        counts.total_chars += 1;
        if c != ' ' {
            counts.chars_no_spaces += 1;
        }
        if c.is_uppercase() {
            counts.uppercase += 1;
        }
        if c.is_lowercase() {
            counts.lowercase += 1;
        }
        if c.is_numeric() {
            counts.digits += 1;
        }
        if !c.is_alphanumeric() && !c.is_whitespace() {
            counts.special_chars += 1;
        }
    }
    counts
}

/// First word whose length beats every earlier one under `better`
fn pick_word(words: &[&str], better: impl Fn(usize, usize) -> bool) -> String {
    let mut best: Option<(&str, usize)> = None;
    for &word in words {
        let len = word.chars().count();
        match best {
            Some((_, best_len)) if !better(len, best_len) => {}
            _ => best = Some((word, len)),
        }
    }
    best.map(|(w, _)| w.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_analysis() {
        let analysis = analyze("Hello world. This is a test.");
        assert_eq!(analysis.word_count, 6);
        assert_eq!(analysis.sentence_count, 2);
        assert_eq!(analysis.paragraph_count, 1);
        assert_eq!(analysis.avg_sentence_length, 3.0);
        // 5 + 5 + 4 + 2 + 1 + 4 = 21 / 6
        assert_eq!(analysis.avg_word_length, 3.5);
        // raw token "world." includes its period
        assert_eq!(analysis.longest_word, "world.");
        assert_eq!(analysis.shortest_word, "a");
    }

    #[test]
    fn test_character_analysis() {
        let analysis = analyze("Ab 1!");
        let chars = analysis.character_analysis;
        assert_eq!(chars.total_chars, 5);
        assert_eq!(chars.chars_no_spaces, 4);
        assert_eq!(chars.uppercase, 1);
        assert_eq!(chars.lowercase, 1);
        assert_eq!(chars.digits, 1);
        assert_eq!(chars.special_chars, 1);
    }

    #[test]
    fn test_paragraphs() {
        let analysis = analyze("First paragraph.\n\nSecond one.\n\nThird.");
        assert_eq!(analysis.paragraph_count, 3);
        assert_eq!(analysis.sentence_count, 3);
    }

    #[test]
    fn test_empty_text() {
        let analysis = analyze("");
        assert_eq!(analysis.word_count, 0);
        assert_eq!(analysis.sentence_count, 0);
        assert_eq!(analysis.paragraph_count, 1);
        assert_eq!(analysis.avg_word_length, 0.0);
        assert_eq!(analysis.avg_sentence_length, 0.0);
        assert_eq!(analysis.longest_word, "");
        assert_eq!(analysis.shortest_word, "");
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let analysis = analyze("cat dog ox ab");
        assert_eq!(analysis.longest_word, "cat");
        assert_eq!(analysis.shortest_word, "ox");
    }

    #[test]
    fn test_punctuation_not_counted_in_word_length() {
        let analysis = analyze("\"hi\" (yo)");
        assert_eq!(analysis.avg_word_length, 2.0);
        // raw tokens are compared for longest/shortest
        assert_eq!(analysis.longest_word, "\"hi\"");
    }

    #[test]
    fn test_average_rounds_ties_to_even() {
        // 17 letters over 8 words = 2.125 exactly
        let analysis = analyze("ab ab ab ab ab ab ab abc");
        assert_eq!(analysis.avg_word_length, 2.12);
    }
}
