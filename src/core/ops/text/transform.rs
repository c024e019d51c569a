//! Text transformations: case changes, reversal, pig latin

use std::str::FromStr;

use crate::core::{CoreError, CoreResult};

/// Trailing punctuation detached from a word before the pig latin rewrite
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformMode {
    Upper,
    Lower,
    Title,
    Reverse,
    PigLatin,
}

impl TransformMode {
    pub const ALL: [TransformMode; 5] = [
        TransformMode::Upper,
        TransformMode::Lower,
        TransformMode::Title,
        TransformMode::Reverse,
        TransformMode::PigLatin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransformMode::Upper => "upper",
            TransformMode::Lower => "lower",
            TransformMode::Title => "title",
            TransformMode::Reverse => "reverse",
            TransformMode::PigLatin => "pig_latin",
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            TransformMode::Upper => text.to_uppercase(),
            TransformMode::Lower => text.to_lowercase(),
            TransformMode::Title => title_case(text),
            TransformMode::Reverse => text.chars().rev().collect(),
            TransformMode::PigLatin => pig_latin(text),
        }
    }
}

impl FromStr for TransformMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|m| m.as_str() == s).ok_or_else(|| {
            let available: Vec<&str> = Self::ALL.iter().map(|m| m.as_str()).collect();
            CoreError::invalid(format!(
                "Unknown transformation: {}. Available: {}",
                s,
                available.join(", ")
            ))
        })
    }
}

/// Parse `mode` and transform `text`
pub fn transform(text: &str, mode: &str) -> CoreResult<String> {
    Ok(mode.parse::<TransformMode>()?.apply(text))
}

/// Capitalize the first cased letter of each whitespace-delimited word and
/// lowercase the rest. Whitespace is kept as-is.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalized = false;
    for c in text.chars() {
        if c.is_whitespace() {
            capitalized = false;
            out.push(c);
        } else if !capitalized && (c.is_uppercase() || c.is_lowercase()) {
            capitalized = true;
            out.extend(c.to_uppercase());
        } else if capitalized {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn pig_latin(text: &str) -> String {
    text.split_whitespace()
        .map(pig_latin_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn pig_latin_word(word: &str) -> String {
    let (stem, punctuation) = match word.chars().last() {
        Some(c) if TRAILING_PUNCTUATION.contains(&c) => (&word[..word.len() - c.len_utf8()], Some(c)),
        _ => (word, None),
    };
    if stem.is_empty() {
        return word.to_string();
    }

    // No vowel: the whole word is the consonant cluster
    let first_vowel = stem
        .char_indices()
        .find(|(_, c)| is_vowel(*c))
        .map_or(stem.len(), |(i, _)| i);

    let mut out = if first_vowel == 0 {
        format!("{}way", stem)
    } else {
        format!("{}{}ay", &stem[first_vowel..], &stem[..first_vowel])
    };
    out.extend(punctuation);
    out
}
