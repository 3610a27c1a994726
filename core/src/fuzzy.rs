//! Lightweight substring/subsequence scorer, used as the non-TF-IDF search mode.

use regex::{Regex, RegexBuilder};

const CONTAINS_WORD: f64 = 0.5;
const FUZZY_WORD: f64 = 0.25;

/// Case-insensitive matcher accepting any string that contains the characters
/// of `word` in order, with anything in between.
pub fn fuzzy_matcher(word: &str) -> Result<Regex, regex::Error> {
    let pattern: String = word
        .chars()
        .map(|c| format!("{}.*", regex::escape(&c.to_string())))
        .collect();
    RegexBuilder::new(&pattern).case_insensitive(true).build()
}

/// Score `text` against `term` in `[0, 1]`.
///
/// A full substring hit scores 1. Otherwise each (term word, text word) pair adds
/// 0.5 for a substring hit or 0.25 for a fuzzy hit, averaged over the term words.
pub fn search_score(text: &str, term: &str) -> f64 {
    let text = text.to_lowercase();
    let term = term.to_lowercase();
    if text.contains(&term) {
        return 1.0;
    }

    let text_words: Vec<&str> = text.split_whitespace().collect();
    let term_words: Vec<&str> = term.split_whitespace().collect();
    if term_words.is_empty() {
        return 0.0;
    }

    let mut score = 0.0f64;
    for term_word in &term_words {
        let matcher = fuzzy_matcher(term_word).ok();
        for text_word in &text_words {
            if text_word.contains(term_word) {
                score += CONTAINS_WORD;
            } else if matcher.as_ref().is_some_and(|m| m.is_match(text_word)) {
                score += FUZZY_WORD;
            }
        }
    }
    (score / term_words.len() as f64).min(1.0)
}
