use lazy_static::lazy_static;
use regex::Regex;

/// Shortest token kept by [`tokenize`], in characters.
pub const MIN_TOKEN_LEN: usize = 3;

lazy_static! {
    static ref PUNCT: Regex = Regex::new(r"[.,/#!$%^&*;:{}=\-_`~()]").expect("valid regex");
}

/// Tokenize text into normalized terms: lowercase, strip punctuation, split on whitespace,
/// drop tokens shorter than [`MIN_TOKEN_LEN`]. Order is preserved and duplicates are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = PUNCT.replace_all(&lowered, "");
    stripped
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("Router's latency, in the NETWORK!");
        assert_eq!(t, vec!["router's", "latency", "the", "network"]);
    }

    #[test]
    fn punctuation_is_removed_not_split() {
        // "e-mail" collapses into one token instead of "e" and "mail"
        assert_eq!(tokenize("e-mail foo_bar (x)yz"), vec!["email", "foobar", "xyz"]);
    }

    #[test]
    fn short_tokens_dropped() {
        assert!(tokenize("ab cd ef").is_empty());
        assert!(tokenize("").is_empty());
        assert!(tokenize("... ,,, ()").is_empty());
    }
}
