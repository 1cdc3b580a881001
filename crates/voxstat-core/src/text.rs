//! Tokenization.
//!
//! Tokens are whitespace-delimited and otherwise opaque: no case folding,
//! punctuation stripping, or stemming. `"The"` and `"the"` are different
//! tokens, as are `"mat"` and `"mat."`.

/// Split text into whitespace-delimited tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Number of tokens in `text`.
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whether `text` contains at least one token.
pub fn has_tokens(text: &str) -> bool {
    text.split_whitespace().next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(
            tokenize("the  cat\tsat\non the\r\nmat"),
            vec!["the", "cat", "sat", "on", "the", "mat"]
        );
    }

    #[test]
    fn keeps_case_and_punctuation() {
        assert_eq!(tokenize("The mat. the MAT"), vec!["The", "mat.", "the", "MAT"]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t ").is_empty());
        assert_eq!(token_count("   "), 0);
        assert!(!has_tokens(" \n"));
    }

    #[test]
    fn counts_match_tokenize() {
        let text = "one two  three\nfour";
        assert_eq!(token_count(text), tokenize(text).len());
        assert!(has_tokens(text));
    }
}
