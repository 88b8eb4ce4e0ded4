//! Word tokenizer for ingestion and queries
//!
//! Pipeline: split on whitespace → drop ASCII punctuation → lowercase.
//! No stemming, no stopwords, no length filter. A field made only of
//! punctuation comes out as the empty token and is still emitted.

use std::str::SplitWhitespace;

/// Normalize a single field into a token.
///
/// Every ASCII punctuation character is removed (not replaced) and every
/// remaining character is lowercased. The whole input is treated as one
/// field: whitespace inside it is kept.
///
/// # Example
///
/// ```
/// use sift_search::tokenizer::normalize;
///
/// assert_eq!(normalize("Hello,"), "hello");
/// assert_eq!(normalize("don't"), "dont");
/// assert_eq!(normalize("..."), "");
/// ```
pub fn normalize(field: &str) -> String {
    field
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lazy token stream over one line of text.
///
/// Produced by [`tokenize`]. Yields tokens left to right.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    fields: SplitWhitespace<'a>,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.fields.next().map(normalize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.fields.size_hint()
    }
}

/// Tokenize a line into normalized words.
///
/// Any run of whitespace separates fields; leading and trailing
/// whitespace produce nothing.
///
/// # Example
///
/// ```
/// use sift_search::tokenizer::tokenize;
///
/// let tokens: Vec<String> = tokenize("Hello, World!").collect();
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens {
        fields: line.split_whitespace(),
    }
}

/// Tokenize a line and collect the tokens.
pub fn tokenize_line(line: &str) -> Vec<String> {
    tokenize(line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize_line("Hello, World!");
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_keeps_short_words() {
        let tokens = tokenize_line("I am a test");
        assert_eq!(tokens, vec!["i", "am", "a", "test"]);
    }

    #[test]
    fn test_tokenize_numbers() {
        let tokens = tokenize_line("test123 foo456bar");
        assert_eq!(tokens, vec!["test123", "foo456bar"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize_line("").is_empty());
        assert!(tokenize_line("   \t  ").is_empty());
    }

    #[test]
    fn test_tokenize_whitespace_runs() {
        let tokens = tokenize_line("  alpha \t\tbeta   gamma\r");
        assert_eq!(tokens, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_tokenize_only_punctuation_yields_empty_token() {
        let tokens = tokenize_line("...---...");
        assert_eq!(tokens, vec![""]);
    }

    #[test]
    fn test_tokenize_punctuation_field_between_words() {
        let tokens = tokenize_line("wait -- what?");
        assert_eq!(tokens, vec!["wait", "", "what"]);
    }

    #[test]
    fn test_punctuation_inside_word_is_dropped() {
        assert_eq!(normalize("e-mail"), "email");
        assert_eq!(normalize("O'Brien"), "obrien");
        assert_eq!(normalize("(a+b)*c"), "abc");
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        assert_eq!(normalize("Two Words"), "two words");
    }

    #[test]
    fn test_normalize_non_ascii() {
        // Lowercasing is Unicode-aware; non-ASCII symbols are not punctuation
        assert_eq!(normalize("ÉCOLE"), "école");
        assert_eq!(normalize("«quoted»"), "«quoted»");
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let line = "The cat sat. On THE mat!";
        assert_eq!(tokenize_line(line), tokenize_line(line));
    }

    #[test]
    fn test_tokens_is_lazy_and_cloneable() {
        let mut tokens = tokenize("one two three");
        assert_eq!(tokens.next().as_deref(), Some("one"));
        let rest: Vec<String> = tokens.clone().collect();
        assert_eq!(rest, vec!["two", "three"]);
        assert_eq!(tokens.count(), 2);
    }
}
