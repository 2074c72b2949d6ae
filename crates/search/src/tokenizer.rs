//! Whitespace tokenizer
//!
//! Documents are split into whole words on runs of whitespace and each word
//! is lowercased. Punctuation is kept, there is no minimum token length,
//! and no stemming or stopword removal.

use std::collections::HashSet;

/// Tokenize text into searchable terms
///
/// - Split on any run of whitespace (leading/trailing whitespace yields nothing)
/// - Lowercase each piece
///
/// # Example
///
/// ```
/// use docsearch_search::tokenizer::tokenize;
///
/// let tokens = tokenize("This is  a Test.");
/// assert_eq!(tokens, vec!["this", "is", "a", "test."]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(normalize_term).collect()
}

/// Tokenize and deduplicate, keeping first-occurrence order
///
/// # Example
///
/// ```
/// use docsearch_search::tokenizer::tokenize_unique;
///
/// let tokens = tokenize_unique("test Test TEST");
/// assert_eq!(tokens, vec!["test"]);
/// ```
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Normalize a single search term the same way document tokens are
///
/// Only case is folded, one character at a time, so the result never
/// depends on a character's position in the word. Final sigma folds to
/// `σ` so `ΟΔΟΣ`, `οδος` and `οδοσ` all normalize alike. A term containing
/// whitespace is returned folded and will never match an indexed token.
pub fn normalize_term(term: &str) -> String {
    term.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}
