mod corpus;

#[cfg(test)]
mod tests;

pub use corpus::Corpus;

use std::collections::BTreeSet;

/// A normalized short text, kept both as ordered tokens and as a token set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Normalized text as produced by the preprocessor
    text: String,
    /// Whitespace-separated tokens in original order
    tokens: Vec<String>,
    /// Unique tokens, used for set similarity
    token_set: BTreeSet<String>,
}

impl Document {
    /// Build a document from already-normalized text
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        let token_set = tokens.iter().cloned().collect();

        Self {
            text,
            tokens,
            token_set,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn token_set(&self) -> &BTreeSet<String> {
        &self.token_set
    }

    /// True when the document has no tokens at all
    pub fn is_empty(&self) -> bool {
        self.token_set.is_empty()
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
