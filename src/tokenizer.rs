use unicode_segmentation::UnicodeSegmentation;

/// Splits free text into word tokens using Unicode word boundaries.
///
/// Purely lexical: no lowercasing, no stopword filtering. Case handling
/// belongs to the transforms downstream, which fold it themselves.
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text into words. Punctuation-only segments are dropped by
    /// the word-boundary rules.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(|w| w.to_string()).collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
