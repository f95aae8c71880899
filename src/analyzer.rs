use crate::lemmatizer::Lemmatizer;
use crate::stemmer::RuleStemmer;
use crate::tokenizer::Tokenizer;
use rust_stemmers::{Algorithm, Stemmer};
use serde::Serialize;

/// One word run through every normalizer side by side.
#[derive(Debug, Clone, Serialize)]
pub struct WordAnalysis {
    /// The word as the caller supplied it.
    pub word: String,
    /// Lowercased form, the input every transform actually sees.
    pub normalized: String,
    /// Output of the naive rule-based suffix stripper.
    pub rule_stem: String,
    /// Output of the irregular-form table lookup.
    pub lemma: String,
    /// Output of the Snowball English stemmer (rust-stemmers).
    pub snowball_stem: String,
}

/// Aggregate view over a batch of analyses.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub words: usize,
    /// How often the naive stripper landed on the same stem as Snowball.
    pub rule_snowball_agreement: usize,
    /// How many words hit the irregular-form table.
    pub irregular_hits: usize,
}

/// Runs words through the rule stemmer, the lemma lookup, and a reference
/// Snowball stemmer, producing side-by-side comparisons.
///
/// The Snowball stemmer is a black box here: it stands in for "what a real
/// stemming library does" so the naive transforms have something honest to
/// be measured against.
pub struct Analyzer {
    tokenizer: Tokenizer,
    rule_stemmer: RuleStemmer,
    lemmatizer: Lemmatizer,
    snowball: Stemmer,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            rule_stemmer: RuleStemmer::new(),
            lemmatizer: Lemmatizer::new(),
            snowball: Stemmer::create(Algorithm::English),
        }
    }

    /// Swap in a custom lemmatizer (e.g. one loaded from a table file).
    pub fn with_lemmatizer(mut self, lemmatizer: Lemmatizer) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    /// Analyze a single word through all three normalizers.
    pub fn analyze_word(&self, word: &str) -> WordAnalysis {
        let normalized = word.to_lowercase();
        WordAnalysis {
            word: word.to_string(),
            rule_stem: self.rule_stemmer.stem(word),
            lemma: self.lemmatizer.lemmatize(word),
            snowball_stem: self.snowball.stem(&normalized).to_string(),
            normalized,
        }
    }

    /// Tokenize text and analyze every token.
    pub fn analyze_text(&self, text: &str) -> Vec<WordAnalysis> {
        self.tokenizer
            .tokenize(text)
            .iter()
            .map(|word| self.analyze_word(word))
            .collect()
    }

    /// Summarize a batch of analyses.
    pub fn summarize(&self, analyses: &[WordAnalysis]) -> AnalysisSummary {
        AnalysisSummary {
            words: analyses.len(),
            rule_snowball_agreement: analyses
                .iter()
                .filter(|a| a.rule_stem == a.snowball_stem)
                .count(),
            irregular_hits: analyses
                .iter()
                .filter(|a| self.lemmatizer.is_irregular(&a.normalized))
                .count(),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_word() {
        let analyzer = Analyzer::new();
        let analysis = analyzer.analyze_word("Running");

        assert_eq!(analysis.word, "Running");
        assert_eq!(analysis.normalized, "running");
        assert_eq!(analysis.rule_stem, "runn");
        assert_eq!(analysis.lemma, "run");
        assert_eq!(analysis.snowball_stem, "run");
    }

    #[test]
    fn test_analyze_text() {
        let analyzer = Analyzer::new();
        let analyses = analyzer.analyze_text("The cats went home");

        assert_eq!(analyses.len(), 4);
        assert_eq!(analyses[1].rule_stem, "cat");
        assert_eq!(analyses[2].lemma, "go");
    }

    #[test]
    fn test_summarize() {
        let analyzer = Analyzer::new();
        let analyses = analyzer.analyze_text("cats went running");
        let summary = analyzer.summarize(&analyses);

        assert_eq!(summary.words, 3);
        // "went" and "running" are table entries.
        assert_eq!(summary.irregular_hits, 2);
        // "cats" -> "cat" on both sides, "went" survives both untouched,
        // but "running" splits them: "runn" vs "run".
        assert_eq!(summary.rule_snowball_agreement, 2);
    }

    #[test]
    fn test_analyze_empty_text() {
        let analyzer = Analyzer::new();
        let analyses = analyzer.analyze_text("");
        assert!(analyses.is_empty());

        let summary = analyzer.summarize(&analyses);
        assert_eq!(summary.words, 0);
        assert_eq!(summary.rule_snowball_agreement, 0);
    }

    #[test]
    fn test_custom_lemmatizer() {
        use std::collections::HashMap;

        let mut table = HashMap::new();
        table.insert("oxen".to_string(), "ox".to_string());
        let analyzer = Analyzer::new().with_lemmatizer(Lemmatizer::with_table(table));

        assert_eq!(analyzer.analyze_word("oxen").lemma, "ox");
        assert_eq!(analyzer.analyze_word("went").lemma, "went");
    }
}
