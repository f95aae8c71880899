/// Default suffix list, checked in this exact order.
pub const DEFAULT_SUFFIXES: [&str; 7] = ["ing", "ed", "er", "est", "ly", "s", "es"];

/// Naive rule-based stemmer that lowercases a word and trims matching
/// suffixes from the end.
///
/// Every suffix in the list is tested, in order, against the progressively
/// shortened word, so a single call can trim more than one suffix
/// ("hopeless" loses "s" and then "es", giving "hopel"). The trim is a
/// literal character cut with no linguistic repair: "running" becomes
/// "runn", not "run". Both behaviors are intentional. This stemmer shows
/// what blind suffix stripping does; `rust_stemmers::Stemmer` is the
/// serious alternative.
pub struct RuleStemmer {
    suffixes: Vec<String>,
}

impl RuleStemmer {
    /// Create a stemmer with the default suffix list.
    pub fn new() -> Self {
        Self::with_suffixes(DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect())
    }

    /// Create a stemmer with a custom suffix list, checked in the given order.
    pub fn with_suffixes(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }

    /// Stem a single word. Total over all strings; the result may be empty
    /// when the suffixes consume the whole word.
    pub fn stem(&self, word: &str) -> String {
        let mut word = word.to_lowercase();

        for suffix in &self.suffixes {
            if !suffix.is_empty() && word.ends_with(suffix.as_str()) {
                word.truncate(word.len() - suffix.len());
            }
        }

        word
    }
}

impl Default for RuleStemmer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_single_suffix() {
        let stemmer = RuleStemmer::new();
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("fastest"), "fast");
        assert_eq!(stemmer.stem("walked"), "walk");
        assert_eq!(stemmer.stem("slowly"), "slow");
    }

    #[test]
    fn test_naive_literal_trim() {
        // The trim is literal: no doubled-consonant repair.
        let stemmer = RuleStemmer::new();
        assert_eq!(stemmer.stem("running"), "runn");
    }

    #[test]
    fn test_cascading_strip() {
        // "s" is trimmed first, then the shortened word still ends in "es".
        // Multiple trims per call are the documented behavior, not a bug.
        let stemmer = RuleStemmer::new();
        assert_eq!(stemmer.stem("hopeless"), "hopel");
        assert_eq!(stemmer.stem("address"), "addr");
    }

    #[test]
    fn test_suffix_order_is_fixed() {
        // "ing" is checked before "ly", so "lovingly" only loses "ly":
        // by the time "ly" is trimmed, the "ing" check has already passed.
        let stemmer = RuleStemmer::new();
        assert_eq!(stemmer.stem("lovingly"), "loving");
    }

    #[test]
    fn test_no_matching_suffix_is_identity() {
        let stemmer = RuleStemmer::new();
        assert_eq!(stemmer.stem("cat"), "cat");
        assert_eq!(stemmer.stem("zebra"), "zebra");
    }

    #[test]
    fn test_lowercases_input() {
        let stemmer = RuleStemmer::new();
        assert_eq!(stemmer.stem("Running"), stemmer.stem("running"));
        assert_eq!(stemmer.stem("CATS"), "cat");
        assert_eq!(stemmer.stem("Zebra"), "zebra");
    }

    #[test]
    fn test_word_equal_to_suffix_strips_to_empty() {
        let stemmer = RuleStemmer::new();
        assert_eq!(stemmer.stem("ing"), "");
        assert_eq!(stemmer.stem("s"), "");
        // "es" first loses "s", and the remaining "e" matches nothing.
        assert_eq!(stemmer.stem("es"), "e");
    }

    #[test]
    fn test_short_and_empty_words() {
        let stemmer = RuleStemmer::new();
        assert_eq!(stemmer.stem("a"), "a");
        assert_eq!(stemmer.stem(""), "");
    }

    #[test]
    fn test_non_ascii_input() {
        let stemmer = RuleStemmer::new();
        assert_eq!(stemmer.stem("naïve"), "naïve");
        assert_eq!(stemmer.stem("cafés"), "café");
    }

    #[test]
    fn test_custom_suffixes() {
        let stemmer = RuleStemmer::with_suffixes(vec!["ness".to_string(), "ment".to_string()]);
        assert_eq!(stemmer.stem("kindness"), "kind");
        assert_eq!(stemmer.stem("development"), "develop");
        assert_eq!(stemmer.stem("running"), "running");
    }
}
