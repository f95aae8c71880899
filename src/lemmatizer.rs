use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

lazy_static::lazy_static! {
    /// Built-in table of irregular surface forms and their lemmas.
    /// Keys are lowercase; the table is fixed for the life of the process.
    static ref IRREGULAR_FORMS: HashMap<&'static str, &'static str> = {
        [
            // be
            ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"),
            ("were", "be"), ("been", "be"), ("being", "be"),
            // go
            ("went", "go"), ("gone", "go"), ("going", "go"),
            // run
            ("ran", "run"), ("running", "run"),
            // comparatives
            ("better", "good"), ("best", "good"),
            ("worse", "bad"), ("worst", "bad"),
            // common verbs
            ("saw", "see"), ("seen", "see"),
            ("ate", "eat"), ("eaten", "eat"),
            ("had", "have"), ("has", "have"),
            ("did", "do"), ("done", "do"),
            // irregular plurals
            ("mice", "mouse"), ("geese", "goose"), ("feet", "foot"),
            ("teeth", "tooth"), ("children", "child"), ("people", "person"),
        ]
        .iter()
        .copied()
        .collect()
    };
}

/// Errors raised while loading a lemma table from disk. The lookup itself
/// never fails.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read lemma table: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse lemma table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Lookup-based lemmatizer over a fixed table of irregular forms.
///
/// A miss is not an error: words outside the table come back lowercased and
/// otherwise untouched. Anything resembling real morphological analysis is
/// out of scope here and belongs to a dictionary-backed library.
pub struct Lemmatizer {
    table: Option<HashMap<String, String>>,
}

impl Lemmatizer {
    /// Create a lemmatizer over the built-in irregular-form table.
    pub fn new() -> Self {
        Self { table: None }
    }

    /// Create a lemmatizer over a caller-supplied table. Keys are lowercased
    /// on the way in so lookups stay case-insensitive.
    pub fn with_table(table: HashMap<String, String>) -> Self {
        let table = table
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Self { table: Some(table) }
    }

    /// Load a table from a JSON file of the shape `{"surface": "lemma", ...}`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let table: HashMap<String, String> = serde_json::from_reader(reader)?;
        Ok(Self::with_table(table))
    }

    /// Resolve a word to its lemma. Total over all strings: a table miss
    /// returns the lowercased input unchanged.
    pub fn lemmatize(&self, word: &str) -> String {
        let word = word.to_lowercase();

        let hit = match &self.table {
            Some(table) => table.get(&word).map(|s| s.as_str()),
            None => IRREGULAR_FORMS.get(word.as_str()).copied(),
        };

        match hit {
            Some(lemma) => lemma.to_string(),
            None => word,
        }
    }

    /// Whether the word has an entry in the table.
    pub fn is_irregular(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        match &self.table {
            Some(table) => table.contains_key(&word),
            None => IRREGULAR_FORMS.contains_key(word.as_str()),
        }
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}
