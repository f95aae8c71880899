// Re-export main components
pub mod analyzer;
pub mod api;
pub mod lemmatizer;
pub mod stemmer;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{AnalysisSummary, Analyzer, WordAnalysis};
pub use lemmatizer::{Lemmatizer, TableError};
pub use stemmer::{RuleStemmer, DEFAULT_SUFFIXES};
pub use tokenizer::Tokenizer;

// Re-export error types
pub use anyhow::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
