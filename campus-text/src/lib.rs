//! Text analysis for activity titles and descriptions.
//!
//! The crate normalises free text, filters a fixed stopword set, weighs terms
//! with TF-IDF and extracts the strongest keywords. Tokenisation follows
//! Unicode word boundaries, so scripts written without spaces (Chinese, for
//! example) split into one token per ideograph rather than a single run.
//!
//! # Examples
//!
//! ```
//! use campus_text::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::default();
//! let keywords = analyzer.extract_keywords("Robotics club: build robots, race robots!", 2);
//! assert_eq!(keywords, vec!["robots", "robotics"]);
//! ```

#![forbid(unsafe_code)]

mod analyzer;
mod keywords;
mod preprocess;
mod stopwords;
mod tfidf;

pub use analyzer::{DEFAULT_MAX_KEYWORDS, TextAnalyzer, TextAnalyzerConfig};
pub use preprocess::{preprocess_text, tokenize};
pub use stopwords::is_stop_word;

use std::collections::BTreeMap;

/// Extract up to `max_keywords` keywords with the default analyzer.
#[must_use]
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    TextAnalyzer::default().extract_keywords(text, max_keywords)
}

/// Corpus-wide TF-IDF weights with the default analyzer.
#[must_use]
pub fn calculate_tfidf<S: AsRef<str>>(documents: &[S]) -> BTreeMap<String, f64> {
    TextAnalyzer::default().calculate_tfidf(documents)
}
