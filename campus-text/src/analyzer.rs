//! Configurable entry point for text analysis.

use std::collections::BTreeMap;

use log::debug;

use crate::{is_stop_word, keywords::rank_terms, tfidf::weigh_terms, tokenize};

/// Keyword count used when the caller does not specify one.
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// Tunable parameters for [`TextAnalyzer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAnalyzerConfig {
    /// Keywords returned by [`TextAnalyzer::keywords`].
    pub max_keywords: usize,
    /// ASCII tokens shorter than this many characters are discarded.
    ///
    /// Non-ASCII tokens are always kept because ideographic scripts yield
    /// meaningful single-character tokens.
    pub min_token_chars: usize,
}

impl Default for TextAnalyzerConfig {
    fn default() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            min_token_chars: 2,
        }
    }
}

/// Tokeniser, TF-IDF weigher and keyword extractor.
///
/// The analyzer holds only configuration and can be shared freely between
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextAnalyzer {
    config: TextAnalyzerConfig,
}

impl TextAnalyzer {
    /// Build an analyzer from explicit configuration.
    #[must_use]
    pub const fn new(config: TextAnalyzerConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &TextAnalyzerConfig {
        &self.config
    }

    /// Tokens of `text` with stopwords and short ASCII fragments removed.
    #[must_use]
    pub fn tokens(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .filter(|token| self.keeps(token))
            .collect()
    }

    /// Up to the configured number of keywords for `text`.
    #[must_use]
    pub fn keywords(&self, text: &str) -> Vec<String> {
        self.extract_keywords(text, self.config.max_keywords)
    }

    /// Up to `max_keywords` keywords for `text`, strongest first.
    ///
    /// A single text is its own one-document corpus, so terms are ranked by
    /// term frequency. Ties keep the order in which terms first appear.
    ///
    /// # Examples
    /// ```
    /// use campus_text::TextAnalyzer;
    ///
    /// let analyzer = TextAnalyzer::default();
    /// assert!(analyzer.extract_keywords("", 5).is_empty());
    /// assert_eq!(analyzer.extract_keywords("the art of the art fair", 5), vec!["art", "fair"]);
    /// ```
    #[must_use]
    pub fn extract_keywords(&self, text: &str, max_keywords: usize) -> Vec<String> {
        if max_keywords == 0 {
            return Vec::new();
        }
        let documents = [self.tokens(text)];
        let weights = weigh_terms(&documents);
        rank_terms(documents.iter().flatten().map(String::as_str), &weights, max_keywords)
    }

    /// Corpus-wide TF-IDF weight per term, summed across documents.
    #[must_use]
    pub fn calculate_tfidf<S: AsRef<str>>(&self, documents: &[S]) -> BTreeMap<String, f64> {
        weigh_terms(&self.tokenize_corpus(documents))
    }

    /// Up to `max_keywords` terms ranked by corpus-wide TF-IDF.
    ///
    /// Ties keep the order in which terms first appear across the corpus.
    #[must_use]
    pub fn corpus_keywords<S: AsRef<str>>(&self, documents: &[S], max_keywords: usize) -> Vec<String> {
        let corpus = self.tokenize_corpus(documents);
        let weights = weigh_terms(&corpus);
        debug!(
            "Weighed {} distinct terms across {} documents",
            weights.len(),
            corpus.len()
        );
        rank_terms(corpus.iter().flatten().map(String::as_str), &weights, max_keywords)
    }

    fn tokenize_corpus<S: AsRef<str>>(&self, documents: &[S]) -> Vec<Vec<String>> {
        documents
            .iter()
            .map(|document| self.tokens(document.as_ref()))
            .collect()
    }

    fn keeps(&self, token: &str) -> bool {
        let long_enough = !token.is_ascii() || token.chars().count() >= self.config.min_token_chars;
        long_enough && !is_stop_word(token)
    }
}
