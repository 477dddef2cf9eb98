//! Process-wide stopword set.

use std::collections::HashSet;
use std::sync::LazyLock;

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "am", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "below", "between", "both", "but", "by", "can",
    "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
    "i", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no", "nor",
    "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over",
    "own", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
];

// Single-ideograph function words; the tokeniser yields Han text one
// character at a time.
const CHINESE: &[&str] = &[
    "的", "了", "和", "是", "在", "与", "及", "等", "也", "就", "都", "而", "或", "被", "把", "这",
    "那", "之", "其", "着",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH.iter().chain(CHINESE).copied().collect());

/// Report whether `token` is a stopword.
///
/// Matching is exact; callers pass tokens produced by
/// [`tokenize`](crate::tokenize), which are already lowercase.
///
/// # Examples
/// ```
/// use campus_text::is_stop_word;
///
/// assert!(is_stop_word("the"));
/// assert!(is_stop_word("的"));
/// assert!(!is_stop_word("robotics"));
/// ```
#[must_use]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}
