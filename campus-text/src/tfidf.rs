//! TF-IDF weighting over tokenised documents.
//!
//! Term frequency is the share of a document's tokens taken by a term and the
//! inverse document frequency is `ln(N / df)`. Per-document products are
//! summed across the corpus. A corpus of one document has a zero IDF for
//! every term, so it falls back to plain term frequency.

use std::collections::BTreeMap;

/// Corpus-wide TF-IDF weight of every term in `documents`.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "TF-IDF weights are ratios of token and document counts"
)]
pub(crate) fn weigh_terms(documents: &[Vec<String>]) -> BTreeMap<String, f64> {
    let frequencies: Vec<BTreeMap<&str, f64>> = documents
        .iter()
        .map(|tokens| term_frequencies(tokens))
        .collect();

    let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
    for term in frequencies.iter().flat_map(BTreeMap::keys) {
        *document_frequency.entry(*term).or_default() += 1;
    }

    let single_document = documents.len() == 1;
    let total_documents = documents.len() as f64;
    let mut weights = BTreeMap::new();
    for (term, tf) in frequencies.iter().flatten() {
        let idf = if single_document {
            1.0
        } else {
            let containing = document_frequency.get(term).copied().unwrap_or(1);
            (total_documents / containing as f64).ln()
        };
        *weights.entry((*term).to_owned()).or_insert(0.0) += tf * idf;
    }
    weights
}

/// Share of `tokens` taken by each distinct term.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "term frequency divides occurrence counts by document length"
)]
fn term_frequencies(tokens: &[String]) -> BTreeMap<&str, f64> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_default() += 1;
    }
    let length = tokens.len() as f64;
    counts
        .into_iter()
        .map(|(term, count)| (term, count as f64 / length))
        .collect()
}
