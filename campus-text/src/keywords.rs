//! Keyword ranking.

use std::collections::{BTreeMap, HashSet};

/// Rank distinct terms by descending weight.
///
/// `tokens` supplies the first-occurrence order that breaks ties; terms
/// without a weight are ignored.
pub(crate) fn rank_terms<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
    weights: &BTreeMap<String, f64>,
    max_keywords: usize,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ranked: Vec<(&str, f64)> = tokens
        .into_iter()
        .filter(|token| seen.insert(*token))
        .filter_map(|token| weights.get(token).map(|weight| (token, *weight)))
        .collect();
    // Stable sort keeps first-occurrence order among equal weights.
    ranked.sort_by(|left, right| right.1.total_cmp(&left.1));
    ranked
        .into_iter()
        .take(max_keywords)
        .map(|(term, _)| term.to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_first_occurrence_order() {
        let weights = BTreeMap::from([
            ("beta".to_owned(), 0.5),
            ("alpha".to_owned(), 0.5),
            ("gamma".to_owned(), 0.9),
        ]);
        let ranked = rank_terms(["beta", "alpha", "beta", "gamma"], &weights, 10);
        assert_eq!(ranked, vec!["gamma", "beta", "alpha"]);
    }

    #[test]
    fn zero_limit_yields_nothing() {
        let weights = BTreeMap::from([("beta".to_owned(), 0.5)]);
        assert!(rank_terms(["beta"], &weights, 0).is_empty());
    }
}
