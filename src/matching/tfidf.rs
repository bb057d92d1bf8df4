// Pair-scoped TF-IDF similarity.
//
// The two normalized descriptions form the entire corpus for one
// comparison: vocabulary and document frequencies come from just that pair,
// get used once, and are dropped. Nothing carries over between calls, so
// term weights always reflect the pair actually being compared and
// concurrent requests share nothing.
//
// Weighting is the standard smoothed formula: tf is the raw term count in
// a document, idf = ln((1 + N) / (1 + df)) + 1 with N = 2, and each
// document vector is L2-normalized. With two documents that means a term
// appearing in both carries idf 1.0 and a term unique to one side carries
// idf ln(3/2) + 1.

use std::collections::{HashMap, HashSet};

use super::traits::SimilarityScorer;

/// Pair-scoped TF-IDF cosine scorer — the default for the match endpoint.
pub struct TfIdfScorer;

impl SimilarityScorer for TfIdfScorer {
    fn score(&self, normalized_a: &str, normalized_b: &str) -> f64 {
        let tokens_a: Vec<&str> = normalized_a.split_whitespace().collect();
        let tokens_b: Vec<&str> = normalized_b.split_whitespace().collect();

        // Zero vocabulary means cosine is undefined — report no signal
        if tokens_a.is_empty() && tokens_b.is_empty() {
            return 0.0;
        }

        let weights_a = tfidf_weights(&tokens_a, &tokens_b);
        let weights_b = tfidf_weights(&tokens_b, &tokens_a);

        cosine_from_weights(&weights_a, &weights_b)
    }
}

/// TF-IDF weight vector for `doc` within the two-document corpus
/// {doc, other}, L2-normalized.
fn tfidf_weights(doc: &[&str], other: &[&str]) -> HashMap<String, f64> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in doc.iter().copied() {
        *counts.entry(token).or_insert(0) += 1;
    }

    let other_terms: HashSet<&str> = other.iter().copied().collect();

    // Every term of `doc` has df >= 1 by construction
    let mut weights: HashMap<String, f64> = counts
        .into_iter()
        .map(|(term, count)| {
            let df: f64 = if other_terms.contains(term) { 2.0 } else { 1.0 };
            let idf = ((1.0 + 2.0) / (1.0 + df)).ln() + 1.0;
            (term.to_string(), count as f64 * idf)
        })
        .collect();

    let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > f64::EPSILON {
        for weight in weights.values_mut() {
            *weight /= norm;
        }
    }

    weights
}

/// Cosine similarity between two term-weight maps, clamped to [0, 1].
///
/// Separated from the scorer so it can be used with ad-hoc weight maps.
/// Returns 0.0 when either vector has (near-)zero magnitude rather than
/// dividing by zero.
pub fn cosine_from_weights(
    weights_a: &HashMap<String, f64>,
    weights_b: &HashMap<String, f64>,
) -> f64 {
    let dot: f64 = weights_a
        .iter()
        .filter_map(|(term, a)| weights_b.get(term).map(|b| a * b))
        .sum();

    let mag_a = weights_a.values().map(|w| w * w).sum::<f64>().sqrt();
    let mag_b = weights_b.values().map(|w| w * w).sum::<f64>().sqrt();

    if mag_a < f64::EPSILON || mag_b < f64::EPSILON {
        return 0.0;
    }

    (dot / (mag_a * mag_b)).clamp(0.0, 1.0)
}
