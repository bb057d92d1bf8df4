// Composition tests — verifying that the pieces chain together correctly.
//
// These tests exercise the data flow the match endpoint relies on:
//   raw text -> TextNormalizer -> TfIdfScorer -> MatchReport
// through the Matcher, without any network calls or filesystem access.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use reclaim::lexicon::Lexicon;
use reclaim::matching::Matcher;

fn fixture_matcher() -> Matcher {
    let exceptions = HashMap::from([("children".to_string(), "child".to_string())]);
    let nouns: HashSet<String> = [
        "wallet", "leather", "park", "key", "umbrella", "bicycle", "phone", "case", "battery",
        "charger", "backpack",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    Matcher::new(Arc::new(Lexicon::from_parts(exceptions, nouns))).unwrap()
}

// ============================================================
// Chain: raw descriptions -> normalized strings -> similarity
// ============================================================

#[test]
fn wallet_scenario_scores_high() {
    let matcher = fixture_matcher();
    let report = matcher
        .compare(
            "Black leather wallet lost near the park",
            "Found a black leather wallet in the park",
        )
        .unwrap();

    for token in ["leather", "wallet", "park"] {
        assert!(
            report.preprocessed_lost.contains(token),
            "Lost side should keep {token:?}: {:?}",
            report.preprocessed_lost
        );
        assert!(
            report.preprocessed_found.contains(token),
            "Found side should keep {token:?}: {:?}",
            report.preprocessed_found
        );
    }

    assert!(
        report.similarity_score > 0.5,
        "Same wallet described twice should score high, got {}",
        report.similarity_score
    );
}

#[test]
fn disjoint_descriptions_score_low() {
    let matcher = fixture_matcher();
    let report = matcher
        .compare("Red umbrella", "Blue bicycle keys")
        .unwrap();
    assert!(
        report.similarity_score < 0.2,
        "Unrelated items should score low, got {}",
        report.similarity_score
    );
}

#[test]
fn identical_raw_descriptions_score_one() {
    let matcher = fixture_matcher();
    let report = matcher
        .compare(
            "Black leather wallet with two cards",
            "Black leather wallet with two cards",
        )
        .unwrap();
    assert!(
        (report.similarity_score - 1.0).abs() < 0.001,
        "Identical descriptions should score ~1.0, got {}",
        report.similarity_score
    );
}

#[test]
fn comparison_is_symmetric_end_to_end() {
    let matcher = fixture_matcher();
    let lost = "Phone with a cracked case and a charger";
    let found = "Found phone charger and case near the park";

    let ab = matcher.compare(lost, found).unwrap().similarity_score;
    let ba = matcher.compare(found, lost).unwrap().similarity_score;
    assert!(
        (ab - ba).abs() < 1e-10,
        "End-to-end comparison should be symmetric: {ab} vs {ba}"
    );
}

#[test]
fn plural_and_singular_descriptions_still_match() {
    // Lemmatization folds "keys"/"key" and "wallets"/"wallet" together,
    // so differently-inflected descriptions of the same items score well
    let matcher = fixture_matcher();
    let report = matcher
        .compare("Lost wallets and keys", "Lost wallet and key")
        .unwrap();
    assert!(
        (report.similarity_score - 1.0).abs() < 0.001,
        "Inflection alone should not lower the score, got {}",
        report.similarity_score
    );
}

#[test]
fn no_signal_pair_scores_zero_without_error() {
    let matcher = fixture_matcher();
    let report = matcher.compare("12345 !!!", "the a of the").unwrap();
    assert_eq!(report.similarity_score, 0.0);
    assert_eq!(report.preprocessed_lost, "");
    assert_eq!(report.preprocessed_found, "");
}

#[test]
fn every_comparison_stays_in_unit_interval() {
    let matcher = fixture_matcher();
    let descriptions = [
        "Black leather wallet lost near the park",
        "Found a black leather wallet in the park",
        "Red umbrella",
        "Blue bicycle keys",
        "!!!",
        "",
    ];
    for a in descriptions {
        for b in descriptions {
            let report = matcher.compare(a, b).unwrap();
            assert!(
                (0.0..=1.0).contains(&report.similarity_score),
                "compare({a:?}, {b:?}) out of range: {}",
                report.similarity_score
            );
        }
    }
}
