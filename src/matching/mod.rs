// Description matching — normalization plus similarity scoring.
//
// The Matcher is the one object the rest of the binary talks to: it owns a
// normalizer and a scorer and turns two raw descriptions into a MatchReport.
// It holds no per-comparison state, so a single instance behind an Arc
// serves every request without locking.

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lexicon::Lexicon;

pub mod normalize;
pub mod tfidf;
pub mod traits;

use self::normalize::TextNormalizer;
use self::tfidf::TfIdfScorer;
use self::traits::SimilarityScorer;

/// The result of comparing a lost description against a found description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Cosine similarity in [0, 1] — lexical overlap, not semantic meaning
    pub similarity_score: f64,
    /// The lost description after normalization
    pub preprocessed_lost: String,
    /// The found description after normalization
    pub preprocessed_found: String,
}

impl MatchReport {
    /// Display the report in the terminal — the `reclaim score` output.
    pub fn display(&self) {
        println!("\n{}", "=== Match Report ===".bold());
        println!();

        let bar_width: usize = 20;
        let filled = (self.similarity_score * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

        let colored_bar = if self.similarity_score >= 0.5 {
            bar.bright_green()
        } else if self.similarity_score >= 0.2 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  Similarity {} {:.3}",
            colored_bar, self.similarity_score
        );
        println!("  Lost:  {}", self.preprocessed_lost.dimmed());
        println!("  Found: {}", self.preprocessed_found.dimmed());
        println!();
    }
}

/// Normalizer and scorer glued together behind one entry point.
pub struct Matcher {
    normalizer: TextNormalizer,
    scorer: Box<dyn SimilarityScorer>,
}

impl Matcher {
    /// Build a matcher with the default TF-IDF scorer.
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self> {
        Ok(Self {
            normalizer: TextNormalizer::new(lexicon)?,
            scorer: Box::new(TfIdfScorer),
        })
    }

    /// Compare a lost description against a found description.
    ///
    /// Both inputs are normalized independently and the similarity model is
    /// built from exactly this pair. A pair that normalizes to nothing
    /// scores 0.0 — the empty preprocessed strings in the report show the
    /// caller why there was no signal.
    pub fn compare(&self, lost_desc: &str, found_desc: &str) -> Result<MatchReport> {
        let preprocessed_lost = self.normalizer.normalize(lost_desc);
        let preprocessed_found = self.normalizer.normalize(found_desc);

        let similarity_score = self.scorer.score(&preprocessed_lost, &preprocessed_found);
        if !similarity_score.is_finite() {
            anyhow::bail!("Similarity computation produced a non-finite score");
        }

        debug!(
            score = similarity_score,
            lost = %preprocessed_lost,
            found = %preprocessed_found,
            "Scored description pair"
        );

        Ok(MatchReport {
            similarity_score,
            preprocessed_lost,
            preprocessed_found,
        })
    }
}
