// WordNet noun lexicon — the data behind lemmatization.
//
// Two files drive the lemmatizer, both from the Princeton WordNet database:
// noun.exc maps irregular inflections to their base forms ("children" ->
// "child"), and index.noun lists every noun lemma WordNet knows about.
// Regular inflections are reduced with the WordNet detachment rules and
// validated against the lemma index.
//
// Only the noun part of speech is loaded. That matches the behavior the
// matching pipeline is specified against: "wallets" reduces to "wallet",
// while verb forms like "running" pass through unchanged.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

pub mod download;

/// File names within the lexicon directory. These are the upstream WordNet
/// database file names, kept verbatim so a stock WNdb tree works as-is.
pub const NOUN_EXCEPTIONS_FILE: &str = "noun.exc";
pub const NOUN_INDEX_FILE: &str = "index.noun";

/// WordNet "rules of detachment" for nouns: strip the suffix, append the
/// replacement, keep the candidate if the lemma index knows it.
const NOUN_SUFFIX_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// In-memory WordNet noun data. Immutable after load — safe to share
/// across request handlers without locking.
pub struct Lexicon {
    /// Irregular inflection -> base form (from noun.exc)
    exceptions: HashMap<String, String>,
    /// Every single-word noun lemma (from index.noun)
    nouns: HashSet<String>,
}

impl Lexicon {
    /// Load the lexicon from a directory containing the two WordNet files.
    pub fn load(dir: &Path) -> Result<Self> {
        let exc_path = dir.join(NOUN_EXCEPTIONS_FILE);
        let exc_raw = fs::read_to_string(&exc_path)
            .with_context(|| format!("Failed to read {}", exc_path.display()))?;

        let idx_path = dir.join(NOUN_INDEX_FILE);
        let idx_raw = fs::read_to_string(&idx_path)
            .with_context(|| format!("Failed to read {}", idx_path.display()))?;

        let lexicon = Self::from_parts(parse_exceptions(&exc_raw), parse_index(&idx_raw));

        info!(
            exceptions = lexicon.exceptions.len(),
            nouns = lexicon.nouns.len(),
            "Loaded WordNet noun lexicon"
        );

        Ok(lexicon)
    }

    /// Build a lexicon from pre-parsed parts. Used by tests to avoid
    /// touching the filesystem.
    pub fn from_parts(exceptions: HashMap<String, String>, nouns: HashSet<String>) -> Self {
        Self { exceptions, nouns }
    }

    /// Reduce a word to its noun base form (WordNet morphy).
    ///
    /// Order of preference: the irregular exception list, then the word
    /// itself and every detachment-rule candidate found in the lemma index,
    /// shortest match first. Words the lexicon doesn't know pass through
    /// unchanged — lemmatization never drops a token.
    pub fn lemmatize_noun(&self, word: &str) -> String {
        if let Some(base) = self.exceptions.get(word) {
            return base.clone();
        }

        let mut candidates: Vec<String> = Vec::new();
        if self.nouns.contains(word) {
            candidates.push(word.to_string());
        }
        for (suffix, replacement) in NOUN_SUFFIX_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                let candidate = format!("{stem}{replacement}");
                if !candidate.is_empty() && self.nouns.contains(candidate.as_str()) {
                    candidates.push(candidate);
                }
            }
        }

        candidates
            .into_iter()
            .min_by_key(|c| c.len())
            .unwrap_or_else(|| word.to_string())
    }

    /// Number of irregular exception entries (for the status command).
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// Number of noun lemmas in the index (for the status command).
    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }
}

/// Parse noun.exc: one entry per line, inflected form followed by one or
/// more base forms. The first base form wins. Multiword entries (WordNet
/// joins them with underscores) are skipped — the tokenizer never produces
/// them.
fn parse_exceptions(raw: &str) -> HashMap<String, String> {
    let mut exceptions = HashMap::new();
    for line in raw.lines() {
        let mut fields = line.split_whitespace();
        let (Some(inflected), Some(base)) = (fields.next(), fields.next()) else {
            continue;
        };
        if inflected.contains('_') || base.contains('_') {
            continue;
        }
        exceptions.insert(inflected.to_string(), base.to_string());
    }
    exceptions
}

/// Parse index.noun: the lemma is the first field of each data line.
/// License header lines start with whitespace; multiword lemmas are skipped.
fn parse_index(raw: &str) -> HashSet<String> {
    raw.lines()
        .filter(|line| !line.starts_with(' '))
        .filter_map(|line| line.split_whitespace().next())
        .filter(|lemma| !lemma.contains('_'))
        .map(|lemma| lemma.to_string())
        .collect()
}
