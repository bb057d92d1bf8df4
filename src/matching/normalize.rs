// Text normalization — raw item description to canonical token string.
//
// Pipeline: lowercase, strip everything that isn't an ASCII letter or
// whitespace, split into tokens, drop English stop words, reduce each
// survivor to its noun base form. Survivors are joined with single spaces,
// which is exactly the shape the TF-IDF scorer re-tokenizes.
//
// The strip step removes digits, punctuation, and non-Latin scripts
// entirely, so "iPhone 13 Pro!" and "iphone pro" normalize to the same
// tokens. Contractions lose their apostrophe before tokenization
// ("don't" -> "dont").

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{Context, Result};
use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

use crate::lexicon::Lexicon;

/// Stateless after construction; shared freely across handlers.
pub struct TextNormalizer {
    stop_words: HashSet<String>,
    strip_pattern: Regex,
    lexicon: Arc<Lexicon>,
}

impl TextNormalizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self> {
        // English stop words from the stop-words crate
        let stop_words: HashSet<String> = get(LANGUAGE::English).into_iter().collect();

        // Applied after lowercasing, so a-z covers every letter we keep
        let strip_pattern =
            Regex::new(r"[^a-z\s]").context("Failed to compile the character strip pattern")?;

        Ok(Self {
            stop_words,
            strip_pattern,
            lexicon,
        })
    }

    /// Normalize a raw item description.
    ///
    /// Stop words are filtered before lemmatization, so the filter sees the
    /// token as the user wrote it. Unknown words pass through the
    /// lemmatizer unchanged. Returns the empty string when nothing
    /// survives; never fails, for any input.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let cleaned = self.strip_pattern.replace_all(&lowered, "");

        cleaned
            .split_whitespace()
            .filter(|token| !self.stop_words.contains(*token))
            .map(|token| self.lexicon.lemmatize_noun(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn normalizer() -> TextNormalizer {
        let nouns: HashSet<String> = ["wallet", "park", "key", "phone", "leather"]
            .into_iter()
            .map(String::from)
            .collect();
        let lexicon = Lexicon::from_parts(HashMap::new(), nouns);
        TextNormalizer::new(Arc::new(lexicon)).unwrap()
    }

    #[test]
    fn test_empty_input_empty_output() {
        assert_eq!(normalizer().normalize(""), "");
    }

    #[test]
    fn test_no_letters_empty_output() {
        assert_eq!(normalizer().normalize("123!!!"), "");
        assert_eq!(normalizer().normalize("?!. --- 42"), "");
    }

    #[test]
    fn test_only_stop_words_empty_output() {
        assert_eq!(normalizer().normalize("the is and of a"), "");
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(
            normalizer().normalize("Black LEATHER wallet!"),
            "black leather wallet"
        );
    }

    #[test]
    fn test_plural_reduces_to_noun_base() {
        assert_eq!(normalizer().normalize("My spare keys!"), "spare key");
    }

    #[test]
    fn test_non_latin_scripts_are_stripped() {
        assert_eq!(normalizer().normalize("кошелёк 財布 wallet"), "wallet");
    }

    #[test]
    fn test_idempotent() {
        let n = normalizer();
        let once = n.normalize("Black leather wallets lost near the park!!");
        let twice = n.normalize(&once);
        assert_eq!(once, twice);
    }
}
