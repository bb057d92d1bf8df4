use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Nothing here is secret, but everything is overridable — the .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Address the web server binds to (RECLAIM_BIND, default 0.0.0.0)
    pub bind: String,
    /// Port the web server listens on (RECLAIM_PORT, default 5001)
    pub port: u16,
    /// Directory containing the WordNet lexicon files
    pub lexicon_dir: PathBuf,
    /// Base URL the lexicon files are fetched from (RECLAIM_LEXICON_URL).
    /// Point this at a local mirror for air-gapped deployments.
    pub lexicon_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default — the service runs out of the box once
    /// `reclaim download-lexicon` has fetched the WordNet files.
    pub fn load() -> Result<Self> {
        let port = match env::var("RECLAIM_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("RECLAIM_PORT is not a valid port: {raw}"))?,
            Err(_) => 5001,
        };

        let lexicon_dir = env::var("RECLAIM_LEXICON_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::lexicon::download::default_lexicon_dir());

        Ok(Self {
            bind: env::var("RECLAIM_BIND").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            lexicon_dir,
            lexicon_url: env::var("RECLAIM_LEXICON_URL")
                .unwrap_or_else(|_| crate::lexicon::download::DEFAULT_LEXICON_URL.to_string()),
        })
    }

    /// Check that the WordNet lexicon files are present on disk.
    /// Call this before any operation that needs to lemmatize text.
    pub fn require_lexicon(&self) -> Result<()> {
        if !crate::lexicon::download::lexicon_files_present(&self.lexicon_dir) {
            anyhow::bail!(
                "WordNet lexicon files not found in {}\n\
                 Run `reclaim download-lexicon` to download them.\n\
                 Or set RECLAIM_LEXICON_DIR to a directory that already has them.",
                self.lexicon_dir.display()
            );
        }
        Ok(())
    }
}
