// Lexicon download helper for the WordNet noun database.
//
// Downloads two files from a WordNet 3.x mirror:
// 1. noun.exc — irregular inflection exception list (~90 KB)
// 2. index.noun — noun lemma index (~4.6 MB)
//
// Files are stored in a platform-appropriate directory
// (~/.local/share/reclaim/lexicon/ on Linux) so they persist across runs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::{NOUN_EXCEPTIONS_FILE, NOUN_INDEX_FILE};

/// Raw mirror of the Princeton WordNet 3.x database files.
/// Override with RECLAIM_LEXICON_URL to use a local mirror.
pub const DEFAULT_LEXICON_URL: &str =
    "https://raw.githubusercontent.com/wordnet/wordnet/master/dict";

/// Returns the default directory for storing lexicon files.
/// Uses the platform data directory: ~/.local/share/reclaim/lexicon/ on Linux.
pub fn default_lexicon_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reclaim")
        .join("lexicon")
}

/// Check whether both required WordNet files exist.
pub fn lexicon_files_present(dir: &Path) -> bool {
    dir.join(NOUN_EXCEPTIONS_FILE).exists() && dir.join(NOUN_INDEX_FILE).exists()
}

/// Download the WordNet noun database files.
///
/// Shows a progress bar for the large index file. Skips files that already
/// exist. Creates directories as needed.
pub async fn download_lexicon(dir: &Path, base_url: &str) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create lexicon directory: {}", dir.display()))?;

    println!("\nWordNet noun lexicon:");

    let exc_path = dir.join(NOUN_EXCEPTIONS_FILE);
    if exc_path.exists() {
        info!("Noun exception list already exists, skipping");
        println!("  {} (already exists)", NOUN_EXCEPTIONS_FILE);
    } else {
        println!("  Downloading {}...", NOUN_EXCEPTIONS_FILE);
        download_file(
            &format!("{}/{}", base_url, NOUN_EXCEPTIONS_FILE),
            &exc_path,
            false,
        )
        .await?;
    }

    let idx_path = dir.join(NOUN_INDEX_FILE);
    if idx_path.exists() {
        info!("Noun index already exists, skipping");
        println!("  {} (already exists)", NOUN_INDEX_FILE);
    } else {
        println!("  Downloading {} (~4.6 MB)...", NOUN_INDEX_FILE);
        download_file(&format!("{}/{}", base_url, NOUN_INDEX_FILE), &idx_path, true).await?;
    }

    Ok(())
}

/// Download a single file from a URL to a local path.
/// If `show_progress` is true, display a progress bar.
async fn download_file(url: &str, dest: &Path, show_progress: bool) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status {}: {}", response.status(), url);
    }

    let total_size = response.content_length();

    // Set up progress bar if requested and we know the size
    let pb = if show_progress {
        let pb = if let Some(size) = total_size {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .expect("valid template")
                    .progress_chars("=> "),
            );
            pb
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("    {spinner} {bytes}")
                    .expect("valid template"),
            );
            pb
        };
        Some(pb)
    } else {
        None
    };

    let bytes = response
        .bytes()
        .await
        .context("Failed to read response body")?;

    if let Some(ref pb) = pb {
        pb.set_position(bytes.len() as u64);
    }

    std::fs::write(dest, &bytes).with_context(|| format!("Failed to write {}", dest.display()))?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    info!("Downloaded {} to {}", url, dest.display());
    Ok(())
}
