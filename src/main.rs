use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use reclaim::config::Config;
use reclaim::lexicon::Lexicon;
use reclaim::matching::Matcher;

/// Reclaim: description similarity scoring for lost-and-found matching.
///
/// Scores how well a lost-item description matches a found-item
/// description, so the frontend can surface likely reunions first.
#[derive(Parser)]
#[command(name = "reclaim", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the match endpoint web server
    Serve {
        /// Port to listen on (overrides RECLAIM_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides RECLAIM_BIND)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Score a single description pair from the command line
    Score {
        /// The lost-item description
        lost: String,

        /// The found-item description
        found: String,
    },

    /// Download the WordNet noun lexicon (~4.7 MB)
    DownloadLexicon,

    /// Show configuration and lexicon status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("reclaim=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            config.require_lexicon()?;

            let lexicon = Arc::new(Lexicon::load(&config.lexicon_dir)?);
            let matcher = Arc::new(Matcher::new(lexicon)?);

            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            reclaim::web::run_server(matcher, port, &bind).await?;
        }

        Commands::Score { lost, found } => {
            let config = Config::load()?;
            config.require_lexicon()?;

            let lexicon = Arc::new(Lexicon::load(&config.lexicon_dir)?);
            let matcher = Matcher::new(lexicon)?;

            let report = matcher.compare(&lost, &found)?;
            report.display();
        }

        Commands::DownloadLexicon => {
            let config = Config::load()?;

            println!("Downloading WordNet noun lexicon...");
            println!("  Source:      {}", config.lexicon_url);
            println!("  Destination: {}", config.lexicon_dir.display());

            reclaim::lexicon::download::download_lexicon(&config.lexicon_dir, &config.lexicon_url)
                .await?;

            println!("\n{}", "Lexicon downloaded successfully.".bold());
            println!("You can now run `reclaim serve` or `reclaim score`.");
        }

        Commands::Status => {
            let config = Config::load()?;

            println!("{}", "=== Reclaim Status ===".bold());
            println!("  Bind address: {}:{}", config.bind, config.port);
            println!("  Lexicon dir:  {}", config.lexicon_dir.display());

            if reclaim::lexicon::download::lexicon_files_present(&config.lexicon_dir) {
                match Lexicon::load(&config.lexicon_dir) {
                    Ok(lexicon) => {
                        info!("Lexicon loads cleanly");
                        println!(
                            "  Lexicon:      {} ({} nouns, {} irregular forms)",
                            "ready".bright_green(),
                            lexicon.noun_count(),
                            lexicon.exception_count()
                        );
                    }
                    Err(e) => {
                        println!("  Lexicon:      {} ({e})", "unreadable".bright_red());
                    }
                }
            } else {
                println!(
                    "  Lexicon:      {} (run `reclaim download-lexicon`)",
                    "missing".bright_yellow()
                );
            }
        }
    }

    Ok(())
}
