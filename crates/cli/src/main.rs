use anyhow::Result;
use clap::{Parser, Subcommand};
use minim_core::{compute_words, compute_words_cached, CacheConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "minim")]
#[command(about = "Reconstruct words from ambiguous manuscript minims", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute every word consistent with a minim expression
    Compute {
        /// Expression mixing stroke runs (`|||`), counts (`3`) and known letters
        expression: String,

        /// Emit a JSON array instead of one word per line
        #[arg(long)]
        json: bool,

        /// Persist per-count word records under this directory
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// Largest stroke count whose record is persisted
        #[arg(long, default_value_t = 16)]
        max_persist: u32,

        /// Opt in to persisting records above the safety threshold
        #[arg(long)]
        allow_large: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    match cli.command {
        Commands::Compute {
            expression,
            json,
            cache_dir,
            max_persist,
            allow_large,
        } => {
            // The core does no case folding; normalize here.
            let expression = expression.to_uppercase();
            let words = match cache_dir {
                Some(dir) => {
                    let mut config = CacheConfig::new(dir, max_persist);
                    if allow_large {
                        config = config.allow_large();
                    }
                    compute_words_cached(&expression, &config)?
                }
                None => compute_words(&expression)?,
            };
            if json {
                println!("{}", serde_json::to_string(&words)?);
            } else {
                for word in &words {
                    println!("{word}");
                }
            }
        }
    }

    Ok(())
}
