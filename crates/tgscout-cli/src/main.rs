mod bootstrap;
mod discover;
mod storage;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tgscout")]
#[command(about = "Discover Turkish book and exam-material Telegram channels")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for channel links, score them, and write a candidates CSV
    Discover {
        /// Result pages to request per query (defaults to `TGSCOUT_MAX_PAGES_PER_QUERY`)
        #[arg(long)]
        max_pages: Option<u32>,
        /// Output CSV path (defaults to `<output_dir>/candidates_<timestamp>.csv`)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Drop candidates scoring below this threshold
        #[arg(long, default_value = "0")]
        min_score: u32,
        /// Search query; repeat for several (defaults to the configured list)
        #[arg(long = "query")]
        queries: Vec<String>,
    },
    /// Suggest new keywords from the titles and descriptions in a candidates CSV
    BootstrapKeywords {
        /// Candidates CSV to mine
        #[arg(long)]
        input: PathBuf,
        /// Number of suggestions to keep
        #[arg(long, default_value = "50")]
        top_n: usize,
        /// Write `token<TAB>count` lines here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Fallback filter when neither `RUST_LOG` nor a loaded config supplies one.
const DEFAULT_LOG_LEVEL: &str = "info";

fn init_tracing(fallback: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Discover {
            max_pages,
            output,
            min_score,
            queries,
        }) => {
            let config = tgscout_core::load_app_config()?;
            init_tracing(&config.log_level)?;
            let path =
                discover::run_discover(&config, max_pages, output, min_score, queries).await?;
            println!("{}", path.display());
        }
        Some(Commands::BootstrapKeywords {
            input,
            top_n,
            output,
        }) => {
            let level = std::env::var("TGSCOUT_LOG_LEVEL")
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
            init_tracing(&level)?;
            bootstrap::run_bootstrap_keywords(&input, top_n, output.as_deref())?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
