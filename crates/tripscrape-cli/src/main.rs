mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tripscrape-cli")]
#[command(about = "Extract city and hotel records from the trip.com hotels landing page")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the landing page and write both artifacts.
    Scrape {
        /// Override the configured start URL.
        #[arg(long)]
        url: Option<String>,
        /// Download every hotel image after writing the artifacts.
        #[arg(long)]
        download_images: bool,
    },
    /// Run the pipeline on a saved HTML document.
    Extract {
        /// Path to the saved landing page.
        #[arg(long)]
        html: PathBuf,
        #[arg(long)]
        download_images: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = tripscrape_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape {
            url,
            download_images,
        } => run::scrape(&config, url.as_deref(), download_images).await,
        Commands::Extract {
            html,
            download_images,
        } => run::extract_file(&config, &html, download_images).await,
    }
}
