//! Folio CLI - serve or build the portfolio page.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Serve or build the portfolio page")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to folio.toml config file
    #[arg(short, long, default_value = "folio.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the page and its images on 127.0.0.1:3000
    Serve {
        /// Directory images are served from (defaults to config or ".")
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Build a static site with the page mounted into a shell
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page shell with an `id="app"` element (defaults to the built-in shell)
        #[arg(short, long)]
        shell: Option<PathBuf>,

        /// Directory to copy images from (defaults to config or ".")
        #[arg(short, long)]
        assets: Option<PathBuf>,

        /// Skip minification
        #[arg(long)]
        no_minify: bool,
    },

    /// Run the image carousel for a number of ticks and log each swap
    Carousel {
        /// Number of transitions to run
        #[arg(short, long, default_value = "4")]
        ticks: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt().with_env_filter(filter).with_target(false).init();

    let file_config = config::load(&cli.config)?;

    // Execute command
    match cli.command {
        Commands::Serve { dir } => {
            commands::serve::run(dir, &file_config).await?;
        }
        Commands::Build {
            output,
            shell,
            assets,
            no_minify,
        } => {
            let minify = if no_minify { Some(false) } else { None };
            commands::build::run(output, shell, assets, minify, &file_config).await?;
        }
        Commands::Carousel { ticks } => {
            commands::carousel::run(ticks).await?;
        }
    }

    Ok(())
}
