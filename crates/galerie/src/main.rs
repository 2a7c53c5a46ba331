//! galerie - Art gallery website and back-office

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use galerie_core::endpoints::Resource;
use galerie_core::GalerieConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "galerie",
    version,
    about = "Art gallery website and back-office",
    long_about = "Serves the gallery single-page application and forwards its API calls\n\
                  to the gallery backend.\n\
                  \n\
                  Examples:\n\
                    galerie                          # Serve the site (default)\n\
                    galerie serve --port 8080        # Custom port\n\
                    galerie show artistes 5          # Print one artist\n\
                    galerie show oeuvres 12 --json   # Print one artwork as JSON\n\
                    galerie i18n                     # Translation coverage\n\
                  \n\
                  Web Frontend Workflow:\n\
                    # Production\n\
                    trunk build --release            # In crates/galerie-web\n\
                    galerie serve                    # Serves bundle + API proxy\n\
                    \n\
                    # Development (hot reload)\n\
                    galerie serve                    # Terminal 1: API proxy on :3000\n\
                    trunk serve                      # Terminal 2: frontend on :8080\n\
                  \n\
                  Environment Variables:\n\
                    GALERIE_CONFIG                   # Path to config.toml\n\
                    GALERIE_API_ORIGIN               # Backend origin\n\
                    GALERIE_DIST                     # Trunk bundle directory\n\
                    GALERIE_PORT                     # Listening port\n\
                    RUST_LOG                         # Log filter"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Path to the config file (default: <config dir>/galerie/config.toml)
    #[arg(long, env = "GALERIE_CONFIG")]
    config: Option<PathBuf>,

    /// Backend origin API calls are forwarded to
    #[arg(long, env = "GALERIE_API_ORIGIN")]
    api_origin: Option<String>,

    /// Directory holding the compiled frontend bundle
    #[arg(long, env = "GALERIE_DIST")]
    dist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the site and proxy API calls (default)
    Serve {
        /// Port for web server
        #[arg(long, env = "GALERIE_PORT")]
        port: Option<u16>,
    },
    /// Fetch one entity from the API and print it
    Show {
        /// artistes, evenements, expositions or oeuvres
        #[arg(value_parser = cli::parse_kind)]
        kind: Resource,
        /// Entity ID
        id: u64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report translation coverage per language
    I18n {
        /// List the missing keys
        #[arg(long)]
        missing: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("galerie=info,galerie_web=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GalerieConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(origin) = cli.api_origin {
        config.api_origin = origin;
    }
    if let Some(dist) = cli.dist {
        config.dist_dir = dist;
    }

    match cli.mode.unwrap_or(Mode::Serve { port: None }) {
        Mode::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            config.validate().context("Invalid configuration")?;
            galerie_web::run(&config).await?;
        }
        Mode::Show { kind, id, json } => {
            config.validate().context("Invalid configuration")?;
            let output = cli::run_show(&config, kind, id, json).await?;
            println!("{}", output);
        }
        Mode::I18n { missing } => {
            println!("{}", cli::format_i18n_report(missing));
        }
    }

    Ok(())
}
