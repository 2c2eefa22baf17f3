mod app;
mod cli;
mod config;
mod error;
mod model;

use app::{App, Outcome};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use model::{HubSnapshot, ModelCatalog, ModelDownloader, Variant};
use std::process::ExitCode;

fn run(cli: Cli) -> Result<u8> {
    let config = Config::from_env()?
        .with_models_root(cli.models_dir)
        .with_token(cli.token);
    tracing::debug!("Models root: {:?}", config.models_root);

    let catalog = ModelCatalog::builtin();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    match cli.command {
        Some(Commands::List { variant }) => {
            app::list_models(&catalog, &config.models_root, variant, &mut out)?;
            Ok(0)
        }

        command => {
            let (selection, variant) = match command {
                Some(Commands::Pull { selection, variant }) => (selection, variant),
                _ => (None, Variant::Original),
            };

            let downloader = ModelDownloader::new(HubSnapshot::new(config.hf_token));
            let outcome = App::new(&catalog, &config.models_root, &downloader).pull(
                selection,
                variant,
                &mut input,
                &mut out,
            )?;
            if let Outcome::Succeeded(path) = &outcome {
                tracing::info!("Model available at {:?}", path);
            }
            Ok(outcome.exit_status())
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
