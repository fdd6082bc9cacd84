//! helm-external-val - Helm downloader plugin for Kubernetes-hosted values
//!
//! Helm invokes this binary with a `cm://` or `secret://` URL; the matching
//! ConfigMap or Secret key is printed to stdout for Helm to use as a values
//! file.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use helm_external_val::cli::{self, Cli, Command};
use helm_external_val::config::{ConfigLoader, Overrides};
use helm_external_val::models::ResourceKind;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and friends are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    if let Command::Version = args.command {
        cli::display_version();
        return Ok(());
    }

    let overrides = Overrides {
        context: args.context.clone(),
        debug: args.debug,
    };
    let config = ConfigLoader::load(args.config.as_deref(), &overrides)
        .context("Failed to load configuration")?;

    cli::init_logging(config.debug);
    tracing::debug!("Configuration loaded: context={:?}", config.context);

    match &args.command {
        Command::Downloader(downloader) => cli::handle_downloader(downloader, &config).await,
        Command::Cm(lookup) => cli::handle_lookup(ResourceKind::ConfigMap, lookup, &config).await,
        Command::Secret(lookup) => cli::handle_lookup(ResourceKind::Secret, lookup, &config).await,
        Command::Version => Ok(()),
    }
}
