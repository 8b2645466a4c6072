//! `docmgr` - CLI for docmanager
//!
//! This binary runs the document HTTP service and inspects its configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use docmanager::cli::{Cli, Command, ConfigCommand, ServeCommand};
use docmanager::{http, init_logging, AppState, Config, DocumentStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    // Validation loads its own file, so a broken default must not block it
    if let Some(path) = cli.config_to_validate() {
        return handle_validate(&path);
    }

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Serve(serve_cmd) => handle_serve(config, &serve_cmd).await,
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_validate(path: &Path) -> anyhow::Result<()> {
    println!("Validating configuration: {}", path.display());
    Config::load_from(Some(path.to_path_buf()))
        .with_context(|| format!("invalid configuration in {}", path.display()))?;
    println!("Configuration is valid.");
    Ok(())
}

async fn handle_serve(mut config: Config, cmd: &ServeCommand) -> anyhow::Result<()> {
    cmd.apply(&mut config)
        .context("applying command-line overrides")?;

    let store = Arc::new(DocumentStore::new());
    let state = AppState::from_config(store, &config.server);
    let listener = http::bind(&config).await?;
    http::serve(listener, state, http::shutdown_signal())
        .await
        .context("running HTTP server")?;
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Host:               {}", config.server.host);
                println!("  Port:               {}", config.server.port);
                println!("  Max body (bytes):   {}", config.server.max_body_bytes);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            handle_validate(&file.unwrap_or_else(Config::default_config_path))?;
        }
    }
    Ok(())
}
