//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::Config;

/// Serve command arguments.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Host to bind (overrides configuration)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides configuration)
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeCommand {
    /// Apply command-line overrides to a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn apply(&self, config: &mut Config) -> crate::error::Result<()> {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        config.validate()
    }
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show configuration file path
    Path,

    /// Validate configuration file
    Validate {
        /// Path to configuration file (uses default if not specified)
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_apply_overrides() {
        let mut config = Config::default();
        let cmd = ServeCommand {
            host: Some("0.0.0.0".to_string()),
            port: Some(8080),
        };
        cmd.apply(&mut config).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_serve_apply_keeps_config_without_flags() {
        let mut config = Config::default();
        let cmd = ServeCommand {
            host: None,
            port: None,
        };
        cmd.apply(&mut config).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_serve_apply_rejects_zero_port() {
        let mut config = Config::default();
        let cmd = ServeCommand {
            host: None,
            port: Some(0),
        };
        assert!(cmd.apply(&mut config).is_err());
    }
}
