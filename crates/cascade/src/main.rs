// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cascade - plugin metadata engine for page-builder CMSes.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod inspect;
mod runtime;
mod serve;

use std::path::PathBuf;
use std::process::ExitCode;

use cascade_config::CascadeConfig;
use cascade_core::CascadeError;
use clap::{Parser, Subcommand};

use crate::runtime::Runtime;

/// Cascade - resolve, validate and serve plugin metadata.
#[derive(Parser, Debug)]
#[command(name = "cascade", version, about, long_about = None)]
struct Cli {
    /// Load this TOML file instead of the default hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP gateway.
    Serve,
    /// Resolve one plugin instance and print it as JSON.
    Resolve {
        #[arg(long)]
        plugin: String,
        /// JSON object of glossary values.
        #[arg(long)]
        glossary: Option<PathBuf>,
        #[arg(long, default_value_t = 1)]
        id: u64,
        #[arg(long)]
        position: Option<u32>,
    },
    /// Check a glossary against a plugin type's schema.
    Validate {
        #[arg(long)]
        plugin: String,
        #[arg(long)]
        glossary: PathBuf,
    },
    /// List registered plugin types.
    Plugins,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => cascade_config::load_and_validate_path(path),
        None => cascade_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            cascade_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.level);

    match run(cli.command, &config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, config: &CascadeConfig) -> Result<ExitCode, CascadeError> {
    let runtime = Runtime::from_config(config)?;

    match command {
        Commands::Serve => {
            serve::run_serve(config, runtime).await?;
        }
        Commands::Resolve {
            plugin,
            glossary,
            id,
            position,
        } => {
            let json = inspect::run_resolve(&runtime, &plugin, glossary.as_deref(), id, position)?;
            println!("{json}");
        }
        Commands::Validate { plugin, glossary } => {
            let findings = inspect::run_validate(&runtime, &plugin, &glossary)?;
            if !findings.is_empty() {
                for finding in &findings {
                    eprintln!("{finding}");
                }
                return Ok(ExitCode::FAILURE);
            }
            println!("{plugin}: glossary is valid");
        }
        Commands::Plugins => {
            print!("{}", inspect::run_plugins(&runtime.registry));
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Logs go to stderr so `resolve` output stays machine-readable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cascade={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn resolve_arguments_parse() {
        let cli = Cli::parse_from([
            "cascade",
            "resolve",
            "--plugin",
            "HeadingPlugin",
            "--position",
            "4",
            "--config",
            "site.toml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        match cli.command {
            Commands::Resolve { plugin, id, position, glossary } => {
                assert_eq!(plugin, "HeadingPlugin");
                assert_eq!(id, 1);
                assert_eq!(position, Some(4));
                assert!(glossary.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
