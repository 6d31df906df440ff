//! Rewire CLI - virtual-module import rewriting for multi-target builds.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "rewire")]
#[command(about = "Rewrite virtual-module imports for multi-target component builds")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to rewire.toml config file
    #[arg(short, long, default_value = "rewire.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter rewire.toml in the current directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        yes: bool,
    },

    /// Rewrite virtual-module imports for a compilation target
    Rewrite {
        /// Target name (a key under [modules.<name>.targets])
        #[arg(short, long)]
        target: String,

        /// Source directory to scan (defaults to config or "src")
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Report what would change without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate the type declaration shim for configured modules
    Shim {
        /// Output path (defaults to config or "src/typings/rewire.d.ts")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes)?;
        }
        Commands::Rewrite {
            target,
            dir,
            dry_run,
        } => {
            let config = config::load(&cli.config)?;
            commands::rewrite::run(&config, &target, dir, dry_run)?;
        }
        Commands::Shim { output } => {
            let config = config::load(&cli.config)?;
            commands::shim::run(&config, output)?;
        }
    }

    Ok(())
}
