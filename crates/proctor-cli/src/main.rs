//! proctor CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "proctor", version, about = "Student exam-submission service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the submission API server
    Serve {
        /// Roster .toml file or directory to seed from
        #[arg(long)]
        fixtures: Option<PathBuf>,

        /// Address to bind (e.g. "127.0.0.1:8080")
        #[arg(long)]
        bind: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate roster TOML files
    Validate {
        /// Roster .toml file or directory
        #[arg(long)]
        fixtures: PathBuf,
    },

    /// Create starter config and example roster
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("proctor=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            fixtures,
            bind,
            config,
        } => commands::serve::execute(fixtures, bind, config).await,
        Commands::Validate { fixtures } => commands::validate::execute(fixtures),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
