//! CLI Adapter.

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "apimocker")]
#[command(version)]
#[command(
    about = "Scaffold fixture resolvers for mocked API providers",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create tests/Fixtures/<Provider>/ and a resolver for a new provider
    #[clap(visible_alias = "m")]
    Make {
        /// Provider name (e.g. stripe)
        name: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Make { name } => run_make(&name),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_make(name: &str) -> Result<(), AppError> {
    let outcome = crate::app::api::make_resolver(name)?;
    println!("✅ Created fixture resolver at {}", outcome.display_path());
    Ok(())
}
