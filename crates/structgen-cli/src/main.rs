//! structgen CLI - C++ class and JSON-wrapper generator
//!
//! Commands:
//! - `structgen generate` - Generate C++ from a structgen.toml schema
//! - `structgen check` - Validate a structgen.toml schema

use clap::{Parser, Subcommand};

mod generate;
mod manifest;

#[derive(Parser)]
#[command(name = "structgen")]
#[command(author, version, about = "C++ class and JSON-wrapper generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate C++ source from a schema manifest
    Generate {
        /// Path to structgen.toml (default: ./structgen.toml)
        #[arg(short, long)]
        manifest: Option<String>,

        /// Output path for the generated source (default: <ClassName>.hpp)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a structgen.toml schema
    Check {
        /// Path to structgen.toml (default: ./structgen.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { manifest, output } => {
            generate::run(manifest, output)?;
        }
        Commands::Check { manifest } => {
            manifest::check(manifest)?;
        }
    }

    Ok(())
}
