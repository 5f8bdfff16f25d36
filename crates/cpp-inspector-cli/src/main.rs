//! cpp-inspector CLI tool.
//!
//! Checks a C++ source file against a subset of the Google style guide by
//! parsing the textual `clang -Xclang -ast-dump` output.
//!
//! ```bash
//! cpp-inspector check src/widget.cc
//! cpp-inspector check --format json --rules class-decl src/widget.cc
//! cpp-inspector list-rules
//! cpp-inspector tree src/widget.cc
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod frontend;

use commands::output::OutputFormat;

/// Google C++ style checker driven by the clang AST dump
#[derive(Parser)]
#[command(name = "cpp-inspector")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run style checks on a C++ source file
    Check {
        /// Source file to inspect
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated)
        #[arg(long)]
        rules: Option<String>,
    },

    /// List available rules
    ListRules,

    /// Dump the decoded node tree for a source file
    Tree {
        /// Source file to inspect
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check {
            file,
            format,
            rules,
        } => commands::check::run(&file, format, rules, cli.config.as_deref()),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Tree { file } => commands::tree::run(&file, cli.config.as_deref()),
    }
}
