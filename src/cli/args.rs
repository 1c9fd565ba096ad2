//! Command line argument parsing for the Lancea CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Lancea - a small in-memory search engine with TF-IDF ranking
#[derive(Parser, Debug, Clone)]
#[command(name = "lancea")]
#[command(about = "Index a line-oriented text file and run ranked free-text queries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LanceaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LanceaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run a single query against a document source
    Search(SearchArgs),

    /// Interactively query a document source
    Repl(ReplArgs),

    /// Show index statistics for a document source
    Stats(StatsArgs),
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the document source (one document per line)
    pub source: PathBuf,

    /// Query string
    pub query: String,

    /// Maximum number of hits to return
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the repl command
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// Path to the document source (one document per line)
    pub source: PathBuf,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the document source (one document per line)
    pub source: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let mut args = LanceaArgs::parse_from(["lancea", "search", "data.txt", "cat"]);
        assert_eq!(args.verbosity(), 1);

        args.verbose = 2;
        assert_eq!(args.verbosity(), 2);

        args.quiet = true;
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_search_args() {
        let args = LanceaArgs::parse_from(["lancea", "search", "data.txt", "the cat", "--limit", "5"]);
        match args.command {
            Command::Search(search) => {
                assert_eq!(search.source, PathBuf::from("data.txt"));
                assert_eq!(search.query, "the cat");
                assert_eq!(search.limit, Some(5));
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_format_flag() {
        let args = LanceaArgs::parse_from(["lancea", "-f", "json", "stats", "data.txt"]);
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
