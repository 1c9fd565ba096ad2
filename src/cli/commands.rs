//! Command implementations for the Lancea CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::cli::args::{Command, LanceaArgs, ReplArgs, SearchArgs, StatsArgs};
use crate::cli::output::{SearchOutput, StatsOutput, output_search_results, output_stats};
use crate::error::Result;
use crate::index::{IndexBuilder, InvertedIndex};
use crate::search::Searcher;
use crate::source::load_documents;

/// Execute a CLI command.
pub fn execute_command(args: LanceaArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => run_search(search_args.clone(), &args),
        Command::Repl(repl_args) => run_repl(repl_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Load a document source and build its index.
fn build_index(source: &Path, cli_args: &LanceaArgs) -> Result<InvertedIndex> {
    if cli_args.verbosity() > 1 {
        println!("Indexing: {}", source.display());
    }

    let start = Instant::now();
    let documents = load_documents(source)?;
    let index = IndexBuilder::new()?.build(documents)?;
    info!(
        "indexed {} documents ({} terms) in {:?}",
        index.doc_count(),
        index.term_count(),
        start.elapsed()
    );

    Ok(index)
}

/// Run a single query against a document source.
fn run_search(args: SearchArgs, cli_args: &LanceaArgs) -> Result<()> {
    let index = build_index(&args.source, cli_args)?;
    let searcher = Searcher::new(&index)?;

    let start = Instant::now();
    let mut results = searcher.search(&args.query)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    if let Some(limit) = args.limit {
        results.hits.truncate(limit);
    }

    output_search_results(
        &SearchOutput {
            query: args.query,
            total_hits: results.total_hits,
            hits: results.hits,
            duration_ms,
        },
        cli_args,
    )
}

/// Interactively query a document source until an empty line is entered.
fn run_repl(args: ReplArgs, cli_args: &LanceaArgs) -> Result<()> {
    let index = build_index(&args.source, cli_args)?;
    let searcher = Searcher::new(&index)?;

    let stdin = io::stdin();
    println!("Please enter your query below (empty line to exit):");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let query = line.trim_end_matches(['\r', '\n']);
        if query.trim().is_empty() {
            break;
        }

        let start = Instant::now();
        let results = searcher.search(query)?;
        let duration_ms = start.elapsed().as_millis() as u64;

        output_search_results(
            &SearchOutput {
                query: query.to_string(),
                total_hits: results.total_hits,
                hits: results.hits,
                duration_ms,
            },
            cli_args,
        )?;
    }

    Ok(())
}

/// Show index statistics for a document source.
fn show_stats(args: StatsArgs, cli_args: &LanceaArgs) -> Result<()> {
    let index = build_index(&args.source, cli_args)?;

    output_stats(
        &StatsOutput {
            total_documents: index.doc_count(),
            total_terms: index.term_count(),
            total_postings: index.posting_count(),
        },
        cli_args,
    )
}
