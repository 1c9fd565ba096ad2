//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LanceaArgs, OutputFormat};
use crate::error::Result;
use crate::search::SearchHit;

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchOutput {
    pub query: String,
    pub hits: Vec<SearchHit>,
    pub total_hits: u64,
    pub duration_ms: u64,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsOutput {
    pub total_documents: usize,
    pub total_terms: usize,
    pub total_postings: usize,
}

/// Print search results in the configured format.
pub fn output_search_results(output: &SearchOutput, args: &LanceaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if output.hits.is_empty() {
                println!("provided search term was not found in the dataset");
                return Ok(());
            }

            if args.verbosity() > 1 {
                println!(
                    "{} hit(s) for {:?} in {} ms",
                    output.total_hits, output.query, output.duration_ms
                );
            }
            for hit in &output.hits {
                println!(
                    "TF-IDF Score: {:.6} --> Document: {} (id:{})",
                    hit.score, hit.text, hit.doc_id
                );
            }
            Ok(())
        }
        OutputFormat::Json => output_json(output, args),
    }
}

/// Print index statistics in the configured format.
pub fn output_stats(output: &StatsOutput, args: &LanceaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("Documents: {}", output.total_documents);
            println!("Distinct terms: {}", output.total_terms);
            println!("Postings: {}", output.total_postings);
            Ok(())
        }
        OutputFormat::Json => output_json(output, args),
    }
}

/// Output any serializable result as JSON.
fn output_json<T: Serialize>(result: &T, args: &LanceaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
