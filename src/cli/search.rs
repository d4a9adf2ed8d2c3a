//! `daytona search`: free-text search over brand and model names.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliContext, CliResult};
use crate::models::SearchResult;
use crate::services::search::{search, SearchOutcome, MIN_QUERY_LEN, NO_RESULTS_MESSAGE};

/// Search brands and models
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Query text (at least two characters after trimming)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct SearchOutput<'a> {
    query: &'a str,
    visible: bool,
    results: &'a [SearchResult],
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let store = ctx.load_store();
        let outcome = search(store.catalog(), &self.query);

        if self.json {
            return print_json(&SearchOutput {
                query: &self.query,
                visible: outcome.is_visible(),
                results: outcome.results(),
            });
        }

        match &outcome {
            SearchOutcome::Hidden => {
                println!("Query must have at least {MIN_QUERY_LEN} characters");
            }
            SearchOutcome::Results(results) if results.is_empty() => {
                println!("{NO_RESULTS_MESSAGE}");
            }
            SearchOutcome::Results(results) => {
                for result in results {
                    println!("{:<28} {}", result.title(), result.detail());
                }
            }
        }
        Ok(())
    }
}
