//! emojifind CLI (Rust)
//!
//! Implements two commands:
//! - `search <query> --data <file>` - Rank emoji in a dataset against a query
//! - `distance <a> <b>` - Print the weighted OSA distance between two strings

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use emojifind::error::{validate_query, validate_threshold, AppError};
use emojifind::format::{render_empty_state, render_results, OutputFormat};
use emojifind::search::{osa_distance, prepare_query, scale, QueryState, SearchEngine};
use emojifind::Dataset;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags; RUST_LOG wins when set
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    // JSON consumers get errors on stdout in the same format as results
    let json_errors = matches!(&cli.command, Commands::Search(args) if args.format == OutputFormat::Json);

    let result = match cli.command {
        Commands::Search(args) => execute_search_cli(args),
        Commands::Distance(args) => execute_distance_cli(args),
    };

    // Handle result and exit with appropriate code
    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            if json_errors {
                println!("{}", e.to_json());
            } else {
                eprintln!("Error [{}]: {}", e.error_code(), e);
            }
            std::process::exit(e.exit_code());
        }
    }
}

/// Execute search command in CLI mode
fn execute_search_cli(args: cli::SearchArgs) -> Result<String, AppError> {
    validate_query(&args.query)?;
    validate_threshold(args.threshold)?;
    let scale_policy = args.scale_policy();
    scale_policy.validate()?;

    let dataset = Dataset::load(&args.data)?;
    let prepared = prepare_query(&args.query, &dataset);
    if let Some(symbol) = &prepared.substituted_from {
        info!("Searching for {:?} in place of {}", prepared.text, symbol);
    }

    let engine = SearchEngine::with_options(args.cost, args.search_options());
    let results = engine.search(&prepared.text, dataset.entries());

    let state = QueryState::classify(&prepared.text, results.len());
    debug!("Search state: {:?}", state);

    if results.is_empty() {
        return Ok(render_empty_state(state, &prepared.text, args.format));
    }

    let scaled = scale(results, scale_policy)?;
    Ok(render_results(&scaled, args.format, args.limit)?)
}

/// Execute distance command in CLI mode
fn execute_distance_cli(args: cli::DistanceArgs) -> Result<String, AppError> {
    let distance = osa_distance(&args.source, &args.target, &args.cost);
    Ok(format!("{:.6}", distance))
}
