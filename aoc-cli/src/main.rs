//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

use aoc_solutions::exercises::cidr::Ipv4Cidr;
use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, SolverResult, WorkItem};
use output::OutputFormatter;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose, args.quiet);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so answers on stdout stay clean; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    if let Some(cidr) = args.cidr.as_deref() {
        return run_cidr(cidr, args.quiet);
    }

    let config = Config::from_args(args)?;

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    info!(solvers = registry.storage().len(), "registry built");

    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let results = run_executor(&executor, &work_items, config.quiet);
    let failures = results.iter().filter(|r| r.answer.is_err()).count();
    if failures > 0 {
        return Err(CliError::Failed(failures));
    }
    Ok(())
}

/// Parse a CIDR and print it back, with its network and mask unless quiet
fn run_cidr(input: &str, quiet: bool) -> Result<(), CliError> {
    let cidr: Ipv4Cidr = input.parse().map_err(|source| CliError::Cidr {
        input: input.to_string(),
        source,
    })?;

    println!("{}", cidr);
    if !quiet {
        println!("network: {}", cidr.network());
        println!("mask:    {}", cidr.mask());
    }
    Ok(())
}

/// Run each day in turn, printing its parts as soon as the day is done
fn run_executor(executor: &Executor, work_items: &[WorkItem], quiet: bool) -> Vec<SolverResult> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let formatter = OutputFormatter::new(quiet);
    let mut results = Vec::new();
    for work in work_items {
        let day_results = executor.run_day(work);
        for result in &day_results {
            formatter.print_result(result);
        }
        results.extend(day_results);
    }

    formatter.print_summary(&results);
    results
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
