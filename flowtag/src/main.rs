mod args;
mod config;
mod error;
mod output;
mod parsers;
mod pipeline;
mod prompt;
mod protocol;
mod records;
mod tagger;
mod tests;

use std::io;
use std::time::Instant;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use config::Config;
use log::info;
use pipeline::{run, RunSummary};
use prompt::prompt_paths;

fn main() {
    env_logger::init();

    if let Err(e) = try_main() {
        eprintln!("Error processing files: {:#}", e);
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let config = if std::env::args().len() == 1 {
        // No arguments provided, ask for the input files
        let stdin = io::stdin();
        let (flow_log, lookup) = prompt_paths(&mut stdin.lock(), &mut io::stdout())
            .context("reading input file paths")?;
        Config::interactive(flow_log, lookup)
    } else {
        Config::from_cli(Cli::parse()).context("resolving configuration")?
    };

    let start = Instant::now();
    let summary = run(&config).with_context(|| {
        format!(
            "tagging {} with {}",
            config.flow_log.display(),
            config.lookup.display()
        )
    })?;
    info!("Duration: {:.4} seconds", start.elapsed().as_secs_f64());

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!(
        "Processing completed. Output written to {}",
        summary.output.display()
    );
    println!("Total flow log entries processed: {}", summary.total);
    println!("Total tagged entries: {}", summary.tagged);
    println!("Total untagged entries: {}", summary.untagged);
    if summary.skipped > 0 {
        println!("Malformed flow log lines skipped: {}", summary.skipped);
    }
}
