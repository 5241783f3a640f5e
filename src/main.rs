// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: read a row table, print every cover.

use anyhow::{Context, Result};
use clap::Parser;
use complement_search::config::SearchConfig;
use complement_search::cover::ComplementFinder;
use complement_search::logger;
use complement_search::report;
use complement_search::table::{parse_rows, DEMO_TABLES};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "complements")]
#[command(about = "Find groups of rows whose present cells complement each other")]
#[command(version)]
struct Cli {
    #[arg(help = "Table file, one JSON array per line (stdin if absent or '-')")]
    input: Option<PathBuf>,

    #[arg(long, conflicts_with = "input", help = "Run the built-in demo tables")]
    demo: bool,

    #[arg(long, help = "Print only the first cover found")]
    first: bool,

    #[arg(long, value_name = "N", help = "Stop after N search steps")]
    max_steps: Option<u64>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "More log output (repeatable)")]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logger::init_logger(cli.verbose) {
        eprintln!("Could not initialise logging: {}", err);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SearchConfig {
        step_budget: cli.max_steps,
    };

    if cli.demo {
        for (index, text) in DEMO_TABLES.iter().enumerate() {
            search(text, config, cli.first)
                .with_context(|| format!("demo table {}", index + 1))?;
        }
        return Ok(());
    }

    let text = read_input(cli.input.as_deref())?;
    search(&text, config, cli.first)
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("cannot read stdin")?;
            Ok(text)
        }
    }
}

fn search(text: &str, config: SearchConfig, first_only: bool) -> Result<()> {
    let rows = parse_rows(text).context("invalid table")?;
    let finder = ComplementFinder::new(rows)
        .context("invalid table")?
        .with_config(config);

    if first_only {
        print!("{}", report::render_first(&finder.find_first()));
    } else {
        print!("{}", report::render(&finder.find_all()));
    }
    Ok(())
}
