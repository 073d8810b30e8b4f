use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pk_locations::registry;
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// pklocations: look up Pakistani provinces and their cities.
///
/// Examples:
///   pklocations all
///   pklocations province islamabad
///   pklocations search lahore
///   pklocations search abad --with-province --json
///   pklocations provinces
#[derive(Parser, Debug)]
#[command(name = "pklocations", version, about, long_about = None)]
struct Cli {
    /// Print results as pretty JSON instead of one entry per line.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr. RUST_LOG takes precedence when set.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Every location, provinces in order.
    All,
    /// Locations of one province (e.g. punjab, kpk, gilgitBaltistan).
    Province {
        key: String,
    },
    /// Case-insensitive substring search. An empty query lists everything.
    Search {
        query: String,

        /// Show the province of each match.
        #[arg(long)]
        with_province: bool,
    },
    /// Province keys, names and location counts.
    Provinces,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    debug!(command = ?cli.command, "running");

    match &cli.command {
        Command::All => emit_names(out, cli.json, &registry::get_all_locations()),
        Command::Province { key } => {
            let names = registry::get_locations_by_province(key);
            if names.is_empty() {
                warn!("No locations for province key '{}'", key);
            }
            emit_names(out, cli.json, names)
        }
        Command::Search { query, with_province: false } => {
            emit_names(out, cli.json, &registry::search_locations(query))
        }
        Command::Search { query, with_province: true } => {
            let hits = registry::search_with_province(query);
            if cli.json {
                return emit_json(out, &hits);
            }
            for hit in &hits {
                writeln!(out, "{}\t{}", hit.name, hit.province)?;
            }
            Ok(())
        }
        Command::Provinces => {
            let summaries = registry::province_summaries();
            if cli.json {
                return emit_json(out, &summaries);
            }
            for s in &summaries {
                writeln!(out, "{}\t{}\t{}", s.key, s.name, s.count)?;
            }
            Ok(())
        }
    }
}

fn emit_names<W: Write>(out: &mut W, json: bool, names: &[&str]) -> Result<()> {
    if json {
        return emit_json(out, &names);
    }
    for name in names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

fn emit_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value).context("serializing output")?;
    writeln!(out, "{}", body)?;
    Ok(())
}
