use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use transit_catalogue::prelude::*;

mod requests;
mod responses;

use requests::{build_catalogue, RequestDocument};
use responses::answer_all;

#[derive(Parser, Debug)]
#[command(
    name = "transit-query",
    author,
    version,
    about = "Answer bus, stop and route queries from a JSON request document",
    long_about = "Reads a JSON document with `base_requests` (stops and buses), optional \
                  `routing_settings` and `stat_requests`, builds the transit catalogue and \
                  routing graph, and prints one JSON response per stat request.\n\n\
                  Supported stat requests are Bus (route statistics), Stop (buses through \
                  a stop) and Route (minimum-time itinerary between two stops)."
)]
struct Args {
    /// Input JSON document (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file for the responses (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the wait time at each stop, in minutes
    #[arg(long)]
    wait_time: Option<u32>,

    /// Override the average bus velocity, in km/h
    #[arg(long)]
    velocity: Option<f64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn routing_settings(&self, document: Option<RoutingSettings>) -> RoutingSettings {
        let mut settings = document.unwrap_or_default();
        if let Some(wait_time) = self.wait_time {
            settings.bus_wait_time = wait_time;
        }
        if let Some(velocity) = self.velocity {
            settings.bus_velocity = velocity;
        }
        settings
    }
}

fn read_document(input: Option<&PathBuf>) -> Result<RequestDocument> {
    match input {
        Some(path) => {
            if !path.exists() {
                bail!("Input file does not exist: {}", path.display());
            }
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            RequestDocument::from_reader(BufReader::new(file))
        }
        None => RequestDocument::from_reader(io::stdin().lock()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();

    let document = read_document(args.input.as_ref())?;
    let settings = args.routing_settings(document.routing_settings);

    let catalogue =
        build_catalogue(&document.base_requests).context("Failed to build transit catalogue")?;
    tracing::info!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        "catalogue loaded"
    );

    let handler =
        RequestHandler::build(catalogue, settings).context("Failed to build routing graph")?;
    tracing::info!(
        wait_time = settings.bus_wait_time,
        velocity = settings.bus_velocity,
        edges = handler.router().graph().edge_count(),
        "routing graph ready"
    );

    let responses = answer_all(&handler, &document.stat_requests);
    tracing::info!(requests = responses.len(), "answered stat requests");

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    if args.pretty {
        serde_json::to_writer_pretty(&mut writer, &responses)
    } else {
        serde_json::to_writer(&mut writer, &responses)
    }
    .context("Failed to write responses")?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
