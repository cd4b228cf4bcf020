use std::path::PathBuf;

use clap::Parser;
use gleaner::Harvester;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*};

/// Pull student reports and source files out of nested submission archives.
#[derive(Debug, Parser)]
#[command(name = "gleaner", version, about)]
struct Cli {
    /// Top-level submission archives, processed in order. An empty list is
    /// a no-op.
    #[arg(value_name = "ARCHIVE")]
    archives: Vec<PathBuf>,
}

fn main() {
    let fmt_layer = fmt::layer().without_time().with_target(false);
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(LevelFilter::INFO)
        .init();

    let cli = Cli::parse();
    let harvester = Harvester::new(".");
    for archive in &cli.archives {
        info!(archive = %archive.display(), "harvesting");
        if let Err(err) = harvester.harvest(archive) {
            // Per-archive failures never abort the batch or the exit code;
            // the log is the only failure channel.
            error!(archive = %archive.display(), error = %err, "harvest aborted");
        }
    }
}
