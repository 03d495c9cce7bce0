use chrono::Utc;
use clap::Parser;
use kepler::Propagator;
use std::fs;
use std::io::{self, prelude::*};
use std::path::PathBuf;
use std::time::Duration;
use tleparse::UtcTimestamp;
use tools_lib::{config::Config, track};
use tracing::info;

const DEFAULT_STEP: Duration = Duration::from_secs(60);

/// Print the sub-satellite point of a TLE record over time
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Solver and track configuration toml file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// First evaluation instant, RFC 3339 (e.g. 2024-03-01T12:00:00Z).
    ///
    /// The current time is used when not provided.
    #[arg(short = 't', long)]
    at: Option<UtcTimestamp>,

    /// Spacing between evaluation instants (e.g. 30s, 5m)
    #[arg(short = 's', long)]
    step: Option<humantime::Duration>,

    /// Number of evaluation instants
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// File holding one two or three line TLE record
    input: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    let config = match &opts.config {
        Some(p) => Config::load(p)?,
        None => Config::default(),
    };

    let record = fs::read_to_string(&opts.input)?;
    let elements = tleparse::parse(&record)?;
    info!(
        catalog_number = elements.catalog_number(),
        name = elements.satellite_name().unwrap_or_default(),
        epoch = %elements.epoch(),
        "Loaded element set"
    );

    let step = match opts.step {
        Some(s) => s.into(),
        None => config.track_step()?.unwrap_or(DEFAULT_STEP),
    };
    let count = opts.count.or(config.track.count).unwrap_or(1);
    let start = opts.at.unwrap_or_else(Utc::now);

    let propagator = Propagator::new(config.solver_settings());
    let mut out = io::stdout().lock();

    for at in track::instants(start, step, count)? {
        let at = at?;
        let state = propagator.propagate(&elements, at)?;
        writeln!(
            &mut out,
            "{} {:.6} {:.6} {:.3}",
            at.to_rfc3339(),
            state.sub_point.latitude,
            state.sub_point.longitude,
            state.radius
        )?;
    }

    Ok(())
}
