//! Solunar CLI - moon phase and fishing windows for a date and place

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};

use solunar::{Coordinate, DayForecast, SolunarConfig};

#[derive(Parser)]
#[command(name = "solunar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file path
    #[arg(short, long, env = "SOLUNAR_CONFIG")]
    config: Option<PathBuf>,

    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast a single day
    Day {
        /// Date as YYYY-MM-DD (defaults to today, UTC)
        date: Option<NaiveDate>,
    },

    /// Forecast consecutive days
    Range {
        /// First date as YYYY-MM-DD (defaults to today, UTC)
        start: Option<NaiveDate>,

        /// Number of days (defaults to the configured range)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Best days of a range by quality index
    Best {
        start: Option<NaiveDate>,

        #[arg(short, long)]
        days: Option<u32>,

        /// How many days to keep
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => SolunarConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SolunarConfig::default(),
    };
    let coordinate = Coordinate::new(
        cli.lat.unwrap_or(config.latitude),
        cli.lon.unwrap_or(config.longitude),
    )
    .context("invalid location")?;
    let (lat, lon) = (coordinate.latitude(), coordinate.longitude());
    let today = Utc::now().date_naive();

    let forecasts = match cli.command {
        Commands::Day { date } => vec![solunar::forecast_day(date.unwrap_or(today), lat, lon)],
        Commands::Range { start, days } => solunar::forecast_range(
            start.unwrap_or(today),
            days.unwrap_or(config.range_days),
            lat,
            lon,
        ),
        Commands::Best { start, days, limit } => solunar::best_days(
            start.unwrap_or(today),
            days.unwrap_or(config.range_days),
            lat,
            lon,
            limit.unwrap_or(config.best_days_limit),
        ),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&forecasts)?);
    } else {
        for f in &forecasts {
            print_forecast(f);
        }
    }
    Ok(())
}

fn print_forecast(f: &DayForecast) {
    let s = &f.snapshot;
    println!("=== {} ({:.4}, {:.4}) ===", s.date, s.latitude, s.longitude);
    println!(
        "Moon: {} ({:.1}% lit, age {:.3})",
        s.moon_phase, s.illumination_percent, s.moon.age_fraction
    );
    println!("Sunrise: {}  Sunset: {}", s.sunrise.format("%H:%M"), s.sunset.format("%H:%M"));
    match (s.moonrise, s.moonset) {
        (Some(rise), Some(set)) => println!(
            "Moonrise: {}  Moonset: {}",
            rise.format("%m-%d %H:%M"),
            set.format("%m-%d %H:%M")
        ),
        _ => println!("Moonrise/moonset: unavailable"),
    }
    println!("Quality: {}/100 ({})", f.quality_index, f.rating);
    for w in &f.windows {
        println!(
            "  {:>3}  {} - {}  {} [{}]",
            w.score,
            w.period.start.format("%m-%d %H:%M"),
            w.period.end.format("%m-%d %H:%M"),
            w.reason,
            w.rating
        );
    }
    for d in &s.degradations {
        println!("  ! {}", d);
    }
    println!();
}
