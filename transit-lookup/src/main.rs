use std::process::ExitCode;

use chrono::{Local, NaiveDateTime};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_lookup::config::AppConfig;
use transit_lookup::geo::{Coordinate, InvalidCoordinate};
use transit_lookup::lookup::{NearbyLookup, NearbyStation, NearbyStop};
use transit_lookup::predictions::display::{arrival_label, expected_at, format_clock};
use transit_lookup::transit::line_color;
use transit_lookup::wmata::{SnapshotSource, TransitSource};

/// Show nearby bus stops and metro stations with their next arrivals.
#[derive(Parser, Debug)]
#[command(name = "transit-lookup", version)]
struct Args {
    /// Latitude of the origin, in decimal degrees
    #[arg(allow_negative_numbers = true)]
    lat: f64,

    /// Longitude of the origin, in decimal degrees
    #[arg(allow_negative_numbers = true)]
    lon: f64,

    /// Print nearby stops and stations as JSON instead of a report
    #[arg(long)]
    json: bool,
}

impl Args {
    fn origin(&self) -> Result<Coordinate, InvalidCoordinate> {
        Coordinate::try_new(self.lat, self.lon)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let origin = match args.origin() {
        Ok(origin) => origin,
        Err(e) => Args::command().error(ErrorKind::ValueValidation, e).exit(),
    };

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let source = match SnapshotSource::new(&config.snapshot_dir) {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "cannot open snapshot");
            return ExitCode::FAILURE;
        }
    };
    info!(dir = %source.dir().display(), %origin, "looking up nearby transit");

    let lookup = NearbyLookup::new(source, config.lookup);

    let stops = match lookup.nearby_bus_stops(origin) {
        Ok(stops) => stops,
        Err(e) => {
            error!(error = %e, "failed to load bus stops");
            return ExitCode::FAILURE;
        }
    };
    let stations = match lookup.nearby_stations(origin) {
        Ok(stations) => stations,
        Err(e) => {
            error!(error = %e, "failed to load stations");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        let body = serde_json::json!({ "stops": stops, "stations": stations });
        println!("{body:#}");
        return ExitCode::SUCCESS;
    }

    let now = Local::now().naive_local();
    print_stops(&lookup, &stops);
    print_stations(&lookup, &stations, now);

    ExitCode::SUCCESS
}

fn print_stops<S: TransitSource>(lookup: &NearbyLookup<S>, stops: &[NearbyStop]) {
    println!("Bus stops");
    if stops.is_empty() {
        println!("  none nearby");
    }

    for nearby in stops {
        let routes: Vec<&str> = nearby.stop.display_routes().collect();
        println!();
        println!("  {} ({})", nearby.stop.name, nearby.distance);
        println!("  routes: {}", routes.join(", "));

        match lookup.stop_board(&nearby.stop.stop_id) {
            Ok(groups) if groups.is_empty() => println!("    no buses due"),
            Ok(groups) => {
                for group in groups {
                    let minutes: Vec<String> = group
                        .predictions
                        .iter()
                        .map(|p| p.minutes.to_string())
                        .collect();
                    println!(
                        "    {} {}: {} min",
                        group.route_id,
                        group.direction_text,
                        minutes.join(", ")
                    );
                }
            }
            Err(e) => error!(stop = %nearby.stop.stop_id, error = %e, "no bus predictions"),
        }
    }
}

fn print_stations<S: TransitSource>(
    lookup: &NearbyLookup<S>,
    stations: &[NearbyStation],
    now: NaiveDateTime,
) {
    println!();
    println!("Metro stations");
    if stations.is_empty() {
        println!("  none nearby");
    }

    for nearby in stations {
        let lines: Vec<String> = nearby
            .lines
            .iter()
            .map(|code| format!("{code} {}", line_color(code).station))
            .collect();
        println!();
        println!("  {} ({})", nearby.group.station.name, nearby.distance);
        println!("  lines: {}", lines.join(", "));

        let board = match lookup.station_board(&nearby.group) {
            Ok(board) => board,
            Err(e) => {
                error!(station = %nearby.group.station.code, error = %e, "no train predictions");
                continue;
            }
        };
        if board.is_empty() {
            println!("    no trains due");
        }

        for train in board {
            let clock = expected_at(&train.minutes_until_arrival, now)
                .map(format_clock)
                .unwrap_or_default();
            println!(
                "    {:<3} {:<4} {:<20} {:<12} {}",
                train.line,
                train.car,
                train.destination_name,
                arrival_label(&train.minutes_until_arrival),
                clock
            );
        }
    }
}
