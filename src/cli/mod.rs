//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! emtmadrid binary. Command handling lives in the binary itself.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// EMT Madrid OpenData command-line interface.
#[derive(Parser, Debug)]
#[command(name = "emtmadrid", about = "EMT Madrid OpenData CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bus schedules and line details.
    #[command(subcommand)]
    Bus(BusCommand),

    /// Geolocation lookups around stops and coordinates.
    #[command(subcommand)]
    Geo(GeoCommand),

    /// BiciMAD bike-share station state.
    #[command(subcommand)]
    Bike(BikeCommand),

    /// Parking garages and points of interest.
    #[command(subcommand)]
    Parking(ParkingCommand),

    /// Dispatch any catalogued endpoint of a service by id.
    Call {
        /// Service name: bus, geo, media, bike or parking.
        service: String,

        /// Logical endpoint id, e.g. GET_ARRIVE_STOP.
        endpoint: String,

        /// Request parameter as `key=value`; repeatable.
        #[arg(
            short = 'p',
            long = "param",
            value_name = "KEY=VALUE",
            value_parser = parse_param
        )]
        params: Vec<(String, String)>,
    },
}

/// Bus service commands.
#[derive(Subcommand, Debug)]
pub enum BusCommand {
    /// EMT calendar with day types for a date range.
    Calendar {
        /// Range start (ISO or DD/MM/YYYY).
        date_begin: String,

        /// Range end (ISO or DD/MM/YYYY).
        date_end: String,
    },

    /// Every line type and its details.
    Groups,

    /// Lines with description and group.
    ListLines {
        /// Target date (ISO or DD/MM/YYYY).
        date: String,

        /// Pipe-separated line list, e.g. "27|32".
        lines: String,
    },

    /// Current schedules for the requested lines.
    TimesLines {
        /// Target date (ISO or DD/MM/YYYY).
        date: String,

        /// Pipe-separated line list, e.g. "27|32".
        lines: String,
    },
}

/// Geolocation service commands.
#[derive(Subcommand, Debug)]
pub enum GeoCommand {
    /// Bus arrival estimates for a stop.
    ArriveStop {
        /// Stop id.
        stop: u32,

        /// Culture info for localized fields.
        #[arg(long, default_value = "ES")]
        culture: String,
    },

    /// EMT nodes related to a street, with their lines.
    Street {
        /// Street description to look up.
        description: String,

        /// Search radius in meters.
        #[arg(long, default_value_t = 200)]
        radius: u32,
    },

    /// Stops around a coordinate, with their arriving lines.
    StopsFromXy {
        /// Latitude in decimal degrees.
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude in decimal degrees.
        #[arg(allow_negative_numbers = true)]
        longitude: f64,

        /// Search radius in meters.
        #[arg(long, default_value_t = 200)]
        radius: u32,
    },
}

/// Bike-share commands.
#[derive(Subcommand, Debug)]
pub enum BikeCommand {
    /// Every station and its operational state.
    Stations,

    /// State of a single station.
    Station {
        /// Station base id.
        id: u32,
    },
}

/// Parking commands.
#[derive(Subcommand, Debug)]
pub enum ParkingCommand {
    /// Every active parking with address and coordinates.
    List {
        /// Response language.
        #[arg(long, default_value = "ES")]
        language: String,
    },

    /// Detailed parking info with occupancy figures.
    Detail,

    /// The active parking features.
    Features,
}

/// Convert a CLI date to the `DD/MM/YYYY` the platform expects.
///
/// ISO dates (`YYYY-MM-DD`) are converted; anything else passes through
/// untouched so native-format dates keep working.
#[must_use]
pub fn wire_date(input: &str) -> String {
    match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => input.to_string(),
    }
}

/// Parse a `key=value` CLI parameter.
fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}
