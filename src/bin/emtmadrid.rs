//! EMT Madrid CLI binary.
//!
//! A command-line interface for the EMT Madrid OpenData services.

use std::process::ExitCode;

use clap::Parser;
use emtmadrid::cli::{
    wire_date, BikeCommand, BusCommand, Cli, Command, GeoCommand, ParkingCommand,
};
use emtmadrid::{output, EmtClient, EmtError, RequestParams};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let client = match EmtClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set EMT_CLIENT_ID and EMT_PASS_KEY environment variables");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &EmtClient, cli: Cli) -> emtmadrid::Result<()> {
    let value = match cli.command {
        Command::Bus(command) => handle_bus(client, command).await?,
        Command::Geo(command) => handle_geo(client, command).await?,
        Command::Bike(command) => handle_bike(client, command).await?,
        Command::Parking(command) => handle_parking(client, command).await?,
        Command::Call {
            service,
            endpoint,
            params,
        } => handle_call(client, &service, &endpoint, params).await?,
    };

    println!("{}", output::render(&value, cli.json)?);
    Ok(())
}

async fn handle_bus(client: &EmtClient, command: BusCommand) -> emtmadrid::Result<Value> {
    let bus = client.bus();
    match command {
        BusCommand::Calendar {
            date_begin,
            date_end,
        } => {
            bus.get_calendar(&wire_date(&date_begin), &wire_date(&date_end))
                .await
        }
        BusCommand::Groups => bus.get_groups().await,
        BusCommand::ListLines { date, lines } => {
            bus.get_list_lines(&wire_date(&date), &lines).await
        }
        BusCommand::TimesLines { date, lines } => {
            bus.get_times_lines(&wire_date(&date), &lines).await
        }
    }
}

async fn handle_geo(client: &EmtClient, command: GeoCommand) -> emtmadrid::Result<Value> {
    let geo = client.geo();
    match command {
        GeoCommand::ArriveStop { stop, culture } => {
            let params = RequestParams::new()
                .with("idStop", stop)
                .with("cultureInfo", culture);
            geo.get_arrive_stop(params).await
        }
        GeoCommand::Street {
            description,
            radius,
        } => {
            let params = RequestParams::new()
                .with("description", description)
                .with("Radius", radius);
            geo.get_street(params).await
        }
        GeoCommand::StopsFromXy {
            latitude,
            longitude,
            radius,
        } => {
            let params = RequestParams::new()
                .with("latitude", latitude)
                .with("longitude", longitude)
                .with("Radius", radius);
            geo.get_stops_from_xy(params).await
        }
    }
}

async fn handle_bike(client: &EmtClient, command: BikeCommand) -> emtmadrid::Result<Value> {
    let bike = client.bike();
    match command {
        BikeCommand::Stations => bike.get_stations().await,
        BikeCommand::Station { id } => bike.get_single_station(id).await,
    }
}

async fn handle_parking(client: &EmtClient, command: ParkingCommand) -> emtmadrid::Result<Value> {
    let parking = client.parking();
    match command {
        ParkingCommand::List { language } => parking.list_parking(&language).await,
        ParkingCommand::Detail => parking.detail_parking().await,
        ParkingCommand::Features => parking.list_features().await,
    }
}

async fn handle_call(
    client: &EmtClient,
    service: &str,
    endpoint: &str,
    params: Vec<(String, String)>,
) -> emtmadrid::Result<Value> {
    let facade = client
        .service(service)
        .ok_or_else(|| EmtError::UnknownService(service.to_string()))?;

    let params: RequestParams = params.into_iter().collect();
    match facade.call(endpoint, params).await {
        Err(error @ EmtError::UnknownEndpoint { .. }) => {
            let known: Vec<_> = facade.endpoint_ids().collect();
            eprintln!("Hint: valid endpoints for '{service}': {}", known.join(", "));
            Err(error)
        }
        result => result,
    }
}
