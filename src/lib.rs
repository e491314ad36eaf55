//! EMT Madrid OpenData client library.
//!
//! A Rust client for the EMT Madrid web services: bus schedules,
//! geolocation lookups, multimedia route planning, BiciMAD bike-share
//! state and parking information. Each service family follows its own
//! wire convention (domain, path shape, verb, payload placement); the
//! library selects the right one per call through a category-tagged
//! dispatcher, so callers only ever see typed facades.
//!
//! # Quick Start
//!
//! ```no_run
//! use emtmadrid::{EmtClient, RequestParams};
//!
//! #[tokio::main]
//! async fn main() -> emtmadrid::Result<()> {
//!     // Create client from environment variables
//!     let client = EmtClient::from_env()?;
//!
//!     // Arrival estimates for a stop
//!     let arrives = client
//!         .geo()
//!         .get_arrive_stop(RequestParams::new().with("idStop", 147).with("cultureInfo", "ES"))
//!         .await?;
//!     println!("{arrives}");
//!
//!     // Bus calendar over a date range
//!     let calendar = client.bus().get_calendar("10/06/2018", "17/06/2018").await?;
//!
//!     // Every BiciMAD station and its state
//!     let stations = client.bike().get_stations().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Five service families share one dispatch pipeline:
//!
//! - [`ServiceCategory`] tags the family and fixes its HTTP verb;
//! - [`endpoints`] maps logical endpoint ids to path fragments;
//! - a [`Dispatcher`] applies the family's address and payload
//!   conventions and executes the result over a shared [`Transport`];
//! - the facades ([`BusService`], [`GeoService`], [`MediaService`],
//!   [`BikeService`], [`ParkingService`]) expose the catalogs as typed
//!   async operations returning loose JSON documents.
//!
//! [`EmtClient::service`] selects a facade by name at runtime; unknown
//! names yield `None`.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `EMT_CLIENT_ID` / `EMT_PASS_KEY` (required) - OpenData credentials
//! - `EMT_BUS_DOMAIN`, `EMT_BIKE_DOMAIN`, `EMT_PARKING_DOMAIN`
//!   (optional) - domain overrides
//! - `EMT_VERIFY_TLS` (optional) - enable TLS certificate verification;
//!   off by default because the production endpoints serve self-signed
//!   certificates

mod category;
mod client;
mod config;
mod credentials;
mod dispatch;
mod error;
mod params;
mod request;
mod services;
mod transport;

pub mod cli;
pub mod endpoints;
pub mod output;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use category::ServiceCategory;
pub use client::EmtClient;
pub use config::{
    EmtConfig, ParkingSegments, DEFAULT_BIKE_DOMAIN, DEFAULT_BUS_DOMAIN, DEFAULT_PARKING_DOMAIN,
};
pub use credentials::Credentials;
pub use dispatch::Dispatcher;
pub use error::{EmtError, Result};
pub use params::{ParamValue, RequestParams};
pub use request::{AssembledRequest, RequestMethod};
pub use transport::{HttpTransport, Transport};

// Re-export service facades
pub use services::{
    BikeService, BusService, EmtService, GeoService, MediaService, ParkingService,
};
