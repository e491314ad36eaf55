//! Geolocation: stops, streets and points of interest.

use std::sync::Arc;

use serde_json::Value;

use crate::category::ServiceCategory;
use crate::config::EmtConfig;
use crate::credentials::Credentials;
use crate::dispatch::Dispatcher;
use crate::endpoints::geo;
use crate::error::Result;
use crate::params::RequestParams;
use crate::transport::Transport;

/// Facade over the geolocation service family.
///
/// Geo endpoints take rich, endpoint-specific parameter sets (stop ids,
/// coordinates, radii, culture info), so every operation accepts a
/// caller-shaped [`RequestParams`] instead of fixed arguments.
#[derive(Debug, Clone)]
pub struct GeoService {
    dispatcher: Dispatcher,
}

impl GeoService {
    /// Create the facade with its own credential copy.
    pub fn new(
        credentials: Credentials,
        config: Arc<EmtConfig>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(ServiceCategory::Geo, credentials, config, transport),
        }
    }

    /// Dispatch any catalogued geo endpoint by id.
    pub async fn call(&self, endpoint_id: &str, params: RequestParams) -> Result<Value> {
        self.dispatcher.dispatch(endpoint_id, params).await
    }

    /// Bus arrival estimates for a target stop.
    pub async fn get_arrive_stop(&self, params: RequestParams) -> Result<Value> {
        self.call(geo::GET_ARRIVE_STOP, params).await
    }

    /// List of location groups.
    pub async fn get_groups(&self, params: RequestParams) -> Result<Value> {
        self.call(geo::GET_GROUPS, params).await
    }

    /// Line info for a target date.
    pub async fn get_info_line(&self, params: RequestParams) -> Result<Value> {
        self.call(geo::GET_INFO_LINE, params).await
    }

    /// Extended line info for a target date.
    pub async fn get_info_line_extend(&self, params: RequestParams) -> Result<Value> {
        self.call(geo::GET_INFO_LINE_EXTEND, params).await
    }

    /// Points of interest around a coordinate, within a radius.
    pub async fn get_points_of_interest(&self, params: RequestParams) -> Result<Value> {
        self.call(geo::GET_POINTS_OF_INTEREST, params).await
    }

    /// The known point-of-interest types.
    pub async fn get_points_of_interest_types(&self, params: RequestParams) -> Result<Value> {
        self.call(geo::GET_POINTS_OF_INTEREST_TYPES, params).await
    }

    /// Stops within a radius of a target stop, with the lines arriving at
    /// each of them.
    pub async fn get_stops_from_stop(&self, params: RequestParams) -> Result<Value> {
        self.call(geo::GET_STOPS_FROM_STOP, params).await
    }

    /// Stops within a radius of a coordinate, with the lines arriving at
    /// each of them.
    pub async fn get_stops_from_xy(&self, params: RequestParams) -> Result<Value> {
        self.call(geo::GET_STOPS_FROM_XY, params).await
    }

    /// Stop details for the requested line at travel time.
    pub async fn get_stops_line(&self, params: RequestParams) -> Result<Value> {
        self.call(geo::GET_STOPS_LINE, params).await
    }

    /// EMT nodes related to a location: stop groups within a radius, with
    /// the lines related to each stop.
    pub async fn get_street(&self, params: RequestParams) -> Result<Value> {
        self.call(geo::GET_STREET, params).await
    }

    /// Stops near a target coordinate.
    pub async fn get_street_from_xy(&self, params: RequestParams) -> Result<Value> {
        self.call(geo::GET_STREET_FROM_XY, params).await
    }
}
