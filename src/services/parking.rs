//! Parking garages and related points of interest.

use std::sync::Arc;

use serde_json::Value;

use crate::category::ServiceCategory;
use crate::config::EmtConfig;
use crate::credentials::Credentials;
use crate::dispatch::Dispatcher;
use crate::endpoints::parking;
use crate::error::Result;
use crate::params::RequestParams;
use crate::transport::Transport;

/// Facade over the parking service family.
///
/// Parking targets have no category segment and no `.php` suffix, and
/// carry one comma path segment per parameter in addition to the posted
/// form body; see [`ParkingSegments`](crate::ParkingSegments) for the
/// segment rendering.
#[derive(Debug, Clone)]
pub struct ParkingService {
    dispatcher: Dispatcher,
}

impl ParkingService {
    /// Create the facade with its own credential copy.
    pub fn new(
        credentials: Credentials,
        config: Arc<EmtConfig>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(ServiceCategory::Parking, credentials, config, transport),
        }
    }

    /// Dispatch any catalogued parking endpoint by id.
    pub async fn call(&self, endpoint_id: &str, params: RequestParams) -> Result<Value> {
        self.dispatcher.dispatch(endpoint_id, params).await
    }

    /// Detailed info for a parking: accesses, timetables, rates, services
    /// and occupancy figures.
    pub async fn detail_parking(&self) -> Result<Value> {
        self.call(parking::DETAIL_PARKING, RequestParams::new())
            .await
    }

    /// Detailed POI info: family code, names, description, web, timetable
    /// and associated images.
    pub async fn detail_poi(&self) -> Result<Value> {
        self.call(parking::DETAIL_POI, RequestParams::new()).await
    }

    /// Every element with an associated icon, with its group and icon path.
    pub async fn icon_description(&self) -> Result<Value> {
        self.call(parking::ICON_DESCRIPTION, RequestParams::new())
            .await
    }

    /// Language-independent info for POIs and parkings: address,
    /// coordinates, family, type and category codes.
    pub async fn info_parking_poi(&self) -> Result<Value> {
        self.call(parking::INFO_PARKING_POI, RequestParams::new())
            .await
    }

    /// The active parking features, with name, code, group and icon path.
    pub async fn list_features(&self) -> Result<Value> {
        self.call(parking::LIST_FEATURES, RequestParams::new()).await
    }

    /// Every active parking, with id, family, name, category, type,
    /// address and coordinates.
    pub async fn list_parking(&self, language: &str) -> Result<Value> {
        let params = RequestParams::new().with("language", language);
        self.call(parking::LIST_PARKING, params).await
    }

    /// Addresses and POIs (parkings included) matching a text, totally or
    /// partially.
    pub async fn list_street_pois_parking(&self, address: &str, language: &str) -> Result<Value> {
        let params = RequestParams::new()
            .with("address", address)
            .with("language", language);
        self.call(parking::LIST_STREET_POIS_PARKING, params).await
    }

    /// The families, types and categories of active POIs.
    pub async fn list_types_pois(&self, language: &str) -> Result<Value> {
        let params = RequestParams::new().with("language", language);
        self.call(parking::LIST_TYPES_POIS, params).await
    }
}
