//! Multimedia route planning.

use std::sync::Arc;

use serde_json::Value;

use crate::category::ServiceCategory;
use crate::config::EmtConfig;
use crate::credentials::Credentials;
use crate::dispatch::Dispatcher;
use crate::endpoints::media;
use crate::error::Result;
use crate::params::RequestParams;
use crate::transport::Transport;

/// Facade over the multimedia route-planning family.
///
/// Shares the bus domain root; targets differ only in the `media` path
/// segment. Like geo, every operation accepts a caller-shaped
/// [`RequestParams`].
#[derive(Debug, Clone)]
pub struct MediaService {
    dispatcher: Dispatcher,
}

impl MediaService {
    /// Create the facade with its own credential copy.
    pub fn new(
        credentials: Credentials,
        config: Arc<EmtConfig>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(
                ServiceCategory::Multimedia,
                credentials,
                config,
                transport,
            ),
        }
    }

    /// Dispatch any catalogued media endpoint by id.
    pub async fn call(&self, endpoint_id: &str, params: RequestParams) -> Result<Value> {
        self.dispatcher.dispatch(endpoint_id, params).await
    }

    /// Arrival estimates for a stop together with its current incidents.
    pub async fn get_estimates_incident(&self, params: RequestParams) -> Result<Value> {
        self.call(media::GET_ESTIMATES_INCIDENT, params).await
    }

    /// Up to three optimal bus/walking routes between two locations.
    ///
    /// Origin and destination must be in a shape the platform already
    /// knows, which in practice means validated by a street lookup first.
    pub async fn get_street_route(&self, params: RequestParams) -> Result<Value> {
        self.call(media::GET_STREET_ROUTE, params).await
    }

    /// Route calculation with alarm support.
    pub async fn get_route_with_alarm(&self, params: RequestParams) -> Result<Value> {
        self.call(media::GET_ROUTE_WITH_ALARM, params).await
    }

    pub async fn get_route_with_alarm_response(&self, params: RequestParams) -> Result<Value> {
        self.call(media::GET_ROUTE_WITH_ALARM_RESPONSE, params).await
    }

    /// Route calculation between two points.
    pub async fn get_route(&self, params: RequestParams) -> Result<Value> {
        self.call(media::GET_ROUTE, params).await
    }

    pub async fn get_route_response(&self, params: RequestParams) -> Result<Value> {
        self.call(media::GET_ROUTE_RESPONSE, params).await
    }
}
