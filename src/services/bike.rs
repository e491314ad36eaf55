//! BiciMAD bike-share station state.

use std::sync::Arc;

use serde_json::Value;

use crate::category::ServiceCategory;
use crate::config::EmtConfig;
use crate::credentials::Credentials;
use crate::dispatch::Dispatcher;
use crate::endpoints::bike;
use crate::error::Result;
use crate::params::{ParamValue, RequestParams};
use crate::transport::Transport;

/// Facade over the BiciMAD bike-share family.
///
/// The only family that uses GET: credentials and the single positional
/// parameter travel in the URL path, and requests carry no body.
#[derive(Debug, Clone)]
pub struct BikeService {
    dispatcher: Dispatcher,
}

impl BikeService {
    /// Create the facade with its own credential copy.
    pub fn new(
        credentials: Credentials,
        config: Arc<EmtConfig>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(ServiceCategory::Bike, credentials, config, transport),
        }
    }

    /// Dispatch any catalogued bike endpoint by id.
    pub async fn call(&self, endpoint_id: &str, params: RequestParams) -> Result<Value> {
        self.dispatcher.dispatch(endpoint_id, params).await
    }

    /// Every BiciMAD station and its operational state.
    pub async fn get_stations(&self) -> Result<Value> {
        self.call(bike::GET_STATIONS, RequestParams::new()).await
    }

    /// State of a single station.
    ///
    /// The id becomes the positional path parameter; a non-numeric value
    /// collapses to an empty segment and the platform answers as if no id
    /// was given.
    pub async fn get_single_station(&self, base_id: impl Into<ParamValue>) -> Result<Value> {
        let params = RequestParams::new().with("idBase", base_id);
        self.call(bike::GET_SINGLE_STATION, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestMethod;
    use crate::transport::recording::RecordingTransport;

    fn service() -> (Arc<RecordingTransport>, BikeService) {
        let transport = RecordingTransport::with_response(r#"{"stations":[]}"#);
        let service = BikeService::new(
            Credentials::new("user1", "pass1"),
            Arc::new(EmtConfig::default()),
            transport.clone(),
        );
        (transport, service)
    }

    #[tokio::test]
    async fn test_stations_is_a_bodyless_get() {
        let (transport, service) = service();

        service.get_stations().await.unwrap();

        let request = transport.only_request();
        assert_eq!(request.method, RequestMethod::Get);
        assert!(request.payload.is_none());
        assert_eq!(
            request.target,
            "https://rbdata.emtmadrid.es/BiciMad/bike/GetStations/user1/pass1}/"
        );
    }

    #[tokio::test]
    async fn test_single_station_appends_the_id() {
        let (transport, service) = service();

        service.get_single_station(12).await.unwrap();

        assert!(transport
            .only_request()
            .target
            .ends_with("/bike/GetSingleStation/user1/pass1}/12"));
    }

    #[tokio::test]
    async fn test_single_station_accepts_numeric_strings() {
        let (transport, service) = service();

        service.get_single_station("21").await.unwrap();

        assert!(transport.only_request().target.ends_with("}/21"));
    }
}
