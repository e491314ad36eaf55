//! EMT Madrid client and service factory.
//!
//! [`EmtClient`] holds the credential pair, the configuration and the
//! shared transport, and hands out per-family service facades. Facades
//! are cheap to create: each takes its own copy of the credentials and a
//! reference to the shared connection pool.

use std::env;
use std::fmt;
use std::sync::Arc;

use crate::category::ServiceCategory;
use crate::config::EmtConfig;
use crate::credentials::Credentials;
use crate::error::{EmtError, Result};
use crate::services::{
    BikeService, BusService, EmtService, GeoService, MediaService, ParkingService,
};
use crate::transport::{HttpTransport, Transport};

/// Entry point to the EMT Madrid OpenData services.
///
/// This struct is cheaply cloneable; clones and every facade it hands out
/// reference the same underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use emtmadrid::{EmtClient, RequestParams};
///
/// # async fn example() -> emtmadrid::Result<()> {
/// // Create from environment variables
/// let client = EmtClient::from_env()?;
///
/// // Or configure manually
/// let client = EmtClient::new("your-client-id", "your-pass-key")?;
///
/// let arrives = client
///     .geo()
///     .get_arrive_stop(RequestParams::new().with("idStop", 147).with("cultureInfo", "ES"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct EmtClient {
    credentials: Credentials,
    config: Arc<EmtConfig>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for EmtClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmtClient")
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl EmtClient {
    /// Create a client with the default production configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be built.
    pub fn new(client_id: impl Into<String>, pass_key: impl Into<String>) -> Result<Self> {
        Self::with_config(client_id, pass_key, EmtConfig::default())
    }

    /// Create a client with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured domain is not a valid URL or the
    /// HTTP transport cannot be built.
    pub fn with_config(
        client_id: impl Into<String>,
        pass_key: impl Into<String>,
        config: EmtConfig,
    ) -> Result<Self> {
        config.validate()?;
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self {
            credentials: Credentials::new(client_id, pass_key),
            config: Arc::new(config),
            transport,
        })
    }

    /// Create a client from environment variables.
    ///
    /// Uses `EMT_CLIENT_ID` and `EMT_PASS_KEY` for the credential pair and
    /// the `EMT_*` domain overrides documented on
    /// [`EmtConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if either credential variable is not set.
    pub fn from_env() -> Result<Self> {
        let client_id = env::var("EMT_CLIENT_ID").map_err(|_| {
            EmtError::ConfigMissing("EMT_CLIENT_ID environment variable not set".to_string())
        })?;
        let pass_key = env::var("EMT_PASS_KEY").map_err(|_| {
            EmtError::ConfigMissing("EMT_PASS_KEY environment variable not set".to_string())
        })?;

        Self::with_config(client_id, pass_key, EmtConfig::from_env())
    }

    /// Create a client over a caller-supplied transport.
    ///
    /// Intended for tests and embedding; production callers should use
    /// [`new`](Self::new) or [`with_config`](Self::with_config).
    ///
    /// # Errors
    ///
    /// Returns an error if a configured domain is not a valid URL.
    pub fn with_transport(
        credentials: Credentials,
        config: EmtConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            credentials,
            config: Arc::new(config),
            transport,
        })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EmtConfig {
        &self.config
    }

    /// The bus service facade.
    #[must_use]
    pub fn bus(&self) -> BusService {
        BusService::new(
            self.credentials.clone(),
            self.config.clone(),
            self.transport.clone(),
        )
    }

    /// The geolocation service facade.
    #[must_use]
    pub fn geo(&self) -> GeoService {
        GeoService::new(
            self.credentials.clone(),
            self.config.clone(),
            self.transport.clone(),
        )
    }

    /// The multimedia route-planning facade.
    #[must_use]
    pub fn media(&self) -> MediaService {
        MediaService::new(
            self.credentials.clone(),
            self.config.clone(),
            self.transport.clone(),
        )
    }

    /// The bike-share facade.
    #[must_use]
    pub fn bike(&self) -> BikeService {
        BikeService::new(
            self.credentials.clone(),
            self.config.clone(),
            self.transport.clone(),
        )
    }

    /// The parking facade.
    #[must_use]
    pub fn parking(&self) -> ParkingService {
        ParkingService::new(
            self.credentials.clone(),
            self.config.clone(),
            self.transport.clone(),
        )
    }

    /// Select a facade by service name.
    ///
    /// Accepts `"bus"`, `"geo"`, `"media"`, `"bike"` and `"parking"`.
    /// Unknown names yield `None` rather than an error, mirroring the
    /// behavior consumers of the platform have come to rely on.
    #[must_use]
    pub fn service(&self, name: &str) -> Option<EmtService> {
        let category = ServiceCategory::from_service_name(name)?;
        Some(match category {
            ServiceCategory::Bus => EmtService::Bus(self.bus()),
            ServiceCategory::Geo => EmtService::Geo(self.geo()),
            ServiceCategory::Multimedia => EmtService::Media(self.media()),
            ServiceCategory::Bike => EmtService::Bike(self.bike()),
            ServiceCategory::Parking => EmtService::Parking(self.parking()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;
    use crate::transport::recording::RecordingTransport;

    #[test]
    fn test_client_debug_redacts_pass_key() {
        let client = EmtClient::new("user1", "super-secret").unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("EmtClient"));
        assert!(debug.contains("user1"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_service_selector_resolves_known_names() {
        let client = EmtClient::new("user1", "pass1").unwrap();

        for (name, category) in [
            ("bus", ServiceCategory::Bus),
            ("geo", ServiceCategory::Geo),
            ("media", ServiceCategory::Multimedia),
            ("bike", ServiceCategory::Bike),
            ("parking", ServiceCategory::Parking),
        ] {
            let service = client.service(name);
            assert_eq!(service.map(|s| s.category()), Some(category), "{name}");
        }
    }

    #[test]
    fn test_service_selector_reports_absence() {
        let client = EmtClient::new("user1", "pass1").unwrap();
        assert!(client.service("tram").is_none());
        assert!(client.service("").is_none());
        assert!(client.service("Bus").is_none());
    }

    #[test]
    fn test_with_config_rejects_malformed_domain() {
        let config = EmtConfig::default().with_parking_domain("not a url");
        assert!(EmtClient::with_config("user1", "pass1", config).is_err());
    }

    #[tokio::test]
    async fn test_with_transport_drives_facade_calls() {
        let transport = RecordingTransport::with_response(r#"{"resultCode":0}"#);
        let client = EmtClient::with_transport(
            Credentials::new("user1", "pass1"),
            EmtConfig::default(),
            transport.clone(),
        )
        .unwrap();

        client.bus().get_groups().await.unwrap();

        let request = transport.only_request();
        assert!(request.target.ends_with("/bus/GetGroups.php"));
        let payload = request.payload.unwrap();
        assert_eq!(payload.get("idClient"), Some(&ParamValue::from("user1")));
        assert_eq!(payload.get("passKey"), Some(&ParamValue::from("pass1")));
    }

    #[test]
    fn test_with_transport_rejects_malformed_domain() {
        let transport = RecordingTransport::with_response("{}");
        let config = EmtConfig::default().with_bike_domain("not a url");
        let result =
            EmtClient::with_transport(Credentials::new("user1", "pass1"), config, transport);
        assert!(result.is_err());
    }
}
