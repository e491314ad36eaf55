//! Client configuration.
//!
//! The EMT services are spread over three domain roots: one shared by the
//! bus/geo/media families (keyed by category segment) and one each for
//! bike-share and parking. They are injected, read-only configuration
//! rather than module-wide singletons, so tests and alternative
//! deployments can point every family somewhere else.

use std::env;

use url::Url;

use crate::category::ServiceCategory;
use crate::error::Result;

/// Default domain root shared by the bus, geo and media families.
///
/// The trailing slash is part of the address convention: targets are
/// formed as `{bus_domain}{segment}/{endpoint}.php`.
pub const DEFAULT_BUS_DOMAIN: &str = "https://openbus.emtmadrid.es/emt-proxy-server/last/";

/// Default domain root for the BiciMAD bike-share services.
pub const DEFAULT_BIKE_DOMAIN: &str = "https://rbdata.emtmadrid.es/BiciMad";

/// Default domain root for the parking services.
pub const DEFAULT_PARKING_DOMAIN: &str = "https://parkings.emtmadrid.es/InfoParking";

/// How the parking address strategy renders caller parameters into the
/// comma-joined tail of the target.
///
/// The upstream contract observed in production appends each parameter
/// *key*; that looks unintentional but is the wire shape deployed clients
/// rely on, so it is the default. [`ParkingSegments::Values`] is the
/// corrected rendering, kept selectable so both variants stay testable
/// until the intent is clarified upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParkingSegments {
    /// Append parameter keys (observed behavior).
    #[default]
    Keys,
    /// Append parameter values.
    Values,
}

/// Configuration for an [`EmtClient`](crate::EmtClient).
///
/// `Default` matches the production EMT deployment. Note that
/// [`verify_tls`](Self::verify_tls) defaults to **false**: the EMT
/// endpoints serve self-signed certificates, and the client would be
/// unusable against them otherwise. Set it to `true` when talking to a
/// properly certified deployment (for example a local mock).
#[derive(Debug, Clone)]
pub struct EmtConfig {
    /// Domain root shared by bus, geo and media, including trailing slash.
    pub bus_domain: String,
    /// Domain root for bike-share targets, without trailing slash.
    pub bike_domain: String,
    /// Domain root for parking targets, without trailing slash.
    pub parking_domain: String,
    /// Verify TLS certificates. Defaults to `false` because the EMT
    /// production endpoints are self-signed; this is a deliberate,
    /// documented accommodation, not a recommendation.
    pub verify_tls: bool,
    /// Parking path-segment rendering; see [`ParkingSegments`].
    pub parking_segments: ParkingSegments,
}

impl Default for EmtConfig {
    fn default() -> Self {
        Self {
            bus_domain: DEFAULT_BUS_DOMAIN.to_string(),
            bike_domain: DEFAULT_BIKE_DOMAIN.to_string(),
            parking_domain: DEFAULT_PARKING_DOMAIN.to_string(),
            verify_tls: false,
            parking_segments: ParkingSegments::default(),
        }
    }
}

impl EmtConfig {
    /// Default configuration with environment overrides applied.
    ///
    /// Reads `EMT_BUS_DOMAIN`, `EMT_BIKE_DOMAIN`, `EMT_PARKING_DOMAIN` and
    /// `EMT_VERIFY_TLS` (`1`/`true` to enable verification). Unset
    /// variables leave the defaults in place.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(domain) = env::var("EMT_BUS_DOMAIN") {
            config.bus_domain = domain;
        }
        if let Ok(domain) = env::var("EMT_BIKE_DOMAIN") {
            config.bike_domain = domain;
        }
        if let Ok(domain) = env::var("EMT_PARKING_DOMAIN") {
            config.parking_domain = domain;
        }
        if let Some(verify) = env::var("EMT_VERIFY_TLS").ok().and_then(|v| env_flag(&v)) {
            config.verify_tls = verify;
        }
        config
    }

    /// Replace the shared bus/geo/media domain root.
    #[must_use]
    pub fn with_bus_domain(mut self, domain: impl Into<String>) -> Self {
        self.bus_domain = domain.into();
        self
    }

    /// Replace the bike-share domain root.
    #[must_use]
    pub fn with_bike_domain(mut self, domain: impl Into<String>) -> Self {
        self.bike_domain = domain.into();
        self
    }

    /// Replace the parking domain root.
    #[must_use]
    pub fn with_parking_domain(mut self, domain: impl Into<String>) -> Self {
        self.parking_domain = domain.into();
        self
    }

    /// Enable or disable TLS certificate verification.
    #[must_use]
    pub fn with_verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Select the parking path-segment rendering.
    #[must_use]
    pub fn with_parking_segments(mut self, segments: ParkingSegments) -> Self {
        self.parking_segments = segments;
        self
    }

    /// The domain root the given category's targets are built on.
    #[must_use]
    pub fn domain_for(&self, category: ServiceCategory) -> &str {
        match category {
            ServiceCategory::Bus | ServiceCategory::Geo | ServiceCategory::Multimedia => {
                &self.bus_domain
            }
            ServiceCategory::Bike => &self.bike_domain,
            ServiceCategory::Parking => &self.parking_domain,
        }
    }

    /// Fail fast on a malformed domain.
    ///
    /// Targets are assembled by string formatting, so a typo here would
    /// otherwise only surface as a transport error on the first call.
    pub(crate) fn validate(&self) -> Result<()> {
        Url::parse(&self.bus_domain)?;
        Url::parse(&self.bike_domain)?;
        Url::parse(&self.parking_domain)?;
        Ok(())
    }
}

/// Parse a boolean environment flag.
fn env_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_production_deployment() {
        let config = EmtConfig::default();
        assert_eq!(config.bus_domain, DEFAULT_BUS_DOMAIN);
        assert!(config.bus_domain.ends_with('/'));
        assert!(!config.bike_domain.ends_with('/'));
        assert!(!config.parking_domain.ends_with('/'));
        assert!(!config.verify_tls);
        assert_eq!(config.parking_segments, ParkingSegments::Keys);
    }

    #[test]
    fn test_domain_for_shares_bus_root() {
        let config = EmtConfig::default();
        assert_eq!(config.domain_for(ServiceCategory::Bus), DEFAULT_BUS_DOMAIN);
        assert_eq!(config.domain_for(ServiceCategory::Geo), DEFAULT_BUS_DOMAIN);
        assert_eq!(
            config.domain_for(ServiceCategory::Multimedia),
            DEFAULT_BUS_DOMAIN
        );
        assert_eq!(
            config.domain_for(ServiceCategory::Bike),
            DEFAULT_BIKE_DOMAIN
        );
        assert_eq!(
            config.domain_for(ServiceCategory::Parking),
            DEFAULT_PARKING_DOMAIN
        );
    }

    #[test]
    fn test_validate_rejects_malformed_domain() {
        let config = EmtConfig::default().with_bike_domain("not a url");
        assert!(config.validate().is_err());
        assert!(EmtConfig::default().validate().is_ok());
    }

    #[test]
    fn test_env_flag_parsing() {
        assert_eq!(env_flag("1"), Some(true));
        assert_eq!(env_flag("TRUE"), Some(true));
        assert_eq!(env_flag(" yes "), Some(true));
        assert_eq!(env_flag("0"), Some(false));
        assert_eq!(env_flag("False"), Some(false));
        assert_eq!(env_flag("maybe"), None);
    }

    #[test]
    fn test_builder_overrides() {
        let config = EmtConfig::default()
            .with_bus_domain("http://127.0.0.1:9999/")
            .with_verify_tls(true)
            .with_parking_segments(ParkingSegments::Values);

        assert_eq!(config.bus_domain, "http://127.0.0.1:9999/");
        assert!(config.verify_tls);
        assert_eq!(config.parking_segments, ParkingSegments::Values);
    }
}
