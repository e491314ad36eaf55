//! Service facades.
//!
//! One facade per EMT family. Each owns a [`Dispatcher`](crate::Dispatcher)
//! fixed to its category and exposes the family's catalog as typed async
//! operations. Operations return the decoded JSON document unmodified;
//! the EMT payloads are large and loosely shaped, so interpretation is
//! left to the caller.

mod bike;
mod bus;
mod geo;
mod media;
mod parking;

pub use bike::BikeService;
pub use bus::BusService;
pub use geo::GeoService;
pub use media::MediaService;
pub use parking::ParkingService;

use serde_json::Value;

use crate::category::ServiceCategory;
use crate::endpoints;
use crate::error::Result;
use crate::params::RequestParams;

/// Any service facade, selected by name at runtime.
///
/// Produced by [`EmtClient::service`](crate::EmtClient::service); useful
/// when the family is only known as a string, for example in the CLI.
#[derive(Debug, Clone)]
pub enum EmtService {
    Bus(BusService),
    Geo(GeoService),
    Media(MediaService),
    Bike(BikeService),
    Parking(ParkingService),
}

impl EmtService {
    /// The family behind this facade.
    #[must_use]
    pub fn category(&self) -> ServiceCategory {
        match self {
            Self::Bus(_) => ServiceCategory::Bus,
            Self::Geo(_) => ServiceCategory::Geo,
            Self::Media(_) => ServiceCategory::Multimedia,
            Self::Bike(_) => ServiceCategory::Bike,
            Self::Parking(_) => ServiceCategory::Parking,
        }
    }

    /// The logical endpoint ids this facade can dispatch.
    pub fn endpoint_ids(&self) -> impl Iterator<Item = &'static str> {
        endpoints::table_for(self.category()).ids()
    }

    /// Dispatch any catalogued endpoint of the underlying family.
    ///
    /// # Errors
    ///
    /// Returns [`EmtError::UnknownEndpoint`](crate::EmtError) when the id
    /// is not in the family's table, and transport/decode errors from the
    /// call itself.
    pub async fn call(&self, endpoint_id: &str, params: RequestParams) -> Result<Value> {
        match self {
            Self::Bus(service) => service.call(endpoint_id, params).await,
            Self::Geo(service) => service.call(endpoint_id, params).await,
            Self::Media(service) => service.call(endpoint_id, params).await,
            Self::Bike(service) => service.call(endpoint_id, params).await,
            Self::Parking(service) => service.call(endpoint_id, params).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::client::EmtClient;

    #[test]
    fn test_endpoint_ids_surface_the_family_catalog() {
        let client = EmtClient::new("user1", "pass1").unwrap();

        let bus = client.service("bus").unwrap();
        let ids: Vec<_> = bus.endpoint_ids().collect();
        assert_eq!(ids.len(), 8);
        assert!(ids.contains(&"GET_CALENDAR"));
        assert!(ids.contains(&"GET_TIMES_LINES"));

        let bike = client.service("bike").unwrap();
        assert_eq!(
            bike.endpoint_ids().collect::<Vec<_>>(),
            ["GET_STATIONS", "GET_SINGLE_STATION"]
        );
    }
}
