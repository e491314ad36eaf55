//! Service family tags.
//!
//! Each remote EMT service family follows its own wire convention. The
//! [`ServiceCategory`] tag selects which address/payload strategy and which
//! fixed HTTP verb apply; callers never override either.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::request::RequestMethod;

/// The five EMT Madrid service families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    /// Bus line schedules and timetables.
    Bus,
    /// Geolocation: stops, streets and points of interest.
    Geo,
    /// Multimedia route planning.
    Multimedia,
    /// BiciMAD bike-share station state.
    Bike,
    /// Parking garages and related POIs.
    Parking,
}

impl ServiceCategory {
    /// Stable lowercase name, also the factory selector key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bus => "bus",
            Self::Geo => "geo",
            Self::Multimedia => "media",
            Self::Bike => "bike",
            Self::Parking => "parking",
        }
    }

    /// URL path segment for categories whose address convention carries one.
    ///
    /// Parking targets are rooted directly at the parking domain and have
    /// no category segment.
    #[must_use]
    pub const fn path_segment(&self) -> Option<&'static str> {
        match self {
            Self::Bus => Some("bus"),
            Self::Geo => Some("geo"),
            Self::Multimedia => Some("media"),
            Self::Bike => Some("bike"),
            Self::Parking => None,
        }
    }

    /// The fixed HTTP verb for this family.
    ///
    /// Every family posts a form body except bike-share, which travels
    /// entirely in the URL path and uses GET.
    #[must_use]
    pub const fn method(&self) -> RequestMethod {
        match self {
            Self::Bike => RequestMethod::Get,
            _ => RequestMethod::Post,
        }
    }

    /// Resolve a factory selector key (`"bus"`, `"geo"`, `"media"`,
    /// `"bike"`, `"parking"`) to a category.
    ///
    /// Unknown keys yield `None`; the factory deliberately reports absence
    /// rather than an error for unrecognized service names.
    #[must_use]
    pub fn from_service_name(name: &str) -> Option<Self> {
        match name {
            "bus" => Some(Self::Bus),
            "geo" => Some(Self::Geo),
            "media" => Some(Self::Multimedia),
            "bike" => Some(Self::Bike),
            "parking" => Some(Self::Parking),
            _ => None,
        }
    }

    /// All categories, in catalog order.
    pub const ALL: [ServiceCategory; 5] = [
        Self::Bus,
        Self::Geo,
        Self::Multimedia,
        Self::Bike,
        Self::Parking,
    ];
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_is_fixed_per_category() {
        for category in ServiceCategory::ALL {
            let expected = if category == ServiceCategory::Bike {
                RequestMethod::Get
            } else {
                RequestMethod::Post
            };
            assert_eq!(category.method(), expected);
        }
    }

    #[test]
    fn test_service_name_round_trip() {
        for category in ServiceCategory::ALL {
            assert_eq!(
                ServiceCategory::from_service_name(category.as_str()),
                Some(category)
            );
        }
    }

    #[test]
    fn test_unknown_service_name_is_absent() {
        assert_eq!(ServiceCategory::from_service_name("tram"), None);
        assert_eq!(ServiceCategory::from_service_name(""), None);
        assert_eq!(ServiceCategory::from_service_name("BUS"), None);
    }

    #[test]
    fn test_parking_has_no_path_segment() {
        assert_eq!(ServiceCategory::Parking.path_segment(), None);
        for category in [
            ServiceCategory::Bus,
            ServiceCategory::Geo,
            ServiceCategory::Multimedia,
            ServiceCategory::Bike,
        ] {
            assert!(category.path_segment().is_some());
        }
    }
}
