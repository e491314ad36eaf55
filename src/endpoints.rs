//! Endpoint resolution tables.
//!
//! Each service family publishes a catalog of remote operations. Facades
//! refer to them by logical endpoint id (an opaque string constant); the
//! dispatcher resolves the id through the family's table into the path
//! fragment the address strategy splices into the target URL. The tables
//! are read-only configuration: extending a family means adding a row
//! here, nothing else.

use crate::category::ServiceCategory;

/// Logical name of a remote operation within a category.
pub type EndpointId = &'static str;

/// Immutable mapping from logical endpoint ids to path fragments.
#[derive(Debug, Clone, Copy)]
pub struct EndpointTable {
    entries: &'static [(EndpointId, &'static str)],
}

impl EndpointTable {
    /// Resolve a logical id to its path fragment.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == id)
            .map(|(_, fragment)| *fragment)
    }

    /// The catalogued ids, in table order.
    pub fn ids(&self) -> impl Iterator<Item = EndpointId> {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Number of catalogued operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty (never true for the built-in families).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The endpoint table for a category.
#[must_use]
pub fn table_for(category: ServiceCategory) -> &'static EndpointTable {
    match category {
        ServiceCategory::Bus => &bus::TABLE,
        ServiceCategory::Geo => &geo::TABLE,
        ServiceCategory::Multimedia => &media::TABLE,
        ServiceCategory::Bike => &bike::TABLE,
        ServiceCategory::Parking => &parking::TABLE,
    }
}

/// Bus service endpoints.
pub mod bus {
    use super::{EndpointId, EndpointTable};

    pub const GET_CALENDAR: EndpointId = "GET_CALENDAR";
    pub const GET_GROUPS: EndpointId = "GET_GROUPS";
    pub const GET_LIST_LINES: EndpointId = "GET_LIST_LINES";
    pub const GET_NODES_LINES: EndpointId = "GET_NODES_LINES";
    pub const GET_ROUTE_LINES: EndpointId = "GET_ROUTE_LINES";
    pub const GET_ROUTE_LINES_ROUTE: EndpointId = "GET_ROUTE_LINES_ROUTE";
    pub const GET_TIME_TABLE_LINES: EndpointId = "GET_TIME_TABLE_LINES";
    pub const GET_TIMES_LINES: EndpointId = "GET_TIMES_LINES";

    pub(super) static TABLE: EndpointTable = EndpointTable {
        entries: &[
            (GET_CALENDAR, "GetCalendar"),
            (GET_GROUPS, "GetGroups"),
            (GET_LIST_LINES, "GetListLines"),
            (GET_NODES_LINES, "GetNodesLines"),
            (GET_ROUTE_LINES, "GetRouteLines"),
            (GET_ROUTE_LINES_ROUTE, "GetRouteLinesRoute"),
            (GET_TIME_TABLE_LINES, "GetTimeTableLines"),
            (GET_TIMES_LINES, "GetTimesLines"),
        ],
    };
}

/// Geolocation service endpoints.
pub mod geo {
    use super::{EndpointId, EndpointTable};

    pub const GET_ARRIVE_STOP: EndpointId = "GET_ARRIVE_STOP";
    pub const GET_GROUPS: EndpointId = "GET_GROUPS";
    pub const GET_INFO_LINE: EndpointId = "GET_INFO_LINE";
    pub const GET_INFO_LINE_EXTEND: EndpointId = "GET_INFO_LINE_EXTEND";
    pub const GET_POINTS_OF_INTEREST: EndpointId = "GET_POINTS_OF_INTEREST";
    pub const GET_POINTS_OF_INTEREST_TYPES: EndpointId = "GET_POINTS_OF_INTEREST_TYPES";
    pub const GET_STOPS_FROM_STOP: EndpointId = "GET_STOPS_FROM_STOP";
    pub const GET_STOPS_FROM_XY: EndpointId = "GET_STOPS_FROM_XY";
    pub const GET_STOPS_LINE: EndpointId = "GET_STOPS_LINE";
    pub const GET_STREET: EndpointId = "GET_STREET";
    pub const GET_STREET_FROM_XY: EndpointId = "GET_STREET_FROM_XY";

    pub(super) static TABLE: EndpointTable = EndpointTable {
        entries: &[
            (GET_ARRIVE_STOP, "GetArriveStop"),
            (GET_GROUPS, "GetGroups"),
            (GET_INFO_LINE, "GetInfoLine"),
            (GET_INFO_LINE_EXTEND, "GetInfoLineExtend"),
            (GET_POINTS_OF_INTEREST, "GetPointsOfInterest"),
            (GET_POINTS_OF_INTEREST_TYPES, "GetPointsOfInterestTypes"),
            (GET_STOPS_FROM_STOP, "GetStopsFromStop"),
            (GET_STOPS_FROM_XY, "GetStopsFromXY"),
            (GET_STOPS_LINE, "GetStopsLine"),
            (GET_STREET, "GetStreet"),
            (GET_STREET_FROM_XY, "GetStreetFromXY"),
        ],
    };
}

/// Multimedia route-planning endpoints.
pub mod media {
    use super::{EndpointId, EndpointTable};

    pub const GET_ESTIMATES_INCIDENT: EndpointId = "GET_ESTIMATES_INCIDENT";
    pub const GET_STREET_ROUTE: EndpointId = "GET_STREET_ROUTE";
    pub const GET_ROUTE_WITH_ALARM: EndpointId = "GET_ROUTE_WITH_ALARM";
    pub const GET_ROUTE_WITH_ALARM_RESPONSE: EndpointId = "GET_ROUTE_WITH_ALARM_RESPONSE";
    pub const GET_ROUTE: EndpointId = "GET_ROUTE";
    pub const GET_ROUTE_RESPONSE: EndpointId = "GET_ROUTE_RESPONSE";

    pub(super) static TABLE: EndpointTable = EndpointTable {
        entries: &[
            (GET_ESTIMATES_INCIDENT, "GetEstimatesIncident"),
            (GET_STREET_ROUTE, "GetStreetRoute"),
            (GET_ROUTE_WITH_ALARM, "GetRouteWithAlarm"),
            (GET_ROUTE_WITH_ALARM_RESPONSE, "GetRouteWithAlarmResponse"),
            (GET_ROUTE, "GetRoute"),
            (GET_ROUTE_RESPONSE, "GetRouteResponse"),
        ],
    };
}

/// BiciMAD bike-share endpoints.
pub mod bike {
    use super::{EndpointId, EndpointTable};

    pub const GET_STATIONS: EndpointId = "GET_STATIONS";
    pub const GET_SINGLE_STATION: EndpointId = "GET_SINGLE_STATION";

    pub(super) static TABLE: EndpointTable = EndpointTable {
        entries: &[
            (GET_STATIONS, "GetStations"),
            (GET_SINGLE_STATION, "GetSingleStation"),
        ],
    };
}

/// Parking service endpoints.
pub mod parking {
    use super::{EndpointId, EndpointTable};

    pub const DETAIL_PARKING: EndpointId = "DETAIL_PARKING";
    pub const DETAIL_POI: EndpointId = "DETAIL_POI";
    pub const ICON_DESCRIPTION: EndpointId = "ICON_DESCRIPTION";
    pub const INFO_PARKING_POI: EndpointId = "INFO_PARKING_POI";
    pub const LIST_FEATURES: EndpointId = "LIST_FEATURES";
    pub const LIST_PARKING: EndpointId = "LIST_PARKING";
    pub const LIST_STREET_POIS_PARKING: EndpointId = "LIST_STREET_POIS_PARKING";
    pub const LIST_TYPES_POIS: EndpointId = "LIST_TYPES_POIS";

    pub(super) static TABLE: EndpointTable = EndpointTable {
        entries: &[
            (DETAIL_PARKING, "DetailParking"),
            (DETAIL_POI, "DetailPOI"),
            (ICON_DESCRIPTION, "IconDescription"),
            (INFO_PARKING_POI, "InfoParkingPoi"),
            (LIST_FEATURES, "ListFeatures"),
            (LIST_PARKING, "ListParking"),
            (LIST_STREET_POIS_PARKING, "ListStreetPoisParking"),
            (LIST_TYPES_POIS, "ListTypesPOIs"),
        ],
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalogued_id_resolves() {
        for category in ServiceCategory::ALL {
            let table = table_for(category);
            assert!(!table.is_empty());
            for id in table.ids() {
                let fragment = table.resolve(id);
                assert!(fragment.is_some(), "{category}: {id} did not resolve");
                let fragment = fragment.unwrap();
                assert!(!fragment.is_empty());
                assert!(!fragment.contains(char::is_whitespace));
            }
        }
    }

    #[test]
    fn test_unknown_id_does_not_resolve() {
        for category in ServiceCategory::ALL {
            assert_eq!(table_for(category).resolve("GET_NONSENSE"), None);
        }
    }

    #[test]
    fn test_catalog_sizes_match_service_surface() {
        assert_eq!(table_for(ServiceCategory::Bus).len(), 8);
        assert_eq!(table_for(ServiceCategory::Geo).len(), 11);
        assert_eq!(table_for(ServiceCategory::Multimedia).len(), 6);
        assert_eq!(table_for(ServiceCategory::Bike).len(), 2);
        assert_eq!(table_for(ServiceCategory::Parking).len(), 8);
    }

    #[test]
    fn test_ids_are_scoped_per_category() {
        // The same logical name may exist in two families and resolve
        // independently.
        assert_eq!(
            table_for(ServiceCategory::Bus).resolve(bus::GET_GROUPS),
            Some("GetGroups")
        );
        assert_eq!(
            table_for(ServiceCategory::Geo).resolve(geo::GET_GROUPS),
            Some("GetGroups")
        );
        assert_eq!(table_for(ServiceCategory::Bike).resolve("GET_GROUPS"), None);
    }
}
