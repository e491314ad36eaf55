//! Canned response documents for the mock server.

use serde_json::{json, Value};

use crate::endpoints;
use crate::ServiceCategory;

/// Factory for mock response documents.
pub struct Fixtures;

/// Everything [`Fixtures::default_scenario`] seeds into a fresh state.
#[derive(Debug, Default)]
pub struct DefaultScenario {
    /// `(family/Fragment, document)` pairs.
    pub responses: Vec<(String, Value)>,
}

impl Fixtures {
    /// Bus-arrival estimations for a stop, in the proxy envelope.
    pub fn arrive_stop() -> Value {
        json!({
            "errorCode": "0",
            "description": "Resultado de la operacion Correcta",
            "arrives": [
                {
                    "stopId": 2443,
                    "lineId": "27",
                    "isHead": "False",
                    "destination": "PLAZA CASTILLA",
                    "busId": "8753",
                    "busTimeLeft": 93,
                    "busDistance": 402,
                    "longitude": -3.6921,
                    "latitude": 40.4378,
                    "busPositionType": 1
                },
                {
                    "stopId": 2443,
                    "lineId": "27",
                    "isHead": "False",
                    "destination": "PLAZA CASTILLA",
                    "busId": "8791",
                    "busTimeLeft": 512,
                    "busDistance": 2231,
                    "longitude": -3.6889,
                    "latitude": 40.4211,
                    "busPositionType": 0
                }
            ]
        })
    }

    /// A two-day service calendar.
    pub fn calendar() -> Value {
        json!({
            "errorCode": "0",
            "description": "Resultado de la operacion Correcta",
            "resultValues": [
                {"date": "01/06/2018", "strikeDay": "N", "dayType": "LA"},
                {"date": "02/06/2018", "strikeDay": "N", "dayType": "SA"}
            ]
        })
    }

    /// BiciMAD station list in the bike-service envelope.
    pub fn bike_stations() -> Value {
        json!({
            "code": "0",
            "message": "ok",
            "data": [
                {
                    "id": 1,
                    "name": "Puerta del Sol A",
                    "number": "1a",
                    "latitude": "40.4168961",
                    "longitude": "-3.7024255",
                    "activate": 1,
                    "no_available": 0,
                    "total_bases": 30,
                    "dock_bikes": 14,
                    "free_bases": 16,
                    "reservations_count": 0,
                    "light": 0
                },
                {
                    "id": 2,
                    "name": "Miguel Moya",
                    "number": "2",
                    "latitude": "40.4205886",
                    "longitude": "-3.7058415",
                    "activate": 1,
                    "no_available": 0,
                    "total_bases": 27,
                    "dock_bikes": 5,
                    "free_bases": 22,
                    "reservations_count": 0,
                    "light": 0
                }
            ]
        })
    }

    /// Parking garage list.
    pub fn parking_list() -> Value {
        json!({
            "code": 0,
            "description": "OK",
            "data": [
                {
                    "id": 12,
                    "name": "Plaza Mayor",
                    "address": "Plaza Mayor, 27",
                    "latitude": 40.4153,
                    "longitude": -3.7074,
                    "freePlaces": 41
                },
                {
                    "id": 31,
                    "name": "Montalban",
                    "address": "Calle Montalban, 1",
                    "latitude": 40.4180,
                    "longitude": -3.6916,
                    "freePlaces": 0
                }
            ]
        })
    }

    /// A point-to-point route plan.
    pub fn street_route() -> Value {
        json!({
            "errorCode": "0",
            "description": "Resultado de la operacion Correcta",
            "listRoute": [
                {
                    "routeId": 1,
                    "durationSeconds": 1260,
                    "walkingDistanceMeters": 340,
                    "sections": [
                        {"mode": "WALK", "durationSeconds": 180},
                        {"mode": "BUS", "lineId": "27", "durationSeconds": 900},
                        {"mode": "WALK", "durationSeconds": 180}
                    ]
                }
            ]
        })
    }

    /// The generic envelope used for endpoints without a dedicated fixture.
    pub fn generic(fragment: &str) -> Value {
        json!({
            "errorCode": "0",
            "description": format!("Resultado de la operacion Correcta: {fragment}"),
            "resultValues": []
        })
    }

    /// A document for every catalogued endpoint of every family.
    ///
    /// Endpoints with a dedicated fixture get it; the rest get the generic
    /// envelope, so any facade call against a default-seeded server decodes.
    pub fn default_scenario() -> DefaultScenario {
        let mut scenario = DefaultScenario::default();
        for category in ServiceCategory::ALL {
            let family = category.as_str();
            let table = endpoints::table_for(category);
            for id in table.ids() {
                let Some(fragment) = table.resolve(id) else {
                    continue;
                };
                let document = Self::dedicated(family, fragment)
                    .unwrap_or_else(|| Self::generic(fragment));
                scenario
                    .responses
                    .push((format!("{family}/{fragment}"), document));
            }
        }
        scenario
    }

    fn dedicated(family: &str, fragment: &str) -> Option<Value> {
        match (family, fragment) {
            ("bus", "GetCalendar") => Some(Self::calendar()),
            ("geo", "GetArriveStop") => Some(Self::arrive_stop()),
            ("media", "GetStreetRoute") => Some(Self::street_route()),
            ("bike", "GetStations") | ("bike", "GetSingleStation") => {
                Some(Self::bike_stations())
            }
            ("parking", "ListParking") | ("parking", "DetailParking") => {
                Some(Self::parking_list())
            }
            _ => None,
        }
    }
}
