//! Wire-format tests for the bike-share family.
//!
//! The bike convention is the outlier: credentials and the single
//! positional parameter travel in the URL path, the pass key is followed
//! by a literal `}`, and no body is sent at all.

use emtmadrid::{EmtClient, EmtConfig, RequestParams};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> EmtClient {
    let config = EmtConfig::default().with_bike_domain(server.uri());
    EmtClient::with_config("user1", "pass1", config).expect("Failed to build client")
}

#[tokio::test]
async fn test_station_list_travels_in_the_path() {
    let mock_server = MockServer::start().await;

    // The stray `}` after the pass key percent-encodes to %7D on the wire.
    Mock::given(method("GET"))
        .and(path("/bike/GetStations/user1/pass1%7D/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "0",
            "data": [{"id": 1, "name": "Puerta del Sol A"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let stations = client.bike().get_stations().await.unwrap();

    assert_eq!(stations["code"], "0");
}

#[tokio::test]
async fn test_station_id_is_appended_as_a_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bike/GetSingleStation/user1/pass1%7D/147"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "0", "data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.bike().get_single_station(147).await.unwrap();
}

#[tokio::test]
async fn test_non_numeric_parameter_collapses_to_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bike/GetSingleStation/user1/pass1%7D/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "0"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = RequestParams::new().with("idBase", "abc");
    client.bike().call("GET_SINGLE_STATION", params).await.unwrap();
}

#[tokio::test]
async fn test_bike_requests_send_no_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "0"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.bike().get_stations().await.unwrap();

    let requests = mock_server
        .received_requests()
        .await
        .expect("Requests were not recorded");
    assert!(requests[0].body.is_empty());
    assert!(requests[0].url.query().is_none());
}
