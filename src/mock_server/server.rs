//! Mock EMT Madrid server.
//!
//! Provides an axum-based HTTP server that answers the wire conventions of
//! all five service families.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;
use crate::EmtConfig;

/// A mock EMT Madrid server for testing.
///
/// The server runs in the background on a random local port. Point a client
/// at it with [`MockServer::config`] and drive any facade against it.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// Every catalogued endpoint of every family gets a response document,
    /// so any facade call decodes. Use `url()` or `config()` to reach it.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly which documents exist.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// A configuration whose three domains all point at this server.
    ///
    /// The bus domain keeps its trailing slash so the bus, geo and media
    /// families concatenate onto it the same way they do in production.
    pub fn config(&self) -> EmtConfig {
        EmtConfig::default()
            .with_bus_domain(format!("{}/", self.url))
            .with_bike_domain(self.url.clone())
            .with_parking_domain(format!("{}/parking", self.url))
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with a document for every endpoint.
    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();
        for (key, document) in scenario.responses {
            state.responses.insert(key, document);
        }
        state
    }

    /// Create the axum router with all routes.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // Bike: GET with credentials and parameter in the path
            .route("/bike/:endpoint/:client/*rest", get(handlers::bike_endpoint))
            // Parking: POST with the comma-joined credential segment
            .route(
                "/parking/:endpoint/:credentials",
                post(handlers::parking_endpoint),
            )
            // Bus, geo and media: form-encoded .php endpoints
            .route("/:segment/:endpoint", post(handlers::proxy_endpoint))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::{EmtClient, EmtError, RequestParams};

    fn test_client(server: &MockServer) -> EmtClient {
        EmtClient::with_config("user1", "pass1", server.config())
            .expect("Failed to build client")
    }

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_bus_calendar_with_emt_client() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        let calendar = client
            .bus()
            .get_calendar("01/06/2018", "02/06/2018")
            .await
            .expect("Failed to fetch calendar");

        assert_eq!(calendar["errorCode"], "0");
        assert!(calendar["resultValues"].is_array());

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_injected_credentials_are_recorded() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        client
            .geo()
            .get_arrive_stop(RequestParams::new().with("idStop", 2443))
            .await
            .expect("Failed to fetch arrivals");

        let state = server.state();
        let state = state.read().await;
        let recorded = &state.recorded[0];
        assert_eq!(recorded.family, "geo");
        assert_eq!(recorded.fragment, "GetArriveStop");
        assert_eq!(recorded.form.get("idClient").map(String::as_str), Some("user1"));
        assert_eq!(recorded.form.get("passKey").map(String::as_str), Some("pass1"));
        assert_eq!(recorded.form.get("idStop").map(String::as_str), Some("2443"));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_bike_parameter_rides_the_path() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        let station = client
            .bike()
            .get_single_station(147)
            .await
            .expect("Failed to fetch station");
        assert!(station["data"].is_array());

        let state = server.state();
        let state = state.read().await;
        let recorded = &state.recorded[0];
        assert_eq!(recorded.family, "bike");
        assert_eq!(recorded.fragment, "GetSingleStation");
        assert_eq!(recorded.path_params, ["147"]);
        assert!(recorded.form.is_empty());

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_parking_appends_keys_not_values() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        client
            .parking()
            .list_parking("ES")
            .await
            .expect("Failed to list parkings");

        let state = server.state();
        let state = state.read().await;
        let recorded = &state.recorded[0];
        assert_eq!(recorded.family, "parking");
        assert_eq!(recorded.fragment, "ListParking");
        assert_eq!(recorded.path_params, ["language"]);
        assert_eq!(recorded.form.get("language").map(String::as_str), Some("ES"));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server_surfaces_status() {
        let server = MockServer::start_empty().await;
        let client = test_client(&server);

        let result = client.bus().get_groups().await;

        match result {
            Err(EmtError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected a status error, got {:?}", other),
        }

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_required_credentials_reject_mismatch() {
        let state = MockServer::default_state().with_required_credentials("user1", "pass1");
        let server = MockServer::with_state(state).await;
        let client = EmtClient::with_config("user1", "wrong", server.config())
            .expect("Failed to build client");

        let result = client.bike().get_stations().await;

        match result {
            Err(EmtError::Status { status, .. }) => assert_eq!(status, 401),
            other => panic!("expected a status error, got {:?}", other),
        }

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_custom_state_overrides_document() {
        let state =
            MockState::new().with_response("bike/GetStations", json!({"code": "0", "data": []}));
        let server = MockServer::with_state(state).await;
        let client = test_client(&server);

        let stations = client
            .bike()
            .get_stations()
            .await
            .expect("Failed to fetch stations");

        assert_eq!(stations["data"].as_array().map(Vec::len), Some(0));

        server.shutdown().await;
    }
}
