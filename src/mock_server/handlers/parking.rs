//! Handler for the parking family and its comma-suffixed addresses.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tokio::sync::RwLock;

use super::error_response;
use crate::mock_server::state::{MockState, RecordedRequest};

/// POST `/parking/{Fragment}/{idClient},{passKey}[,{key}...]`.
///
/// Credentials ride in the final path segment, comma-joined with the
/// parameter keys, and again in the form body. The path pair is what gets
/// validated; the body is recorded as received.
pub async fn parking_endpoint(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((endpoint, credentials)): Path<(String, String)>,
    Form(form): Form<BTreeMap<String, String>>,
) -> impl IntoResponse {
    let mut segments = credentials.split(',');
    let client_id = segments.next().unwrap_or_default().to_string();
    let pass_key = segments.next().unwrap_or_default().to_string();
    let path_params: Vec<String> = segments.map(str::to_string).collect();

    let mut state = state.write().await;
    if !state.credentials_accepted(&client_id, &pass_key) {
        return error_response(StatusCode::UNAUTHORIZED, "invalid credentials").into_response();
    }

    state.record(RecordedRequest {
        family: "parking".to_string(),
        fragment: endpoint.clone(),
        form,
        path_params,
    });

    match state.response_for("parking", &endpoint) {
        Some(document) => Json(document).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            &format!("no document for parking/{endpoint}"),
        )
        .into_response(),
    }
}
