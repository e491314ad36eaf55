//! Handler for the bike-share family, which travels entirely in the path.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tokio::sync::RwLock;

use super::error_response;
use crate::mock_server::state::{MockState, RecordedRequest};

/// GET `/bike/{Fragment}/{idClient}/{passKey}}/{param}`.
///
/// The pass segment ends with a literal `}` on the wire; the wildcard tail
/// absorbs it along with the optional trailing parameter, since a plain
/// path capture cannot match the empty segment a parameterless call
/// leaves behind.
pub async fn bike_endpoint(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((endpoint, client_id, rest)): Path<(String, String, String)>,
) -> impl IntoResponse {
    let (pass_segment, param) = match rest.split_once('/') {
        Some((pass, param)) => (pass, param),
        None => (rest.as_str(), ""),
    };
    let Some(pass_key) = pass_segment.strip_suffix('}') else {
        return error_response(StatusCode::NOT_FOUND, "malformed pass segment").into_response();
    };

    let mut state = state.write().await;
    if !state.credentials_accepted(&client_id, pass_key) {
        return error_response(StatusCode::UNAUTHORIZED, "invalid credentials").into_response();
    }

    let path_params = if param.is_empty() {
        Vec::new()
    } else {
        vec![param.to_string()]
    };
    state.record(RecordedRequest {
        family: "bike".to_string(),
        fragment: endpoint.clone(),
        form: BTreeMap::new(),
        path_params,
    });

    match state.response_for("bike", &endpoint) {
        Some(document) => Json(document).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            &format!("no document for bike/{endpoint}"),
        )
        .into_response(),
    }
}
