//! Handler for the form-posting families: bus, geo and media.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tokio::sync::RwLock;

use super::error_response;
use crate::mock_server::state::{MockState, RecordedRequest};

/// POST `/{segment}/{Fragment}.php`.
///
/// Credentials arrive inside the form body as `idClient` and `passKey`,
/// exactly where the dispatcher injects them.
pub async fn proxy_endpoint(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((segment, endpoint)): Path<(String, String)>,
    Form(form): Form<BTreeMap<String, String>>,
) -> impl IntoResponse {
    if !matches!(segment.as_str(), "bus" | "geo" | "media") {
        return error_response(StatusCode::NOT_FOUND, "unknown service family").into_response();
    }
    let Some(fragment) = endpoint.strip_suffix(".php") else {
        return error_response(StatusCode::NOT_FOUND, "expected a .php endpoint").into_response();
    };

    let client_id = form.get("idClient").cloned().unwrap_or_default();
    let pass_key = form.get("passKey").cloned().unwrap_or_default();

    let mut state = state.write().await;
    if !state.credentials_accepted(&client_id, &pass_key) {
        return error_response(StatusCode::UNAUTHORIZED, "invalid credentials").into_response();
    }

    state.record(RecordedRequest {
        family: segment.clone(),
        fragment: fragment.to_string(),
        form,
        path_params: Vec::new(),
    });

    match state.response_for(&segment, fragment) {
        Some(document) => Json(document).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            &format!("no document for {segment}/{fragment}"),
        )
        .into_response(),
    }
}
