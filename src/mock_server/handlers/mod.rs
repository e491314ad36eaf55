//! Route handlers, one module per address convention.

pub mod bike;
pub mod parking;
pub mod proxy;

pub use bike::*;
pub use parking::*;
pub use proxy::*;

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// Error body in the upstream shape: a `Description` field the client's
/// error extraction reads first.
pub(crate) fn error_response(status: StatusCode, description: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "Description": description })))
}
