//! Request assembly and dispatch.
//!
//! One [`Dispatcher`] serves one service facade. A call resolves the
//! logical endpoint id through the family's table, builds the target URL
//! with the family's address convention, builds the payload with its
//! payload convention, and executes the result over the shared transport.
//!
//! The three address conventions, byte-for-byte:
//!
//! * bus / geo / media: `{bus_domain}{segment}/{fragment}.php`, POST with
//!   a credential-injected form body;
//! * bike: `{bike_domain}/bike/{fragment}/{id}/{key}}/{param}`, GET with
//!   no body (note the literal `}` after the key);
//! * parking: `{parking_domain}/{fragment}/{id},{key}` with one extra
//!   comma segment per parameter, POST with the same form body as bus.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::category::ServiceCategory;
use crate::config::{EmtConfig, ParkingSegments};
use crate::credentials::Credentials;
use crate::endpoints;
use crate::error::{EmtError, Result};
use crate::params::{ParamValue, RequestParams};
use crate::request::AssembledRequest;
use crate::transport::Transport;

/// Assembles and executes requests for one service family.
///
/// Owns its credential pair; the configuration and transport are shared
/// across every dispatcher the client hands out.
#[derive(Clone)]
pub struct Dispatcher {
    category: ServiceCategory,
    credentials: Credentials,
    config: Arc<EmtConfig>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("category", &self.category)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Create a dispatcher for `category`.
    pub fn new(
        category: ServiceCategory,
        credentials: Credentials,
        config: Arc<EmtConfig>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            category,
            credentials,
            config,
            transport,
        }
    }

    /// The family this dispatcher serves.
    #[must_use]
    pub fn category(&self) -> ServiceCategory {
        self.category
    }

    /// Resolve an endpoint id and build the request without executing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmtError::UnknownEndpoint`] when the id is not in this
    /// family's table.
    pub fn assemble(&self, endpoint_id: &str, params: &RequestParams) -> Result<AssembledRequest> {
        let fragment = endpoints::table_for(self.category)
            .resolve(endpoint_id)
            .ok_or_else(|| EmtError::UnknownEndpoint {
                category: self.category,
                id: endpoint_id.to_string(),
            })?;

        Ok(AssembledRequest {
            method: self.category.method(),
            target: self.build_target(fragment, params),
            payload: self.build_payload(params),
        })
    }

    /// Assemble, execute and decode one request.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint id is unknown, the transport
    /// fails, the remote answers a non-success status, or the body is not
    /// valid JSON.
    #[tracing::instrument(skip(self, params), fields(category = %self.category))]
    pub async fn dispatch(&self, endpoint_id: &str, params: RequestParams) -> Result<Value> {
        let request = self.assemble(endpoint_id, &params)?;
        let body = self.transport.execute(&request).await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }

    /// Apply the family's address convention.
    fn build_target(&self, fragment: &str, params: &RequestParams) -> String {
        let domain = self.config.domain_for(self.category);
        match self.category {
            ServiceCategory::Bus | ServiceCategory::Geo | ServiceCategory::Multimedia => {
                // The shared domain root keeps its trailing slash.
                let segment = self.category.path_segment().unwrap_or_default();
                format!("{domain}{segment}/{fragment}.php")
            }
            ServiceCategory::Bike => {
                let segment = self.category.path_segment().unwrap_or_default();
                let client = self.credentials.client_id();
                let pass = self.credentials.pass_key();
                // Exactly one positional parameter; non-numeric values
                // collapse to an empty segment.
                let param = params
                    .first_value()
                    .filter(|value| value.is_numeric())
                    .map(ParamValue::to_segment)
                    .unwrap_or_default();
                // The escaped brace is deliberate: a literal `}` follows
                // the pass key on the wire.
                format!("{domain}/{segment}/{fragment}/{client}/{pass}}}/{param}")
            }
            ServiceCategory::Parking => {
                let client = self.credentials.client_id();
                let pass = self.credentials.pass_key();
                let mut target = format!("{domain}/{fragment}/{client},{pass}");
                for (key, value) in params.iter() {
                    target.push(',');
                    match self.config.parking_segments {
                        ParkingSegments::Keys => target.push_str(key),
                        ParkingSegments::Values => target.push_str(&value.to_segment()),
                    }
                }
                target
            }
        }
    }

    /// Apply the family's payload convention.
    fn build_payload(&self, params: &RequestParams) -> Option<RequestParams> {
        match self.category {
            // Bike requests carry no body at all.
            ServiceCategory::Bike => None,
            _ => {
                let mut payload = params.clone();
                // Credentials are written last, so a caller-supplied
                // idClient or passKey never reaches the wire.
                payload.insert("idClient", self.credentials.client_id());
                payload.insert("passKey", self.credentials.pass_key());
                Some(payload)
            }
        }
    }
}
