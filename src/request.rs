//! Assembled request value types.
//!
//! A dispatch call produces exactly one [`AssembledRequest`]: the fully
//! resolved method, target URL and optional payload, handed to the
//! transport and discarded once the call completes. Nothing here is
//! persisted or reused across calls.

use std::fmt;

use crate::params::RequestParams;

/// HTTP verb for an assembled request.
///
/// Fixed per service family; see
/// [`ServiceCategory::method`](crate::ServiceCategory::method).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    /// Used by the bike-share family only.
    Get,
    /// Used by every other family.
    Post,
}

impl RequestMethod {
    /// The verb as it appears on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved request, ready for the transport boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledRequest {
    /// The category's fixed verb.
    pub method: RequestMethod,
    /// Fully qualified target URL, exactly as the family's address
    /// convention produces it.
    pub target: String,
    /// Form payload; `None` for families whose credentials travel in the
    /// path (bike-share sends no body at all).
    pub payload: Option<RequestParams>,
}
