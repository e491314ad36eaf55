//! In-process mock of the EMT Madrid endpoints for tests and demos.
//!
//! The server binds a random local port and answers the three address
//! conventions the dispatcher produces: the form-encoded `.php` routes of
//! the bus, geo and media families, the path-parameter bike route and the
//! comma-suffixed parking route. Responses come from a [`MockState`] that
//! tests can seed with their own documents; every accepted request is
//! recorded so tests can assert on what actually went over the wire.
//!
//! Enabled with the `test-server` feature:
//!
//! ```toml
//! [dependencies]
//! emtmadrid = { version = "0.1", features = ["test-server"] }
//! ```

pub mod fixtures;
pub mod handlers;
pub mod server;
pub mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::{MockState, RecordedRequest};
