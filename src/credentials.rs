//! Client credentials for the EMT OpenData services.

use std::fmt;

/// The client identifier / pass key pair EMT issues to a consumer.
///
/// Immutable once a service instance is constructed. Every facade owns its
/// own copy; credentials are never shared across service families.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    pass_key: String,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(client_id: impl Into<String>, pass_key: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            pass_key: pass_key.into(),
        }
    }

    /// The client identifier.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The pass key.
    #[must_use]
    pub fn pass_key(&self) -> &str {
        &self.pass_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("pass_key", &"[REDACTED]")
            .finish()
    }
}
