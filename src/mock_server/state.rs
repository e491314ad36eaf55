//! Shared state backing the mock server.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

/// One request the mock server accepted.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Family route: `bus`, `geo`, `media`, `bike` or `parking`.
    pub family: String,
    /// Path fragment, e.g. `GetCalendar`.
    pub fragment: String,
    /// Decoded form fields. Empty for the bike family, which sends no body.
    pub form: BTreeMap<String, String>,
    /// Extra path material: the bike parameter, or the comma segments
    /// appended after the parking credentials.
    pub path_params: Vec<String>,
}

/// Mutable server state.
///
/// Documents are keyed by `family/Fragment` (`"geo/GetArriveStop"`). A key
/// with no document makes the server answer 404, which the client surfaces
/// as [`EmtError::Status`](crate::EmtError::Status).
#[derive(Debug, Default)]
pub struct MockState {
    /// Canned response documents.
    pub responses: HashMap<String, Value>,
    /// When set, every request must carry exactly this `(idClient, passKey)`
    /// pair or the server answers 401.
    pub required_credentials: Option<(String, String)>,
    /// Accepted requests in arrival order.
    pub recorded: Vec<RecordedRequest>,
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the state for sharing with the router.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Seed one response document. `key` is `family/Fragment`.
    pub fn with_response(mut self, key: impl Into<String>, value: Value) -> Self {
        self.responses.insert(key.into(), value);
        self
    }

    /// Require requests to authenticate with this pair.
    pub fn with_required_credentials(
        mut self,
        client_id: impl Into<String>,
        pass_key: impl Into<String>,
    ) -> Self {
        self.required_credentials = Some((client_id.into(), pass_key.into()));
        self
    }

    /// Look up the canned document for `family/Fragment`.
    pub fn response_for(&self, family: &str, fragment: &str) -> Option<Value> {
        self.responses.get(&format!("{family}/{fragment}")).cloned()
    }

    /// True when `pair` satisfies the required credentials, or none are set.
    pub fn credentials_accepted(&self, client_id: &str, pass_key: &str) -> bool {
        match &self.required_credentials {
            Some((id, key)) => id == client_id && key == pass_key,
            None => true,
        }
    }

    pub fn record(&mut self, request: RecordedRequest) {
        self.recorded.push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_with_response_is_retrievable() {
        let state = MockState::new().with_response("bus/GetCalendar", json!({"errorCode": "0"}));

        let doc = state.response_for("bus", "GetCalendar").unwrap();
        assert_eq!(doc["errorCode"], "0");
        assert!(state.response_for("bus", "GetGroups").is_none());
    }

    #[test]
    fn test_credentials_gate() {
        let open = MockState::new();
        assert!(open.credentials_accepted("anyone", "anything"));

        let locked = MockState::new().with_required_credentials("user1", "pass1");
        assert!(locked.credentials_accepted("user1", "pass1"));
        assert!(!locked.credentials_accepted("user1", "wrong"));
    }

    #[test]
    fn test_recording_preserves_order() {
        let mut state = MockState::new();
        for fragment in ["GetCalendar", "GetGroups"] {
            state.record(RecordedRequest {
                family: "bus".into(),
                fragment: fragment.into(),
                form: BTreeMap::new(),
                path_params: Vec::new(),
            });
        }

        let fragments: Vec<&str> = state.recorded.iter().map(|r| r.fragment.as_str()).collect();
        assert_eq!(fragments, ["GetCalendar", "GetGroups"]);
    }
}
