//! Environment-driven client construction.
//!
//! Kept in a dedicated test binary: the test mutates process environment
//! variables, and test threads within one binary share them.

use emtmadrid::{EmtClient, EmtError};

#[test]
fn test_from_env_requires_both_credential_variables() {
    std::env::remove_var("EMT_CLIENT_ID");
    std::env::remove_var("EMT_PASS_KEY");

    let missing_id = EmtClient::from_env().unwrap_err();
    assert!(matches!(missing_id, EmtError::ConfigMissing(_)));
    assert!(missing_id.to_string().contains("EMT_CLIENT_ID"));

    std::env::set_var("EMT_CLIENT_ID", "user1");
    let missing_key = EmtClient::from_env().unwrap_err();
    assert!(matches!(missing_key, EmtError::ConfigMissing(_)));
    assert!(missing_key.to_string().contains("EMT_PASS_KEY"));

    std::env::set_var("EMT_PASS_KEY", "pass1");
    assert!(EmtClient::from_env().is_ok());

    std::env::remove_var("EMT_CLIENT_ID");
    std::env::remove_var("EMT_PASS_KEY");
}
