//! Test configuration constants for Graph client setup.
//!
//! These values are not real credentials but placeholder values for testing purposes.

/// User agent string sent by test Graph clients.
pub static TEST_USER_AGENT: &str = "fb-test-users-tests/1.0 (contact@example.com)";

/// Mock Facebook application ID.
pub static TEST_APPLICATION_ID: &str = "1234567890";

/// Mock application access token, in the `{app_id}|{app_secret}` form.
pub static TEST_APP_ACCESS_TOKEN: &str = "1234567890|app_secret";
