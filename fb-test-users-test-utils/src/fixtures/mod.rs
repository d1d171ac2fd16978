//! Fixtures registering Graph API endpoints on the mock server.

pub mod test_user;
