//! Test user service layer.
//!
//! Services map test user operations onto Graph API calls, choosing for each call whether
//! the application's token or the test user's own token authorises it.

pub mod test_user;
