//! JSON factories shaped like Graph API test user responses.

use serde_json::{json, Value};

use crate::constant::TEST_APPLICATION_ID;

/// Deterministic access token for the mock test user `user_id`.
pub fn user_access_token(user_id: &str) -> String {
    format!("user_token_{}", user_id)
}

/// Body of a successful `POST {app}/accounts/test-users`.
pub fn mock_created_test_user(user_id: &str) -> Value {
    json!({
        "id": user_id,
        "access_token": user_access_token(user_id),
        "login_url": mock_login_url(user_id),
        "email": format!("test_user_{}@tfbnw.net", user_id),
        "password": "1234567890",
    })
}

/// One entry of the `GET {app}/accounts/test-users` listing.
pub fn mock_listed_test_user(user_id: &str) -> Value {
    json!({
        "id": user_id,
        "access_token": user_access_token(user_id),
        "login_url": mock_login_url(user_id),
    })
}

/// Listing entry for a user that has not installed the app, so Graph omits the token.
pub fn mock_listed_test_user_without_token(user_id: &str) -> Value {
    json!({
        "id": user_id,
        "login_url": mock_login_url(user_id),
    })
}

/// A listing page; `after` becomes the next-page cursor when given.
pub fn mock_test_user_page(users: Vec<Value>, after: Option<&str>) -> Value {
    match after {
        Some(after) => json!({
            "data": users,
            "paging": {
                "cursors": { "before": "QVFIUmJ", "after": after },
                "next": format!(
                    "https://graph.facebook.com/{}/accounts/test-users?after={}",
                    TEST_APPLICATION_ID, after
                ),
            },
        }),
        None => json!({ "data": users }),
    }
}

/// Body of `GET me` for a test user.
pub fn mock_profile(user_id: &str, name: &str) -> Value {
    json!({
        "id": user_id,
        "name": name,
        "email": format!("test_user_{}@tfbnw.net", user_id),
        "first_name": name.split(' ').next().unwrap_or(name),
    })
}

/// A Graph error envelope.
pub fn mock_error(kind: &str, code: i64, message: &str) -> Value {
    json!({
        "error": {
            "message": message,
            "type": kind,
            "code": code,
            "fbtrace_id": "A1b2C3d4E5f",
        }
    })
}

fn mock_login_url(user_id: &str) -> String {
    format!(
        "https://developers.facebook.com/checkpoint/test-user-login/{}/",
        user_id
    )
}
