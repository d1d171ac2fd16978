//! Graph HTTP mock endpoint creation utilities.
//!
//! Each method registers a mock on the test server that answers like the corresponding
//! Graph API endpoint and only matches requests carrying the expected access token. The
//! returned `Mock` can verify it was called the expected number of times.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{
    constant::{TEST_APPLICATION_ID, TEST_APP_ACCESS_TOKEN},
    fixtures::test_user::{factory::user_access_token, TestUserFixtures},
};

impl<'a> TestUserFixtures<'a> {
    /// Create a mock HTTP endpoint for test user creation.
    ///
    /// Sets up a mock POST endpoint at `/{app_id}/accounts/test-users` that requires the
    /// application access token in the form body and returns `created_user`.
    ///
    /// # Arguments
    /// - `created_user` - JSON body to return, see `factory::mock_created_test_user`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_test_user_endpoint(
        &mut self,
        created_user: Value,
        expected_requests: usize,
    ) -> Mock {
        self.create_test_user_endpoint_matching(created_user, Vec::new(), expected_requests)
    }

    /// Same as `create_test_user_endpoint` but additionally requires each `(key, value)`
    /// pair to be present in the form body.
    pub fn create_test_user_endpoint_matching(
        &mut self,
        created_user: Value,
        params: Vec<(&str, &str)>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/{}/accounts/test-users", TEST_APPLICATION_ID);

        let mut matchers = vec![Matcher::UrlEncoded(
            "access_token".to_string(),
            TEST_APP_ACCESS_TOKEN.to_string(),
        )];
        matchers.extend(
            params
                .into_iter()
                .map(|(key, value)| Matcher::UrlEncoded(key.to_string(), value.to_string())),
        );

        self.setup
            .server
            .mock("POST", url.as_str())
            .match_body(Matcher::AllOf(matchers))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(created_user.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for listing test users.
    ///
    /// Sets up a mock GET endpoint at `/{app_id}/accounts/test-users` that requires the
    /// application access token in the query string and returns `page`.
    pub fn list_test_users_endpoint(&mut self, page: Value, expected_requests: usize) -> Mock {
        let url = format!("/{}/accounts/test-users", TEST_APPLICATION_ID);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_query(Matcher::UrlEncoded(
                "access_token".to_string(),
                TEST_APP_ACCESS_TOKEN.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for the friendship check made by `user_id`.
    ///
    /// Sets up a mock GET endpoint at `/me/friends/{other_id}` authorised by `user_id`'s
    /// token. When `already_friends` is set the response lists `other_id`, otherwise the
    /// `data` array is empty.
    pub fn friendship_endpoint(
        &mut self,
        user_id: &str,
        other_id: &str,
        already_friends: bool,
        expected_requests: usize,
    ) -> Mock {
        let body = if already_friends {
            json!({ "data": [{ "id": other_id, "name": "Open Graph Test User" }] })
        } else {
            json!({ "data": [] })
        };

        self.friendship_endpoint_with_body(user_id, other_id, body, expected_requests)
    }

    /// Same as `friendship_endpoint` but answering with an arbitrary `body`, e.g. one
    /// without a `data` array or listing a different user.
    pub fn friendship_endpoint_with_body(
        &mut self,
        user_id: &str,
        other_id: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/me/friends/{}", other_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_query(Matcher::UrlEncoded(
                "access_token".to_string(),
                user_access_token(user_id),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for a friend request from `from_id` to `to_id`.
    ///
    /// Sets up a mock POST endpoint at `/{from_id}/friends/{to_id}` authorised by
    /// `from_id`'s token that answers `true`.
    pub fn friend_request_endpoint(
        &mut self,
        from_id: &str,
        to_id: &str,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/{}/friends/{}", from_id, to_id);

        self.setup
            .server
            .mock("POST", url.as_str())
            .match_body(Matcher::UrlEncoded(
                "access_token".to_string(),
                user_access_token(from_id),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("true")
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint deleting `user_id` with the given access token.
    ///
    /// Answers `{"success": true}` as current Graph versions do.
    pub fn delete_test_user_endpoint(
        &mut self,
        user_id: &str,
        access_token: &str,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/{}", user_id);

        self.setup
            .server
            .mock("DELETE", url.as_str())
            .match_query(Matcher::UrlEncoded(
                "access_token".to_string(),
                access_token.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "success": true }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for `GET me` authorised by `user_id`'s token.
    pub fn me_endpoint(&mut self, user_id: &str, profile: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/me")
            .match_query(Matcher::UrlEncoded(
                "access_token".to_string(),
                user_access_token(user_id),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(profile.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint that returns an error status code with `body`.
    ///
    /// Useful for testing how Graph error envelopes and unexpected bodies surface. Any
    /// query string is accepted, so it answers whichever token the request carries.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match
    /// - `path` - Request path to match, e.g. `/me`
    /// - `status_code` - HTTP status code to return (e.g., 400, 500)
    /// - `body` - Raw body, usually `factory::mock_error(..).to_string()`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status_code: usize,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status_code)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
