//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring a mock Graph server before a
//! test runs. Endpoints are queued by the chained methods and registered during `build()`.

use mockito::Mock;
use serde_json::Value;

use crate::{
    constant::TEST_APP_ACCESS_TOKEN,
    fixtures::test_user::factory::{mock_created_test_user, user_access_token},
    TestSetup,
};

/// Builder for declarative test initialization.
///
/// Mocks created through the builder are stored on the resulting `TestSetup` so a single
/// `assert_mocks()` verifies all of them.
pub struct TestBuilder {
    mock_builders: Vec<Box<dyn FnOnce(&mut TestSetup) -> Mock>>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
        }
    }

    /// Expect one test user creation answering with a user of id `user_id`.
    pub fn with_created_test_user(self, user_id: &str) -> Self {
        let created = mock_created_test_user(user_id);
        self.with_mock(move |setup| setup.test_user().create_test_user_endpoint(created, 1))
    }

    /// Expect one listing request answering with `page`.
    pub fn with_test_user_page(self, page: Value) -> Self {
        self.with_mock(move |setup| setup.test_user().list_test_users_endpoint(page, 1))
    }

    /// Expect the full befriend exchange between two users that are not yet friends.
    pub fn with_friendship(self, user_id: &str, other_id: &str) -> Self {
        let (user_id, other_id) = (user_id.to_string(), other_id.to_string());
        let (check_user, check_other) = (user_id.clone(), other_id.clone());
        let (forward_from, forward_to) = (user_id.clone(), other_id.clone());

        self.with_mock(move |setup| {
            setup
                .test_user()
                .friendship_endpoint(&check_user, &check_other, false, 1)
        })
        .with_mock(move |setup| {
            setup
                .test_user()
                .friend_request_endpoint(&forward_from, &forward_to, 1)
        })
        .with_mock(move |setup| {
            setup
                .test_user()
                .friend_request_endpoint(&other_id, &user_id, 1)
        })
    }

    /// Expect one delete of `user_id` authorised by its own token.
    pub fn with_deleted_test_user(self, user_id: &str) -> Self {
        let user_id = user_id.to_string();
        self.with_mock(move |setup| {
            let token = user_access_token(&user_id);
            setup
                .test_user()
                .delete_test_user_endpoint(&user_id, &token, 1)
        })
    }

    /// Expect one delete of `user_id` authorised by the application token.
    pub fn with_deleted_test_user_by_app(self, user_id: &str) -> Self {
        let user_id = user_id.to_string();
        self.with_mock(move |setup| {
            setup
                .test_user()
                .delete_test_user_endpoint(&user_id, TEST_APP_ACCESS_TOKEN, 1)
        })
    }

    /// Expect one `GET me` from `user_id` answering with `profile`.
    pub fn with_profile(self, user_id: &str, profile: Value) -> Self {
        let user_id = user_id.to_string();
        self.with_mock(move |setup| setup.test_user().me_endpoint(&user_id, profile, 1))
    }

    /// Register an arbitrary endpoint not covered by the helper methods.
    pub fn with_mock<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut TestSetup) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Starts the mock server and registers every queued endpoint.
    pub async fn build(self) -> TestSetup {
        let mut setup = TestSetup::new().await;

        for builder in self.mock_builders {
            let mock = builder(&mut setup);
            setup.mocks.push(mock);
        }

        setup
    }
}
