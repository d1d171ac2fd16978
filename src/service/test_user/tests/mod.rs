use fb_test_users_test_utils::prelude::*;

use crate::{
    error::{graph::GraphError, Error},
    model::test_user::{CreateTestUser, ListTestUsers, TestUser},
    service::test_user::TestUserService,
    util::test::test_graph_client,
};

mod befriend;
mod create;

/// A user as returned by the listing, holding the mock token for `user_id`.
fn listed_user(user_id: &str) -> TestUser {
    TestUser {
        id: user_id.to_string(),
        access_token: Some(factory::user_access_token(user_id)),
        login_url: None,
        email: None,
        password: None,
    }
}
