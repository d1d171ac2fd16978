use fb_test_users_test_utils::prelude::*;

use crate::graph::{GraphClient, GraphConfig};

/// Graph client pointed at the test's mock server, authorised with the application token.
pub fn test_graph_client(test: &TestSetup) -> GraphClient {
    let config = GraphConfig::builder()
        .graph_url(&test.url())
        .user_agent(TEST_USER_AGENT)
        .build()
        .expect("Failed to build Graph client config");

    GraphClient::builder()
        .config(config)
        .access_token(TEST_APP_ACCESS_TOKEN)
        .build()
        .expect("Failed to build Graph client")
}
