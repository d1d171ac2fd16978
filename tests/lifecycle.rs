use fb_test_users::{
    config::Config, startup::build_graph_client, CreateTestUser, Error, TestUserService,
};
use fb_test_users_test_utils::prelude::*;

fn config(test: &TestSetup) -> Config {
    Config {
        application_id: TEST_APPLICATION_ID.to_string(),
        access_token: TEST_APP_ACCESS_TOKEN.to_string(),
        graph_url: Some(test.url()),
        graph_version: None,
        request_timeout: None,
    }
}

/// Expect two users to be created, befriended, inspected and deleted
#[tokio::test]
async fn create_befriend_inspect_delete() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_mock(|setup| {
            setup
                .test_user()
                .create_test_user_endpoint_matching(
                    factory::mock_created_test_user("100001"),
                    vec![("name", "Alice Tester")],
                    1,
                )
        })
        .with_mock(|setup| {
            setup
                .test_user()
                .create_test_user_endpoint_matching(
                    factory::mock_created_test_user("100002"),
                    vec![("name", "Bob Tester")],
                    1,
                )
        })
        .with_friendship("100001", "100002")
        .with_profile("100002", factory::mock_profile("100002", "Bob Tester"))
        .with_deleted_test_user("100001")
        .with_deleted_test_user("100002")
        .build()
        .await;
    let config = config(&test);
    let graph = build_graph_client(&config)?;
    let service = TestUserService::new(&graph, &config.application_id);

    let alice = service
        .create(&CreateTestUser::new().name("Alice Tester"))
        .await?;
    let bob = service
        .create(&CreateTestUser::new().name("Bob Tester"))
        .await?;
    service.befriend(&alice, &bob).await?;
    let profile = service.me(&bob).await?;
    service.delete(&alice).await?;
    service.delete(&bob).await?;

    assert_eq!(alice.id, "100001");
    assert_eq!(bob.id, "100002");
    assert_eq!(profile.name.as_deref(), Some("Bob Tester"));
    test.assert_mocks();

    Ok(())
}
