use super::*;

/// Expect Ok with email & password when Graph creates the user
#[tokio::test]
async fn creates_test_user() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_created_test_user("100001")
        .build()
        .await;
    let graph = test_graph_client(&test);

    let service = TestUserService::new(&graph, TEST_APPLICATION_ID);
    let user = service.create(&CreateTestUser::new()).await?;

    assert_eq!(user.id, "100001");
    assert_eq!(
        user.access_token,
        Some(factory::user_access_token("100001"))
    );
    assert!(user.email.is_some());
    assert!(user.password.is_some());
    test.assert_mocks();

    Ok(())
}

/// Expect creation parameters to be sent form encoded
#[tokio::test]
async fn sends_creation_parameters() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let endpoint = test.test_user().create_test_user_endpoint_matching(
        factory::mock_created_test_user("100002"),
        vec![
            ("name", "Alice Tester"),
            ("permissions", "email,user_friends"),
            ("locale", "en_GB"),
            ("installed", "true"),
        ],
        1,
    );
    let graph = test_graph_client(&test);

    let params = CreateTestUser::new()
        .name("Alice Tester")
        .permission("email")
        .permission("user_friends")
        .locale("en_GB")
        .installed(true);
    let service = TestUserService::new(&graph, TEST_APPLICATION_ID);
    let result = service.create(&params).await;

    assert!(result.is_ok());
    endpoint.assert();

    Ok(())
}

/// Expect Error when the application token is rejected
#[tokio::test]
async fn fails_with_invalid_app_token() {
    let mut test = TestSetup::new().await;
    let path = format!("/{}/accounts/test-users", TEST_APPLICATION_ID);
    let body = factory::mock_error("OAuthException", 190, "Invalid OAuth access token.");
    let endpoint = test
        .test_user()
        .error_endpoint("POST", &path, 400, &body.to_string(), 1);
    let graph = test_graph_client(&test);

    let service = TestUserService::new(&graph, TEST_APPLICATION_ID);
    let result = service.create(&CreateTestUser::new()).await;

    match result {
        Err(Error::GraphError(err)) => assert!(err.is_oauth()),
        other => panic!("expected OAuth error, got {other:?}"),
    }
    endpoint.assert();
}
