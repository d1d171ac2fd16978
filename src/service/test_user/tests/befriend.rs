use mockito::Matcher;
use serde_json::json;

use super::*;

/// Expect both friend requests to be sent when users aren't friends yet
#[tokio::test]
async fn befriends_users() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_friendship("100001", "100002")
        .build()
        .await;
    let graph = test_graph_client(&test);

    let service = TestUserService::new(&graph, TEST_APPLICATION_ID);
    service
        .befriend(&listed_user("100001"), &listed_user("100002"))
        .await?;

    test.assert_mocks();

    Ok(())
}

/// Expect no friend requests when users are already friends
#[tokio::test]
async fn skips_existing_friendship() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let check = test
        .test_user()
        .friendship_endpoint("100001", "100002", true, 1);
    let forward = test
        .test_user()
        .friend_request_endpoint("100001", "100002", 0);
    let back = test
        .test_user()
        .friend_request_endpoint("100002", "100001", 0);
    let graph = test_graph_client(&test);

    let service = TestUserService::new(&graph, TEST_APPLICATION_ID);
    service
        .befriend(&listed_user("100001"), &listed_user("100002"))
        .await?;

    check.assert();
    forward.assert();
    back.assert();

    Ok(())
}

/// Expect Error before any request when either user lacks a token
#[tokio::test]
async fn fails_without_token() {
    let mut test = TestSetup::new().await;
    let check = test
        .test_user()
        .friendship_endpoint("100001", "100002", false, 0);
    let graph = test_graph_client(&test);

    let mut other = listed_user("100002");
    other.access_token = None;
    let service = TestUserService::new(&graph, TEST_APPLICATION_ID);
    let result = service.befriend(&listed_user("100001"), &other).await;

    match result {
        Err(Error::GraphError(GraphError::MissingAccessToken(id))) => assert_eq!(id, "100002"),
        other => panic!("expected missing token error, got {other:?}"),
    }
    check.assert();
}

/// Expect Error when the confirming friend request is rejected
#[tokio::test]
async fn fails_when_confirmation_rejected() {
    let mut test = TestSetup::new().await;
    let _check = test
        .test_user()
        .friendship_endpoint("100001", "100002", false, 1);
    let _forward = test
        .test_user()
        .friend_request_endpoint("100001", "100002", 1);
    let body = factory::mock_error("OAuthException", 520, "There was a problem with this request.");
    let back = test.test_user().error_endpoint(
        "POST",
        "/100002/friends/100001",
        400,
        &body.to_string(),
        1,
    );
    let graph = test_graph_client(&test);

    let service = TestUserService::new(&graph, TEST_APPLICATION_ID);
    let result = service
        .befriend(&listed_user("100001"), &listed_user("100002"))
        .await;

    assert!(matches!(
        result,
        Err(Error::GraphError(GraphError::Api { code: Some(520), .. }))
    ));
    back.assert();
}

/// Expect friend requests to be sent when the check returns no `data` array
#[tokio::test]
async fn befriends_when_data_absent() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let check = test
        .test_user()
        .friendship_endpoint_with_body("100001", "100002", json!({}), 1);
    let forward = test
        .test_user()
        .friend_request_endpoint("100001", "100002", 1);
    let back = test
        .test_user()
        .friend_request_endpoint("100002", "100001", 1);
    let graph = test_graph_client(&test);

    let service = TestUserService::new(&graph, TEST_APPLICATION_ID);
    service
        .befriend(&listed_user("100001"), &listed_user("100002"))
        .await?;

    check.assert();
    forward.assert();
    back.assert();

    Ok(())
}

/// Expect friend requests to be sent when the check lists a different user
#[tokio::test]
async fn befriends_when_other_friend_listed() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let check = test.test_user().friendship_endpoint_with_body(
        "100001",
        "100002",
        json!({ "data": [{ "id": "100009", "name": "Someone Else" }] }),
        1,
    );
    let forward = test
        .test_user()
        .friend_request_endpoint("100001", "100002", 1);
    let back = test
        .test_user()
        .friend_request_endpoint("100002", "100001", 1);
    let graph = test_graph_client(&test);

    let service = TestUserService::new(&graph, TEST_APPLICATION_ID);
    service
        .befriend(&listed_user("100001"), &listed_user("100002"))
        .await?;

    check.assert();
    forward.assert();
    back.assert();

    Ok(())
}

/// Expect Error and no confirming request when the first friend request answers `false`
#[tokio::test]
async fn fails_when_friend_request_answers_false() {
    let mut test = TestSetup::new().await;
    let check = test
        .test_user()
        .friendship_endpoint("100001", "100002", false, 1);
    let forward = test
        .server
        .mock("POST", "/100001/friends/100002")
        .match_body(Matcher::UrlEncoded(
            "access_token".into(),
            factory::user_access_token("100001"),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("false")
        .expect(1)
        .create();
    let back = test
        .test_user()
        .friend_request_endpoint("100002", "100001", 0);
    let graph = test_graph_client(&test);

    let service = TestUserService::new(&graph, TEST_APPLICATION_ID);
    let result = service
        .befriend(&listed_user("100001"), &listed_user("100002"))
        .await;

    match result {
        Err(Error::GraphError(GraphError::OperationFailed { operation, path })) => {
            assert_eq!(operation, "friend request");
            assert_eq!(path, "100001/friends/100002");
        }
        other => panic!("expected failed friend request, got {other:?}"),
    }
    check.assert();
    forward.assert();
    back.assert();
}
