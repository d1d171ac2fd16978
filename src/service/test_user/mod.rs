#[cfg(test)]
mod tests;

use std::future::Future;

use tracing::info;

use crate::{
    error::{graph::GraphError, Error},
    graph::{Confirmation, GraphClient, Params},
    model::{
        profile::Profile,
        test_user::{
            CreateTestUser, FriendList, ListTestUsers, TestUser, TestUserListResponse,
            TestUserPage,
        },
    },
};

/// Service for managing the test users of one Facebook application.
///
/// `graph` must be authorised with the application's access token; operations acting as a
/// particular test user derive a client from it with that user's token.
pub struct TestUserService<'a> {
    graph: &'a GraphClient,
    application_id: &'a str,
}

impl<'a> TestUserService<'a> {
    /// Creates a new instance of [`TestUserService`]
    pub fn new(graph: &'a GraphClient, application_id: &'a str) -> Self {
        Self {
            graph,
            application_id,
        }
    }

    fn test_users_path(&self) -> String {
        format!("{}/accounts/test-users", self.application_id)
    }

    /// Client authorised as `user`.
    fn user_client(&self, user: &TestUser) -> Result<GraphClient, Error> {
        let token = user
            .access_token
            .as_deref()
            .ok_or_else(|| GraphError::MissingAccessToken(user.id.clone()))?;

        Ok(self.graph.with_access_token(token))
    }

    /// Creates a new test user for the application.
    ///
    /// # Returns
    /// - `Ok(TestUser)` - The created user including its email and password
    /// - `Err(Error::GraphError)` - Graph rejected the request (bad app token, bad permission)
    /// - `Err(Error::ReqwestError)` - The request could not be sent
    pub async fn create(&self, params: &CreateTestUser) -> Result<TestUser, Error> {
        let user: TestUser = self
            .graph
            .post(&self.test_users_path(), &params.to_params())
            .await?;

        info!(user_id = %user.id, "Created test user");

        Ok(user)
    }

    /// Lists the application's existing test users.
    ///
    /// Only the first page is returned; use [`TestUserService::users_page`] to follow the
    /// cursor. Listed users never carry an email or password.
    pub async fn users(&self, params: &ListTestUsers) -> Result<Vec<TestUser>, Error> {
        Ok(self.users_page(params).await?.users)
    }

    /// Fetches one page of the test user listing together with the next-page cursor.
    pub async fn users_page(&self, params: &ListTestUsers) -> Result<TestUserPage, Error> {
        let response: TestUserListResponse = self
            .graph
            .get(&self.test_users_path(), &params.to_params())
            .await?;

        Ok(response.into())
    }

    /// Looks up the test user `user_id`, following listing pages until it is found.
    ///
    /// Useful when only an id is known, since the listing is the only place Graph hands
    /// out a test user's access token after creation.
    ///
    /// # Returns
    /// - `Ok(TestUser)` - The listed user, without email or password
    /// - `Err(Error::GraphError(GraphError::UnknownTestUser))` - No page lists `user_id`
    pub async fn find(&self, user_id: &str) -> Result<TestUser, Error> {
        let mut params = ListTestUsers::new();

        loop {
            let page = self.users_page(&params).await?;
            if let Some(user) = page.users.into_iter().find(|user| user.id == user_id) {
                return Ok(user);
            }

            match page.after {
                Some(after) => params.after = Some(after),
                None => return Err(GraphError::UnknownTestUser(user_id.to_string()).into()),
            }
        }
    }

    /// Deletes `user`, authorised by the user's own token.
    ///
    /// Users without a token (not installed) are deleted with the application token.
    pub async fn delete(&self, user: &TestUser) -> Result<(), Error> {
        match user.access_token.as_deref() {
            Some(token) => delete_user(&self.graph.with_access_token(token), &user.id).await,
            None => self.delete_by_id(&user.id).await,
        }
    }

    /// Deletes the test user `user_id`, authorised by the application token.
    pub async fn delete_by_id(&self, user_id: &str) -> Result<(), Error> {
        delete_user(self.graph, user_id).await
    }

    /// Makes `user` and `other` friends.
    ///
    /// Checks `user`'s friend list first and does nothing if `other` is already on it.
    /// Otherwise `user` sends a friend request to `other`, which `other` then confirms by
    /// sending one back. Both users need an access token; this is checked before any
    /// request is sent.
    pub async fn befriend(&self, user: &TestUser, other: &TestUser) -> Result<(), Error> {
        let user_graph = self.user_client(user)?;
        let other_graph = self.user_client(other)?;

        let friends: FriendList = user_graph
            .get(&format!("me/friends/{}", other.id), &Params::new())
            .await?;
        if friends
            .data
            .first()
            .is_some_and(|friend| friend.id == other.id)
        {
            info!(user_id = %user.id, other_id = %other.id, "Test users are already friends");
            return Ok(());
        }

        send_friend_request(&user_graph, &user.id, &other.id).await?;
        send_friend_request(&other_graph, &other.id, &user.id).await?;

        info!(user_id = %user.id, other_id = %other.id, "Befriended test users");

        Ok(())
    }

    /// Fetches the profile of `user` through `GET me` with its own token.
    pub async fn me(&self, user: &TestUser) -> Result<Profile, Error> {
        let graph = self.user_client(user)?;
        graph.get("me", &Params::new()).await
    }

    /// Creates a test user, hands a copy of it to `f`, then deletes it.
    ///
    /// The user is deleted whatever `f` returns; a failed delete is reported in place of
    /// `f`'s output.
    pub async fn with_test_user<F, Fut, T>(
        &self,
        params: &CreateTestUser,
        f: F,
    ) -> Result<T, Error>
    where
        F: FnOnce(TestUser) -> Fut,
        Fut: Future<Output = T>,
    {
        let user = self.create(params).await?;

        let output = f(user.clone()).await;

        self.delete(&user).await?;

        Ok(output)
    }
}

async fn delete_user(graph: &GraphClient, user_id: &str) -> Result<(), Error> {
    let confirmation: Confirmation = graph.delete(user_id, &Params::new()).await?;
    confirmation.ensure("delete", user_id)?;

    info!(user_id, "Deleted test user");

    Ok(())
}

async fn send_friend_request(graph: &GraphClient, from: &str, to: &str) -> Result<(), Error> {
    let path = format!("{}/friends/{}", from, to);

    let confirmation: Confirmation = graph.post(&path, &Params::new()).await?;
    confirmation.ensure("friend request", &path)?;

    Ok(())
}
