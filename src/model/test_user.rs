use serde::{Deserialize, Serialize};

use crate::graph::Params;

/// A Facebook test user.
///
/// `email` and `password` are only returned when the user is created; users obtained from
/// the listing carry `None` for both. `access_token` is absent for users that have not
/// installed the application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestUser {
    pub id: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub login_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Parameters for creating a test user.
///
/// Unset fields are left out of the request so Graph applies its own defaults: a generated
/// name, no permissions, locale `en_US` and the application installed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateTestUser {
    pub name: Option<String>,
    pub permissions: Vec<String>,
    pub locale: Option<String>,
    pub installed: Option<bool>,
}

impl CreateTestUser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Adds one permission scope, e.g. `email` or `user_friends`.
    pub fn permission(mut self, permission: &str) -> Self {
        self.permissions.push(permission.to_string());
        self
    }

    pub fn permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions
            .extend(permissions.into_iter().map(Into::into));
        self
    }

    pub fn locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn installed(mut self, installed: bool) -> Self {
        self.installed = Some(installed);
        self
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert_opt("installed", self.installed);
        if !self.permissions.is_empty() {
            params.insert("permissions", &self.permissions);
        }
        params.insert_opt("name", self.name.as_ref());
        params.insert_opt("locale", self.locale.as_ref());
        params
    }
}

/// Parameters for listing test users.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListTestUsers {
    pub limit: Option<u32>,
    /// Cursor from a previous [`TestUserPage::after`].
    pub after: Option<String>,
}

impl ListTestUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn after(mut self, cursor: &str) -> Self {
        self.after = Some(cursor.to_string());
        self
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert_opt("limit", self.limit);
        params.insert_opt("after", self.after.as_ref());
        params
    }
}

/// One page of the test user listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestUserPage {
    pub users: Vec<TestUser>,
    /// Cursor for the next page, `None` on the last page.
    pub after: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TestUserListResponse {
    #[serde(default)]
    pub data: Vec<TestUser>,
    pub paging: Option<Paging>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Paging {
    pub cursors: Option<Cursors>,
    pub next: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Cursors {
    pub after: Option<String>,
}

impl From<TestUserListResponse> for TestUserPage {
    fn from(response: TestUserListResponse) -> Self {
        // Graph keeps returning cursors on the last page; only `next` signals more data.
        let after = response
            .paging
            .filter(|paging| paging.next.is_some())
            .and_then(|paging| paging.cursors)
            .and_then(|cursors| cursors.after);

        // Credentials are only handed out at creation.
        let users = response
            .data
            .into_iter()
            .map(|user| TestUser {
                email: None,
                password: None,
                ..user
            })
            .collect();

        Self { users, after }
    }
}

/// Body of `GET me/friends/{id}`.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct FriendList {
    #[serde(default)]
    pub data: Vec<FriendRef>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct FriendRef {
    pub id: String,
}
