//! Create, list, befriend, inspect and delete Facebook test users through the Graph API.
//!
//! ```no_run
//! use fb_test_users::{CreateTestUser, GraphClient, TestUserService};
//!
//! # async fn example() -> Result<(), fb_test_users::Error> {
//! let graph = GraphClient::builder()
//!     .access_token("1234567890|app_secret")
//!     .build()?;
//! let service = TestUserService::new(&graph, "1234567890");
//!
//! let alice = service.create(&CreateTestUser::new().name("Alice")).await?;
//! let bob = service.create(&CreateTestUser::new().name("Bob")).await?;
//! service.befriend(&alice, &bob).await?;
//!
//! service.delete(&alice).await?;
//! service.delete(&bob).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod model;
pub mod service;
pub mod startup;

mod util;

pub use error::Error;
pub use graph::{GraphClient, GraphConfig};
pub use model::{
    profile::Profile,
    test_user::{CreateTestUser, ListTestUsers, TestUser, TestUserPage},
};
pub use service::test_user::TestUserService;
