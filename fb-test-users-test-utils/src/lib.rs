pub mod builder;
pub mod constant;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{TEST_APPLICATION_ID, TEST_APP_ACCESS_TOKEN, TEST_USER_AGENT},
        fixtures::test_user::factory,
        TestBuilder, TestSetup,
    };
}
