use crate::TestSetup;

pub mod factory;
pub mod mockito;

impl TestSetup {
    pub fn test_user<'a>(&'a mut self) -> TestUserFixtures<'a> {
        TestUserFixtures { setup: self }
    }
}

pub struct TestUserFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
