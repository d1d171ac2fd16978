//! Data objects exchanged with the Graph API.

pub mod profile;
pub mod test_user;
