pub mod create_match;
pub mod create_user;
pub mod find_user;
pub mod set_connected;

pub use create_match::{CreateMatchCommand, CreateMatchError};
pub use create_user::{CreateUserCommand, CreateUserError};
pub use find_user::{FindUserCommand, FindUserError};
pub use set_connected::{SetUserConnectedCommand, SetUserConnectedError};

#[cfg(test)]
pub(crate) mod test_support;
