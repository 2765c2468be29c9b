use std::fmt;

use mt_match_state::adapters::Searchable;
use mt_match_state_types::{DBUser, UserFilter};
use tracing::debug;

#[derive(Debug)]
pub enum FindUserError {
    UserNotFound(String),
    Store(Box<dyn std::error::Error>),
}

impl fmt::Display for FindUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindUserError::UserNotFound(username) => {
                write!(f, "cannot find user \"{username}\"")
            }
            FindUserError::Store(err) => write!(f, "state error: {err}"),
        }
    }
}

impl std::error::Error for FindUserError {}

/// Looks a user up by username.
pub struct FindUserCommand {
    username: String,
}

impl FindUserCommand {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn execute<S>(&self, state: &S) -> Result<DBUser, FindUserError>
    where
        S: Searchable<DBUser, UserFilter>,
    {
        let mut filter = UserFilter::default();
        filter.username = Some(self.username.clone());

        let found = state
            .filter(filter)
            .map_err(FindUserError::Store)?
            .next()
            .ok_or_else(|| FindUserError::UserNotFound(self.username.clone()))?;
        debug!("user {} found as {}", self.username, found.uuid);

        Ok(found)
    }
}
