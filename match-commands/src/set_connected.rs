use std::fmt;

use mt_match_state::adapters::{Gettable, Updateable};
use mt_match_state_types::{DBUser, User, UserUpdater};
use tracing::debug;

#[derive(Debug)]
pub enum SetUserConnectedError {
    UserNotFound(String),
    Store(Box<dyn std::error::Error>),
}

impl fmt::Display for SetUserConnectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetUserConnectedError::UserNotFound(uuid) => {
                write!(f, "cannot find user \"{uuid}\"")
            }
            SetUserConnectedError::Store(err) => write!(f, "state error: {err}"),
        }
    }
}

impl std::error::Error for SetUserConnectedError {}

/// Flips the connected flag of a stored user.
pub struct SetUserConnectedCommand {
    uuid: String,
    connected: bool,
}

impl SetUserConnectedCommand {
    pub fn new(uuid: impl Into<String>, connected: bool) -> Self {
        Self {
            uuid: uuid.into(),
            connected,
        }
    }

    pub fn execute<S>(&self, state: &S) -> Result<(), SetUserConnectedError>
    where
        S: Gettable<DBUser> + Updateable<User, UserUpdater>,
    {
        state
            .get(&self.uuid)
            .map_err(SetUserConnectedError::Store)?
            .ok_or_else(|| SetUserConnectedError::UserNotFound(self.uuid.clone()))?;

        let mut change = UserUpdater::default();
        change.is_connected = Some(self.connected);
        state
            .update(&self.uuid, change)
            .map_err(SetUserConnectedError::Store)?;

        debug!(
            "user {} marked as {}",
            self.uuid,
            if self.connected {
                "connected"
            } else {
                "disconnected"
            }
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{db_user, MemoryState};

    #[test]
    fn flips_the_connected_flag() {
        let state = MemoryState::default().with_user(db_user("1:users", "anna"));

        SetUserConnectedCommand::new("1:users", true)
            .execute(&state)
            .unwrap();
        assert!(state.users.borrow().get("1:users").unwrap().is_connected);

        SetUserConnectedCommand::new("1:users", false)
            .execute(&state)
            .unwrap();
        assert!(!state.users.borrow().get("1:users").unwrap().is_connected);
    }

    #[test]
    fn reports_an_unknown_user() {
        let state = MemoryState::default();

        match SetUserConnectedCommand::new("9:users", true).execute(&state) {
            Err(SetUserConnectedError::UserNotFound(uuid)) => assert_eq!(uuid, "9:users"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
