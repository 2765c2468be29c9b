use std::fmt;

use mt_match_state::adapters::{Gettable, Insertable};
use mt_match_state_types::{DBUser, User};
use tracing::debug;

#[derive(Debug)]
pub enum CreateUserError {
    MissingUsername,
    UsernameTaken(DBUser),
    ExternalIdTaken(DBUser),
    Store(Box<dyn std::error::Error>),
}

impl fmt::Display for CreateUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateUserError::MissingUsername => write!(f, "a user needs a username"),
            CreateUserError::UsernameTaken(existing) => {
                write!(f, "username \"{}\" is already taken", existing.username)
            }
            CreateUserError::ExternalIdTaken(existing) => {
                write!(
                    f,
                    "an external login id is already bound to user \"{}\"",
                    existing.username
                )
            }
            CreateUserError::Store(err) => write!(f, "state error: {err}"),
        }
    }
}

impl std::error::Error for CreateUserError {}

/// Stores a new user after checking the unique columns (`username`,
/// `facebook_id`, `google_id`) against every existing record.
pub struct CreateUserCommand {
    user: User,
}

impl CreateUserCommand {
    pub fn new(user: User) -> Result<Self, CreateUserError> {
        if user.username.is_empty() {
            return Err(CreateUserError::MissingUsername);
        }

        Ok(Self { user })
    }

    pub fn execute<S>(&self, state: &S) -> Result<DBUser, CreateUserError>
    where
        S: Gettable<DBUser> + Insertable<User>,
    {
        for existing in state.all().map_err(CreateUserError::Store)? {
            if existing.username == self.user.username {
                return Err(CreateUserError::UsernameTaken(existing));
            }
            if external_id_clash(&self.user, &existing) {
                return Err(CreateUserError::ExternalIdTaken(existing));
            }
        }

        let uuid = state
            .insert(self.user.clone())
            .map_err(CreateUserError::Store)?;
        debug!("user {} created as {}", self.user.username, uuid);

        Ok(DBUser {
            uuid,
            username: self.user.username.clone(),
            email: self.user.email.clone(),
            picture: self.user.picture.clone(),
            join_date: self.user.join_date,
            is_connected: self.user.is_connected,
            friends: self.user.friends.clone(),
            facebook_id: self.user.facebook_id.clone(),
            google_id: self.user.google_id.clone(),
        })
    }
}

fn external_id_clash(user: &User, existing: &DBUser) -> bool {
    (user.facebook_id.is_some() && user.facebook_id == existing.facebook_id)
        || (user.google_id.is_some() && user.google_id == existing.google_id)
}
