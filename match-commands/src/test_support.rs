use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::SystemTime;

use mt_match_state::adapters::redis::RedisFilter;
use mt_match_state::adapters::{Gettable, Insertable, Searchable, Updateable};
use mt_match_state_types::{DBSeries, DBUser, Match, MatchPlayer, User, UserFilter, UserUpdater};

/// In-memory stand-in for the redis adapter, implementing the same
/// store traits the commands are generic over.
#[derive(Default)]
pub(crate) struct MemoryState {
    pub series: RefCell<HashMap<String, DBSeries>>,
    pub matches: RefCell<HashMap<String, Match>>,
    pub users: RefCell<HashMap<String, DBUser>>,
    pub fail: Cell<bool>,
    next_id: Cell<u64>,
}

impl MemoryState {
    fn next_key(&self, collection: &str) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("{id}:{collection}")
    }

    fn check(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.fail.get() {
            return Err("connection refused".into());
        }
        Ok(())
    }

    pub fn with_series(self, uuid: &str, players: &[&str]) -> Self {
        self.series.borrow_mut().insert(
            uuid.to_owned(),
            DBSeries {
                uuid: uuid.to_owned(),
                players: players.iter().map(|id| id.to_string()).collect(),
            },
        );
        self
    }

    pub fn with_user(self, user: DBUser) -> Self {
        self.users.borrow_mut().insert(user.uuid.clone(), user);
        self
    }
}

impl Gettable<DBSeries> for MemoryState {
    fn get(&self, uuid: &str) -> Result<Option<DBSeries>, Box<dyn std::error::Error>> {
        self.check()?;
        Ok(self.series.borrow().get(uuid).cloned())
    }

    fn all(&self) -> Result<impl Iterator<Item = DBSeries>, Box<dyn std::error::Error>> {
        self.check()?;
        Ok(self
            .series
            .borrow()
            .values()
            .cloned()
            .collect::<Vec<_>>()
            .into_iter())
    }
}

impl Insertable<Match> for MemoryState {
    fn insert(&self, data: Match) -> Result<String, Box<dyn std::error::Error>> {
        self.check()?;
        let key = self.next_key("matches");
        self.matches.borrow_mut().insert(key.clone(), data);
        Ok(key)
    }
}

impl Gettable<DBUser> for MemoryState {
    fn get(&self, uuid: &str) -> Result<Option<DBUser>, Box<dyn std::error::Error>> {
        self.check()?;
        Ok(self.users.borrow().get(uuid).cloned())
    }

    fn all(&self) -> Result<impl Iterator<Item = DBUser>, Box<dyn std::error::Error>> {
        self.check()?;
        Ok(self
            .users
            .borrow()
            .values()
            .cloned()
            .collect::<Vec<_>>()
            .into_iter())
    }
}

impl Insertable<User> for MemoryState {
    fn insert(&self, data: User) -> Result<String, Box<dyn std::error::Error>> {
        self.check()?;
        let key = self.next_key("users");
        self.users.borrow_mut().insert(
            key.clone(),
            DBUser {
                uuid: key.clone(),
                username: data.username,
                email: data.email,
                picture: data.picture,
                join_date: data.join_date,
                is_connected: data.is_connected,
                friends: data.friends,
                facebook_id: data.facebook_id,
                google_id: data.google_id,
            },
        );
        Ok(key)
    }
}

impl Searchable<DBUser, UserFilter> for MemoryState {
    fn filter(
        &self,
        filter: UserFilter,
    ) -> Result<impl Iterator<Item = DBUser>, Box<dyn std::error::Error>> {
        self.check()?;
        let mut found = self
            .users
            .borrow()
            .values()
            .filter(|user| filter.is_ok(user))
            .cloned()
            .collect::<Vec<_>>();
        found.sort_by(|a, b| a.uuid.cmp(&b.uuid));
        Ok(found.into_iter())
    }
}

impl Updateable<User, UserUpdater> for MemoryState {
    fn update(&self, uuid: &str, change: UserUpdater) -> Result<(), Box<dyn std::error::Error>> {
        self.check()?;
        let mut users = self.users.borrow_mut();
        let user = users.get_mut(uuid).ok_or("no such user")?;
        if let Some(username) = change.username {
            user.username = username;
        }
        if let Some(connected) = change.is_connected {
            user.is_connected = connected;
        }
        if let Some(friends) = change.friends {
            user.friends = friends;
        }
        Ok(())
    }
}

pub(crate) fn players(user_ids: &[&str]) -> Vec<MatchPlayer> {
    user_ids
        .iter()
        .map(|id| MatchPlayer {
            user_id: id.to_string(),
        })
        .collect()
}

pub(crate) fn user(username: &str) -> User {
    User {
        username: username.to_owned(),
        email: None,
        picture: None,
        join_date: SystemTime::now(),
        is_connected: false,
        friends: Vec::new(),
        facebook_id: None,
        google_id: None,
    }
}

pub(crate) fn db_user(uuid: &str, username: &str) -> DBUser {
    DBUser {
        uuid: uuid.to_owned(),
        username: username.to_owned(),
        email: None,
        picture: None,
        join_date: SystemTime::now(),
        is_connected: false,
        friends: Vec::new(),
        facebook_id: None,
        google_id: None,
    }
}
