use std::time::SystemTime;

use mt_redisadapter_derive::{
    RedisIdentifiable, RedisInsertWriter, RedisOutputReader, RedisUpdater,
};
use serde::Deserialize;

#[cfg(feature = "redis")]
use mt_match_state::adapters::redis::RedisFilter;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[derive(RedisInsertWriter, RedisIdentifiable)]
#[name("series")]
pub struct Series {
    pub players: Vec<String>,
}

#[derive(Debug, Clone)]
#[derive(RedisOutputReader, RedisIdentifiable)]
#[name("series")]
pub struct DBSeries {
    #[uuid]
    pub uuid: String,
    pub players: Vec<String>,
}

impl DBSeries {
    /// Checks whether every given user id belongs to this series.
    #[inline]
    pub fn has_players(&self, user_ids: &[String]) -> bool {
        user_ids.iter().all(|id| self.players.contains(id))
    }
}

impl PartialEq for DBSeries {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[derive(RedisInsertWriter, RedisOutputReader)]
pub struct MatchPlayer {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[derive(RedisInsertWriter, RedisIdentifiable)]
#[name("matches")]
pub struct Match {
    pub series_id: String,
    pub players: Vec<MatchPlayer>,
}

#[derive(Debug, Clone)]
#[derive(RedisOutputReader, RedisIdentifiable)]
#[name("matches")]
pub struct DBMatch {
    #[uuid]
    pub uuid: String,
    pub series_id: String,
    pub players: Vec<MatchPlayer>,
}

impl PartialEq for DBMatch {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[derive(RedisInsertWriter, RedisIdentifiable)]
#[name("users")]
pub struct User {
    pub username: String,
    pub email: Option<String>,
    pub picture: Option<String>,
    pub join_date: SystemTime,
    pub is_connected: bool,
    pub friends: Vec<String>,
    pub facebook_id: Option<String>,
    pub google_id: Option<String>,
}

#[derive(Debug, Clone)]
#[derive(RedisOutputReader, RedisIdentifiable)]
#[name("users")]
pub struct DBUser {
    #[uuid]
    pub uuid: String,
    pub username: String,
    pub email: Option<String>,
    pub picture: Option<String>,
    pub join_date: SystemTime,
    pub is_connected: bool,
    pub friends: Vec<String>,
    pub facebook_id: Option<String>,
    pub google_id: Option<String>,
}

impl PartialEq for DBUser {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

#[derive(Debug, Clone, Default)]
#[derive(RedisUpdater)]
#[name("users")]
pub struct UserUpdater {
    pub username: Option<String>,
    pub is_connected: Option<bool>,
    pub friends: Option<Vec<String>>,
}

#[derive(Debug, Default)]
pub struct UserFilter {
    pub username: Option<String>,
}

#[cfg(feature = "redis")]
impl RedisFilter<DBUser> for UserFilter {
    fn is_ok(&self, check: &DBUser) -> bool {
        if self.username.is_none() {
            return true;
        }
        return self.username.clone().unwrap() == check.username;
    }
}
