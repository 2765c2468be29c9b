#[cfg(feature = "redis")]
pub use crate::adapters::redis::RedisAdapter;

pub use crate::adapters::{Gettable, Insertable, Removable, Searchable, Updateable};
