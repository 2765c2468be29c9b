#[cfg(feature = "redis")]
pub mod redis;

pub trait DataAdapter<T, O, F, U>:
    Insertable<T> + Searchable<O, F> + Removable + Gettable<O> + Updateable<T, U>
{
}

pub trait Insertable<T> {
    fn insert(&self, data: T) -> Result<String, Box<dyn std::error::Error>>;
}

pub trait Gettable<O> {
    /// Looks a record up by its uuid. Absence is reported as `Ok(None)`,
    /// not as an error, so callers can tell a missing record apart from
    /// a failing store.
    fn get(&self, uuid: &str) -> Result<Option<O>, Box<dyn std::error::Error>>;

    fn all(&self) -> Result<impl Iterator<Item = O>, Box<dyn std::error::Error>>;
}

pub trait Searchable<O, F> {
    fn filter(&self, filter: F) -> Result<impl Iterator<Item = O>, Box<dyn std::error::Error>>;
}

pub trait Updateable<T, U> {
    fn update(&self, uuid: &str, change: U) -> Result<(), Box<dyn std::error::Error>>;
}

pub trait Removable {
    fn remove(&self, uuid: &str) -> Result<(), Box<dyn std::error::Error>>;
}
