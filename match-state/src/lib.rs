pub mod adapters;
pub mod prelude;
