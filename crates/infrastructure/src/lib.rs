pub mod database;
pub mod registry;
pub mod repositories;

pub use database::{Database, SqlitePool};
pub use registry::*;
pub use repositories::*;
