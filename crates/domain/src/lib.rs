pub mod entities;
pub mod errors;
pub mod password;
pub mod repositories;
pub mod services;

pub use entities::*;
pub use errors::*;
pub use password::hash_password;
pub use repositories::*;
pub use services::*;
