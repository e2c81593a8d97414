pub mod building;
pub mod course;
pub mod department;
pub mod housing_unit;
pub mod user;

pub use building::*;
pub use course::*;
pub use department::*;
pub use housing_unit::*;
pub use user::*;
