pub mod housing_service;
pub mod registry_service;
pub mod user_service;

pub use housing_service::HousingService;
pub use registry_service::RegistryService;
pub use user_service::UserService;
