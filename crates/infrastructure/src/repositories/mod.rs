pub mod sqlite_building_repository;
pub mod sqlite_housing_unit_repository;
pub mod sqlite_user_repository;

pub use sqlite_building_repository::SqliteBuildingRepository;
pub use sqlite_housing_unit_repository::SqliteHousingUnitRepository;
pub use sqlite_user_repository::SqliteUserRepository;
