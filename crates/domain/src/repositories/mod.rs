pub mod building_repository;
pub mod department_repository;
pub mod housing_unit_repository;
pub mod user_repository;

pub use building_repository::BuildingRepository;
pub use department_repository::{DepartmentRepository, SharedDepartment};
pub use housing_unit_repository::HousingUnitRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use building_repository::MockBuildingRepository;
#[cfg(test)]
pub use department_repository::MockDepartmentRepository;
#[cfg(test)]
pub use housing_unit_repository::MockHousingUnitRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
