pub mod in_memory_department_repository;
pub mod seed;

pub use in_memory_department_repository::InMemoryDepartmentRepository;
pub use seed::{bundled_departments, load_departments, save_departments};
