use crate::entities::Department;
use crate::errors::DomainError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A department owned by the store. Every read-modify-write of the department
/// or one of its courses holds this lock, which keeps concurrent enrolls from
/// overshooting capacity.
pub type SharedDepartment = Arc<Mutex<Department>>;

/// Keyed access to the course registry. Keys are canonical (uppercase)
/// department codes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn find_by_code(&self, dept_code: &str) -> Result<Option<SharedDepartment>, DomainError>;
    /// All departments in ascending code order.
    async fn find_all(&self) -> Result<Vec<SharedDepartment>, DomainError>;
}
