use async_trait::async_trait;
use domain::{normalize_dept_code, Department, DepartmentRepository, DomainError, SharedDepartment};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Course registry held in process memory.
///
/// The key set is fixed at construction (departments are never added or
/// removed at runtime), so the map itself is read-only and each department
/// carries its own lock.
pub struct InMemoryDepartmentRepository {
    departments: BTreeMap<String, SharedDepartment>,
}

impl InMemoryDepartmentRepository {
    pub fn new(departments: Vec<Department>) -> Self {
        let departments = departments
            .into_iter()
            .map(|mut department| {
                department.dept_code = normalize_dept_code(&department.dept_code);
                (department.dept_code.clone(), Arc::new(Mutex::new(department)))
            })
            .collect();
        Self { departments }
    }

    /// Point-in-time copy of every department, in code order.
    pub async fn snapshot(&self) -> Vec<Department> {
        let mut departments = Vec::with_capacity(self.departments.len());
        for department in self.departments.values() {
            departments.push(department.lock().await.clone());
        }
        departments
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn find_by_code(&self, dept_code: &str) -> Result<Option<SharedDepartment>, DomainError> {
        Ok(self.departments.get(dept_code).cloned())
    }

    async fn find_all(&self) -> Result<Vec<SharedDepartment>, DomainError> {
        Ok(self.departments.values().cloned().collect())
    }
}
