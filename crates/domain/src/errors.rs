use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Department Not Found")]
    DepartmentNotFound(String),

    #[error("Course Not Found")]
    CourseNotFound { dept_code: String, course_code: String },

    #[error("Course with code {0} not found in any department")]
    CourseCodeNotFound(String),

    #[error("Building with id {0} not found")]
    BuildingNotFound(i32),

    #[error("Housing unit with id {0} not found")]
    HousingUnitNotFound(i32),

    #[error("User not found with email: {0}")]
    UserNotFound(String),

    #[error("There is an account already associated with {0}")]
    EmailAlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Seed error: {0}")]
    SeedError(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::DepartmentNotFound(_)
                | DomainError::CourseNotFound { .. }
                | DomainError::CourseCodeNotFound(_)
                | DomainError::BuildingNotFound(_)
                | DomainError::HousingUnitNotFound(_)
                | DomainError::UserNotFound(_)
        )
    }
}
