use crate::entities::{normalize_dept_code, Course, Department, MajorDrop};
use crate::errors::DomainError;
use crate::repositories::{DepartmentRepository, SharedDepartment};
use std::sync::Arc;
use tracing::debug;

/// Course registry operations: department and course lookups, enrollment and
/// the administrative field updates.
///
/// Department codes are matched case-insensitively; course codes are matched
/// exactly within the resolved department. A missing department is always
/// reported before the course is looked at.
pub struct RegistryService {
    department_repository: Arc<dyn DepartmentRepository>,
}

impl RegistryService {
    pub fn new(department_repository: Arc<dyn DepartmentRepository>) -> Self {
        Self {
            department_repository,
        }
    }

    async fn department(&self, dept_code: &str) -> Result<SharedDepartment, DomainError> {
        let key = normalize_dept_code(dept_code);
        self.department_repository
            .find_by_code(&key)
            .await?
            .ok_or(DomainError::DepartmentNotFound(key))
    }

    /// Runs `f` against one course while holding its department's lock.
    async fn with_course<T>(
        &self,
        dept_code: &str,
        course_code: &str,
        f: impl FnOnce(&mut Course) -> T,
    ) -> Result<T, DomainError> {
        let department = self.department(dept_code).await?;
        let mut department = department.lock().await;
        let dept_code = department.dept_code.clone();
        let course = department
            .course_mut(course_code)
            .ok_or_else(|| DomainError::CourseNotFound {
                dept_code,
                course_code: course_code.to_string(),
            })?;
        Ok(f(course))
    }

    async fn with_department<T>(
        &self,
        dept_code: &str,
        f: impl FnOnce(&mut Department) -> T,
    ) -> Result<T, DomainError> {
        let department = self.department(dept_code).await?;
        let mut department = department.lock().await;
        Ok(f(&mut department))
    }

    pub async fn retrieve_department(&self, dept_code: &str) -> Result<Department, DomainError> {
        self.with_department(dept_code, |department| department.clone())
            .await
    }

    pub async fn retrieve_course(
        &self,
        dept_code: &str,
        course_code: &str,
    ) -> Result<Course, DomainError> {
        self.with_course(dept_code, course_code, |course| course.clone())
            .await
    }

    /// Every department offering `course_code`, paired with its copy of the
    /// course. The same code may legitimately appear in several departments.
    pub async fn retrieve_courses(
        &self,
        course_code: &str,
    ) -> Result<Vec<(String, Course)>, DomainError> {
        let mut matches = Vec::new();
        for department in self.department_repository.find_all().await? {
            let department = department.lock().await;
            if let Some(course) = department.course(course_code) {
                matches.push((department.dept_code.clone(), course.clone()));
            }
        }

        if matches.is_empty() {
            return Err(DomainError::CourseCodeNotFound(course_code.to_string()));
        }
        Ok(matches)
    }

    pub async fn is_course_full(
        &self,
        dept_code: &str,
        course_code: &str,
    ) -> Result<bool, DomainError> {
        self.with_course(dept_code, course_code, |course| course.is_course_full())
            .await
    }

    pub async fn major_count(&self, dept_code: &str) -> Result<u32, DomainError> {
        self.with_department(dept_code, |department| department.number_of_majors)
            .await
    }

    pub async fn department_chair(&self, dept_code: &str) -> Result<String, DomainError> {
        self.with_department(dept_code, |department| {
            department.department_chair.clone()
        })
        .await
    }

    /// Returns the new major count.
    pub async fn add_major(&self, dept_code: &str) -> Result<u32, DomainError> {
        self.with_department(dept_code, |department| {
            department.add_person_to_major();
            department.number_of_majors
        })
        .await
    }

    pub async fn remove_major(&self, dept_code: &str) -> Result<MajorDrop, DomainError> {
        let outcome = self
            .with_department(dept_code, |department| department.drop_person_from_major())
            .await?;
        debug!(dept_code, ?outcome, "removed major");
        Ok(outcome)
    }

    pub async fn enroll_student(
        &self,
        dept_code: &str,
        course_code: &str,
    ) -> Result<bool, DomainError> {
        let enrolled = self
            .with_course(dept_code, course_code, |course| course.enroll_student())
            .await?;
        debug!(dept_code, course_code, enrolled, "enroll attempt");
        Ok(enrolled)
    }

    pub async fn drop_student(
        &self,
        dept_code: &str,
        course_code: &str,
    ) -> Result<bool, DomainError> {
        let dropped = self
            .with_course(dept_code, course_code, |course| course.drop_student())
            .await?;
        debug!(dept_code, course_code, dropped, "drop attempt");
        Ok(dropped)
    }

    /// Administrative override; bypasses the capacity check.
    pub async fn set_enrollment_count(
        &self,
        dept_code: &str,
        course_code: &str,
        count: i32,
    ) -> Result<(), DomainError> {
        self.with_course(dept_code, course_code, |course| {
            course.set_enrolled_student_count(count)
        })
        .await
    }

    pub async fn change_course_time(
        &self,
        dept_code: &str,
        course_code: &str,
        time: String,
    ) -> Result<(), DomainError> {
        self.with_course(dept_code, course_code, |course| course.reassign_time(time))
            .await
    }

    pub async fn change_course_teacher(
        &self,
        dept_code: &str,
        course_code: &str,
        teacher: String,
    ) -> Result<(), DomainError> {
        self.with_course(dept_code, course_code, |course| {
            course.reassign_instructor(teacher)
        })
        .await
    }

    pub async fn change_course_location(
        &self,
        dept_code: &str,
        course_code: &str,
        location: String,
    ) -> Result<(), DomainError> {
        self.with_course(dept_code, course_code, |course| {
            course.reassign_location(location)
        })
        .await
    }
}
