use crate::entities::Course;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Result of removing a major from a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorDrop {
    Dropped,
    AlreadyAtMinimum,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub dept_code: String,
    pub department_chair: String,
    pub number_of_majors: u32,
    #[serde(default)]
    pub courses: BTreeMap<String, Course>,
}

impl Department {
    pub fn new(dept_code: &str, department_chair: String, number_of_majors: u32) -> Self {
        Self {
            dept_code: normalize_dept_code(dept_code),
            department_chair,
            number_of_majors,
            courses: BTreeMap::new(),
        }
    }

    pub fn with_course(mut self, course_code: &str, course: Course) -> Self {
        self.courses.insert(course_code.to_string(), course);
        self
    }

    pub fn course(&self, course_code: &str) -> Option<&Course> {
        self.courses.get(course_code)
    }

    pub fn course_mut(&mut self, course_code: &str) -> Option<&mut Course> {
        self.courses.get_mut(course_code)
    }

    pub fn add_person_to_major(&mut self) {
        self.number_of_majors = self.number_of_majors.saturating_add(1);
    }

    pub fn drop_person_from_major(&mut self) -> MajorDrop {
        if self.number_of_majors == 0 {
            return MajorDrop::AlreadyAtMinimum;
        }
        self.number_of_majors -= 1;
        MajorDrop::Dropped
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (code, course) in &self.courses {
            writeln!(f, "{} {}: {}", self.dept_code, code, course)?;
        }
        write!(
            f,
            "Department Chair: {}\nNumber of Majors: {}",
            self.department_chair, self.number_of_majors
        )
    }
}

/// Canonical form of a department key.
pub fn normalize_dept_code(dept_code: &str) -> String {
    dept_code.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coms() -> Department {
        Department::new("coms", "Luca Carloni".to_string(), 1).with_course(
            "4156",
            Course::new(
                "Gail Kaiser".to_string(),
                "501 NWC".to_string(),
                "10:10-11:25".to_string(),
                120,
            ),
        )
    }

    #[test]
    fn code_is_stored_uppercase() {
        assert_eq!(coms().dept_code, "COMS");
        assert_eq!(normalize_dept_code(" eCoN "), "ECON");
    }

    #[test]
    fn major_count_floors_at_zero() {
        let mut dept = coms();
        assert_eq!(dept.drop_person_from_major(), MajorDrop::Dropped);
        assert_eq!(dept.number_of_majors, 0);
        for _ in 0..5 {
            assert_eq!(dept.drop_person_from_major(), MajorDrop::AlreadyAtMinimum);
            assert_eq!(dept.number_of_majors, 0);
        }
        dept.add_person_to_major();
        assert_eq!(dept.number_of_majors, 1);
    }

    #[test]
    fn course_lookup_is_exact() {
        let dept = coms();
        assert!(dept.course("4156").is_some());
        assert!(dept.course("04156").is_none());
        assert!(dept.course("1004").is_none());
    }

    #[test]
    fn display_lists_courses_then_chair() {
        assert_eq!(
            coms().to_string(),
            "COMS 4156: \nInstructor: Gail Kaiser; Location: 501 NWC; Time: 10:10-11:25\n\
             Department Chair: Luca Carloni\nNumber of Majors: 1"
        );
    }
}
