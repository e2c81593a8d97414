use serde::{Deserialize, Serialize};
use std::fmt;

/// A course offered by a department.
///
/// Enrollment is capacity-bounded: `enroll_student` and `drop_student` keep the
/// enrolled count within `[0, enrollment_capacity]`. The only way to leave that
/// range is the administrative override `set_enrolled_student_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub instructor_name: String,
    pub course_location: String,
    pub course_time_slot: String,
    pub enrollment_capacity: i32,
    pub enrolled_student_count: i32,
}

impl Course {
    pub fn new(
        instructor_name: String,
        course_location: String,
        course_time_slot: String,
        enrollment_capacity: i32,
    ) -> Self {
        Self {
            instructor_name,
            course_location,
            course_time_slot,
            enrollment_capacity,
            enrolled_student_count: 0,
        }
    }

    pub fn with_enrollment(mut self, enrolled_student_count: i32) -> Self {
        self.enrolled_student_count = enrolled_student_count;
        self
    }

    /// Enrolls one student. Returns `false` and leaves the count untouched when
    /// the course is already full.
    pub fn enroll_student(&mut self) -> bool {
        if self.is_course_full() {
            return false;
        }
        self.enrolled_student_count += 1;
        true
    }

    /// Drops one student. Returns `false` when nobody is enrolled.
    pub fn drop_student(&mut self) -> bool {
        if self.enrolled_student_count <= 0 {
            return false;
        }
        self.enrolled_student_count -= 1;
        true
    }

    pub fn is_course_full(&self) -> bool {
        self.enrolled_student_count >= self.enrollment_capacity
    }

    /// Administrative override. The value is stored as given, even when it is
    /// negative or above capacity.
    pub fn set_enrolled_student_count(&mut self, count: i32) {
        self.enrolled_student_count = count;
    }

    pub fn reassign_instructor(&mut self, instructor_name: String) {
        self.instructor_name = instructor_name;
    }

    pub fn reassign_location(&mut self, course_location: String) {
        self.course_location = course_location;
    }

    pub fn reassign_time(&mut self, course_time_slot: String) {
        self.course_time_slot = course_time_slot;
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nInstructor: {}; Location: {}; Time: {}",
            self.instructor_name, self.course_location, self.course_time_slot
        )
    }
}
