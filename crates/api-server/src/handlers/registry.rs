//! Course registry endpoints. Bodies are plain text.

use crate::error::RegistryError;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::MajorDrop;
use serde::Deserialize;
use std::fmt::Write;

const UPDATED: &str = "Attribute was updated successfully.";

type RegistryResult = Result<Response, RegistryError>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeptQuery {
    pub dept_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseQuery {
    pub dept_code: String,
    pub course_code: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCodeQuery {
    pub course_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentCountQuery {
    pub dept_code: String,
    pub course_code: i32,
    pub count: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeQuery {
    pub dept_code: String,
    pub course_code: i32,
    pub time: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherQuery {
    pub dept_code: String,
    pub course_code: i32,
    pub teacher: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationQuery {
    pub dept_code: String,
    pub course_code: i32,
    pub location: String,
}

fn ok(body: impl Into<String>) -> RegistryResult {
    Ok((StatusCode::OK, body.into()).into_response())
}

pub async fn retrieve_department(
    State(state): State<AppState>,
    Query(q): Query<DeptQuery>,
) -> RegistryResult {
    let department = state.app.registry_service.retrieve_department(&q.dept_code).await?;
    ok(department.to_string())
}

pub async fn retrieve_course(
    State(state): State<AppState>,
    Query(q): Query<CourseQuery>,
) -> RegistryResult {
    let course = state
        .app
        .registry_service
        .retrieve_course(&q.dept_code, &q.course_code.to_string())
        .await?;
    ok(course.to_string())
}

/// Every department offering the code, one block per department.
pub async fn retrieve_courses(
    State(state): State<AppState>,
    Query(q): Query<CourseCodeQuery>,
) -> RegistryResult {
    let matches = state.app.registry_service.retrieve_courses(&q.course_code).await?;
    let mut body = String::new();
    for (dept_code, course) in matches {
        let _ = write!(body, "{}: \n{}\n\n", dept_code, course);
    }
    ok(body)
}

pub async fn is_course_full(
    State(state): State<AppState>,
    Query(q): Query<CourseQuery>,
) -> RegistryResult {
    let full = state
        .app
        .registry_service
        .is_course_full(&q.dept_code, &q.course_code.to_string())
        .await?;
    ok(full.to_string())
}

pub async fn major_count(
    State(state): State<AppState>,
    Query(q): Query<DeptQuery>,
) -> RegistryResult {
    let count = state.app.registry_service.major_count(&q.dept_code).await?;
    ok(format!("There are: {} majors in the department", count))
}

pub async fn department_chair(
    State(state): State<AppState>,
    Query(q): Query<DeptQuery>,
) -> RegistryResult {
    let chair = state.app.registry_service.department_chair(&q.dept_code).await?;
    ok(format!("{} is the department chair.", chair))
}

pub async fn course_location(
    State(state): State<AppState>,
    Query(q): Query<CourseQuery>,
) -> RegistryResult {
    let course = state
        .app
        .registry_service
        .retrieve_course(&q.dept_code, &q.course_code.to_string())
        .await?;
    ok(format!("{} is where the course is located.", course.course_location))
}

pub async fn course_instructor(
    State(state): State<AppState>,
    Query(q): Query<CourseQuery>,
) -> RegistryResult {
    let course = state
        .app
        .registry_service
        .retrieve_course(&q.dept_code, &q.course_code.to_string())
        .await?;
    ok(format!("{} is the instructor for the course.", course.instructor_name))
}

pub async fn course_time(
    State(state): State<AppState>,
    Query(q): Query<CourseQuery>,
) -> RegistryResult {
    let course = state
        .app
        .registry_service
        .retrieve_course(&q.dept_code, &q.course_code.to_string())
        .await?;
    ok(format!("The course meets at: {}", course.course_time_slot))
}

pub async fn add_major(
    State(state): State<AppState>,
    Query(q): Query<DeptQuery>,
) -> RegistryResult {
    state.app.registry_service.add_major(&q.dept_code).await?;
    ok("Attribute was updated successfully")
}

pub async fn remove_major(
    State(state): State<AppState>,
    Query(q): Query<DeptQuery>,
) -> RegistryResult {
    match state.app.registry_service.remove_major(&q.dept_code).await? {
        MajorDrop::Dropped => ok("Attribute was updated successfully"),
        MajorDrop::AlreadyAtMinimum => ok("Attribute is at minimum"),
    }
}

pub async fn enroll_student(
    State(state): State<AppState>,
    Query(q): Query<CourseQuery>,
) -> RegistryResult {
    let enrolled = state
        .app
        .registry_service
        .enroll_student(&q.dept_code, &q.course_code.to_string())
        .await?;
    if enrolled {
        ok("Student has been enrolled.")
    } else {
        Ok((StatusCode::BAD_REQUEST, "Student has not been enrolled.").into_response())
    }
}

pub async fn drop_student(
    State(state): State<AppState>,
    Query(q): Query<CourseQuery>,
) -> RegistryResult {
    let dropped = state
        .app
        .registry_service
        .drop_student(&q.dept_code, &q.course_code.to_string())
        .await?;
    if dropped {
        ok("Student has been dropped.")
    } else {
        Ok((StatusCode::BAD_REQUEST, "Student has not been dropped.").into_response())
    }
}

pub async fn set_enrollment_count(
    State(state): State<AppState>,
    Query(q): Query<EnrollmentCountQuery>,
) -> RegistryResult {
    state
        .app
        .registry_service
        .set_enrollment_count(&q.dept_code, &q.course_code.to_string(), q.count)
        .await?;
    ok(UPDATED)
}

pub async fn change_course_time(
    State(state): State<AppState>,
    Query(q): Query<TimeQuery>,
) -> RegistryResult {
    state
        .app
        .registry_service
        .change_course_time(&q.dept_code, &q.course_code.to_string(), q.time)
        .await?;
    ok(UPDATED)
}

pub async fn change_course_teacher(
    State(state): State<AppState>,
    Query(q): Query<TeacherQuery>,
) -> RegistryResult {
    state
        .app
        .registry_service
        .change_course_teacher(&q.dept_code, &q.course_code.to_string(), q.teacher)
        .await?;
    ok(UPDATED)
}

pub async fn change_course_location(
    State(state): State<AppState>,
    Query(q): Query<LocationQuery>,
) -> RegistryResult {
    state
        .app
        .registry_service
        .change_course_location(&q.dept_code, &q.course_code.to_string(), q.location)
        .await?;
    ok(UPDATED)
}
