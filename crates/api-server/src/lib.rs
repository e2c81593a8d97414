use application::CampusApp;
use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;

use handlers::{housing, registry, users};

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<CampusApp>,
}

impl AppState {
    pub fn new(app: Arc<CampusApp>) -> Self {
        Self { app }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/index", get(handlers::index))
        .route("/home", get(handlers::index))
        // Course registry
        .route("/retrieveDept", get(registry::retrieve_department))
        .route("/retrieveCourse", get(registry::retrieve_course))
        .route("/retrieveCourses", get(registry::retrieve_courses))
        .route("/isCourseFull", get(registry::is_course_full))
        .route("/getMajorCountFromDept", get(registry::major_count))
        .route("/idDeptChair", get(registry::department_chair))
        .route("/findCourseLocation", get(registry::course_location))
        .route("/findCourseInstructor", get(registry::course_instructor))
        .route("/findCourseTime", get(registry::course_time))
        .route("/addMajorToDept", patch(registry::add_major))
        .route("/removeMajorFromDept", patch(registry::remove_major))
        .route("/enrollStudentInCourse", patch(registry::enroll_student))
        .route("/dropStudentFromCourse", patch(registry::drop_student))
        .route("/setEnrollmentCount", patch(registry::set_enrollment_count))
        .route("/changeCourseTime", patch(registry::change_course_time))
        .route("/changeCourseTeacher", patch(registry::change_course_teacher))
        .route("/changeCourseLocation", patch(registry::change_course_location))
        // Housing
        .route("/building/:id/housing-units", get(housing::list_building_units))
        .route("/housing-unit/:id", get(housing::get_housing_unit))
        // Users
        .route("/user/authenticate", post(users::authenticate))
        .route("/user/create", post(users::create_user))
        // Health check
        .route("/health", get(handlers::health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
