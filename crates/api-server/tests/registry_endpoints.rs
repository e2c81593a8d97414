//! Course registry endpoints driven through the router.

use api_server::{build_router, AppState};
use application::CampusApp;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use infrastructure::bundled_departments;
use std::sync::Arc;
use tower::ServiceExt;

fn router() -> axum::Router {
    let app = CampusApp::in_memory(bundled_departments().expect("seed")).expect("app");
    build_router(AppState::new(Arc::new(app)))
}

async fn call(router: &axum::Router, method: Method, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    (status, String::from_utf8(body.to_vec()).expect("utf8 body"))
}

async fn get(router: &axum::Router, uri: &str) -> (StatusCode, String) {
    call(router, Method::GET, uri).await
}

async fn patch(router: &axum::Router, uri: &str) -> (StatusCode, String) {
    call(router, Method::PATCH, uri).await
}

#[tokio::test]
async fn index_routes_share_welcome_text() {
    let router = router();
    let (status, root) = get(&router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(root.starts_with("Welcome"));
    assert_eq!(get(&router, "/index").await.1, root);
    assert_eq!(get(&router, "/home").await.1, root);
}

#[tokio::test]
async fn full_course_scenario() {
    let router = router();
    // Seeded capacity is 120.
    let (status, _) = patch(
        &router,
        "/setEnrollmentCount?deptCode=COMS&courseCode=4156&count=120",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        get(&router, "/isCourseFull?deptCode=COMS&courseCode=4156").await,
        (StatusCode::OK, "true".to_string())
    );

    assert_eq!(
        patch(&router, "/enrollStudentInCourse?deptCode=COMS&courseCode=4156").await,
        (StatusCode::BAD_REQUEST, "Student has not been enrolled.".to_string())
    );
    assert_eq!(
        patch(&router, "/dropStudentFromCourse?deptCode=COMS&courseCode=4156").await,
        (StatusCode::OK, "Student has been dropped.".to_string())
    );
    assert_eq!(
        patch(&router, "/enrollStudentInCourse?deptCode=coms&courseCode=4156").await,
        (StatusCode::OK, "Student has been enrolled.".to_string())
    );
    assert_eq!(
        get(&router, "/isCourseFull?deptCode=COMS&courseCode=4156").await.1,
        "true"
    );
}

#[tokio::test]
async fn drop_from_empty_course_is_rejected() {
    let router = router();
    patch(&router, "/setEnrollmentCount?deptCode=ECON&courseCode=1105&count=0").await;
    assert_eq!(
        patch(&router, "/dropStudentFromCourse?deptCode=ECON&courseCode=1105").await,
        (StatusCode::BAD_REQUEST, "Student has not been dropped.".to_string())
    );
}

#[tokio::test]
async fn lookups_report_missing_department_then_course() {
    let router = router();
    assert_eq!(
        get(&router, "/retrieveDept?deptCode=ELEN").await,
        (StatusCode::NOT_FOUND, "Department Not Found".to_string())
    );
    assert_eq!(
        get(&router, "/retrieveCourse?deptCode=ELEN&courseCode=4156").await,
        (StatusCode::NOT_FOUND, "Department Not Found".to_string())
    );
    assert_eq!(
        get(&router, "/retrieveCourse?deptCode=COMS&courseCode=9999").await,
        (StatusCode::NOT_FOUND, "Course Not Found".to_string())
    );
    assert_eq!(
        patch(&router, "/changeCourseTime?deptCode=COMS&courseCode=9999&time=9").await,
        (StatusCode::NOT_FOUND, "Course Not Found".to_string())
    );
}

#[tokio::test]
async fn non_numeric_course_code_is_a_bad_request() {
    let router = router();
    let (status, _) = get(&router, "/retrieveCourse?deptCode=COMS&courseCode=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn department_text_lists_chair_and_majors() {
    let router = router();
    let (status, body) = get(&router, "/retrieveDept?deptCode=coms").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("COMS 4156: \nInstructor: Gail Kaiser; Location: 501 NWC; Time: 10:10-11:25"));
    assert!(body.ends_with("Department Chair: Luca Carloni\nNumber of Majors: 2700"));

    assert_eq!(
        get(&router, "/idDeptChair?deptCode=COMS").await.1,
        "Luca Carloni is the department chair."
    );
    assert_eq!(
        get(&router, "/getMajorCountFromDept?deptCode=IEOR").await.1,
        "There are: 67 majors in the department"
    );
}

#[tokio::test]
async fn course_field_lookups_and_updates() {
    let router = router();
    assert_eq!(
        get(&router, "/findCourseInstructor?deptCode=COMS&courseCode=4156").await.1,
        "Gail Kaiser is the instructor for the course."
    );
    assert_eq!(
        get(&router, "/findCourseLocation?deptCode=COMS&courseCode=4156").await.1,
        "501 NWC is where the course is located."
    );
    assert_eq!(
        get(&router, "/findCourseTime?deptCode=COMS&courseCode=4156").await.1,
        "The course meets at: 10:10-11:25"
    );

    let updated = (StatusCode::OK, "Attribute was updated successfully.".to_string());
    assert_eq!(
        patch(&router, "/changeCourseTeacher?deptCode=coms&courseCode=4156&teacher=Adam%20Cannon").await,
        updated
    );
    assert_eq!(
        patch(&router, "/changeCourseLocation?deptCode=COMS&courseCode=4156&location=417%20IAB").await,
        updated
    );
    assert_eq!(
        patch(&router, "/changeCourseTime?deptCode=COMS&courseCode=4156&time=4:10-5:25").await,
        updated
    );
    assert_eq!(
        get(&router, "/retrieveCourse?deptCode=COMS&courseCode=4156").await.1,
        "\nInstructor: Adam Cannon; Location: 417 IAB; Time: 4:10-5:25"
    );
}

#[tokio::test]
async fn retrieve_courses_by_code() {
    let router = router();
    let (status, body) = get(&router, "/retrieveCourses?courseCode=4156").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("COMS: \n\nInstructor: Gail Kaiser"));
    assert!(body.ends_with("\n\n"));

    assert_eq!(
        get(&router, "/retrieveCourses?courseCode=9999").await,
        (
            StatusCode::NOT_FOUND,
            "Course with code 9999 not found in any department".to_string()
        )
    );
}

#[tokio::test]
async fn major_counts_move_and_floor() {
    let router = router();
    assert_eq!(
        patch(&router, "/addMajorToDept?deptCode=ieor").await,
        (StatusCode::OK, "Attribute was updated successfully".to_string())
    );
    assert_eq!(
        get(&router, "/getMajorCountFromDept?deptCode=IEOR").await.1,
        "There are: 68 majors in the department"
    );
    assert_eq!(
        patch(&router, "/removeMajorFromDept?deptCode=IEOR").await.1,
        "Attribute was updated successfully"
    );
    assert_eq!(
        patch(&router, "/removeMajorFromDept?deptCode=MATH").await,
        (StatusCode::NOT_FOUND, "Department Not Found".to_string())
    );
}
