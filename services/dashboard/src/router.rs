use axum::{
    Router,
    routing::{get, post},
};

use academy_core::health::healthz;
use academy_core::middleware::{
    http_trace_layer, propagate_request_id_layer, request_id_layer,
};

use crate::handlers::{
    course::{get_course_overview, get_courses, get_date_bounds},
    health::readyz,
    insight::{list_insights, run_insight},
    student::{create_student, get_student_enrollments, sample_students, search_students},
    teacher::get_teachers,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Lookups
        .route("/teachers", get(get_teachers))
        .route("/courses", get(get_courses))
        .route("/courses/date-bounds", get(get_date_bounds))
        // Course overview
        .route("/courses/overview", get(get_course_overview))
        // Students
        .route("/students", get(search_students))
        .route("/students", post(create_student))
        .route("/students/sample", get(sample_students))
        .route("/students/{id}/enrollments", get(get_student_enrollments))
        // Insights
        .route("/insights", get(list_insights))
        .route("/insights/{slug}", get(run_insight))
        .layer(http_trace_layer())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
