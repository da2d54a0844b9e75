use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use academy_domain::course::Level;
use academy_domain::enrollment::{EnrollmentStatus, Grade};

use crate::domain::types::{Student, StudentEnrollment};
use crate::error::DashboardError;
use crate::state::AppState;
use crate::usecase::student::{
    CreateStudentInput, CreateStudentUseCase, GetStudentEnrollmentsUseCase,
    SampleStudentsUseCase, SearchStudentsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StudentResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub registration_date: NaiveDate,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            full_name: s.full_name(),
            id: s.id,
            first_name: s.first_name,
            last_name: s.last_name,
            email: s.email,
            registration_date: s.registration_date,
        }
    }
}

#[derive(Serialize)]
pub struct EnrollmentResponse {
    pub id: i32,
    pub course_title: String,
    pub level: Level,
    pub enrollment_date: NaiveDate,
    pub status: EnrollmentStatus,
    pub final_grade: Option<Grade>,
}

impl From<StudentEnrollment> for EnrollmentResponse {
    fn from(e: StudentEnrollment) -> Self {
        Self {
            id: e.id,
            course_title: e.course_title,
            level: e.level,
            enrollment_date: e.enrollment_date,
            status: e.status,
            final_grade: e.final_grade,
        }
    }
}

// ── GET /students?q= ─────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct StudentSearchQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn search_students(
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<StudentResponse>>, DashboardError> {
    let query: StudentSearchQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| DashboardError::InvalidQueryString)?
        .unwrap_or_default();

    let usecase = SearchStudentsUseCase {
        repo: state.student_repo(),
    };
    let students = usecase.execute(&query.q).await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

// ── GET /students/sample ─────────────────────────────────────────────────────

pub async fn sample_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, DashboardError> {
    let usecase = SampleStudentsUseCase {
        repo: state.student_repo(),
    };
    let students = usecase.execute().await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

// ── GET /students/{id}/enrollments ───────────────────────────────────────────

pub async fn get_student_enrollments(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<Json<Vec<EnrollmentResponse>>, DashboardError> {
    let usecase = GetStudentEnrollmentsUseCase {
        repo: state.student_repo(),
    };
    let enrollments = usecase.execute(student_id).await?;
    Ok(Json(enrollments.into_iter().map(Into::into).collect()))
}

// ── POST /students ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateStudentRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub registration_date: Option<NaiveDate>,
    #[serde(default)]
    pub course_ids: Vec<i32>,
}

#[derive(Serialize)]
pub struct CreatedStudentResponse {
    pub student_id: i32,
    pub enrollment_count: usize,
}

pub async fn create_student(
    State(state): State<AppState>,
    Json(body): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<CreatedStudentResponse>), DashboardError> {
    let usecase = CreateStudentUseCase {
        repo: state.student_repo(),
    };
    let created = usecase
        .execute(
            CreateStudentInput {
                first_name: body.first_name,
                last_name: body.last_name,
                email: body.email,
                registration_date: body.registration_date,
                course_ids: body.course_ids,
            },
            Utc::now().date_naive(),
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedStudentResponse {
            student_id: created.student_id,
            enrollment_count: created.enrollment_count,
        }),
    ))
}
