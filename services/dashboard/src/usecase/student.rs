use chrono::NaiveDate;

use crate::domain::repository::StudentRepository;
use crate::domain::types::{CreatedStudent, NewStudent, Student, StudentEnrollment};
use crate::error::DashboardError;

pub const SEARCH_LIMIT: u64 = 50;
pub const SAMPLE_SIZE: u64 = 10;

// ── SearchStudents ───────────────────────────────────────────────────────────

pub struct SearchStudentsUseCase<R: StudentRepository> {
    pub repo: R,
}

impl<R: StudentRepository> SearchStudentsUseCase<R> {
    /// A blank term matches nothing and never reaches storage.
    pub async fn execute(&self, term: &str) -> Result<Vec<Student>, DashboardError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        self.repo.search(term, SEARCH_LIMIT).await
    }
}

// ── SampleStudents ───────────────────────────────────────────────────────────

pub struct SampleStudentsUseCase<R: StudentRepository> {
    pub repo: R,
}

impl<R: StudentRepository> SampleStudentsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Student>, DashboardError> {
        self.repo.sample(SAMPLE_SIZE).await
    }
}

// ── GetStudentEnrollments ────────────────────────────────────────────────────

pub struct GetStudentEnrollmentsUseCase<R: StudentRepository> {
    pub repo: R,
}

impl<R: StudentRepository> GetStudentEnrollmentsUseCase<R> {
    pub async fn execute(
        &self,
        student_id: i32,
    ) -> Result<Vec<StudentEnrollment>, DashboardError> {
        self.repo.enrollments(student_id).await
    }
}

// ── CreateStudent ────────────────────────────────────────────────────────────

pub struct CreateStudentInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Defaults to `today` when absent.
    pub registration_date: Option<NaiveDate>,
    pub course_ids: Vec<i32>,
}

pub struct CreateStudentUseCase<R: StudentRepository> {
    pub repo: R,
}

impl<R: StudentRepository> CreateStudentUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateStudentInput,
        today: NaiveDate,
    ) -> Result<CreatedStudent, DashboardError> {
        let first_name = input.first_name.trim();
        let last_name = input.last_name.trim();
        let email = input.email.trim();

        let missing: Vec<&'static str> = [
            ("first_name", first_name),
            ("last_name", last_name),
            ("email", email),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();
        if !missing.is_empty() {
            return Err(DashboardError::Validation { fields: missing });
        }

        let mut course_ids = Vec::with_capacity(input.course_ids.len());
        for id in input.course_ids {
            if !course_ids.contains(&id) {
                course_ids.push(id);
            }
        }

        let student = NewStudent {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            registration_date: input.registration_date.unwrap_or(today),
        };
        let student_id = self
            .repo
            .create_with_enrollments(&student, &course_ids, today)
            .await?;
        tracing::info!(student_id, enrollments = course_ids.len(), "student created");
        Ok(CreatedStudent {
            student_id,
            enrollment_count: course_ids.len(),
        })
    }
}
