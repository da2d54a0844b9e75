#![allow(async_fn_in_trait)]

use chrono::NaiveDate;

use crate::domain::insight::{InsightRow, NamedQuery};
use crate::domain::types::{
    CourseFilter, CourseOption, CourseStats, DateBounds, NewStudent, Student, StudentEnrollment,
    TeacherOption,
};
use crate::error::DashboardError;

/// Read access to courses and their enrollment breakdowns.
pub trait CourseRepository: Send + Sync {
    /// Courses passing `filter`, ordered by `start_date` ascending, each
    /// annotated with its enrollment counts. Courses without enrollments
    /// carry zero counts.
    async fn course_stats(&self, filter: &CourseFilter)
    -> Result<Vec<CourseStats>, DashboardError>;

    async fn list_options(&self) -> Result<Vec<CourseOption>, DashboardError>;

    /// `None` when there are no courses.
    async fn start_date_bounds(&self) -> Result<Option<DateBounds>, DashboardError>;
}

pub trait TeacherRepository: Send + Sync {
    /// Every teacher as `(id, "first last")`, ordered by name.
    async fn list_options(&self) -> Result<Vec<TeacherOption>, DashboardError>;
}

/// Student lookups plus the one write path of the service.
pub trait StudentRepository: Send + Sync {
    /// Case-insensitive substring match over first name, last name,
    /// "first last" and email, ordered by last then first name.
    async fn search(&self, term: &str, limit: u64) -> Result<Vec<Student>, DashboardError>;

    /// The first `limit` students by id.
    async fn sample(&self, limit: u64) -> Result<Vec<Student>, DashboardError>;

    /// Enrollments of one student, newest first.
    async fn enrollments(&self, student_id: i32)
    -> Result<Vec<StudentEnrollment>, DashboardError>;

    /// Insert `student` and one active enrollment per course in a single
    /// transaction. Returns the new student id.
    ///
    /// A unique violation on email maps to [`DashboardError::DuplicateEmail`];
    /// any other storage failure to [`DashboardError::WriteFailed`].
    async fn create_with_enrollments(
        &self,
        student: &NewStudent,
        course_ids: &[i32],
        enrollment_date: NaiveDate,
    ) -> Result<i32, DashboardError>;
}

/// Runs the fixed aggregate queries.
pub trait InsightRepository: Send + Sync {
    async fn run(&self, query: NamedQuery) -> Result<Vec<InsightRow>, DashboardError>;

    /// SQL text of `query` as sent to the database, for display.
    fn sql(&self, query: NamedQuery) -> String;
}
