use crate::domain::repository::{CourseRepository, TeacherRepository};
use crate::domain::types::{CourseOption, DateBounds, TeacherOption};
use crate::error::DashboardError;

// ── ListTeachers ─────────────────────────────────────────────────────────────

pub struct ListTeachersUseCase<R: TeacherRepository> {
    pub repo: R,
}

impl<R: TeacherRepository> ListTeachersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<TeacherOption>, DashboardError> {
        self.repo.list_options().await
    }
}

// ── ListCourses ──────────────────────────────────────────────────────────────

pub struct ListCoursesUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> ListCoursesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<CourseOption>, DashboardError> {
        self.repo.list_options().await
    }
}

// ── GetDateBounds ────────────────────────────────────────────────────────────

pub struct GetDateBoundsUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> GetDateBoundsUseCase<R> {
    /// `None` until at least one course exists.
    pub async fn execute(&self) -> Result<Option<DateBounds>, DashboardError> {
        self.repo.start_date_bounds().await
    }
}
