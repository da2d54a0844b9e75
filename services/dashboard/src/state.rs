use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbCourseRepository, DbInsightRepository, DbStudentRepository, DbTeacherRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn course_repo(&self) -> DbCourseRepository {
        DbCourseRepository {
            db: self.db.clone(),
        }
    }

    pub fn teacher_repo(&self) -> DbTeacherRepository {
        DbTeacherRepository {
            db: self.db.clone(),
        }
    }

    pub fn student_repo(&self) -> DbStudentRepository {
        DbStudentRepository {
            db: self.db.clone(),
        }
    }

    pub fn insight_repo(&self) -> DbInsightRepository {
        DbInsightRepository {
            db: self.db.clone(),
        }
    }
}
