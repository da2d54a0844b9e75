use axum::{Json, extract::State};
use serde::Serialize;

use crate::domain::types::TeacherOption;
use crate::error::DashboardError;
use crate::state::AppState;
use crate::usecase::lookup::ListTeachersUseCase;

#[derive(Serialize)]
pub struct TeacherOptionResponse {
    pub id: i32,
    pub name: String,
}

impl From<TeacherOption> for TeacherOptionResponse {
    fn from(t: TeacherOption) -> Self {
        Self {
            id: t.id,
            name: t.name,
        }
    }
}

// ── GET /teachers ────────────────────────────────────────────────────────────

pub async fn get_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherOptionResponse>>, DashboardError> {
    let usecase = ListTeachersUseCase {
        repo: state.teacher_repo(),
    };
    let teachers = usecase.execute().await?;
    Ok(Json(teachers.into_iter().map(Into::into).collect()))
}
