use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use academy_domain::course::Level;

use crate::domain::chart::BarChart;
use crate::domain::types::{CourseFilter, CourseOption, CourseStats};
use crate::error::DashboardError;
use crate::state::AppState;
use crate::usecase::course_overview::GetCourseOverviewUseCase;
use crate::usecase::lookup::{GetDateBoundsUseCase, ListCoursesUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CourseOptionResponse {
    pub id: i32,
    pub title: String,
    pub level: Level,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub teacher_id: i32,
}

impl From<CourseOption> for CourseOptionResponse {
    fn from(c: CourseOption) -> Self {
        Self {
            id: c.id,
            title: c.title,
            level: c.level,
            start_date: c.start_date,
            end_date: c.end_date,
            teacher_id: c.teacher_id,
        }
    }
}

#[derive(Serialize)]
pub struct CourseStatsResponse {
    pub id: i32,
    pub title: String,
    pub level: Level,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub teacher_name: String,
    pub total_enrollments: i64,
    pub active_count: i64,
    pub completed_count: i64,
    pub dropped_count: i64,
}

impl From<CourseStats> for CourseStatsResponse {
    fn from(c: CourseStats) -> Self {
        Self {
            id: c.id,
            title: c.title,
            level: c.level,
            start_date: c.start_date,
            end_date: c.end_date,
            teacher_name: c.teacher_name,
            total_enrollments: c.total_enrollments,
            active_count: c.active_count,
            completed_count: c.completed_count,
            dropped_count: c.dropped_count,
        }
    }
}

#[derive(Serialize)]
pub struct ChartResponse<T> {
    pub spec: BarChart,
    pub rows: Vec<T>,
}

#[derive(Serialize)]
pub struct CourseOverviewResponse {
    pub courses: Vec<CourseStatsResponse>,
    pub chart: ChartResponse<CourseStatsResponse>,
}

#[derive(Serialize)]
pub struct DateBoundsResponse {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct CourseOverviewQuery {
    pub teacher_id: Option<i32>,
    #[serde(default)]
    pub levels: Vec<Level>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl From<CourseOverviewQuery> for CourseFilter {
    fn from(q: CourseOverviewQuery) -> Self {
        Self {
            teacher_id: q.teacher_id,
            levels: q.levels.into_iter().collect(),
            start_from: q.start_date,
            start_to: q.end_date,
        }
    }
}

// ── GET /courses ─────────────────────────────────────────────────────────────

pub async fn get_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseOptionResponse>>, DashboardError> {
    let usecase = ListCoursesUseCase {
        repo: state.course_repo(),
    };
    let courses = usecase.execute().await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

// ── GET /courses/date-bounds ─────────────────────────────────────────────────

pub async fn get_date_bounds(
    State(state): State<AppState>,
) -> Result<Json<DateBoundsResponse>, DashboardError> {
    let usecase = GetDateBoundsUseCase {
        repo: state.course_repo(),
    };
    let bounds = usecase.execute().await?;
    Ok(Json(DateBoundsResponse {
        min: bounds.map(|b| b.min),
        max: bounds.map(|b| b.max),
    }))
}

// ── GET /courses/overview ────────────────────────────────────────────────────

pub async fn get_course_overview(
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<CourseOverviewResponse>, DashboardError> {
    let query: CourseOverviewQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| DashboardError::InvalidQueryString)?
        .unwrap_or_default();

    let usecase = GetCourseOverviewUseCase {
        repo: state.course_repo(),
    };
    let overview = usecase.execute(&query.into()).await?;
    Ok(Json(CourseOverviewResponse {
        courses: overview.courses.into_iter().map(Into::into).collect(),
        chart: ChartResponse {
            spec: overview.chart,
            rows: overview.top_courses.into_iter().map(Into::into).collect(),
        },
    }))
}
