use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::chart::BarChart;
use crate::domain::insight::{InsightRow, NamedQuery};
use crate::error::DashboardError;
use crate::state::AppState;
use crate::usecase::insight::RunInsightUseCase;

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct InsightSummaryResponse {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category_column: &'static str,
    pub value_column: &'static str,
}

impl From<NamedQuery> for InsightSummaryResponse {
    fn from(q: NamedQuery) -> Self {
        Self {
            slug: q.slug(),
            title: q.title(),
            description: q.description(),
            category_column: q.category_column(),
            value_column: q.value_column(),
        }
    }
}

#[derive(Serialize)]
pub struct InsightChartResponse {
    pub spec: BarChart,
    pub rows: Vec<Map<String, Value>>,
}

#[derive(Serialize)]
pub struct InsightReportResponse {
    #[serde(flatten)]
    pub summary: InsightSummaryResponse,
    pub sql: String,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Map<String, Value>>,
    pub preview: Vec<Map<String, Value>>,
    pub chart: InsightChartResponse,
}

/// Column names of a result row, `id` first for keyed queries.
fn columns(query: NamedQuery) -> Vec<&'static str> {
    let mut cols = Vec::with_capacity(3);
    if query.is_keyed() {
        cols.push("id");
    }
    cols.push(query.category_column());
    cols.push(query.value_column());
    cols
}

/// A row as a JSON record keyed by the query's column names.
fn record(query: NamedQuery, row: InsightRow) -> Map<String, Value> {
    let mut map = Map::new();
    if let Some(key) = row.key {
        map.insert("id".to_owned(), key.into());
    }
    map.insert(query.category_column().to_owned(), row.category.into());
    map.insert(query.value_column().to_owned(), row.value.into());
    map
}

// ── GET /insights ────────────────────────────────────────────────────────────

pub async fn list_insights() -> Json<Vec<InsightSummaryResponse>> {
    Json(NamedQuery::ALL.into_iter().map(Into::into).collect())
}

// ── GET /insights/{slug} ─────────────────────────────────────────────────────

pub async fn run_insight(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<InsightReportResponse>, DashboardError> {
    let usecase = RunInsightUseCase {
        repo: state.insight_repo(),
    };
    let report = usecase.execute(&slug).await?;
    let query = report.query;
    let to_records = |rows: Vec<InsightRow>| -> Vec<Map<String, Value>> {
        rows.into_iter().map(|r| record(query, r)).collect()
    };
    Ok(Json(InsightReportResponse {
        summary: query.into(),
        sql: report.sql,
        columns: columns(query),
        rows: to_records(report.rows),
        preview: to_records(report.preview),
        chart: InsightChartResponse {
            spec: report.chart,
            rows: to_records(report.chart_rows),
        },
    }))
}
