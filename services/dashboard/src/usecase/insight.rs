use crate::domain::chart::{BarChart, sort_descending_by};
use crate::domain::insight::{InsightRow, NamedQuery};
use crate::domain::repository::InsightRepository;
use crate::error::DashboardError;

pub const PREVIEW_ROWS: usize = 10;

pub struct InsightReport {
    pub query: NamedQuery,
    pub sql: String,
    /// Full result in query order.
    pub rows: Vec<InsightRow>,
    /// First rows of `rows`.
    pub preview: Vec<InsightRow>,
    pub chart: BarChart,
    /// `rows` sorted descending by value, as drawn.
    pub chart_rows: Vec<InsightRow>,
}

// ── RunInsight ───────────────────────────────────────────────────────────────

pub struct RunInsightUseCase<R: InsightRepository> {
    pub repo: R,
}

impl<R: InsightRepository> RunInsightUseCase<R> {
    pub async fn execute(&self, slug: &str) -> Result<InsightReport, DashboardError> {
        let query: NamedQuery = slug.parse().map_err(DashboardError::UnknownQuery)?;
        let rows = self.repo.run(query).await?;
        let preview = rows.iter().take(PREVIEW_ROWS).cloned().collect();
        let mut chart_rows = rows.clone();
        sort_descending_by(&mut chart_rows, |r| r.value);
        Ok(InsightReport {
            query,
            sql: self.repo.sql(query),
            chart: query.chart(chart_rows.len()),
            rows,
            preview,
            chart_rows,
        })
    }
}
