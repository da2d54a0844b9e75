use crate::domain::chart::{BarChart, BarChartBuilder, ChartField, sort_descending_by};
use crate::domain::repository::CourseRepository;
use crate::domain::types::{CourseFilter, CourseStats};
use crate::error::DashboardError;

/// Courses drawn in the overview chart.
pub const CHART_TOP_N: usize = 10;

const BAR_HEIGHT_PX: u32 = 35;

pub struct CourseOverview {
    /// Every matching course, ordered by `start_date`.
    pub courses: Vec<CourseStats>,
    /// The busiest courses by total enrollments, largest first.
    pub top_courses: Vec<CourseStats>,
    pub chart: BarChart,
}

fn overview_chart(bars: usize) -> BarChart {
    let title = ChartField::nominal("title", "Course");
    let total = ChartField::quantitative("total_enrollments", "Total enrollments");
    BarChartBuilder::horizontal(title, total, BAR_HEIGHT_PX)
        .tooltip([
            title,
            ChartField::nominal("level", "Level"),
            ChartField::nominal("teacher_name", "Teacher"),
            total,
            ChartField::quantitative("active_count", "Active"),
            ChartField::quantitative("completed_count", "Completed"),
            ChartField::quantitative("dropped_count", "Dropped"),
        ])
        .build(bars)
}

// ── GetCourseOverview ────────────────────────────────────────────────────────

pub struct GetCourseOverviewUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> GetCourseOverviewUseCase<R> {
    pub async fn execute(&self, filter: &CourseFilter) -> Result<CourseOverview, DashboardError> {
        let courses = self.repo.course_stats(filter).await?;
        let mut top_courses = courses.clone();
        sort_descending_by(&mut top_courses, |c| c.total_enrollments);
        top_courses.truncate(CHART_TOP_N);
        tracing::debug!(
            courses = courses.len(),
            charted = top_courses.len(),
            "course overview"
        );
        Ok(CourseOverview {
            chart: overview_chart(top_courses.len()),
            courses,
            top_courses,
        })
    }
}
