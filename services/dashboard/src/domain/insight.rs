//! The fixed set of named aggregate queries offered for exploration.

use std::fmt;
use std::str::FromStr;

use crate::domain::chart::{BarChart, BarChartBuilder, ChartField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedQuery {
    StudentsPerCourse,
    StatusDistribution,
    ActiveEnrollmentsPerLevel,
    CoursesPerTeacher,
}

impl NamedQuery {
    pub const ALL: [NamedQuery; 4] = [
        Self::StudentsPerCourse,
        Self::StatusDistribution,
        Self::ActiveEnrollmentsPerLevel,
        Self::CoursesPerTeacher,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::StudentsPerCourse => "students-per-course",
            Self::StatusDistribution => "enrollment-status-distribution",
            Self::ActiveEnrollmentsPerLevel => "active-enrollments-per-level",
            Self::CoursesPerTeacher => "courses-per-teacher",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::StudentsPerCourse => "Students per course",
            Self::StatusDistribution => "Enrollment status distribution",
            Self::ActiveEnrollmentsPerLevel => "Active enrollments per level",
            Self::CoursesPerTeacher => "Courses per teacher",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::StudentsPerCourse => {
                "How many students are enrolled in each course, most popular first."
            }
            Self::StatusDistribution => {
                "How many enrollments are active, completed or dropped across the academy."
            }
            Self::ActiveEnrollmentsPerLevel => {
                "How many active enrollments exist at each course level."
            }
            Self::CoursesPerTeacher => "How many courses each teacher is responsible for.",
        }
    }

    /// Result rows carry an entity id alongside the category.
    pub fn is_keyed(&self) -> bool {
        matches!(self, Self::StudentsPerCourse | Self::CoursesPerTeacher)
    }

    /// Column name of the category in rendered rows.
    pub fn category_column(&self) -> &'static str {
        self.category_field().field
    }

    /// Column name of the count in rendered rows.
    pub fn value_column(&self) -> &'static str {
        self.value_field().field
    }

    fn category_field(&self) -> ChartField {
        match self {
            Self::StudentsPerCourse => ChartField::nominal("title", "Course"),
            Self::StatusDistribution => ChartField::nominal("status", "Status"),
            Self::ActiveEnrollmentsPerLevel => ChartField::nominal("level", "Course level"),
            Self::CoursesPerTeacher => ChartField::nominal("teacher_name", "Teacher"),
        }
    }

    fn value_field(&self) -> ChartField {
        match self {
            Self::StudentsPerCourse => ChartField::quantitative("student_count", "Students"),
            Self::StatusDistribution => ChartField::quantitative("enrollment_count", "Enrollments"),
            Self::ActiveEnrollmentsPerLevel => {
                ChartField::quantitative("active_enrollments", "Active enrollments")
            }
            Self::CoursesPerTeacher => ChartField::quantitative("course_count", "Courses"),
        }
    }

    /// The one chart shape this query renders as.
    pub fn chart(&self, rows: usize) -> BarChart {
        let (category, value) = (self.category_field(), self.value_field());
        let builder = match self {
            Self::StudentsPerCourse => BarChartBuilder::horizontal(category, value, 30),
            Self::StatusDistribution | Self::ActiveEnrollmentsPerLevel => {
                BarChartBuilder::vertical(category, value)
            }
            Self::CoursesPerTeacher => {
                BarChartBuilder::horizontal(category, value, 25).integer_ticks()
            }
        };
        builder.build(rows)
    }
}

impl fmt::Display for NamedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for NamedQuery {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|q| q.slug() == s)
            .ok_or_else(|| s.to_owned())
    }
}

/// One aggregate row: a category and its count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightRow {
    /// Course or teacher id for keyed queries.
    pub key: Option<i32>,
    pub category: String,
    pub value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::Orientation;

    #[test]
    fn should_round_trip_every_slug() {
        for query in NamedQuery::ALL {
            assert_eq!(query.slug().parse::<NamedQuery>().unwrap(), query);
        }
    }

    #[test]
    fn should_reject_unknown_slug() {
        assert_eq!(
            "drop-table".parse::<NamedQuery>().unwrap_err(),
            "drop-table"
        );
    }

    #[test]
    fn should_key_chart_by_category_column() {
        for query in NamedQuery::ALL {
            let chart = query.chart(4);
            assert_eq!(chart.category.field, query.category_column());
            assert_eq!(chart.value.field, query.value_column());
            assert_eq!(chart.sort, "descending");
        }
    }

    #[test]
    fn should_use_integer_ticks_only_for_teacher_chart() {
        assert!(NamedQuery::CoursesPerTeacher.chart(3).integer_ticks);
        assert!(!NamedQuery::StudentsPerCourse.chart(3).integer_ticks);
    }

    #[test]
    fn should_draw_distributions_as_vertical_bars() {
        assert_eq!(
            NamedQuery::StatusDistribution.chart(3).orientation,
            Orientation::Vertical
        );
        assert_eq!(
            NamedQuery::StudentsPerCourse.chart(3).orientation,
            Orientation::Horizontal
        );
        assert_eq!(NamedQuery::CoursesPerTeacher.chart(40).height, 1000);
    }
}
