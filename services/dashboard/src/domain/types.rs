use std::collections::BTreeSet;

use chrono::NaiveDate;

use academy_domain::course::Level;
use academy_domain::enrollment::{EnrollmentStatus, Grade};

/// Filter for the course overview. Every field is optional; an unset field
/// constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub teacher_id: Option<i32>,
    /// Empty means every level.
    pub levels: BTreeSet<Level>,
    /// Inclusive lower bound on `start_date`.
    pub start_from: Option<NaiveDate>,
    /// Inclusive upper bound on `start_date`.
    pub start_to: Option<NaiveDate>,
}

/// One AND-ed clause of a course query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoursePredicate {
    Teacher(i32),
    LevelIn(Vec<Level>),
    StartOnOrAfter(NaiveDate),
    StartOnOrBefore(NaiveDate),
}

impl CourseFilter {
    /// The clauses this filter contributes, in a stable order.
    ///
    /// A reversed date range still yields both bounds; the query then
    /// matches nothing, which is the intended outcome.
    pub fn predicates(&self) -> Vec<CoursePredicate> {
        let mut predicates = Vec::with_capacity(4);
        if let Some(id) = self.teacher_id {
            predicates.push(CoursePredicate::Teacher(id));
        }
        if !self.levels.is_empty() {
            predicates.push(CoursePredicate::LevelIn(
                self.levels.iter().copied().collect(),
            ));
        }
        if let Some(from) = self.start_from {
            predicates.push(CoursePredicate::StartOnOrAfter(from));
        }
        if let Some(to) = self.start_to {
            predicates.push(CoursePredicate::StartOnOrBefore(to));
        }
        predicates
    }

    /// Whether a course with these attributes passes every clause.
    pub fn matches(&self, teacher_id: i32, level: Level, start_date: NaiveDate) -> bool {
        self.predicates()
            .iter()
            .all(|p| p.matches(teacher_id, level, start_date))
    }
}

impl CoursePredicate {
    pub fn matches(&self, teacher_id: i32, level: Level, start_date: NaiveDate) -> bool {
        match self {
            Self::Teacher(id) => teacher_id == *id,
            Self::LevelIn(levels) => levels.contains(&level),
            Self::StartOnOrAfter(from) => start_date >= *from,
            Self::StartOnOrBefore(to) => start_date <= *to,
        }
    }
}

/// Course row annotated with its enrollment breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseStats {
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

/// Teacher entry for the overview's teacher picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherOption {
    pub id: i32,
    pub name: String,
}

/// Course entry for pickers on the add-student form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseOption {
    pub id: i32,
    pub title: String,
    pub level: Level,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub teacher_id: i32,
}

/// Earliest and latest course `start_date`, the overview's default range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub registration_date: NaiveDate,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One of a student's enrollments, joined with its course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentEnrollment {
    pub id: i32,
    pub course_title: String,
    pub level: Level,
    pub enrollment_date: NaiveDate,
    pub status: EnrollmentStatus,
    pub final_grade: Option<Grade>,
}

/// Validated student row about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub registration_date: NaiveDate,
}

/// Outcome of a successful add-student submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedStudent {
    pub student_id: i32,
    pub enrollment_count: usize,
}
