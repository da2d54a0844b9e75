use chrono::NaiveDate;

use crate::error::GenerationError;

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Days from `start` to `end`.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Everything that determines a generated dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub teachers: usize,
    pub students: usize,
    pub courses: usize,
    pub min_enrollments: usize,
    pub max_enrollments: usize,
    /// Reference date deciding whether a course is past, ongoing or future.
    pub today: NaiveDate,
    pub registration_window: DateWindow,
    pub course_start_window: DateWindow,
    pub min_duration_days: i64,
    pub max_duration_days: i64,
}

const fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            teachers: 40,
            students: 1500,
            courses: 120,
            min_enrollments: 1,
            max_enrollments: 4,
            today: ymd(2025, 1, 15),
            registration_window: DateWindow::new(ymd(2021, 1, 1), ymd(2025, 1, 1)),
            course_start_window: DateWindow::new(ymd(2023, 1, 1), ymd(2025, 12, 31)),
            min_duration_days: 30,
            max_duration_days: 90,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.courses > 0 && self.teachers == 0 {
            return Err(GenerationError::NoTeachers {
                courses: self.courses,
            });
        }
        if self.min_enrollments > self.max_enrollments {
            return Err(GenerationError::InvalidEnrollmentRange {
                min: self.min_enrollments,
                max: self.max_enrollments,
            });
        }
        if self.students > 0 && self.max_enrollments > self.courses {
            return Err(GenerationError::NotEnoughCourses {
                needed: self.max_enrollments,
                available: self.courses,
            });
        }
        if self.registration_window.span_days() < 0 {
            return Err(GenerationError::InvalidWindow {
                name: "registration",
            });
        }
        if self.course_start_window.span_days() < 0 {
            return Err(GenerationError::InvalidWindow {
                name: "course start",
            });
        }
        if self.min_duration_days < 1 || self.min_duration_days > self.max_duration_days {
            return Err(GenerationError::InvalidDuration {
                min: self.min_duration_days,
                max: self.max_duration_days,
            });
        }
        Ok(())
    }
}
