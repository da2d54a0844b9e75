//! One struct per CSV file. Field order is column order.

use chrono::NaiveDate;
use serde::Serialize;

use academy_domain::course::Level;
use academy_domain::enrollment::{EnrollmentStatus, Grade};

/// A dataset that lands in its own CSV file.
pub trait CsvTable: Serialize {
    const FILE_NAME: &'static str;
    const HEADER: &'static [&'static str];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherRecord {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: String,
}

impl CsvTable for TeacherRecord {
    const FILE_NAME: &'static str = "teachers.csv";
    const HEADER: &'static [&'static str] = &["id", "first_name", "last_name", "email", "bio"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub registration_date: NaiveDate,
}

impl CsvTable for StudentRecord {
    const FILE_NAME: &'static str = "students.csv";
    const HEADER: &'static [&'static str] = &[
        "id",
        "first_name",
        "last_name",
        "email",
        "registration_date",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub level: Level,
    pub credits: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub teacher_id: i32,
}

impl CsvTable for CourseRecord {
    const FILE_NAME: &'static str = "courses.csv";
    const HEADER: &'static [&'static str] = &[
        "id",
        "title",
        "description",
        "level",
        "credits",
        "start_date",
        "end_date",
        "teacher_id",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentRecord {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub enrollment_date: NaiveDate,
    pub status: EnrollmentStatus,
    /// Written as an empty field when absent.
    pub final_grade: Option<Grade>,
}

impl CsvTable for EnrollmentRecord {
    const FILE_NAME: &'static str = "enrollments.csv";
    const HEADER: &'static [&'static str] = &[
        "id",
        "student_id",
        "course_id",
        "enrollment_date",
        "status",
        "final_grade",
    ];
}

/// The four generated tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub teachers: Vec<TeacherRecord>,
    pub students: Vec<StudentRecord>,
    pub courses: Vec<CourseRecord>,
    pub enrollments: Vec<EnrollmentRecord>,
}
