//! Deterministic dataset generation.
//!
//! A single [`ChaCha8Rng`] seeded from [`GeneratorConfig::seed`] drives every
//! draw. Tables are generated in a fixed order (teachers, students, courses,
//! enrollments) so the same configuration always yields the same rows.

use chrono::{Duration, NaiveDate};
use fake::Fake;
use fake::faker::lorem::raw::{Paragraph, Sentence};
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use academy_domain::course::Level;
use academy_domain::enrollment::{EnrollmentStatus, Grade};

use crate::config::{DateWindow, GeneratorConfig};
use crate::error::GenerationError;
use crate::record::{CourseRecord, Dataset, EnrollmentRecord, StudentRecord, TeacherRecord};

pub const TEACHER_EMAIL_DOMAIN: &str = "example.edu";
pub const STUDENT_EMAIL_DOMAIN: &str = "student.example.com";

pub const COURSE_TITLES: [&str; 10] = [
    "Python for Data Analysis",
    "Introduction to SQL",
    "Web Development with Flask",
    "Machine Learning Basics",
    "Data Visualization with Python",
    "Linux for Developers",
    "Docker & Containers",
    "Cloud Fundamentals",
    "Object-Oriented Programming",
    "Data Engineering Pipelines",
];

const CREDITS: [u8; 3] = [3, 4, 5];

/// Enrollment may open this many days before a course starts.
const ENROLL_BEFORE_START_DAYS: i64 = 30;
/// ...and close this many days after, or at the course end if sooner.
const ENROLL_AFTER_START_DAYS: i64 = 20;

const PAST_STATUS_WEIGHTS: [(EnrollmentStatus, u32); 3] = [
    (EnrollmentStatus::Completed, 75),
    (EnrollmentStatus::Active, 5),
    (EnrollmentStatus::Dropped, 20),
];

const FUTURE_STATUS_WEIGHTS: [(EnrollmentStatus, u32); 3] = [
    (EnrollmentStatus::Active, 70),
    (EnrollmentStatus::Completed, 0),
    (EnrollmentStatus::Dropped, 30),
];

const ONGOING_STATUS_WEIGHTS: [(EnrollmentStatus, u32); 3] = [
    (EnrollmentStatus::Active, 60),
    (EnrollmentStatus::Completed, 20),
    (EnrollmentStatus::Dropped, 20),
];

const GRADE_WEIGHTS: [(Grade, u32); 6] = [
    (Grade::A, 25),
    (Grade::B, 30),
    (Grade::C, 25),
    (Grade::D, 10),
    (Grade::E, 5),
    (Grade::F, 5),
];

/// Where the reference date falls relative to a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoursePhase {
    Past,
    Ongoing,
    Future,
}

impl CoursePhase {
    pub fn of(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Self {
        if end < today {
            Self::Past
        } else if start > today {
            Self::Future
        } else {
            Self::Ongoing
        }
    }

    fn status_weights(self) -> &'static [(EnrollmentStatus, u32)] {
        match self {
            Self::Past => &PAST_STATUS_WEIGHTS,
            Self::Ongoing => &ONGOING_STATUS_WEIGHTS,
            Self::Future => &FUTURE_STATUS_WEIGHTS,
        }
    }
}

/// The inclusive window an enrollment date is drawn from.
///
/// Opens 30 days before `start` and closes 20 days after it, or at `end` if
/// that comes first. An inverted window collapses to its opening day.
pub fn enrollment_window(start: NaiveDate, end: NaiveDate) -> DateWindow {
    let open = start - Duration::days(ENROLL_BEFORE_START_DAYS);
    let close = (start + Duration::days(ENROLL_AFTER_START_DAYS)).min(end);
    DateWindow::new(open, close.max(open))
}

/// `first.last<id>@domain`, keeping only lowercase ASCII alphanumerics of
/// each name part.
pub fn email_address(first_name: &str, last_name: &str, id: i32, domain: &str) -> String {
    fn slug(part: &str) -> String {
        part.chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
    format!("{}.{}{id}@{domain}", slug(first_name), slug(last_name))
}

/// Builds all four tables for `config`.
pub fn generate(config: &GeneratorConfig) -> Result<Dataset, GenerationError> {
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let teachers = generate_teachers(&mut rng, config.teachers);
    let students = generate_students(&mut rng, config);
    let courses = generate_courses(&mut rng, config, &teachers)?;
    let enrollments = generate_enrollments(&mut rng, config, &students, &courses)?;

    tracing::debug!(
        seed = config.seed,
        teachers = teachers.len(),
        students = students.len(),
        courses = courses.len(),
        enrollments = enrollments.len(),
        "dataset generated"
    );

    Ok(Dataset {
        teachers,
        students,
        courses,
        enrollments,
    })
}

// ── Tables ───────────────────────────────────────────────────────────────────

fn generate_teachers(rng: &mut ChaCha8Rng, count: usize) -> Vec<TeacherRecord> {
    (1..=count as i32)
        .map(|id| {
            let first_name: String = FirstName(EN).fake_with_rng(rng);
            let last_name: String = LastName(EN).fake_with_rng(rng);
            let bio: String = Sentence(EN, 10..15).fake_with_rng(rng);
            TeacherRecord {
                id,
                email: email_address(&first_name, &last_name, id, TEACHER_EMAIL_DOMAIN),
                first_name,
                last_name,
                bio,
            }
        })
        .collect()
}

fn generate_students(rng: &mut ChaCha8Rng, config: &GeneratorConfig) -> Vec<StudentRecord> {
    (1..=config.students as i32)
        .map(|id| {
            let first_name: String = FirstName(EN).fake_with_rng(rng);
            let last_name: String = LastName(EN).fake_with_rng(rng);
            StudentRecord {
                id,
                email: email_address(&first_name, &last_name, id, STUDENT_EMAIL_DOMAIN),
                first_name,
                last_name,
                registration_date: random_date(rng, config.registration_window),
            }
        })
        .collect()
}

fn generate_courses(
    rng: &mut ChaCha8Rng,
    config: &GeneratorConfig,
    teachers: &[TeacherRecord],
) -> Result<Vec<CourseRecord>, GenerationError> {
    (1..=config.courses as i32)
        .map(|id| {
            let teacher = teachers.choose(rng).ok_or(GenerationError::NoTeachers {
                courses: config.courses,
            })?;
            let level = *Level::ALL.choose(rng).unwrap_or(&Level::Beginner);
            let base_title = COURSE_TITLES.choose(rng).unwrap_or(&COURSE_TITLES[0]);
            let description: String = Paragraph(EN, 3..4).fake_with_rng(rng);
            let credits = *CREDITS.choose(rng).unwrap_or(&CREDITS[0]);
            let start_date = random_date(rng, config.course_start_window);
            let duration = rng.random_range(config.min_duration_days..=config.max_duration_days);
            Ok(CourseRecord {
                id,
                title: format!("{base_title} #{id}"),
                description,
                level,
                credits,
                start_date,
                end_date: start_date + Duration::days(duration),
                teacher_id: teacher.id,
            })
        })
        .collect()
}

fn generate_enrollments(
    rng: &mut ChaCha8Rng,
    config: &GeneratorConfig,
    students: &[StudentRecord],
    courses: &[CourseRecord],
) -> Result<Vec<EnrollmentRecord>, GenerationError> {
    let mut enrollments = Vec::new();
    let mut next_id = 1;

    for student in students {
        let count = rng.random_range(config.min_enrollments..=config.max_enrollments);
        let picked: Vec<&CourseRecord> = courses.choose_multiple(rng, count).collect();

        for course in picked {
            let window = enrollment_window(course.start_date, course.end_date);
            let enrollment_date = random_date(rng, window);
            let phase = CoursePhase::of(course.start_date, course.end_date, config.today);
            let status = weighted(rng, phase.status_weights())?;
            let final_grade = match status {
                EnrollmentStatus::Completed => Some(weighted(rng, &GRADE_WEIGHTS)?),
                _ => None,
            };
            enrollments.push(EnrollmentRecord {
                id: next_id,
                student_id: student.id,
                course_id: course.id,
                enrollment_date,
                status,
                final_grade,
            });
            next_id += 1;
        }
    }

    Ok(enrollments)
}

// ── Draws ────────────────────────────────────────────────────────────────────

fn random_date(rng: &mut ChaCha8Rng, window: DateWindow) -> NaiveDate {
    window.start + Duration::days(rng.random_range(0..=window.span_days().max(0)))
}

fn weighted<T: Copy>(rng: &mut ChaCha8Rng, choices: &[(T, u32)]) -> Result<T, GenerationError> {
    choices
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(value, _)| *value)
        .map_err(|e| GenerationError::Weights(e.to_string()))
}
