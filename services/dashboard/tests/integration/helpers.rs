use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use academy_dashboard::domain::repository::{
    CourseRepository, StudentRepository, TeacherRepository,
};
use academy_dashboard::domain::types::{
    CourseFilter, CourseOption, CourseStats, DateBounds, NewStudent, Student, StudentEnrollment,
    TeacherOption,
};
use academy_dashboard::error::DashboardError;
use academy_domain::course::Level;
use academy_domain::enrollment::{EnrollmentStatus, Grade};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Seed rows ────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct TeacherRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone)]
pub struct CourseRow {
    pub id: i32,
    pub title: String,
    pub level: Level,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub teacher_id: i32,
}

#[derive(Clone)]
pub struct EnrollmentRow {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub enrollment_date: NaiveDate,
    pub status: EnrollmentStatus,
    pub final_grade: Option<Grade>,
}

#[derive(Default)]
struct Tables {
    teachers: Vec<TeacherRow>,
    courses: Vec<CourseRow>,
    students: Vec<Student>,
    enrollments: Vec<EnrollmentRow>,
}

// ── InMemoryAcademy ──────────────────────────────────────────────────────────

/// The four tables held in memory, with the same query and write semantics
/// as the Postgres repositories.
#[derive(Clone, Default)]
pub struct InMemoryAcademy {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryAcademy {
    pub fn add_teacher(&self, id: i32, first_name: &str, last_name: &str) {
        self.tables.lock().unwrap().teachers.push(TeacherRow {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        });
    }

    pub fn add_course(&self, id: i32, level: Level, start_date: NaiveDate, teacher_id: i32) {
        self.tables.lock().unwrap().courses.push(CourseRow {
            id,
            title: format!("Course #{id}"),
            level,
            start_date,
            end_date: start_date + chrono::Duration::days(45),
            teacher_id,
        });
    }

    pub fn add_student(&self, id: i32, first_name: &str, last_name: &str, email: &str) {
        self.tables.lock().unwrap().students.push(Student {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            registration_date: date(2022, 5, 1),
        });
    }

    pub fn enroll(&self, student_id: i32, course_id: i32, status: EnrollmentStatus) {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.enrollments.len() as i32 + 1;
        tables.enrollments.push(EnrollmentRow {
            id,
            student_id,
            course_id,
            enrollment_date: date(2023, 1, 1) + chrono::Duration::days(i64::from(id)),
            status,
            final_grade: (status == EnrollmentStatus::Completed).then_some(Grade::B),
        });
    }

    pub fn student_count(&self) -> usize {
        self.tables.lock().unwrap().students.len()
    }

    pub fn enrollment_count(&self) -> usize {
        self.tables.lock().unwrap().enrollments.len()
    }

    pub fn enrollments_of(&self, student_id: i32) -> Vec<EnrollmentRow> {
        self.tables
            .lock()
            .unwrap()
            .enrollments
            .iter()
            .filter(|e| e.student_id == student_id)
            .cloned()
            .collect()
    }
}

fn count(enrollments: &[&EnrollmentRow], status: EnrollmentStatus) -> i64 {
    enrollments.iter().filter(|e| e.status == status).count() as i64
}

impl CourseRepository for InMemoryAcademy {
    async fn course_stats(
        &self,
        filter: &CourseFilter,
    ) -> Result<Vec<CourseStats>, DashboardError> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<CourseStats> = tables
            .courses
            .iter()
            .filter(|c| filter.matches(c.teacher_id, c.level, c.start_date))
            .filter_map(|c| {
                let teacher = tables.teachers.iter().find(|t| t.id == c.teacher_id)?;
                let enrolled: Vec<&EnrollmentRow> = tables
                    .enrollments
                    .iter()
                    .filter(|e| e.course_id == c.id)
                    .collect();
                Some(CourseStats {
                    id: c.id,
                    title: c.title.clone(),
                    level: c.level,
                    start_date: c.start_date,
                    end_date: c.end_date,
                    teacher_name: format!("{} {}", teacher.first_name, teacher.last_name),
                    total_enrollments: enrolled.len() as i64,
                    active_count: count(&enrolled, EnrollmentStatus::Active),
                    completed_count: count(&enrolled, EnrollmentStatus::Completed),
                    dropped_count: count(&enrolled, EnrollmentStatus::Dropped),
                })
            })
            .collect();
        rows.sort_by_key(|c| (c.start_date, c.id));
        Ok(rows)
    }

    async fn list_options(&self) -> Result<Vec<CourseOption>, DashboardError> {
        let tables = self.tables.lock().unwrap();
        let mut options: Vec<CourseOption> = tables
            .courses
            .iter()
            .map(|c| CourseOption {
                id: c.id,
                title: c.title.clone(),
                level: c.level,
                start_date: c.start_date,
                end_date: c.end_date,
                teacher_id: c.teacher_id,
            })
            .collect();
        options.sort_by_key(|c| (c.start_date, c.id));
        Ok(options)
    }

    async fn start_date_bounds(&self) -> Result<Option<DateBounds>, DashboardError> {
        let tables = self.tables.lock().unwrap();
        let starts = tables.courses.iter().map(|c| c.start_date);
        Ok(starts
            .clone()
            .min()
            .zip(starts.max())
            .map(|(min, max)| DateBounds { min, max }))
    }
}

impl TeacherRepository for InMemoryAcademy {
    async fn list_options(&self) -> Result<Vec<TeacherOption>, DashboardError> {
        let tables = self.tables.lock().unwrap();
        let mut options: Vec<TeacherOption> = tables
            .teachers
            .iter()
            .map(|t| TeacherOption {
                id: t.id,
                name: format!("{} {}", t.first_name, t.last_name),
            })
            .collect();
        options.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(options)
    }
}

impl StudentRepository for InMemoryAcademy {
    async fn search(&self, term: &str, limit: u64) -> Result<Vec<Student>, DashboardError> {
        let needle = term.to_lowercase();
        let tables = self.tables.lock().unwrap();
        let mut found: Vec<Student> = tables
            .students
            .iter()
            .filter(|s| {
                [
                    s.first_name.clone(),
                    s.last_name.clone(),
                    s.full_name(),
                    s.email.clone(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            (&a.last_name, &a.first_name, a.id).cmp(&(&b.last_name, &b.first_name, b.id))
        });
        found.truncate(limit as usize);
        Ok(found)
    }

    async fn sample(&self, limit: u64) -> Result<Vec<Student>, DashboardError> {
        let tables = self.tables.lock().unwrap();
        let mut students = tables.students.clone();
        students.sort_by_key(|s| s.id);
        students.truncate(limit as usize);
        Ok(students)
    }

    async fn enrollments(
        &self,
        student_id: i32,
    ) -> Result<Vec<StudentEnrollment>, DashboardError> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<StudentEnrollment> = tables
            .enrollments
            .iter()
            .filter(|e| e.student_id == student_id)
            .filter_map(|e| {
                let course = tables.courses.iter().find(|c| c.id == e.course_id)?;
                Some(StudentEnrollment {
                    id: e.id,
                    course_title: course.title.clone(),
                    level: course.level,
                    enrollment_date: e.enrollment_date,
                    status: e.status,
                    final_grade: e.final_grade,
                })
            })
            .collect();
        rows.sort_by(|a, b| (b.enrollment_date, b.id).cmp(&(a.enrollment_date, a.id)));
        Ok(rows)
    }

    async fn create_with_enrollments(
        &self,
        student: &NewStudent,
        course_ids: &[i32],
        enrollment_date: NaiveDate,
    ) -> Result<i32, DashboardError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.students.iter().any(|s| s.email == student.email) {
            return Err(DashboardError::DuplicateEmail);
        }
        if let Some(missing) = course_ids
            .iter()
            .find(|id| !tables.courses.iter().any(|c| c.id == **id))
        {
            return Err(DashboardError::WriteFailed(format!(
                "course {missing} does not exist"
            )));
        }
        let student_id = tables.students.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        tables.students.push(Student {
            id: student_id,
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            registration_date: student.registration_date,
        });
        for &course_id in course_ids {
            let id = tables.enrollments.len() as i32 + 1;
            tables.enrollments.push(EnrollmentRow {
                id,
                student_id,
                course_id,
                enrollment_date,
                status: EnrollmentStatus::Active,
                final_grade: None,
            });
        }
        Ok(student_id)
    }
}

/// Two teachers, six courses across 2023 and 2024, three students.
///
/// Course 5 has no enrollments.
pub fn seeded_academy() -> InMemoryAcademy {
    let academy = InMemoryAcademy::default();
    academy.add_teacher(1, "Grace", "Hopper");
    academy.add_teacher(2, "Alan", "Turing");

    academy.add_course(1, Level::Beginner, date(2023, 1, 1), 1);
    academy.add_course(2, Level::Beginner, date(2023, 3, 10), 2);
    academy.add_course(3, Level::Advanced, date(2023, 2, 1), 1);
    academy.add_course(4, Level::Beginner, date(2023, 6, 30), 2);
    academy.add_course(5, Level::Intermediate, date(2023, 4, 15), 1);
    academy.add_course(6, Level::Beginner, date(2024, 1, 8), 1);

    academy.add_student(1, "Amanda", "Gill", "amanda.gill1@student.example.com");
    academy.add_student(2, "Brian", "Gillespie", "brian.gillespie2@student.example.com");
    academy.add_student(3, "Chloe", "Ng", "chloe.ng3@student.example.com");

    academy.enroll(1, 1, EnrollmentStatus::Completed);
    academy.enroll(2, 1, EnrollmentStatus::Dropped);
    academy.enroll(3, 1, EnrollmentStatus::Active);
    academy.enroll(1, 2, EnrollmentStatus::Active);
    academy.enroll(2, 3, EnrollmentStatus::Completed);
    academy.enroll(3, 6, EnrollmentStatus::Active);
    academy
}
