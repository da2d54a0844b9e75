//! sea-orm entities for the DataAcademy schema.
//!
//! Enum-valued columns (`course.level`, `enrollment.status`,
//! `enrollment.final_grade`) are plain text here; the service maps them to
//! `academy_domain` types at the repository boundary.

pub mod course;
pub mod enrollment;
pub mod student;
pub mod teacher;
