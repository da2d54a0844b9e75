pub mod course_overview;
pub mod insight;
pub mod lookup;
pub mod student;
