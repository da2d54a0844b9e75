pub mod course;
pub mod health;
pub mod insight;
pub mod student;
pub mod teacher;
