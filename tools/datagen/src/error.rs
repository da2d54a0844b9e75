//! Error types for generation and CSV output.

use std::path::PathBuf;

use thiserror::Error;

/// A configuration the generator cannot satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("cannot assign {courses} courses without any teachers")]
    NoTeachers { courses: usize },

    #[error("students need up to {needed} distinct courses but only {available} exist")]
    NotEnoughCourses { needed: usize, available: usize },

    #[error("enrollment range {min}..={max} is empty")]
    InvalidEnrollmentRange { min: usize, max: usize },

    #[error("{name} window ends before it starts")]
    InvalidWindow { name: &'static str },

    #[error("invalid course duration range {min}..={max} days")]
    InvalidDuration { min: i64, max: i64 },

    #[error("weighted choice failed: {0}")]
    Weights(String),
}

/// Failure writing the CSV files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory '{path}'")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to flush '{path}'")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
