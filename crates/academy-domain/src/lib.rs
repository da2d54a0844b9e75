//! Domain types shared by the DataAcademy dashboard and data generator.
//!
//! This crate contains only pure types with no framework dependencies.
//! Storage adapters convert to and from these at their boundary.

pub mod course;
pub mod enrollment;
