//! Seeded synthetic data for the DataAcademy schema.
//!
//! [`generator::generate`] builds the four datasets in memory from a
//! [`config::GeneratorConfig`]; [`output::write_dataset`] writes them as CSV.
//! The same configuration always yields byte-identical files.

pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod record;
