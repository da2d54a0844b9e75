//! Shared HTTP and storage plumbing for DataAcademy services.

pub mod config;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod tracing;
