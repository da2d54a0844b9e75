pub mod chart;
pub mod insight;
pub mod repository;
pub mod types;
