//! Writes the seeded DataAcademy CSV datasets.
//!
//! # Usage
//!
//! ```bash
//! # Default dataset into ./data
//! cargo run -p academy-datagen --bin datagen
//!
//! # Smaller dataset with another seed
//! cargo run -p academy-datagen --bin datagen -- --out /tmp/academy --seed 7 --students 200
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use academy_datagen::config::GeneratorConfig;
use academy_datagen::{generator, output};

#[derive(Parser)]
#[command(about = "Generate the teacher, student, course and enrollment CSV files")]
struct Args {
    /// Directory the CSV files are written to
    #[arg(long, default_value = "data")]
    out: PathBuf,

    /// RNG seed; the same seed always produces identical files
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    teachers: Option<usize>,

    #[arg(long)]
    students: Option<usize>,

    #[arg(long)]
    courses: Option<usize>,

    #[arg(long)]
    min_enrollments: Option<usize>,

    #[arg(long)]
    max_enrollments: Option<usize>,

    /// Reference date for enrollment statuses (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,
}

impl Args {
    fn into_config(self) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            seed: self.seed.unwrap_or(defaults.seed),
            teachers: self.teachers.unwrap_or(defaults.teachers),
            students: self.students.unwrap_or(defaults.students),
            courses: self.courses.unwrap_or(defaults.courses),
            min_enrollments: self.min_enrollments.unwrap_or(defaults.min_enrollments),
            max_enrollments: self.max_enrollments.unwrap_or(defaults.max_enrollments),
            today: self.today.unwrap_or(defaults.today),
            ..defaults
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let out = args.out.clone();
    let config = args.into_config();

    tracing::info!(out = %out.display(), seed = config.seed, "generating dataset");
    let dataset = generator::generate(&config).context("invalid generator settings")?;
    let written = output::write_dataset(&out, &dataset)
        .with_context(|| format!("writing CSV files into {}", out.display()))?;

    let rows: usize = written.iter().map(|f| f.rows).sum();
    tracing::info!(files = written.len(), rows, "done");
    Ok(())
}
