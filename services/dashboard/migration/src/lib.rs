use sea_orm_migration::prelude::*;

mod m20250101_000001_create_teacher;
mod m20250101_000002_create_student;
mod m20250101_000003_create_course;
mod m20250101_000004_create_enrollment;
mod m20250101_000005_add_report_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_teacher::Migration),
            Box::new(m20250101_000002_create_student::Migration),
            Box::new(m20250101_000003_create_course::Migration),
            Box::new(m20250101_000004_create_enrollment::Migration),
            Box::new(m20250101_000005_add_report_indexes::Migration),
        ]
    }
}
