use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Enrollment::Table)
                    .col(Enrollment::CourseId)
                    .name("idx_enrollment_course_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Enrollment::Table)
                    .col(Enrollment::StudentId)
                    .name("idx_enrollment_student_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Course::Table)
                    .col(Course::StartDate)
                    .name("idx_course_start_date")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_course_start_date").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_enrollment_student_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_enrollment_course_id").to_owned())
            .await
    }
}

#[derive(Iden)]
enum Enrollment {
    Table,
    CourseId,
    StudentId,
}

#[derive(Iden)]
enum Course {
    Table,
    StartDate,
}
