use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enrollment::StudentId).integer().not_null())
                    .col(ColumnDef::new(Enrollment::CourseId).integer().not_null())
                    .col(
                        ColumnDef::new(Enrollment::EnrollmentDate)
                            .date()
                            .not_null()
                            .default(Expr::current_date()),
                    )
                    .col(
                        ColumnDef::new(Enrollment::Status)
                            .text()
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Enrollment::FinalGrade).char_len(1))
                    .check(Expr::col(Enrollment::Status).is_in(["active", "completed", "dropped"]))
                    // A grade exists only for a completed enrollment.
                    .check(
                        Expr::col(Enrollment::FinalGrade)
                            .is_null()
                            .or(Expr::col(Enrollment::Status).eq("completed")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollment::Table, Enrollment::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollment::Table, Enrollment::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Enrollment {
    Table,
    Id,
    StudentId,
    CourseId,
    EnrollmentDate,
    Status,
    FinalGrade,
}

#[derive(Iden)]
enum Student {
    Table,
    Id,
}

#[derive(Iden)]
enum Course {
    Table,
    Id,
}
