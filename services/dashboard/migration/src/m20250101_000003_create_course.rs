use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Course::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Course::Title).text().not_null())
                    .col(ColumnDef::new(Course::Description).text())
                    .col(ColumnDef::new(Course::Level).text().not_null())
                    .col(ColumnDef::new(Course::Credits).integer().not_null())
                    .col(ColumnDef::new(Course::StartDate).date().not_null())
                    .col(ColumnDef::new(Course::EndDate).date().not_null())
                    .col(ColumnDef::new(Course::TeacherId).integer().not_null())
                    .check(Expr::col(Course::Level).is_in(["Beginner", "Intermediate", "Advanced"]))
                    .check(Expr::col(Course::EndDate).gt(Expr::col(Course::StartDate)))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Course::Table, Course::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Course {
    Table,
    Id,
    Title,
    Description,
    Level,
    Credits,
    StartDate,
    EndDate,
    TeacherId,
}

#[derive(Iden)]
enum Teacher {
    Table,
    Id,
}
