use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Student::FirstName).text().not_null())
                    .col(ColumnDef::new(Student::LastName).text().not_null())
                    .col(ColumnDef::new(Student::Email).text().not_null())
                    .col(
                        ColumnDef::new(Student::RegistrationDate)
                            .date()
                            .not_null()
                            .default(Expr::current_date()),
                    )
                    .to_owned(),
            )
            .await?;
        // The constraint name is what the dashboard matches to report a
        // duplicate email.
        manager
            .create_index(
                Index::create()
                    .table(Student::Table)
                    .col(Student::Email)
                    .unique()
                    .name("student_email_key")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Student {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    RegistrationDate,
}
