//! Create `student` table with FK to `college`.
//!
//! Email uniqueness is scoped per college; see the index migration.
use sea_orm_migration::{prelude::*, schema::*};

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
                    .col(pk_auto(Student::Id))
                    .col(string_len(Student::Name, 255).not_null())
                    .col(string_len(Student::Email, 255).not_null())
                    .col(integer(Student::CollegeId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_college")
                            .from(Student::Table, Student::CollegeId)
                            .to(College::Table, College::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Student::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Student { Table, Id, Name, Email, CollegeId }

#[derive(DeriveIden)]
enum College { Table, Id }
