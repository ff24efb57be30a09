use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Student: one email per college
        manager
            .create_index(
                Index::create()
                    .name("uq_student_email_per_college")
                    .table(Student::Table)
                    .col(Student::Email)
                    .col(Student::CollegeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_college")
                    .table(Student::Table)
                    .col(Student::CollegeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_college")
                    .table(Event::Table)
                    .col(Event::CollegeId)
                    .to_owned(),
            )
            .await?;

        // Registration: a student registers for an event once
        manager
            .create_index(
                Index::create()
                    .name("uq_registration")
                    .table(Registration::Table)
                    .col(Registration::StudentId)
                    .col(Registration::EventId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_registration_event")
                    .table(Registration::Table)
                    .col(Registration::EventId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uq_student_email_per_college").table(Student::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_student_college").table(Student::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_event_college").table(Event::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uq_registration").table(Registration::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_registration_event").table(Registration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Student { Table, Email, CollegeId }

#[derive(DeriveIden)]
enum Event { Table, CollegeId }

#[derive(DeriveIden)]
enum Registration { Table, StudentId, EventId }
