//! Create `feedback` table; at most one row per registration.
//!
//! Rating bounds (1..=5) are enforced by the model layer.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(pk_auto(Feedback::Id))
                    .col(integer(Feedback::RegistrationId).unique_key().not_null())
                    .col(integer(Feedback::Rating).not_null())
                    .col(ColumnDef::new(Feedback::Comment).text().null())
                    .col(timestamp_with_time_zone(Feedback::SubmittedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_registration")
                            .from(Feedback::Table, Feedback::RegistrationId)
                            .to(Registration::Table, Registration::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Feedback::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Feedback { Table, Id, RegistrationId, Rating, Comment, SubmittedAt }

#[derive(DeriveIden)]
enum Registration { Table, Id }
