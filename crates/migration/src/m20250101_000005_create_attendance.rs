//! Create `attendance` table; at most one row per registration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendance::Id))
                    .col(integer(Attendance::RegistrationId).unique_key().not_null())
                    .col(timestamp_with_time_zone(Attendance::MarkedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_registration")
                            .from(Attendance::Table, Attendance::RegistrationId)
                            .to(Registration::Table, Registration::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Attendance::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Attendance { Table, Id, RegistrationId, MarkedAt }

#[derive(DeriveIden)]
enum Registration { Table, Id }
