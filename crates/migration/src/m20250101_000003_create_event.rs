//! Create `event` table with FK to `college`.
//!
//! `event_type` stores the display value (Workshop, Fest, ...).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string_len(Event::Title, 255).not_null())
                    .col(string_len(Event::EventType, 32).not_null())
                    .col(timestamp_with_time_zone(Event::StartsAt).not_null())
                    .col(timestamp_with_time_zone(Event::EndsAt).not_null())
                    .col(integer(Event::CollegeId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_college")
                            .from(Event::Table, Event::CollegeId)
                            .to(College::Table, College::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Event::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Event { Table, Id, Title, EventType, StartsAt, EndsAt, CollegeId }

#[derive(DeriveIden)]
enum College { Table, Id }
