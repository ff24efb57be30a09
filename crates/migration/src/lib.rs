//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_college;
mod m20250101_000002_create_student;
mod m20250101_000003_create_event;
mod m20250101_000004_create_registration;
mod m20250101_000005_create_attendance;
mod m20250101_000006_create_feedback;
mod m20250101_000007_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_college::Migration),
            Box::new(m20250101_000002_create_student::Migration),
            Box::new(m20250101_000003_create_event::Migration),
            Box::new(m20250101_000004_create_registration::Migration),
            Box::new(m20250101_000005_create_attendance::Migration),
            Box::new(m20250101_000006_create_feedback::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000007_add_indexes::Migration),
        ]
    }
}
