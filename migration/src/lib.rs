pub use sea_orm_migration::prelude::*;

mod m20260801_000001_lookup_tables;
mod m20260801_000002_users;
mod m20260801_000003_company;
mod m20260801_000004_contact_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_lookup_tables::Migration),
            Box::new(m20260801_000002_users::Migration),
            Box::new(m20260801_000003_company::Migration),
            Box::new(m20260801_000004_contact_log::Migration),
        ]
    }
}
