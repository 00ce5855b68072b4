use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Canton {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum LegalSeat {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum LegalForm {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum CompanyType {
    Table,
    Id,
    Name,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

const LOOKUP_TABLES: &[&str] = &["canton", "legal_seat", "legal_form", "company_type"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(lookup_table(Canton::Table, Canton::Id, Canton::Name))
            .await?;
        manager
            .create_table(lookup_table(LegalSeat::Table, LegalSeat::Id, LegalSeat::Name))
            .await?;
        manager
            .create_table(lookup_table(LegalForm::Table, LegalForm::Id, LegalForm::Name))
            .await?;
        manager
            .create_table(lookup_table(
                CompanyType::Table,
                CompanyType::Id,
                CompanyType::Name,
            ))
            .await?;

        // Case-insensitive uniqueness needs a functional index, which
        // sea-query cannot express. Plain SQL works on both Postgres and
        // SQLite.
        for table in LOOKUP_TABLES {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    "CREATE UNIQUE INDEX IF NOT EXISTS idx_{table}_name_lower ON {table} (lower(name))"
                ))
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompanyType::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LegalForm::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LegalSeat::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Canton::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

fn lookup_table<T>(table: T, id: T, name: T) -> TableCreateStatement
where
    T: IntoIden + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(ColumnDef::new(id).uuid().not_null().primary_key())
        .col(ColumnDef::new(name).string_len(100).not_null())
        .to_owned()
}
