use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum ContactRecord {
    Table,
    Id,
    CompanyId,
    UserId,
    Status,
    ContactedAt,
    Note,
}

#[derive(DeriveIden)]
enum CompanyNote {
    Table,
    Id,
    CompanyId,
    UserId,
    Note,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Company {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactRecord::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactRecord::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContactRecord::CompanyId).uuid().not_null())
                    .col(ColumnDef::new(ContactRecord::UserId).uuid())
                    .col(ColumnDef::new(ContactRecord::Status).string_len(20).not_null())
                    .col(
                        ColumnDef::new(ContactRecord::ContactedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContactRecord::Note).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_record_company")
                            .from(ContactRecord::Table, ContactRecord::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_record_user")
                            .from(ContactRecord::Table, ContactRecord::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contact_record_company_id")
                    .table(ContactRecord::Table)
                    .col(ContactRecord::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contact_record_contacted_at")
                    .table(ContactRecord::Table)
                    .col(ContactRecord::ContactedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CompanyNote::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompanyNote::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CompanyNote::CompanyId).uuid().not_null())
                    .col(ColumnDef::new(CompanyNote::UserId).uuid())
                    .col(ColumnDef::new(CompanyNote::Note).text().not_null())
                    .col(
                        ColumnDef::new(CompanyNote::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyNote::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_note_company")
                            .from(CompanyNote::Table, CompanyNote::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_note_user")
                            .from(CompanyNote::Table, CompanyNote::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_company_note_company_id")
                    .table(CompanyNote::Table)
                    .col(CompanyNote::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_company_note_created_at")
                    .table(CompanyNote::Table)
                    .col(CompanyNote::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompanyNote::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ContactRecord::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}
