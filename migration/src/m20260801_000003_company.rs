use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Company {
    Table,
    Id,
    Title,
    Description,
    InLiquidation,
    Website,
    Phone,
    Email,
    CompanyTypeId,
    LegalSeatId,
    LegalFormId,
    CantonId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Canton {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum LegalSeat {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum LegalForm {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum CompanyType {
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
                    .table(Company::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Company::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Company::Title).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Company::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Company::InLiquidation)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Company::Website).string_len(512))
                    .col(ColumnDef::new(Company::Phone).string_len(30))
                    .col(ColumnDef::new(Company::Email).string_len(254))
                    .col(ColumnDef::new(Company::CompanyTypeId).uuid().not_null())
                    .col(ColumnDef::new(Company::LegalSeatId).uuid().not_null())
                    .col(ColumnDef::new(Company::LegalFormId).uuid().not_null())
                    .col(ColumnDef::new(Company::CantonId).uuid().not_null())
                    .col(
                        ColumnDef::new(Company::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Company::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_company_type")
                            .from(Company::Table, Company::CompanyTypeId)
                            .to(CompanyType::Table, CompanyType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_legal_seat")
                            .from(Company::Table, Company::LegalSeatId)
                            .to(LegalSeat::Table, LegalSeat::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_legal_form")
                            .from(Company::Table, Company::LegalFormId)
                            .to(LegalForm::Table, LegalForm::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_canton")
                            .from(Company::Table, Company::CantonId)
                            .to(Canton::Table, Canton::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_company_title")
                    .table(Company::Table)
                    .col(Company::Title)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_company_created_at")
                    .table(Company::Table)
                    .col(Company::CreatedAt)
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_company_company_type_id", Company::CompanyTypeId),
            ("idx_company_legal_seat_id", Company::LegalSeatId),
            ("idx_company_legal_form_id", Company::LegalFormId),
            ("idx_company_canton_id", Company::CantonId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Company::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Company::Table).if_exists().to_owned())
            .await
    }
}
