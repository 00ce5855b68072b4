//! Transactional bulk import of companies from pre-parsed rows.
//!
//! File and argument parsing live with the caller; this layer takes rows
//! that already carry lookup names and loads everything inside one
//! transaction, so a failed import leaves the registry untouched.

use chrono::Utc;
use entity::{company, contact_record};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, TransactionTrait,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::error::CrmResult;
use crate::lookup;

/// One parsed import row. Lookup fields carry names, not ids; they are
/// resolved (or created) during the import.
#[derive(Clone, Debug, Deserialize)]
pub struct ImportRow {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub in_liquidation: bool,
    pub canton: String,
    pub company_type: String,
    pub legal_seat: String,
    pub legal_form: String,
    /// Marks a company that was already contacted before the import.
    #[serde(default)]
    pub visited: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ImportOptions {
    /// Wipe existing companies and their contact records before loading.
    pub replace: bool,
    /// Status stamped on the initial contact record of visited rows.
    /// Visited rows without a configured status get no record.
    pub visited_status: Option<contact_record::Status>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ImportSummary {
    pub companies: usize,
    pub contacts: usize,
}

pub async fn import_companies(
    db: &DatabaseConnection,
    rows: &[ImportRow],
    options: &ImportOptions,
) -> CrmResult<ImportSummary> {
    let txn = db.begin().await?;

    if options.replace {
        contact_record::Entity::delete_many().exec(&txn).await?;
        company::Entity::delete_many().exec(&txn).await?;
    }

    let mut summary = ImportSummary::default();
    for row in rows {
        let canton = lookup::get_or_create_canton(&txn, &row.canton).await?;
        let company_type = lookup::get_or_create_company_type(&txn, &row.company_type).await?;
        let legal_seat = lookup::get_or_create_legal_seat(&txn, &row.legal_seat).await?;
        let legal_form = lookup::get_or_create_legal_form(&txn, &row.legal_form).await?;

        let now: DateTimeWithTimeZone = Utc::now().into();
        let created = company::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(row.title.clone()),
            description: Set(row.description.clone()),
            in_liquidation: Set(row.in_liquidation),
            website: Set(None),
            phone: Set(None),
            email: Set(None),
            company_type_id: Set(company_type.id),
            legal_seat_id: Set(legal_seat.id),
            legal_form_id: Set(legal_form.id),
            canton_id: Set(canton.id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;
        summary.companies += 1;

        if row.visited {
            if let Some(status) = options.visited_status {
                contact_record::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    company_id: Set(created.id),
                    user_id: Set(None),
                    status: Set(status),
                    contacted_at: Set(now),
                    note: Set(None),
                }
                .insert(&txn)
                .await?;
                summary.contacts += 1;
            }
        }
    }

    txn.commit().await?;
    info!(
        companies = summary.companies,
        contacts = summary.contacts,
        replaced = options.replace,
        "company import finished"
    );
    Ok(summary)
}
