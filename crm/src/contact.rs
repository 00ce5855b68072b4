//! Contact attempt recording.

use chrono::Utc;
use entity::{company, contact_record, user};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use tracing::info;
use uuid::Uuid;

use crate::error::{CrmError, CrmResult};

/// Log a contact attempt against a company, stamped with the current time
/// and the acting user. Fails only if the company does not exist.
pub async fn record_contact<C>(
    db: &C,
    actor: &user::Model,
    company_id: Uuid,
    status: contact_record::Status,
    note: Option<String>,
) -> CrmResult<contact_record::Model>
where
    C: ConnectionTrait,
{
    company::Entity::find_by_id(company_id)
        .one(db)
        .await?
        .ok_or(CrmError::CompanyNotFound(company_id))?;

    let now: DateTimeWithTimeZone = Utc::now().into();
    let record = contact_record::ActiveModel {
        id: Set(Uuid::new_v4()),
        company_id: Set(company_id),
        user_id: Set(Some(actor.id)),
        status: Set(status),
        contacted_at: Set(now),
        note: Set(note),
    }
    .insert(db)
    .await?;

    info!(company = %company_id, user = %actor.id, status = ?record.status, "contact recorded");
    Ok(record)
}

/// The record the last-contact-status derivation picks: greatest
/// `contacted_at`, ties broken by highest id.
pub async fn latest_contact<C>(
    db: &C,
    company_id: Uuid,
) -> Result<Option<contact_record::Model>, DbErr>
where
    C: ConnectionTrait,
{
    contact_record::Entity::find()
        .filter(contact_record::Column::CompanyId.eq(company_id))
        .order_by_desc(contact_record::Column::ContactedAt)
        .order_by_desc(contact_record::Column::Id)
        .one(db)
        .await
}
