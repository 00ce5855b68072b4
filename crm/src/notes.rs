//! Free-text notes attached to companies.

use chrono::Utc;
use entity::{company, company_note, user};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::error::{CrmError, CrmResult};

pub async fn add_note<C>(
    db: &C,
    actor: &user::Model,
    company_id: Uuid,
    body: impl Into<String>,
) -> CrmResult<company_note::Model>
where
    C: ConnectionTrait,
{
    company::Entity::find_by_id(company_id)
        .one(db)
        .await?
        .ok_or(CrmError::CompanyNotFound(company_id))?;

    let now: DateTimeWithTimeZone = Utc::now().into();
    let note = company_note::ActiveModel {
        id: Set(Uuid::new_v4()),
        company_id: Set(company_id),
        user_id: Set(Some(actor.id)),
        note: Set(body.into()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;
    Ok(note)
}

/// Notes for a company, oldest first.
pub async fn notes_for<C>(db: &C, company_id: Uuid) -> Result<Vec<company_note::Model>, DbErr>
where
    C: ConnectionTrait,
{
    company_note::Entity::find()
        .filter(company_note::Column::CompanyId.eq(company_id))
        .order_by_asc(company_note::Column::CreatedAt)
        .all(db)
        .await
}
