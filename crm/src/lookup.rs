//! Get-or-create for the uniquely-named lookup entities.
//!
//! Matching is case-insensitive (the same rule the schema's `lower(name)`
//! indexes enforce), so "Zug" and "zug" resolve to one row.

use entity::{canton, company_type, legal_form, legal_seat};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

macro_rules! lookup_get_or_create {
    ($name:ident, $module:ident) => {
        pub async fn $name<C>(db: &C, name: &str) -> Result<$module::Model, DbErr>
        where
            C: ConnectionTrait,
        {
            let wanted = name.trim();
            let existing = $module::Entity::find()
                .filter(
                    Expr::expr(Func::lower(Expr::col($module::Column::Name)))
                        .eq(wanted.to_lowercase()),
                )
                .one(db)
                .await?;
            if let Some(found) = existing {
                return Ok(found);
            }

            $module::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(wanted.to_string()),
            }
            .insert(db)
            .await
        }
    };
}

lookup_get_or_create!(get_or_create_canton, canton);
lookup_get_or_create!(get_or_create_legal_seat, legal_seat);
lookup_get_or_create!(get_or_create_legal_form, legal_form);
lookup_get_or_create!(get_or_create_company_type, company_type);
