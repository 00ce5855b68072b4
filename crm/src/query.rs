//! Derived projections over companies.
//!
//! Two independent, composable scopes: the status of the most recent
//! contact attempt, and the "contact ready" flag (no attempts yet, but a
//! phone or email to try). Both are expressed against the query builder, so
//! they evaluate in the database and compose with ordinary filters in any
//! order without touching stored data.

use entity::{company, contact_record};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, Func, Order, Query, SimpleExpr, SubQueryStatement};
use sea_orm::{
    ActiveEnum, Condition, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
    Select,
};
use uuid::Uuid;

/// Alias of the derived last-contact-status column.
pub const LAST_STATUS: &str = "last_status";
/// Alias of the derived contact-ready column.
pub const CONTACT_READY: &str = "contact_ready";

pub trait CompanyScopes: Sized {
    /// Append a `last_status` column: the status of the company's contact
    /// record with the greatest `contacted_at`, ties broken by highest id;
    /// null for companies without records.
    fn with_last_contact_status(self) -> Self;

    /// Keep companies whose derived last status equals `status`.
    /// Self-contained: works with or without the annotation applied.
    fn filter_last_contact_status(self, status: contact_record::Status) -> Self;

    /// Append a boolean `contact_ready` column: no contact records yet and
    /// a non-empty phone or email on file.
    fn with_contact_ready(self) -> Self;

    /// Keep companies whose derived readiness equals `ready`.
    fn filter_contact_ready(self, ready: bool) -> Self;
}

impl CompanyScopes for Select<company::Entity> {
    fn with_last_contact_status(self) -> Self {
        self.column_as(last_status_expr(), LAST_STATUS)
    }

    fn filter_last_contact_status(self, status: contact_record::Status) -> Self {
        self.filter(Expr::expr(last_status_expr()).eq(status.to_value()))
    }

    fn with_contact_ready(self) -> Self {
        self.column_as(contact_ready_expr(), CONTACT_READY)
    }

    fn filter_contact_ready(self, ready: bool) -> Self {
        if ready {
            self.filter(contact_ready_condition())
        } else {
            self.filter(contact_ready_condition().not())
        }
    }
}

/// The default admin listing: both annotations, newest first.
pub fn overview() -> Select<company::Entity> {
    company::Entity::find()
        .with_last_contact_status()
        .with_contact_ready()
        .order_by_desc(company::Column::CreatedAt)
}

fn last_status_expr() -> SimpleExpr {
    let latest = Query::select()
        .column((contact_record::Entity, contact_record::Column::Status))
        .from(contact_record::Entity)
        .and_where(
            Expr::col((contact_record::Entity, contact_record::Column::CompanyId))
                .equals((company::Entity, company::Column::Id)),
        )
        .order_by(
            (contact_record::Entity, contact_record::Column::ContactedAt),
            Order::Desc,
        )
        .order_by(
            (contact_record::Entity, contact_record::Column::Id),
            Order::Desc,
        )
        .limit(1)
        .take();
    SimpleExpr::SubQuery(None, Box::new(SubQueryStatement::SelectStatement(latest)))
}

fn contact_count_expr() -> SimpleExpr {
    let count = Query::select()
        .expr(Func::count(Expr::col((
            contact_record::Entity,
            contact_record::Column::Id,
        ))))
        .from(contact_record::Entity)
        .and_where(
            Expr::col((contact_record::Entity, contact_record::Column::CompanyId))
                .equals((company::Entity, company::Column::Id)),
        )
        .take();
    SimpleExpr::SubQuery(None, Box::new(SubQueryStatement::SelectStatement(count)))
}

fn contact_ready_condition() -> Condition {
    Condition::all()
        .add(Expr::expr(contact_count_expr()).eq(0))
        .add(
            Condition::any()
                .add(
                    Condition::all()
                        .add(Expr::col((company::Entity, company::Column::Phone)).is_not_null())
                        .add(Expr::col((company::Entity, company::Column::Phone)).ne("")),
                )
                .add(
                    Condition::all()
                        .add(Expr::col((company::Entity, company::Column::Email)).is_not_null())
                        .add(Expr::col((company::Entity, company::Column::Email)).ne("")),
                ),
        )
}

fn contact_ready_expr() -> SimpleExpr {
    Expr::case(contact_ready_condition(), Expr::val(true))
        .finally(Expr::val(false))
        .into()
}

/// Company row with the derived last contact status.
#[derive(Clone, Debug, FromQueryResult)]
pub struct CompanyLastStatus {
    pub id: Uuid,
    pub title: String,
    pub last_status: Option<contact_record::Status>,
}

/// Company row with the derived contact-ready flag.
#[derive(Clone, Debug, FromQueryResult)]
pub struct CompanyContactReady {
    pub id: Uuid,
    pub title: String,
    pub contact_ready: bool,
}

/// The admin list projection: both derived columns.
#[derive(Clone, Debug, FromQueryResult)]
pub struct CompanyOverview {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub in_liquidation: bool,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub last_status: Option<contact_record::Status>,
    pub contact_ready: bool,
    pub created_at: DateTimeWithTimeZone,
}
