#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use entity::{canton, company, company_type, contact_record, legal_form, legal_seat, user};
use migration::{Migrator, MigratorTrait};
use platform_db::DatabaseSettings;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, Database, DatabaseConnection};
use uuid::Uuid;

pub const TEST_DB_ENV: &str = "KONTOR_TEST_DATABASE_URL";

/// Fresh database with the full schema applied. In-memory SQLite unless the
/// environment points at a real server.
pub async fn test_db() -> DatabaseConnection {
    platform_obs::init_test_tracing();
    let settings = DatabaseSettings::new(TEST_DB_ENV);
    let db = match settings.database_url() {
        Ok(_) => settings.connect().await.expect("connect to test database"),
        Err(_) => Database::connect("sqlite::memory:")
            .await
            .expect("connect to in-memory sqlite"),
    };
    Migrator::up(&db, None).await.expect("apply migrations");
    db
}

/// Fixed base instant with whole seconds, so timestamp ordering is exact on
/// every backend.
pub fn at_minute(minute: i64) -> DateTimeWithTimeZone {
    (Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).unwrap() + Duration::minutes(minute)).into()
}

pub struct Lookups {
    pub canton: canton::Model,
    pub company_type: company_type::Model,
    pub legal_seat: legal_seat::Model,
    pub legal_form: legal_form::Model,
}

pub async fn seed_lookups(db: &DatabaseConnection) -> Lookups {
    Lookups {
        canton: crm::lookup::get_or_create_canton(db, "Zug").await.unwrap(),
        company_type: crm::lookup::get_or_create_company_type(db, "Fiduciary")
            .await
            .unwrap(),
        legal_seat: crm::lookup::get_or_create_legal_seat(db, "Zug City")
            .await
            .unwrap(),
        legal_form: crm::lookup::get_or_create_legal_form(db, "AG").await.unwrap(),
    }
}

pub async fn seed_company(
    db: &DatabaseConnection,
    lookups: &Lookups,
    title: &str,
    phone: Option<&str>,
    email: Option<&str>,
) -> company::Model {
    let now = at_minute(0);
    company::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        description: Set(String::new()),
        in_liquidation: Set(false),
        website: Set(None),
        phone: Set(phone.map(str::to_string)),
        email: Set(email.map(str::to_string)),
        company_type_id: Set(lookups.company_type.id),
        legal_seat_id: Set(lookups.legal_seat.id),
        legal_form_id: Set(lookups.legal_form.id),
        canton_id: Set(lookups.canton.id),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("seed company")
}

pub async fn seed_user(
    db: &DatabaseConnection,
    username: &str,
    role: user::Role,
) -> user::Model {
    let now = at_minute(0);
    user::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(username.to_string()),
        email: Set(None),
        display_name: Set(username.to_string()),
        role: Set(role),
        is_superuser: Set(false),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("seed user")
}

/// Insert a contact record directly, bypassing the service, so tests control
/// the timestamp.
pub async fn seed_contact(
    db: &DatabaseConnection,
    company_id: Uuid,
    status: contact_record::Status,
    contacted_at: DateTimeWithTimeZone,
) -> contact_record::Model {
    contact_record::ActiveModel {
        id: Set(Uuid::new_v4()),
        company_id: Set(company_id),
        user_id: Set(None),
        status: Set(status),
        contacted_at: Set(contacted_at),
        note: Set(None),
    }
    .insert(db)
    .await
    .expect("seed contact record")
}
