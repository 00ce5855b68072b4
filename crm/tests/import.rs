mod common;

use common::{at_minute, seed_company, seed_contact, seed_lookups, test_db};
use crm::import::{ImportOptions, ImportRow, import_companies};
use entity::{canton, company, contact_record, contact_record::Status};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;

fn row(title: &str, canton: &str, visited: bool) -> ImportRow {
    ImportRow {
        title: title.to_string(),
        description: String::new(),
        in_liquidation: false,
        canton: canton.to_string(),
        company_type: "Fiduciary".to_string(),
        legal_seat: "Zug City".to_string(),
        legal_form: "AG".to_string(),
        visited,
    }
}

#[tokio::test]
async fn import_creates_companies_and_initial_contacts() {
    let db = test_db().await;

    let rows = vec![
        row("Fresh AG", "Zug", false),
        row("Visited AG", "Zug", true),
    ];
    let options = ImportOptions {
        replace: false,
        visited_status: Some(Status::Repeat),
    };
    let summary = import_companies(&db, &rows, &options).await.unwrap();
    assert_eq!(summary.companies, 2);
    assert_eq!(summary.contacts, 1);

    let visited = company::Entity::find()
        .filter(company::Column::Title.eq("Visited AG"))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    let records = contact_record::Entity::find()
        .filter(contact_record::Column::CompanyId.eq(visited.id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, Status::Repeat);
    assert_eq!(records[0].user_id, None);
}

#[tokio::test]
async fn import_reuses_lookups_case_insensitively() {
    let db = test_db().await;

    let rows = vec![
        row("One AG", "Zug", false),
        row("Two AG", "zug", false),
        row("Three AG", "ZUG", false),
    ];
    import_companies(&db, &rows, &ImportOptions::default())
        .await
        .unwrap();

    assert_eq!(canton::Entity::find().count(&db).await.unwrap(), 1);
    let kept = canton::Entity::find().one(&db).await.unwrap().unwrap();
    assert_eq!(kept.name, "Zug");
}

#[tokio::test]
async fn visited_rows_without_status_get_no_record() {
    let db = test_db().await;

    let rows = vec![row("Visited AG", "Zug", true)];
    let summary = import_companies(&db, &rows, &ImportOptions::default())
        .await
        .unwrap();
    assert_eq!(summary.companies, 1);
    assert_eq!(summary.contacts, 0);
    assert_eq!(contact_record::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn replace_wipes_previous_registry() {
    let db = test_db().await;
    let lookups = seed_lookups(&db).await;
    let old = seed_company(&db, &lookups, "Old AG", None, None).await;
    seed_contact(&db, old.id, Status::Decline, at_minute(1)).await;

    let rows = vec![row("New AG", "Zug", false)];
    let options = ImportOptions {
        replace: true,
        visited_status: None,
    };
    import_companies(&db, &rows, &options).await.unwrap();

    let titles: Vec<String> = company::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.title)
        .collect();
    assert_eq!(titles, vec!["New AG".to_string()]);
    assert_eq!(contact_record::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn rows_deserialize_from_tabular_json() {
    let row: ImportRow = serde_json::from_value(json!({
        "title": "Parsed AG",
        "canton": "Bern",
        "company_type": "Holding",
        "legal_seat": "Bern City",
        "legal_form": "GmbH",
        "visited": true
    }))
    .unwrap();
    assert_eq!(row.title, "Parsed AG");
    assert!(row.visited);
    assert!(!row.in_liquidation);
    assert_eq!(row.description, "");

    let db = test_db().await;
    let summary = import_companies(&db, &[row], &ImportOptions::default())
        .await
        .unwrap();
    assert_eq!(summary.companies, 1);
}
