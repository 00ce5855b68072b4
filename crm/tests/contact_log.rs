mod common;

use common::{at_minute, seed_company, seed_contact, seed_lookups, seed_user, test_db};
use crm::CrmError;
use crm::contact::{latest_contact, record_contact};
use crm::notes::{add_note, notes_for};
use entity::user::Role;
use entity::{canton, contact_record::Status};
use sea_orm::{EntityTrait, ModelTrait};
use uuid::Uuid;

#[tokio::test]
async fn record_contact_stamps_actor_and_time() {
    let db = test_db().await;
    let lookups = seed_lookups(&db).await;
    let co = seed_company(&db, &lookups, "ACME AG", None, None).await;
    let operator = seed_user(&db, "operator", Role::Operator).await;

    let record = record_contact(&db, &operator, co.id, Status::Agreed, Some("call went well".into()))
        .await
        .unwrap();
    assert_eq!(record.company_id, co.id);
    assert_eq!(record.user_id, Some(operator.id));
    assert_eq!(record.status, Status::Agreed);
    assert_eq!(record.note.as_deref(), Some("call went well"));

    let latest = latest_contact(&db, co.id).await.unwrap().unwrap();
    assert_eq!(latest.id, record.id);
}

#[tokio::test]
async fn record_contact_rejects_unknown_company() {
    let db = test_db().await;
    let _ = seed_lookups(&db).await;
    let operator = seed_user(&db, "operator", Role::Operator).await;

    let missing = Uuid::new_v4();
    let err = record_contact(&db, &operator, missing, Status::Decline, None)
        .await
        .unwrap_err();
    match err {
        CrmError::CompanyNotFound(id) => assert_eq!(id, missing),
        other => panic!("expected CompanyNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn latest_contact_matches_derivation_order() {
    let db = test_db().await;
    let lookups = seed_lookups(&db).await;
    let co = seed_company(&db, &lookups, "ACME AG", None, None).await;
    seed_contact(&db, co.id, Status::Decline, at_minute(1)).await;
    let newest = seed_contact(&db, co.id, Status::Repeat, at_minute(9)).await;
    seed_contact(&db, co.id, Status::Agreed, at_minute(4)).await;

    let latest = latest_contact(&db, co.id).await.unwrap().unwrap();
    assert_eq!(latest.id, newest.id);
    assert_eq!(latest.status, Status::Repeat);
}

#[tokio::test]
async fn notes_are_listed_oldest_first() {
    let db = test_db().await;
    let lookups = seed_lookups(&db).await;
    let co = seed_company(&db, &lookups, "ACME AG", None, None).await;
    let manager = seed_user(&db, "manager", Role::Manager).await;

    add_note(&db, &manager, co.id, "first impression").await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    add_note(&db, &manager, co.id, "second visit").await.unwrap();

    let notes = notes_for(&db, co.id).await.unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].note, "first impression");
    assert_eq!(notes[1].note, "second visit");
    assert!(notes.iter().all(|n| n.user_id == Some(manager.id)));

    let err = add_note(&db, &manager, Uuid::new_v4(), "nowhere").await.unwrap_err();
    assert!(matches!(err, CrmError::CompanyNotFound(_)));
}

#[tokio::test]
async fn referenced_lookup_rows_cannot_be_deleted() {
    let db = test_db().await;
    let lookups = seed_lookups(&db).await;
    seed_company(&db, &lookups, "ACME AG", None, None).await;

    let canton = canton::Entity::find_by_id(lookups.canton.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert!(canton.delete(&db).await.is_err());
}
