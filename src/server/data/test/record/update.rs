use super::*;

/// Tests updating a single field.
///
/// Verifies that only the provided field changes.
///
/// Expected: Ok(Some) with name updated, other fields unchanged
#[tokio::test]
async fn updates_name_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let record = factory::create_record(db).await?;

    let repo = RecordRepository::new(db);
    let updated = repo
        .update(
            &record.id,
            UpdateRecordParam {
                name: Some("B".to_string()),
                ..Default::default()
            },
        )
        .await?
        .expect("record should exist");

    assert_eq!(updated.id, record.id);
    assert_eq!(updated.name, "B");
    assert_eq!(updated.email, record.email);
    assert_eq!(updated.message, record.message);
    assert_eq!(updated.created_at, record.created_at);

    Ok(())
}

/// Tests updating every field at once.
///
/// Expected: Ok(Some) with all fields updated and persisted
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let record = factory::create_record(db).await?;

    let repo = RecordRepository::new(db);
    repo.update(
        &record.id,
        UpdateRecordParam {
            name: Some("New Name".to_string()),
            email: Some("new@example.com".to_string()),
            message: Some("New message".to_string()),
        },
    )
    .await?;

    let stored = entity::prelude::Record::find_by_id(record.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "New Name");
    assert_eq!(stored.email, "new@example.com");
    assert_eq!(stored.message, "New message");

    Ok(())
}

/// Tests an update without any fields.
///
/// Expected: Ok(Some) with the record unchanged
#[tokio::test]
async fn empty_update_returns_current_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let record = factory::create_record(db).await?;

    let repo = RecordRepository::new(db);
    let updated = repo
        .update(&record.id, UpdateRecordParam::default())
        .await?
        .unwrap();

    assert_eq!(updated.name, record.name);
    assert_eq!(updated.email, record.email);

    Ok(())
}

/// Tests updating a record that does not exist.
///
/// Verifies that no record is created or modified.
///
/// Expected: Ok(None) with store unchanged
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let record = factory::create_record(db).await?;

    let repo = RecordRepository::new(db);
    let result = repo
        .update(
            "00000000-0000-0000-0000-000000000000",
            UpdateRecordParam {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    let count = entity::prelude::Record::find().count(db).await?;
    assert_eq!(count, 1);
    let stored = entity::prelude::Record::find_by_id(record.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored, record);

    Ok(())
}
