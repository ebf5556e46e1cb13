use super::*;

/// Tests deleting a record.
///
/// Expected: Ok(true) with record removed
#[tokio::test]
async fn deletes_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let record = factory::create_record(db).await?;

    let repo = RecordRepository::new(db);
    let deleted = repo.delete(&record.id).await?;

    assert!(deleted);

    let check = entity::prelude::Record::find_by_id(record.id.clone())
        .one(db)
        .await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests that a deleted record no longer appears in the listing.
///
/// Expected: Ok with only the remaining record listed
#[tokio::test]
async fn deleted_record_is_not_listed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let records = factory::create_records(db, 2).await?;

    let repo = RecordRepository::new(db);
    repo.delete(&records[0].id).await?;

    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, records[1].id);

    Ok(())
}

/// Tests deleting a record that does not exist.
///
/// Expected: Ok(false) with store unchanged
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_record(db).await?;

    let repo = RecordRepository::new(db);
    let deleted = repo.delete("never-issued").await?;

    assert!(!deleted);

    let count = entity::prelude::Record::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
