use super::*;

/// Tests listing an empty store.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RecordRepository::new(db);
    let records = repo.get_all().await?;

    assert!(records.is_empty());

    Ok(())
}

/// Tests listing all stored records.
///
/// Expected: Ok with every created record present
#[tokio::test]
async fn returns_all_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_records(db, 3).await?;

    let repo = RecordRepository::new(db);
    let records = repo.get_all().await?;

    assert_eq!(records.len(), 3);
    for model in created {
        assert!(records.iter().any(|r| r.id == model.id && r.name == model.name));
    }

    Ok(())
}

/// Tests that store failures surface as errors.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_record_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RecordRepository::new(db);
    let result = repo.get_all().await;

    assert!(result.is_err());

    Ok(())
}
