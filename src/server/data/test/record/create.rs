use super::*;

/// Tests creating a record.
///
/// Verifies that the repository stores the provided fields and assigns an id
/// and creation timestamp.
///
/// Expected: Ok with stored record returned
#[tokio::test]
async fn creates_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let before = chrono::Utc::now();
    let repo = RecordRepository::new(db);
    let record = repo
        .create(CreateRecordParam {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            message: "hi".to_string(),
        })
        .await?;

    assert!(!record.id.is_empty());
    assert_eq!(record.name, "A");
    assert_eq!(record.email, "a@x.com");
    assert_eq!(record.message, "hi");
    assert!(record.created_at >= before - chrono::Duration::seconds(1));

    let stored = entity::prelude::Record::find_by_id(record.id.clone())
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that created records appear exactly once in the listing.
///
/// Expected: Ok with exactly one matching record listed
#[tokio::test]
async fn created_record_is_listed_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_records(db, 2).await?;

    let repo = RecordRepository::new(db);
    let record = repo
        .create(CreateRecordParam {
            name: "Unique".to_string(),
            email: "unique@example.com".to_string(),
            message: "only once".to_string(),
        })
        .await?;

    let all = repo.get_all().await?;
    let matching: Vec<_> = all
        .iter()
        .filter(|r| r.name == "Unique" && r.email == "unique@example.com")
        .collect();

    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, record.id);

    Ok(())
}

/// Tests that every created record receives a distinct id.
///
/// Expected: Ok with differing ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_record_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RecordRepository::new(db);
    let param = CreateRecordParam {
        name: "Same".to_string(),
        email: "same@example.com".to_string(),
        message: "same".to_string(),
    };
    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that store failures surface as errors.
///
/// Creates a context without the record table so the insert fails.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_record_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RecordRepository::new(db);
    let result = repo
        .create(CreateRecordParam {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            message: "hi".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
