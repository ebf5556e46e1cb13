//! Record factory for creating test record entities.
//!
//! This module provides factory methods for creating record entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::record::RecordFactory;
///
/// let record = RecordFactory::new(&db)
///     .name("Ada")
///     .message("Hello there")
///     .build()
///     .await?;
/// ```
pub struct RecordFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    message: String,
}

impl<'a> RecordFactory<'a> {
    /// Creates a new RecordFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Sender {n}"` where n is auto-incremented
    /// - email: `"sender{n}@example.com"`
    /// - message: `"Message {n}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RecordFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            name: format!("Sender {}", n),
            email: format!("sender{}@example.com", n),
            message: format!("Message {}", n),
        }
    }

    /// Sets the sender name for the record.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the sender email for the record.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the message body for the record.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Builds and inserts the record entity into the database.
    ///
    /// The id is a fresh UUID v4 and the creation time is the current UTC time.
    ///
    /// # Returns
    /// - `Ok(entity::record::Model)` - Created record entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::record::Model, DbErr> {
        entity::record::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            message: ActiveValue::Set(self.message),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a record with default values.
///
/// Shorthand for `RecordFactory::new(db).build().await`.
pub async fn create_record(db: &DatabaseConnection) -> Result<entity::record::Model, DbErr> {
    RecordFactory::new(db).build().await
}

/// Creates `count` records with default values.
///
/// # Returns
/// - `Ok(Vec<entity::record::Model>)` - Created record entities in insertion order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_records(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::record::Model>, DbErr> {
    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        records.push(create_record(db).await?);
    }

    Ok(records)
}
