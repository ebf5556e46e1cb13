//! Record data repository for database operations
//!
//! Provides the `RecordRepository` for managing records in the database. Provides
//! methods to create, list, update, and delete records as well as handles the
//! conversion of database entity models into domain models for usage within services
//! & controllers.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::record::{CreateRecordParam, Record, UpdateRecordParam};

/// Repository providing database operations for record management.
pub struct RecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecordRepository<'a> {
    /// Creates a new RecordRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new record
    ///
    /// Assigns a fresh UUID v4 id and the current UTC time as creation timestamp.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the record fields
    ///
    /// # Returns
    /// - `Ok(Record)` - The stored record as a domain model
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateRecordParam) -> Result<Record, DbErr> {
        let record = entity::record::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            message: ActiveValue::Set(param.message),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Record::from_entity(record))
    }

    /// Gets all records in store order
    ///
    /// # Returns
    /// - `Ok(Vec<Record>)` - Every stored record
    /// - `Err(DbErr)` - Database error
    pub async fn get_all(&self) -> Result<Vec<Record>, DbErr> {
        let records = entity::prelude::Record::find().all(self.db).await?;

        Ok(records.into_iter().map(Record::from_entity).collect())
    }

    /// Updates the record based upon provided ID & update parameters
    ///
    /// # Arguments
    /// - `id` - ID of the record to update
    /// - `param` - Update parameters of the record fields to modify
    ///
    /// # Returns
    /// - `Ok(Some(Record))` - The record after the update
    /// - `Ok(None)` - No record exists with that ID
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update(&self, id: &str, param: UpdateRecordParam) -> Result<Option<Record>, DbErr> {
        let Some(existing) = entity::prelude::Record::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if param.is_empty() {
            return Ok(Some(Record::from_entity(existing)));
        }

        let mut active: entity::record::ActiveModel = existing.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(message) = param.message {
            active.message = ActiveValue::Set(message);
        }

        match active.update(self.db).await {
            Ok(updated) => Ok(Some(Record::from_entity(updated))),
            // Deleted between the lookup and the write
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Deletes the record of the provided ID
    ///
    /// # Returns
    /// - `Ok(true)` - The record was deleted
    /// - `Ok(false)` - No record exists with that ID
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Record::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
