use sea_orm::DatabaseConnection;

use crate::server::{
    data::record::RecordRepository,
    error::AppError,
    model::record::{CreateRecordParam, Record, UpdateRecordParam},
};

pub const RECORD_NOT_FOUND: &str = "Data not found!";

pub struct RecordService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecordService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new record
    pub async fn create(&self, param: CreateRecordParam) -> Result<Record, AppError> {
        RecordRepository::new(self.db)
            .create(param)
            .await
            .map_err(AppError::store("Failed to store data!"))
    }

    /// Lists every stored record
    pub async fn list(&self) -> Result<Vec<Record>, AppError> {
        RecordRepository::new(self.db)
            .get_all()
            .await
            .map_err(AppError::store("Failed to fetch data!"))
    }

    /// Applies a partial update
    /// Returns `AppError::NotFound` if no record has the given id
    pub async fn update(&self, id: &str, param: UpdateRecordParam) -> Result<Record, AppError> {
        RecordRepository::new(self.db)
            .update(id, param)
            .await
            .map_err(AppError::store("Failed to update data!"))?
            .ok_or_else(|| AppError::NotFound(RECORD_NOT_FOUND.to_string()))
    }

    /// Deletes a record
    /// Returns `AppError::NotFound` if no record has the given id
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let deleted = RecordRepository::new(self.db)
            .delete(id)
            .await
            .map_err(AppError::store("Failed to delete data!"))?;

        if !deleted {
            return Err(AppError::NotFound(RECORD_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
