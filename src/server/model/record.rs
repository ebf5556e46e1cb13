//! Domain & parameter models for record operations
//!
//! Defines the record domain model, the record parameter models, and provides
//! methods to convert the record domain model from entity and into Dtos

use chrono::{DateTime, Utc};

use crate::model::record::{CreateRecordDto, RecordDto, UpdateRecordDto};

/// The record domain model
///
/// A single submission with its sender name, sender email and message, identified by
/// a store-assigned id and stamped with its creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Converts an entity model to the record domain model
    pub fn from_entity(entity: entity::record::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            message: entity.message,
            created_at: entity.created_at,
        }
    }

    /// Converts the record domain model into its DTO
    pub fn into_dto(self) -> RecordDto {
        RecordDto {
            id: self.id,
            name: self.name,
            email: self.email,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a new record
#[derive(Debug, Clone)]
pub struct CreateRecordParam {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<CreateRecordDto> for CreateRecordParam {
    fn from(dto: CreateRecordDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            message: dto.message,
        }
    }
}

/// Parameters for updating an existing record
///
/// Only fields set to `Some` are written, the rest keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateRecordParam {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl UpdateRecordParam {
    /// Whether the update would leave the record untouched
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

impl From<UpdateRecordDto> for UpdateRecordParam {
    fn from(dto: UpdateRecordDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            message: dto.message,
        }
    }
}
