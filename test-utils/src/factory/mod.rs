//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let record = factory::create_record(&db).await?;
//!
//!     // Create with custom values
//!     let record = factory::record::RecordFactory::new(&db)
//!         .name("Ada")
//!         .email("ada@example.com")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `record` - Create record entities
//! - `helpers` - Shared counters for unique default values

pub mod helpers;
pub mod record;

// Re-export commonly used factory functions for concise usage
pub use record::{create_record, create_records};
