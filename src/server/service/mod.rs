//! Service layer orchestrating repositories for controllers.

pub mod record;
