//! HTTP request handlers.
//!
//! Controllers extract and validate request input, call into the service layer and
//! convert domain models into response DTOs.

pub mod record;
pub mod system;

#[cfg(test)]
mod test;
