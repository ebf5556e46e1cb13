//! Request/response processing layers.

pub mod logging;
pub mod panic;
