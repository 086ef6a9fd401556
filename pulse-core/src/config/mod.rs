//! Settings management
//!
//! Handles loading and validation of the client identity and broker
//! settings documents read once at process startup.

pub mod loader;
pub mod schema;
pub mod validate;

pub use loader::ConfigLoader;
pub use schema::*;
