//! Core types and traits for pulse
//!
//! This crate provides the settings schema and loader, the error
//! taxonomy, logging setup, and the heartbeat publish loop shared by
//! the other pulse components.

pub mod config;
pub mod error;
pub mod heartbeat;
pub mod logging;

pub use error::{Error, Result};
