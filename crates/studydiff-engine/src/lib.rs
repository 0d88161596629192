//! studydiff engine - boundary layer
//!
//! Wraps the pure changelog computation with configuration loading,
//! request correlation and lifecycle logging.

pub mod commands;
pub mod config;

pub use config::{EngineConfig, LoggingConfig};
