//! Command orchestration layer.
//!
//! Commands are the only place that emits `start`/`end`/`end_error`
//! lifecycle events.

pub mod changelog;
