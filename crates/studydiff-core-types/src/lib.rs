//! Core types shared across the studydiff crates
//!
//! - **Correlation types**: RequestId, TraceId, RequestContext
//! - **Schema constants**: Canonical field keys and event names for
//!   structured logging

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId, TraceId};
