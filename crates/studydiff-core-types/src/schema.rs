//! Canonical schema constants for structured logging and events
//!
//! Log events emitted by the engine boundary use these keys so that
//! downstream log processing can rely on stable names.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Study lineage
pub const FIELD_CURRENT_STUDY_ID: &str = "current_study_id";
pub const FIELD_PARENT_STUDY_ID: &str = "parent_study_id";

// Per-level diagnostics
pub const FIELD_LEVEL: &str = "level";
pub const FIELD_ROW_COUNT: &str = "row_count";
pub const FIELD_SUPPRESSED: &str = "suppressed";
pub const FIELD_DIGEST: &str = "digest";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
