use studydiff_core_types::{RequestId, TraceId};
use thiserror::Error;

use crate::model::Level;

/// Result type alias using ChangelogError
pub type Result<T> = std::result::Result<T, ChangelogError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers of the engine
/// boundary can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// The request breaks the caller contract (missing snapshot set,
    /// foreign study, identical studies)
    InvalidInput,
    /// Two snapshots of one study share a stable or snapshot id at one level
    DuplicateSnapshot,
    /// Engine configuration could not be parsed
    InvalidConfig,
    Serialization,
    Io,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::DuplicateSnapshot => "ERR_DUPLICATE_SNAPSHOT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context the
/// engine boundary knows about (operation, study, entity, correlation ids).
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    study_id: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            study_id: None,
            entity_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add study context
    pub fn with_study_id(mut self, id: impl Into<String>) -> Self {
        self.study_id = Some(id.into());
        self
    }

    /// Add entity context (stable id or snapshot id of the offending row)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn study_id(&self) -> Option<&str> {
        self.study_id.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(study_id) = &self.study_id {
            write!(f, " (study_id: {})", study_id)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised while validating and computing a changelog
///
/// Every variant is a caller contract violation or an ambient failure;
/// data-quality problems inside valid input (e.g. an answer pointing at a
/// question snapshot that is not supplied) are handled by omission and never
/// surface here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChangelogError {
    /// A parent study was named but no snapshot set was supplied
    #[error("No snapshot set supplied for comparison against parent study {parent_study_id}")]
    MissingSnapshots { parent_study_id: String },

    /// Current and parent study ids are identical
    #[error("Study {study_id} cannot be compared against itself")]
    SameStudy { study_id: String },

    /// A snapshot belongs to neither of the two requested studies
    #[error("{level} snapshot {snapshot_id} belongs to study {study_id}, which is not part of this comparison")]
    ForeignStudy {
        level: Level,
        snapshot_id: String,
        study_id: String,
    },

    /// Two snapshots of one study share a stable id at one level
    #[error("Duplicate {level} snapshot for stable id {stable_id} in study {study_id}")]
    DuplicateStableId {
        level: Level,
        stable_id: String,
        study_id: String,
    },

    /// Two snapshots of one study share a snapshot id at one level
    #[error("Duplicate {level} snapshot id {snapshot_id} in study {study_id}")]
    DuplicateSnapshotId {
        level: Level,
        snapshot_id: String,
        study_id: String,
    },

    /// Engine configuration is not valid
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Reading configuration or request input failed
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl From<ChangelogError> for ExError {
    fn from(err: ChangelogError) -> Self {
        match err {
            ChangelogError::MissingSnapshots { parent_study_id } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_study_id(parent_study_id)
                    .with_message("snapshot set is required when a parent study is given")
            }

            ChangelogError::SameStudy { study_id } => ExError::new(ExErrorKind::InvalidInput)
                .with_study_id(study_id)
                .with_message("current and parent study must differ"),

            ChangelogError::ForeignStudy {
                level,
                snapshot_id,
                study_id,
            } => ExError::new(ExErrorKind::InvalidInput)
                .with_study_id(study_id)
                .with_entity_id(snapshot_id)
                .with_message(format!("{} snapshot belongs to an unrelated study", level)),

            ChangelogError::DuplicateStableId {
                level,
                stable_id,
                study_id,
            } => ExError::new(ExErrorKind::DuplicateSnapshot)
                .with_study_id(study_id)
                .with_entity_id(stable_id)
                .with_message(format!("{} stable id appears more than once", level)),

            ChangelogError::DuplicateSnapshotId {
                level,
                snapshot_id,
                study_id,
            } => ExError::new(ExErrorKind::DuplicateSnapshot)
                .with_study_id(study_id)
                .with_entity_id(snapshot_id)
                .with_message(format!("{} snapshot id appears more than once", level)),

            ChangelogError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }

            ChangelogError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            ChangelogError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),
        }
    }
}

impl From<serde_json::Error> for ChangelogError {
    fn from(err: serde_json::Error) -> Self {
        ChangelogError::Serialization {
            message: err.to_string(),
        }
    }
}
