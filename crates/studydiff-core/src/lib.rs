//! studydiff core - snapshot diff and changelog engine
//!
//! Compares the questionnaire snapshots of a study against those of its
//! parent study version and emits a flat, typed changelog:
//! - Snapshot and changelog models with distinct identity spaces
//! - Generic entity comparison over explicit tracked-field tables
//! - Myers sequence diff for reorder detection
//! - Four-level hierarchy traversal (question, answer, managed list,
//!   managed list entity) with owner resolution indices
//! - Module roll-up and suppression of implied child rows
//!
//! Everything here is a pure function of its inputs. Lifecycle logging is
//! owned by the engine crate; this crate only emits `tracing::debug!`.

pub mod changelog;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod options;

pub use studydiff_core_types as core_types;

// Re-export commonly used types
pub use changelog::{changelog_digest, compute_changelog, ChangelogRequest, SnapshotsByLevel};
pub use errors::{ChangelogError, ExError, ExErrorKind, Result};
pub use model::{ChangeKind, ChangelogRow, Level, RelatedObject};
pub use options::EngineOptions;
