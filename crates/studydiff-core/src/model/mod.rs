//! Snapshot and changelog data model
//!
//! Snapshots are immutable copies of questionnaire records captured for one
//! study version. Two identity spaces exist side by side:
//!
//! - [`StableId`] identifies the originating live record and is constant
//!   across every snapshot copy. It is the diff key.
//! - [`SnapshotId`] is the storage key of one snapshot row. It is only used
//!   to follow references inside a single study's snapshot set.
//!
//! They are distinct types so the compiler rejects comparisons across the
//! two spaces.

pub mod changelog;
pub mod ids;
pub mod snapshot;
pub mod value;

pub use changelog::{ChangeKind, ChangelogRow, RelatedObject};
pub use ids::{ModuleId, SnapshotId, StableId, StudyId};
pub use snapshot::{
    AnswerSnapshot, Level, ManagedListEntitySnapshot, ManagedListSnapshot, QuestionSnapshot,
    Snapshot, TrackedField,
};
pub use value::FieldValue;
