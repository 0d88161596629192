//! Changelog computation between a study and its parent version.

mod digest;
mod index;
mod mapper;
mod orchestrator;
mod request;
mod suppression;

pub use digest::changelog_digest;
pub use index::{ListOwner, ManagedListIndex, QuestionIndex};
pub use orchestrator::compute_changelog;
pub use request::{validate, ChangelogRequest, SnapshotsByLevel, StudyPair};
pub use suppression::suppress_implied;
