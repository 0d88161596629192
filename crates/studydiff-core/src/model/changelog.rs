//! Changelog output rows

use serde::{Deserialize, Serialize};

use super::ids::{StableId, StudyId};

/// Kind of object a changelog row describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RelatedObject {
    Question,
    Module,
    Answer,
    ManagedList,
    ManagedListEntity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
    OrderChanged,
}

/// One recorded difference between a study and its parent study version.
///
/// Rows carry no generated ids and never reference one another, so a writer
/// can insert them in any batch layout.
///
/// Reference conventions:
/// - `current_ref` / `former_ref` hold the stable id of the changed object,
///   or the module id for `Module` rows.
/// - `owner_ref` holds the owning question's stable id for answer, managed
///   list and managed list entity rows, and the question that carried the
///   module for `Module` rows.
/// - Positions are 1-based within the owner scope, counting only entities
///   present on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogRow {
    pub current_study_id: StudyId,
    pub parent_study_id: StudyId,
    pub related_object: RelatedObject,
    pub change: ChangeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub former_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_ref: Option<StableId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_position: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_position: Option<u32>,
}

impl ChangelogRow {
    /// Bare row for the given study pair; the mapper fills the rest
    pub fn new(
        current_study_id: StudyId,
        parent_study_id: StudyId,
        related_object: RelatedObject,
        change: ChangeKind,
    ) -> Self {
        Self {
            current_study_id,
            parent_study_id,
            related_object,
            change,
            current_ref: None,
            former_ref: None,
            owner_ref: None,
            field_name: None,
            old_value: None,
            new_value: None,
            old_position: None,
            new_position: None,
        }
    }

    /// True for rows about a child of a question (answer, list, list entry)
    pub fn is_child_level(&self) -> bool {
        matches!(
            self.related_object,
            RelatedObject::Answer | RelatedObject::ManagedList | RelatedObject::ManagedListEntity
        )
    }
}
