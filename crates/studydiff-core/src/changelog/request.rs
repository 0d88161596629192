//! Changelog request and caller contract checks.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::{ChangelogError, Result};
use crate::model::{
    AnswerSnapshot, ChangeKind, ChangelogRow, ManagedListEntitySnapshot, ManagedListSnapshot,
    QuestionSnapshot, RelatedObject, Snapshot, StudyId,
};

/// Snapshots of both studies, per level.
///
/// The caller supplies only active records of the two requested studies;
/// each snapshot names the study it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotsByLevel {
    #[serde(default)]
    pub questions: Vec<QuestionSnapshot>,
    #[serde(default)]
    pub answers: Vec<AnswerSnapshot>,
    #[serde(default)]
    pub managed_lists: Vec<ManagedListSnapshot>,
    #[serde(default)]
    pub managed_list_entities: Vec<ManagedListEntitySnapshot>,
}

/// Input of a changelog computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangelogRequest {
    pub current_study_id: StudyId,
    /// `None` for the first version of a study lineage
    #[serde(default)]
    pub parent_study_id: Option<StudyId>,
    #[serde(default)]
    pub snapshots: Option<SnapshotsByLevel>,
}

impl ChangelogRequest {
    pub fn new(current_study_id: StudyId, parent_study_id: StudyId, snapshots: SnapshotsByLevel) -> Self {
        Self {
            current_study_id,
            parent_study_id: Some(parent_study_id),
            snapshots: Some(snapshots),
        }
    }

    /// Parse a request from JSON bytes
    ///
    /// # Errors
    ///
    /// `Serialization` if the bytes are not a valid request document.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// The two studies being compared; stamps every emitted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyPair {
    pub current: StudyId,
    pub parent: StudyId,
}

impl StudyPair {
    pub fn row(&self, related_object: RelatedObject, change: ChangeKind) -> ChangelogRow {
        ChangelogRow::new(
            self.current.clone(),
            self.parent.clone(),
            related_object,
            change,
        )
    }

    fn contains(&self, study: &StudyId) -> bool {
        *study == self.current || *study == self.parent
    }
}

/// Check the caller contract.
///
/// Returns `None` when there is no parent study and therefore nothing to
/// compare.
///
/// # Errors
///
/// `MissingSnapshots`, `SameStudy`, `ForeignStudy`, `DuplicateStableId` or
/// `DuplicateSnapshotId`, for the first violation found.
pub fn validate(request: &ChangelogRequest) -> Result<Option<(StudyPair, &SnapshotsByLevel)>> {
    let Some(parent) = &request.parent_study_id else {
        return Ok(None);
    };
    if *parent == request.current_study_id {
        return Err(ChangelogError::SameStudy {
            study_id: parent.to_string(),
        });
    }
    let snapshots = request
        .snapshots
        .as_ref()
        .ok_or_else(|| ChangelogError::MissingSnapshots {
            parent_study_id: parent.to_string(),
        })?;

    let pair = StudyPair {
        current: request.current_study_id.clone(),
        parent: parent.clone(),
    };

    check_level(&snapshots.questions, &pair)?;
    check_level(&snapshots.answers, &pair)?;
    check_level(&snapshots.managed_lists, &pair)?;
    check_level(&snapshots.managed_list_entities, &pair)?;

    Ok(Some((pair, snapshots)))
}

fn check_level<T: Snapshot>(snapshots: &[T], pair: &StudyPair) -> Result<()> {
    let mut stable_ids = BTreeSet::new();
    let mut snapshot_ids = BTreeSet::new();

    for snapshot in snapshots {
        let study = snapshot.study_id();
        if !pair.contains(study) {
            return Err(ChangelogError::ForeignStudy {
                level: T::LEVEL,
                snapshot_id: snapshot.snapshot_id().to_string(),
                study_id: study.to_string(),
            });
        }
        if !stable_ids.insert((study, snapshot.stable_id())) {
            return Err(ChangelogError::DuplicateStableId {
                level: T::LEVEL,
                stable_id: snapshot.stable_id().to_string(),
                study_id: study.to_string(),
            });
        }
        if !snapshot_ids.insert((study, snapshot.snapshot_id())) {
            return Err(ChangelogError::DuplicateSnapshotId {
                level: T::LEVEL,
                snapshot_id: snapshot.snapshot_id().to_string(),
                study_id: study.to_string(),
            });
        }
    }

    Ok(())
}
