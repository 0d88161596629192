//! Owner resolution indices.
//!
//! Child snapshots reference their owner by snapshot id, which only means
//! something inside one study. These indices translate such references into
//! the owning question's stable id so that children of the same conceptual
//! question are compared together across the two studies.

use std::collections::BTreeMap;

use crate::diff::Keyed;
use crate::model::{ManagedListSnapshot, QuestionSnapshot, Snapshot, SnapshotId, StableId, StudyId};

/// `(study, question snapshot id) → question stable id`
#[derive(Debug, Default)]
pub struct QuestionIndex {
    by_study: BTreeMap<StudyId, BTreeMap<SnapshotId, StableId>>,
}

impl QuestionIndex {
    pub fn build(questions: &[QuestionSnapshot]) -> Self {
        let mut by_study: BTreeMap<StudyId, BTreeMap<SnapshotId, StableId>> = BTreeMap::new();
        for q in questions {
            by_study
                .entry(q.study_id.clone())
                .or_default()
                .insert(q.snapshot_id.clone(), q.stable_id.clone());
        }
        Self { by_study }
    }

    pub fn resolve(&self, study: &StudyId, question: &SnapshotId) -> Option<&StableId> {
        self.by_study.get(study)?.get(question)
    }
}

/// Where a managed list snapshot sits in the hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOwner {
    pub list: StableId,
    pub question: StableId,
}

/// `(study, managed list snapshot id) → (list stable id, question stable id)`
///
/// Built in one pass from the managed list snapshots and the question index.
/// Lists whose question cannot be resolved are left out, which in turn
/// excludes their entities.
#[derive(Debug, Default)]
pub struct ManagedListIndex {
    by_study: BTreeMap<StudyId, BTreeMap<SnapshotId, ListOwner>>,
}

impl ManagedListIndex {
    pub fn build(lists: &[ManagedListSnapshot], questions: &QuestionIndex) -> Self {
        let mut by_study: BTreeMap<StudyId, BTreeMap<SnapshotId, ListOwner>> = BTreeMap::new();
        for list in lists {
            let Some(question) = questions.resolve(&list.study_id, &list.question) else {
                continue;
            };
            by_study.entry(list.study_id.clone()).or_default().insert(
                list.snapshot_id.clone(),
                ListOwner {
                    list: list.stable_id.clone(),
                    question: question.clone(),
                },
            );
        }
        Self { by_study }
    }

    pub fn resolve(&self, study: &StudyId, list: &SnapshotId) -> Option<&ListOwner> {
        self.by_study.get(study)?.get(list)
    }

    pub fn owning_question(&self, study: &StudyId, list: &SnapshotId) -> Option<&StableId> {
        self.resolve(study, list).map(|owner| &owner.question)
    }
}

/// All snapshots of one study, keyed by stable id
pub fn study_side<'a, T: Snapshot>(snapshots: &'a [T], study: &StudyId) -> Keyed<'a, T> {
    snapshots
        .iter()
        .filter(|s| s.study_id() == study)
        .map(|s| (s.stable_id().clone(), s))
        .collect()
}

/// Snapshots of one study grouped by owning question stable id.
///
/// Snapshots whose owner cannot be resolved are skipped.
pub fn group_by_owner<'a, T, F>(
    snapshots: &'a [T],
    study: &StudyId,
    owner_of: F,
) -> BTreeMap<StableId, Keyed<'a, T>>
where
    T: Snapshot,
    F: Fn(&T) -> Option<StableId>,
{
    let mut groups: BTreeMap<StableId, Keyed<'a, T>> = BTreeMap::new();
    for snapshot in snapshots.iter().filter(|s| s.study_id() == study) {
        match owner_of(snapshot) {
            Some(owner) => {
                groups
                    .entry(owner)
                    .or_default()
                    .insert(snapshot.stable_id().clone(), snapshot);
            }
            None => {
                tracing::debug!(
                    level = %T::LEVEL,
                    study_id = %study,
                    snapshot_id = %snapshot.snapshot_id(),
                    "owner not resolvable, snapshot skipped"
                );
            }
        }
    }
    groups
}
