#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::*;
use studydiff_core::errors::{ChangelogError, ExError, ExErrorKind};
use studydiff_core::model::{Level, StudyId};
use studydiff_core::{compute_changelog, ChangelogRequest, EngineOptions, SnapshotsByLevel};

fn compute(request: &ChangelogRequest) -> Result<usize, ChangelogError> {
    compute_changelog(request, &EngineOptions::default()).map(|rows| rows.len())
}

#[test]
fn test_first_version_has_empty_changelog() {
    // GIVEN a study with no parent, even with snapshots supplied
    let request = ChangelogRequest {
        current_study_id: StudyId::new(CURRENT),
        parent_study_id: None,
        snapshots: Some(SnapshotsByLevel {
            questions: vec![question(CURRENT, "q1", 1)],
            ..Default::default()
        }),
    };

    assert_eq!(compute(&request).unwrap(), 0);
}

#[test]
fn test_parent_without_snapshots_is_invalid_input() {
    let request = ChangelogRequest {
        current_study_id: StudyId::new(CURRENT),
        parent_study_id: Some(StudyId::new(PARENT)),
        snapshots: None,
    };

    let err: ExError = compute(&request).unwrap_err().into();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.study_id(), Some(PARENT));
}

#[test]
fn test_self_comparison_is_rejected() {
    let request = ChangelogRequest::new(
        StudyId::new(CURRENT),
        StudyId::new(CURRENT),
        SnapshotsByLevel::default(),
    );

    assert_eq!(
        compute(&request).unwrap_err(),
        ChangelogError::SameStudy {
            study_id: CURRENT.to_string()
        }
    );
}

#[test]
fn test_snapshot_of_unrelated_study_is_rejected() {
    let snapshots = SnapshotsByLevel {
        questions: questions_on_both_sides(&["q1"]),
        managed_lists: vec![managed_list("study-9", "l1", "q1")],
        ..Default::default()
    };

    let err = compute(&request(snapshots)).unwrap_err();
    assert!(matches!(
        err,
        ChangelogError::ForeignStudy {
            level: Level::ManagedList,
            ..
        }
    ));
    assert_eq!(ExError::from(err).code(), "ERR_INVALID_INPUT");
}

#[test]
fn test_duplicate_stable_id_within_one_study_is_rejected() {
    let mut dup = question(CURRENT, "q1", 2);
    dup.snapshot_id = "other".into();
    let mut snapshots = SnapshotsByLevel {
        questions: questions_on_both_sides(&["q1"]),
        ..Default::default()
    };
    snapshots.questions.push(dup);

    let err: ExError = compute(&request(snapshots)).unwrap_err().into();
    assert_eq!(err.kind(), ExErrorKind::DuplicateSnapshot);
    assert_eq!(err.entity_id(), Some("q1"));
    assert_eq!(err.study_id(), Some(CURRENT));
}

#[test]
fn test_request_parses_from_json() {
    let json = r#"{
        "current_study_id": "study-2",
        "parent_study_id": "study-1",
        "snapshots": {
            "questions": [
                {"snapshot_id": "p1", "stable_id": "q1", "study_id": "study-1", "text": "Age?"},
                {"snapshot_id": "c1", "stable_id": "q1", "study_id": "study-2", "text": "Your age?"}
            ]
        }
    }"#;

    let request = ChangelogRequest::from_json(json.as_bytes()).unwrap();
    assert_eq!(request.parent_study_id, Some(StudyId::new(PARENT)));
    assert_eq!(compute(&request).unwrap(), 1);
}
