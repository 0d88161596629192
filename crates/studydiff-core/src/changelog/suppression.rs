//! Drops child rows implied by a question-level addition or removal.

use std::collections::BTreeSet;

use crate::model::{ChangeKind, ChangelogRow, RelatedObject, StableId};

/// Remove child `Added`/`Removed` rows whose owning question was itself
/// added/removed.
///
/// A question counts as added when it appears in a `Question/Added` row or as
/// the owner of a `Module/Added` row, and symmetrically for removals.
/// `Modified` and `OrderChanged` rows always survive; row order is kept.
pub fn suppress_implied(rows: Vec<ChangelogRow>) -> Vec<ChangelogRow> {
    let added = introduced_questions(&rows, ChangeKind::Added);
    let removed = introduced_questions(&rows, ChangeKind::Removed);

    let before = rows.len();
    let kept: Vec<ChangelogRow> = rows
        .into_iter()
        .filter(|row| {
            if !row.is_child_level() {
                return true;
            }
            let owners = match row.change {
                ChangeKind::Added => &added,
                ChangeKind::Removed => &removed,
                ChangeKind::Modified | ChangeKind::OrderChanged => return true,
            };
            !row.owner_ref.as_ref().is_some_and(|owner| owners.contains(owner))
        })
        .collect();

    tracing::debug!(suppressed = before - kept.len(), "implied child rows suppressed");
    kept
}

fn introduced_questions(rows: &[ChangelogRow], change: ChangeKind) -> BTreeSet<StableId> {
    rows.iter()
        .filter(|row| row.change == change)
        .filter_map(|row| match row.related_object {
            RelatedObject::Question => {
                let reference = match change {
                    ChangeKind::Added => row.current_ref.as_deref(),
                    _ => row.former_ref.as_deref(),
                };
                reference.map(StableId::new)
            }
            RelatedObject::Module => row.owner_ref.clone(),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudyId;

    fn row(object: RelatedObject, change: ChangeKind) -> ChangelogRow {
        ChangelogRow::new(StudyId::new("s2"), StudyId::new("s1"), object, change)
    }

    fn child(object: RelatedObject, change: ChangeKind, id: &str, owner: &str) -> ChangelogRow {
        let mut r = row(object, change);
        match change {
            ChangeKind::Removed => r.former_ref = Some(id.to_string()),
            _ => r.current_ref = Some(id.to_string()),
        }
        r.owner_ref = Some(StableId::new(owner));
        r
    }

    #[test]
    fn test_children_of_added_question_are_dropped() {
        let mut q = row(RelatedObject::Question, ChangeKind::Added);
        q.current_ref = Some("q9".to_string());
        let rows = vec![
            q,
            child(RelatedObject::Answer, ChangeKind::Added, "a1", "q9"),
            child(RelatedObject::ManagedList, ChangeKind::Added, "l1", "q9"),
            child(RelatedObject::Answer, ChangeKind::Added, "a2", "q1"),
        ];

        let kept = suppress_implied(rows);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].current_ref.as_deref(), Some("a2"));
    }

    #[test]
    fn test_module_owner_counts_as_introduced() {
        let mut m = row(RelatedObject::Module, ChangeKind::Removed);
        m.former_ref = Some("m1".to_string());
        m.owner_ref = Some(StableId::new("q9"));
        let rows = vec![
            m,
            child(RelatedObject::ManagedListEntity, ChangeKind::Removed, "e1", "q9"),
        ];

        let kept = suppress_implied(rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].related_object, RelatedObject::Module);
    }

    #[test]
    fn test_direction_must_match() {
        let mut q = row(RelatedObject::Question, ChangeKind::Added);
        q.current_ref = Some("q9".to_string());
        let rows = vec![q, child(RelatedObject::Answer, ChangeKind::Removed, "a1", "q9")];

        assert_eq!(suppress_implied(rows).len(), 2);
    }

    #[test]
    fn test_modified_and_order_rows_survive() {
        let mut q = row(RelatedObject::Question, ChangeKind::Added);
        q.current_ref = Some("q9".to_string());
        let rows = vec![
            q,
            child(RelatedObject::Answer, ChangeKind::Modified, "a1", "q9"),
            child(RelatedObject::Answer, ChangeKind::OrderChanged, "a2", "q9"),
        ];

        assert_eq!(suppress_implied(rows).len(), 3);
    }
}
