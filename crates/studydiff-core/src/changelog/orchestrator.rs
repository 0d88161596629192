//! Walks the questionnaire hierarchy level by level and collects rows.

use std::collections::BTreeSet;

use super::index::{group_by_owner, study_side, ManagedListIndex, QuestionIndex};
use super::mapper::{
    added_rows, modified_rows, order_rows, question_added_rows, question_removed_rows, removed_rows,
};
use super::request::{validate, ChangelogRequest, StudyPair};
use super::suppression::suppress_implied;
use crate::diff::{compare, restricted_sequence, Comparison, DiffAlgorithm, Keyed, MyersDiff};
use crate::errors::Result;
use crate::model::{ChangelogRow, QuestionSnapshot, Snapshot, StableId};
use crate::options::EngineOptions;

/// Compute the changelog between a study and its parent version.
///
/// Rows come out in a fixed order: questions, answers, managed lists, managed
/// list entities. Child levels are visited per owning question in stable id
/// order, and inside one scope rows are added, removed, modified, reordered.
///
/// A request without a parent study yields an empty changelog.
///
/// # Errors
///
/// Caller contract violations detected by request validation.
pub fn compute_changelog(request: &ChangelogRequest, options: &EngineOptions) -> Result<Vec<ChangelogRow>> {
    let Some((pair, snapshots)) = validate(request)? else {
        tracing::debug!(
            current_study_id = %request.current_study_id,
            "no parent study, nothing to compare"
        );
        return Ok(Vec::new());
    };

    let mut rows = question_level(&pair, &snapshots.questions, options);

    let questions = QuestionIndex::build(&snapshots.questions);
    rows.extend(child_level(&pair, &snapshots.answers, options, |a| {
        questions.resolve(&a.study_id, &a.question).cloned()
    }));
    rows.extend(child_level(&pair, &snapshots.managed_lists, options, |l| {
        questions.resolve(&l.study_id, &l.question).cloned()
    }));

    let lists = ManagedListIndex::build(&snapshots.managed_lists, &questions);
    rows.extend(child_level(&pair, &snapshots.managed_list_entities, options, |e| {
        lists.owning_question(&e.study_id, &e.managed_list).cloned()
    }));

    if options.suppress_implied_children {
        rows = suppress_implied(rows);
    }

    tracing::debug!(
        current_study_id = %pair.current,
        parent_study_id = %pair.parent,
        row_count = rows.len(),
        "changelog computed"
    );
    Ok(rows)
}

fn question_level(pair: &StudyPair, questions: &[QuestionSnapshot], options: &EngineOptions) -> Vec<ChangelogRow> {
    let current = study_side(questions, &pair.current);
    let parent = study_side(questions, &pair.parent);
    let comparison = compare(&current, &parent);

    let mut rows = question_added_rows(pair, &comparison.added, &current, options.module_roll_up);
    rows.extend(question_removed_rows(
        pair,
        &comparison.removed,
        &parent,
        &current,
        options.module_roll_up,
    ));
    rows.extend(changed_rows(pair, &comparison, &current, &parent, None, options));

    tracing::debug!(
        level = %QuestionSnapshot::LEVEL,
        added = comparison.added.len(),
        removed = comparison.removed.len(),
        rows = rows.len(),
        "level compared"
    );
    rows
}

fn child_level<T, F>(pair: &StudyPair, snapshots: &[T], options: &EngineOptions, owner_of: F) -> Vec<ChangelogRow>
where
    T: Snapshot,
    F: Fn(&T) -> Option<StableId>,
{
    let current = group_by_owner(snapshots, &pair.current, &owner_of);
    let parent = group_by_owner(snapshots, &pair.parent, &owner_of);
    let owners: BTreeSet<&StableId> = current.keys().chain(parent.keys()).collect();

    let empty = Keyed::new();
    let mut rows = Vec::new();
    for owner in owners.iter().copied() {
        let cur = current.get(owner).unwrap_or(&empty);
        let par = parent.get(owner).unwrap_or(&empty);
        let comparison = compare(cur, par);

        rows.extend(added_rows(pair, T::LEVEL, &comparison.added, Some(owner)));
        rows.extend(removed_rows(pair, T::LEVEL, &comparison.removed, Some(owner)));
        rows.extend(changed_rows(pair, &comparison, cur, par, Some(owner), options));
    }

    tracing::debug!(level = %T::LEVEL, groups = owners.len(), rows = rows.len(), "level compared");
    rows
}

// Modified rows followed by order rows of one scope.
fn changed_rows<T: Snapshot>(
    pair: &StudyPair,
    comparison: &Comparison,
    current: &Keyed<'_, T>,
    parent: &Keyed<'_, T>,
    owner: Option<&StableId>,
    options: &EngineOptions,
) -> Vec<ChangelogRow> {
    let mut rows = modified_rows(pair, comparison, owner);
    if options.track_order && comparison.common.len() > 1 {
        let before = restricted_sequence(parent, &comparison.common);
        let after = restricted_sequence(current, &comparison.common);
        let script = MyersDiff::new(&before, &after).diff();
        rows.extend(order_rows(pair, T::LEVEL, &script, owner));
    }
    rows
}
