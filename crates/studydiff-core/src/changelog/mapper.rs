//! Turns comparison results and edit scripts into changelog rows.

use std::collections::BTreeMap;

use super::request::StudyPair;
use crate::diff::{Comparison, Edit, Keyed};
use crate::model::{ChangeKind, ChangelogRow, Level, ModuleId, QuestionSnapshot, RelatedObject, StableId};

/// `Added` rows for a level without roll-up
pub fn added_rows(
    pair: &StudyPair,
    level: Level,
    ids: &[StableId],
    owner: Option<&StableId>,
) -> Vec<ChangelogRow> {
    ids.iter()
        .map(|id| {
            let mut row = pair.row(level.related_object(), ChangeKind::Added);
            row.current_ref = Some(id.to_string());
            row.owner_ref = owner.cloned();
            row
        })
        .collect()
}

/// `Removed` rows for a level without roll-up
pub fn removed_rows(
    pair: &StudyPair,
    level: Level,
    ids: &[StableId],
    owner: Option<&StableId>,
) -> Vec<ChangelogRow> {
    ids.iter()
        .map(|id| {
            let mut row = pair.row(level.related_object(), ChangeKind::Removed);
            row.former_ref = Some(id.to_string());
            row.owner_ref = owner.cloned();
            row
        })
        .collect()
}

/// `Added` rows for questions, rolling a question up into a `Module/Added`
/// row when it is the only current-side question carrying its module.
pub fn question_added_rows(
    pair: &StudyPair,
    ids: &[StableId],
    current: &Keyed<'_, QuestionSnapshot>,
    roll_up: bool,
) -> Vec<ChangelogRow> {
    ids.iter()
        .map(|id| {
            let module = roll_up
                .then(|| current.get(id).and_then(|q| sole_module(id, q, current)))
                .flatten();
            match module {
                Some(module) => {
                    let mut row = pair.row(RelatedObject::Module, ChangeKind::Added);
                    row.current_ref = Some(module.to_string());
                    row.owner_ref = Some(id.clone());
                    row
                }
                None => {
                    let mut row = pair.row(RelatedObject::Question, ChangeKind::Added);
                    row.current_ref = Some(id.to_string());
                    row
                }
            }
        })
        .collect()
}

/// `Removed` rows for questions, rolling a removed question up into a
/// `Module/Removed` row when no current-side question still carries its
/// module.
///
/// Every removed question of a vanished module gets its own row, told apart
/// by `owner_ref`.
pub fn question_removed_rows(
    pair: &StudyPair,
    ids: &[StableId],
    parent: &Keyed<'_, QuestionSnapshot>,
    current: &Keyed<'_, QuestionSnapshot>,
    roll_up: bool,
) -> Vec<ChangelogRow> {
    ids.iter()
        .map(|id| {
            let module = roll_up
                .then(|| parent.get(id).and_then(|q| sole_module(id, q, current)))
                .flatten();
            match module {
                Some(module) => {
                    let mut row = pair.row(RelatedObject::Module, ChangeKind::Removed);
                    row.former_ref = Some(module.to_string());
                    row.owner_ref = Some(id.clone());
                    row
                }
                None => {
                    let mut row = pair.row(RelatedObject::Question, ChangeKind::Removed);
                    row.former_ref = Some(id.to_string());
                    row
                }
            }
        })
        .collect()
}

// The question's module, if no other question of `side` carries it.
fn sole_module<'q>(
    id: &StableId,
    question: &'q QuestionSnapshot,
    side: &Keyed<'_, QuestionSnapshot>,
) -> Option<&'q ModuleId> {
    let module = question.module_id()?;
    let shared = side
        .iter()
        .any(|(other, q)| other != id && q.module_id() == Some(module));
    (!shared).then_some(module)
}

/// One `Modified` row per field change
pub fn modified_rows(pair: &StudyPair, comparison: &Comparison, owner: Option<&StableId>) -> Vec<ChangelogRow> {
    comparison
        .field_changes
        .iter()
        .map(|change| {
            let mut row = pair.row(comparison.level.related_object(), ChangeKind::Modified);
            row.current_ref = Some(change.id.to_string());
            row.former_ref = Some(change.id.to_string());
            row.owner_ref = owner.cloned();
            row.field_name = Some(change.field.to_string());
            row.old_value = change.old.render();
            row.new_value = change.new.render();
            row
        })
        .collect()
}

/// `OrderChanged` rows from a full edit script over restricted sequences.
///
/// A script without insert/delete steps means the order is unchanged. Otherwise
/// every id whose parent and current index differ gets one row with 1-based
/// positions; rows come out in current position order.
pub fn order_rows(
    pair: &StudyPair,
    level: Level,
    script: &[Edit<StableId>],
    owner: Option<&StableId>,
) -> Vec<ChangelogRow> {
    if !script.iter().any(Edit::is_change) {
        return Vec::new();
    }

    let mut old_positions: BTreeMap<&StableId, usize> = BTreeMap::new();
    let mut new_positions: Vec<(&StableId, usize)> = Vec::new();
    for edit in script {
        match edit {
            Edit::Equal {
                value,
                old_index,
                new_index,
            } => {
                old_positions.insert(value, *old_index);
                new_positions.push((value, *new_index));
            }
            Edit::Delete { value, old_index } => {
                old_positions.insert(value, *old_index);
            }
            Edit::Insert { value, new_index } => new_positions.push((value, *new_index)),
        }
    }
    new_positions.sort_by_key(|(_, index)| *index);

    new_positions
        .into_iter()
        .filter_map(|(id, new_index)| {
            let old_index = *old_positions.get(id)?;
            if old_index == new_index {
                return None;
            }
            let mut row = pair.row(level.related_object(), ChangeKind::OrderChanged);
            row.current_ref = Some(id.to_string());
            row.former_ref = Some(id.to_string());
            row.owner_ref = owner.cloned();
            row.old_position = Some(position(old_index));
            row.new_position = Some(position(new_index));
            Some(row)
        })
        .collect()
}

fn position(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
