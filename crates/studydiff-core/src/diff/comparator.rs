//! Entity comparison over stable-id keyed collections.

use std::collections::BTreeMap;

use crate::model::{FieldValue, Level, Snapshot, StableId, TrackedField};

/// Snapshots of one level and scope, keyed by stable id.
pub type Keyed<'a, T> = BTreeMap<StableId, &'a T>;

/// A single differing field of an entity present on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub id: StableId,
    pub field: &'static str,
    pub old: FieldValue,
    pub new: FieldValue,
}

/// Result of comparing the current and parent side of one scope.
///
/// All id lists are in stable id order; field changes follow stable id order
/// and then the level's field table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub level: Level,
    /// In current, not in parent
    pub added: Vec<StableId>,
    /// In parent, not in current
    pub removed: Vec<StableId>,
    /// On both sides
    pub common: Vec<StableId>,
    pub field_changes: Vec<FieldChange>,
}

impl Comparison {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.field_changes.is_empty()
    }
}

/// Compare two collections using the level's own tracked-field table.
pub fn compare<T: Snapshot>(current: &Keyed<'_, T>, parent: &Keyed<'_, T>) -> Comparison {
    compare_with_fields(current, parent, T::LEVEL, T::tracked_fields())
}

/// Compare two collections over an explicit field table.
///
/// One common entity with N differing fields yields N field changes.
pub fn compare_with_fields<T>(
    current: &Keyed<'_, T>,
    parent: &Keyed<'_, T>,
    level: Level,
    fields: &[TrackedField<T>],
) -> Comparison {
    let added: Vec<StableId> = current
        .keys()
        .filter(|id| !parent.contains_key(*id))
        .cloned()
        .collect();
    let removed: Vec<StableId> = parent
        .keys()
        .filter(|id| !current.contains_key(*id))
        .cloned()
        .collect();

    let mut common = Vec::new();
    let mut field_changes = Vec::new();
    for (id, cur) in current {
        let Some(par) = parent.get(id) else {
            continue;
        };
        common.push(id.clone());
        for field in fields {
            let old = field.value(par);
            let new = field.value(cur);
            if old != new {
                field_changes.push(FieldChange {
                    id: id.clone(),
                    field: field.name,
                    old,
                    new,
                });
            }
        }
    }

    Comparison {
        level,
        added,
        removed,
        common,
        field_changes,
    }
}
