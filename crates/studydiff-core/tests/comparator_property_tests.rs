//! Set laws of the entity comparator.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use studydiff_core::diff::{compare, Keyed};
use studydiff_core::model::{QuestionSnapshot, StableId};

fn side(study: &str, entries: &BTreeMap<u8, Option<u8>>) -> Vec<QuestionSnapshot> {
    entries
        .iter()
        .map(|(id, text)| {
            let stable = format!("q{}", id);
            let mut q = QuestionSnapshot::new(format!("{}:{}", study, stable).as_str(), stable.as_str(), study);
            q.text = text.map(|t| format!("text {}", t));
            q
        })
        .collect()
}

fn keyed(items: &[QuestionSnapshot]) -> Keyed<'_, QuestionSnapshot> {
    items.iter().map(|q| (q.stable_id.clone(), q)).collect()
}

fn ids(ids: &[StableId]) -> BTreeSet<StableId> {
    ids.iter().cloned().collect()
}

fn entries() -> impl Strategy<Value = BTreeMap<u8, Option<u8>>> {
    prop::collection::btree_map(0u8..20, prop::option::of(0u8..3), 0..12)
}

proptest! {
    #[test]
    fn partitions_both_key_sets(current in entries(), parent in entries()) {
        let cur = side("s2", &current);
        let par = side("s1", &parent);
        let (cur_keyed, par_keyed) = (keyed(&cur), keyed(&par));
        let cmp = compare(&cur_keyed, &par_keyed);

        let added = ids(&cmp.added);
        let removed = ids(&cmp.removed);
        let common = ids(&cmp.common);
        let current_keys: BTreeSet<StableId> = cur_keyed.keys().cloned().collect();
        let parent_keys: BTreeSet<StableId> = par_keyed.keys().cloned().collect();

        prop_assert!(added.is_disjoint(&removed));
        prop_assert_eq!(added.union(&common).cloned().collect::<BTreeSet<_>>(), current_keys);
        prop_assert_eq!(removed.union(&common).cloned().collect::<BTreeSet<_>>(), parent_keys);
    }

    #[test]
    fn swapping_sides_swaps_results(current in entries(), parent in entries()) {
        let cur = side("s2", &current);
        let par = side("s1", &parent);
        let forward = compare(&keyed(&cur), &keyed(&par));
        let backward = compare(&keyed(&par), &keyed(&cur));

        prop_assert_eq!(&forward.added, &backward.removed);
        prop_assert_eq!(&forward.removed, &backward.added);
        prop_assert_eq!(&forward.common, &backward.common);
        prop_assert_eq!(forward.field_changes.len(), backward.field_changes.len());
        for (f, b) in forward.field_changes.iter().zip(&backward.field_changes) {
            prop_assert_eq!(&f.old, &b.new);
            prop_assert_eq!(&f.new, &b.old);
        }
    }

    #[test]
    fn field_changes_only_for_common_ids(current in entries(), parent in entries()) {
        let cur = side("s2", &current);
        let par = side("s1", &parent);
        let cmp = compare(&keyed(&cur), &keyed(&par));

        for change in &cmp.field_changes {
            prop_assert!(cmp.common.binary_search(&change.id).is_ok());
            prop_assert_ne!(&change.old, &change.new);
        }
    }

    #[test]
    fn comparing_a_side_with_itself_is_empty(entries in entries()) {
        let items = side("s1", &entries);
        let cmp = compare(&keyed(&items), &keyed(&items));
        prop_assert!(cmp.is_empty());
        prop_assert_eq!(cmp.common.len(), items.len());
    }
}
