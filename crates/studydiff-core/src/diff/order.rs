use std::cmp::Ordering;

use super::comparator::Keyed;
use crate::model::{Snapshot, StableId};

/// Stable ids of the snapshots in `scope` that are also in `common`, in
/// display order.
///
/// Snapshots without a display order sort after ordered ones; ties fall back
/// to stable id so the sequence is deterministic. `common` must be sorted,
/// as produced by the comparator.
pub fn restricted_sequence<T: Snapshot>(scope: &Keyed<'_, T>, common: &[StableId]) -> Vec<StableId> {
    let mut members: Vec<&T> = scope
        .iter()
        .filter(|(id, _)| common.binary_search(id).is_ok())
        .map(|(_, snapshot)| *snapshot)
        .collect();

    members.sort_by(|a, b| {
        by_display_order(a.display_order(), b.display_order())
            .then_with(|| a.stable_id().cmp(b.stable_id()))
    });

    members.into_iter().map(|s| s.stable_id().clone()).collect()
}

fn by_display_order(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionSnapshot;

    fn q(stable: &str, order: Option<i32>) -> QuestionSnapshot {
        let mut q = QuestionSnapshot::new(stable, stable, "s1");
        q.display_order = order;
        q
    }

    #[test]
    fn test_orders_by_display_order_then_id_with_unordered_last() {
        let items = vec![q("q3", None), q("q1", Some(2)), q("q2", Some(1)), q("q0", None)];
        let scope: Keyed<'_, QuestionSnapshot> =
            items.iter().map(|q| (q.stable_id.clone(), q)).collect();
        let common: Vec<StableId> = scope.keys().cloned().collect();

        let seq = restricted_sequence(&scope, &common);
        let ids: Vec<&str> = seq.iter().map(StableId::as_str).collect();
        assert_eq!(ids, vec!["q2", "q1", "q0", "q3"]);
    }

    #[test]
    fn test_ids_outside_common_are_left_out() {
        let items = vec![q("q1", Some(1)), q("q2", Some(2))];
        let scope: Keyed<'_, QuestionSnapshot> =
            items.iter().map(|q| (q.stable_id.clone(), q)).collect();

        let seq = restricted_sequence(&scope, &[StableId::new("q2")]);
        assert_eq!(seq, vec![StableId::new("q2")]);
    }
}
