//! Myers' O(N·D) sequence diff.
//!
//! Used only to detect reordering: callers restrict both sequences to the ids
//! present on both sides before diffing, so every `Insert` is matched by a
//! `Delete` of the same id somewhere else in the script.

/// One step of an edit script turning the parent sequence into the current one.
///
/// Indices are 0-based positions in the parent (`old_index`) and current
/// (`new_index`) sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Equal {
        value: T,
        old_index: usize,
        new_index: usize,
    },
    Delete {
        value: T,
        old_index: usize,
    },
    Insert {
        value: T,
        new_index: usize,
    },
}

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Equal { value, .. } | Edit::Delete { value, .. } | Edit::Insert { value, .. } => {
                value
            }
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, Edit::Equal { .. })
    }
}

pub trait DiffAlgorithm<T> {
    /// Frontier snapshots per edit distance, for backtracking
    type Trace;

    fn compute_shortest_edit(&self) -> Self::Trace;
    /// Full script including `Equal` steps, in sequence order
    fn diff(&self) -> Vec<Edit<T>>;

    /// Only the insert/delete steps of the script
    fn edit_script(&self) -> Vec<Edit<T>> {
        self.diff().into_iter().filter(Edit::is_change).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyersDiff<'d, T> {
    parent: &'d [T],
    current: &'d [T],
}

impl<'d, T> MyersDiff<'d, T> {
    pub fn new(parent: &'d [T], current: &'d [T]) -> Self {
        Self { parent, current }
    }

    // Frontier vectors are indexed by diagonal k + max; one spare slot keeps
    // the k + 1 lookup in bounds on the outermost diagonal.
    fn bounds(&self) -> (isize, isize, isize) {
        let n = self.parent.len() as isize;
        let m = self.current.len() as isize;
        (n, m, n + m)
    }
}

impl<T: Eq + Clone> DiffAlgorithm<T> for MyersDiff<'_, T> {
    type Trace = Vec<Vec<isize>>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m, max) = self.bounds();
        let mut v = vec![0isize; 2 * max as usize + 2];
        let mut trace = Vec::new();

        for d in 0..=max {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (k + max) as usize;

                // down (insertion) from k + 1, or right (deletion) from k - 1
                let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                    v[idx + 1]
                } else {
                    v[idx - 1] + 1
                };
                let mut y = x - k;

                while x < n && y < m && self.parent[x as usize] == self.current[y as usize] {
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn diff(&self) -> Vec<Edit<T>> {
        let (n, m, max) = self.bounds();
        let trace = self.compute_shortest_edit();
        let (mut x, mut y) = (n, m);
        let mut edits = Vec::new();

        for (d, v) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;
            let at = |k: isize| v[(k + max) as usize];

            let prev_k = if k == -d || (k != d && at(k - 1) < at(k + 1)) {
                k + 1
            } else {
                k - 1
            };
            let prev_x = at(prev_k);
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                x -= 1;
                y -= 1;
                edits.push(Edit::Equal {
                    value: self.parent[x as usize].clone(),
                    old_index: x as usize,
                    new_index: y as usize,
                });
            }

            if d > 0 {
                if x == prev_x {
                    edits.push(Edit::Insert {
                        value: self.current[prev_y as usize].clone(),
                        new_index: prev_y as usize,
                    });
                } else {
                    edits.push(Edit::Delete {
                        value: self.parent[prev_x as usize].clone(),
                        old_index: prev_x as usize,
                    });
                }
            }

            x = prev_x;
            y = prev_y;
        }

        edits.reverse();
        edits
    }
}

/// Replay an edit script on the parent sequence.
///
/// Returns `None` when the script does not fit the sequence (an `Equal` or
/// `Delete` that names a different value than the parent holds).
pub fn apply<T: Eq + Clone>(parent: &[T], script: &[Edit<T>]) -> Option<Vec<T>> {
    let mut out = Vec::with_capacity(parent.len());
    for edit in script {
        match edit {
            Edit::Equal {
                value, old_index, ..
            } => {
                if parent.get(*old_index) != Some(value) {
                    return None;
                }
                out.push(value.clone());
            }
            Edit::Delete { value, old_index } => {
                if parent.get(*old_index) != Some(value) {
                    return None;
                }
            }
            Edit::Insert { value, .. } => out.push(value.clone()),
        }
    }
    Some(out)
}
