use super::pairs::FieldPair;
use crate::domain::{PairIndices, SortResult};
use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered label deduplication.
///
/// The set of distinct field labels is discovered, not declared: it is
/// whatever appears in the input pairs, numbered by first occurrence.
#[derive(Debug, Clone)]
pub struct LabelInterner<L> {
    indices: HashMap<L, usize>,
}

impl<L: Eq + Hash> LabelInterner<L> {
    pub fn new() -> Self {
        Self {
            indices: HashMap::new(),
        }
    }

    /// Index of `label`, assigning the next first-seen index when new.
    pub fn intern(&mut self, label: L) -> usize {
        let next = self.indices.len();
        *self.indices.entry(label).or_insert(next)
    }

    /// Number of distinct labels seen so far.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl<L: Eq + Hash> Default for LabelInterner<L> {
    fn default() -> Self {
        Self::new()
    }
}

pub(super) fn pair_indices_with_label_count<P: FieldPair>(
    pairs: &[P],
) -> SortResult<(Vec<PairIndices>, usize)> {
    let mut interner = LabelInterner::new();
    let mut indices = Vec::with_capacity(pairs.len());
    for (position, pair) in pairs.iter().enumerate() {
        let (a, b) = pair.labels(position)?;
        let i = interner.intern(a);
        let j = interner.intern(b);
        indices.push(PairIndices::new(i, j));
    }
    Ok((indices, interner.len()))
}

/// Assign matrix indices to a list of pairs.
///
/// Labels are numbered in first-occurrence order across both positions of
/// every pair; each pair maps to the canonical coordinates of its two label
/// indices, so `["TT", "TE", "TB", "EE", "EB", "BB"]` yields
/// `(0,0), (0,1), (0,2), (1,1), (1,2), (2,2)`.
pub fn pair_indices<P: FieldPair>(pairs: &[P]) -> SortResult<Vec<PairIndices>> {
    pair_indices_with_label_count(pairs).map(|(indices, _)| indices)
}

/// Matrix indices of the `n` auto-spectra, `(0,0)` through `(n-1,n-1)`.
pub fn diagonal_indices(n: usize) -> Vec<PairIndices> {
    (0..n).map(|i| PairIndices::new(i, i)).collect()
}
