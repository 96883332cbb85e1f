//! Reordering of angular power spectra into harmonic-synthesis order.

mod labels;
mod layout;
mod pairs;

pub use labels::{LabelInterner, diagonal_indices, pair_indices};
pub use layout::{cl_positions, triangle_side, triangle_size};
pub use pairs::FieldPair;

use crate::domain::{ClOrder, PairIndices, SortError, SortResult};
use labels::pair_indices_with_label_count;
use std::collections::HashMap;
use tracing::debug;

/// Sort cls into healpy `synalm`/`synfast` order.
///
/// `pairs` names the spectrum at each position of `cls`, e.g.
/// `["TT", "TE", "TB", "EE", "BB"]`. The result is the flattened upper
/// triangle of the field-by-field matrix in the requested layout, with
/// `None` in every slot for which no spectrum was supplied. Pairs match
/// order-insensitively (`"TE"` and `"ET"` land in the same slot), and when
/// two input entries name the same pair the later one wins.
///
/// Payloads are opaque; any `Clone` type works, the pair labels themselves
/// included:
///
/// ```
/// use clsort::{ClOrder, sort_cls};
///
/// let pairs = ["TT", "TE", "TB", "EE", "BB"];
/// assert_eq!(
///     sort_cls(&pairs, &pairs, ClOrder::Diagonal).unwrap(),
///     vec![Some("TT"), Some("EE"), Some("BB"), Some("TE"), None, Some("TB")]
/// );
/// assert_eq!(
///     sort_cls(&pairs, &pairs, ClOrder::Row).unwrap(),
///     vec![Some("TT"), Some("TE"), Some("TB"), Some("EE"), None, Some("BB")]
/// );
/// ```
pub fn sort_cls<T, P>(cls: &[T], pairs: &[P], order: ClOrder) -> SortResult<Vec<Option<T>>>
where
    T: Clone,
    P: FieldPair,
{
    if cls.len() != pairs.len() {
        return Err(SortError::ShapeMismatch {
            cls_len: cls.len(),
            pairs_len: pairs.len(),
        });
    }

    let (indices, label_count) = pair_indices_with_label_count(pairs)?;
    debug!(
        labels = label_count,
        pairs = pairs.len(),
        order = %order,
        slots = triangle_size(label_count),
        "sorting cls"
    );

    let slots: HashMap<PairIndices, usize> = cl_positions(label_count, order)
        .into_iter()
        .enumerate()
        .map(|(slot, position)| (position, slot))
        .collect();

    let mut sorted = vec![None; triangle_size(label_count)];
    for (index, cl) in indices.into_iter().zip(cls) {
        sorted[slots[&index]] = Some(cl.clone());
    }
    Ok(sorted)
}

/// Pair each element of an already-ordered cls array with its matrix indices.
///
/// `cls.len()` must be a triangle number; the returned `(i, j, cl)` triples
/// follow the requested layout.
pub fn enumerate_cls<T>(cls: &[T], order: ClOrder) -> SortResult<Vec<(usize, usize, &T)>> {
    let n = triangle_side(cls.len())?;
    Ok(cl_positions(n, order)
        .into_iter()
        .zip(cls)
        .map(|(position, cl)| (position.row(), position.col(), cl))
        .collect())
}
