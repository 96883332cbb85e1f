use crate::domain::{ClOrder, PairIndices, SortError, SortResult};

/// Number of unordered pairs over `n` labels, auto-spectra included.
pub const fn triangle_size(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Side length of the triangle with `len` entries.
///
/// Inverse of [`triangle_size`]; fails when `len` is not a triangle number.
pub fn triangle_side(len: usize) -> SortResult<usize> {
    let n = ((2 * len) as f64).sqrt() as usize;
    if triangle_size(n) == len {
        Ok(n)
    } else {
        Err(SortError::NotTriangleNumber { len })
    }
}

/// Slot-by-slot enumeration of every unordered pair over `n` labels.
///
/// Row order walks the upper triangle row by row. Diagonal order lists the
/// auto-spectra first, then the pairs at distance 1 in row order, and so on
/// out to distance `n - 1`; a row-major walk that emits `(j - i, j)` in
/// place of `(i, j)` produces exactly that sequence.
pub fn cl_positions(n: usize, order: ClOrder) -> Vec<PairIndices> {
    let mut positions = Vec::with_capacity(triangle_size(n));
    for i in 0..n {
        for j in i..n {
            let row = match order {
                ClOrder::Diagonal => j - i,
                ClOrder::Row => i,
            };
            positions.push(PairIndices::new(row, j));
        }
    }
    positions
}
