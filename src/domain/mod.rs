pub mod errors;

pub use errors::{SortError, SortResult};

use std::fmt::{Display, Formatter};

/// Output layout for a flattened upper-triangular matrix of cls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClOrder {
    /// New-style order: pairs grouped by diagonal distance, auto-spectra
    /// first. This is what current healpy `synalm`/`synfast` expect.
    #[default]
    Diagonal,
    /// Old-style order: row-major traversal of the upper triangle.
    Row,
}

impl ClOrder {
    /// Map the original `new` flag convention onto the layout enum.
    pub const fn from_new_flag(new: bool) -> Self {
        if new { Self::Diagonal } else { Self::Row }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diagonal => "diagonal",
            Self::Row => "row",
        }
    }
}

impl Display for ClOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Canonical matrix coordinates of one unordered field-pair.
///
/// Construction sorts the two indices, so `(a, b)` and `(b, a)` compare and
/// hash identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairIndices {
    row: usize,
    col: usize,
}

impl PairIndices {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { row: a, col: b }
        } else {
            Self { row: b, col: a }
        }
    }

    pub const fn row(self) -> usize {
        self.row
    }

    pub const fn col(self) -> usize {
        self.col
    }

    /// Distance from the main diagonal.
    pub const fn distance(self) -> usize {
        self.col - self.row
    }

    /// Whether this names an auto-spectrum (both labels equal).
    pub const fn is_auto(self) -> bool {
        self.row == self.col
    }
}
