//! Sort angular power spectra into the order expected by healpy's
//! `synalm` and `synfast` routines.
//!
//! A set of spectra ("cls") arrives as a flat list together with a parallel
//! list of field-pairs such as `"TT"` or `"TE"`. The synthesis routines
//! expect those spectra in a fixed flattening of the upper triangle of the
//! field-by-field matrix; [`sort_cls`] produces that flattening, with `None`
//! in every slot for which no spectrum was supplied.
//!
//! ```
//! use clsort::{sort_cls, ClOrder};
//!
//! let pairs = ["TT", "TE", "TB", "EE", "BB"];
//! let sorted = sort_cls(&pairs, &pairs, ClOrder::Diagonal).unwrap();
//! assert_eq!(
//!     sorted,
//!     vec![Some("TT"), Some("EE"), Some("BB"), Some("TE"), None, Some("TB")]
//! );
//! ```

pub mod domain;
pub mod ordering;

pub use domain::{ClOrder, PairIndices, SortError, SortResult};
pub use ordering::{
    FieldPair, LabelInterner, cl_positions, diagonal_indices, enumerate_cls, pair_indices,
    sort_cls, triangle_side, triangle_size,
};
