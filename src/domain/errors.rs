pub type SortResult<T> = Result<T, SortError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    #[error("cls and pairs have different lengths: {cls_len} cls vs {pairs_len} pairs")]
    ShapeMismatch { cls_len: usize, pairs_len: usize },
    #[error("element at position {position} is not a pair of field labels (got {arity})")]
    InvalidPair { position: usize, arity: usize },
    #[error("length {len} of cls array is not a triangle number")]
    NotTriangleNumber { len: usize },
}
