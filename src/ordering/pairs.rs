use crate::domain::{SortError, SortResult};
use std::hash::Hash;

/// A caller-facing representation of one field-pair.
///
/// Pairs arrive in whatever shape the caller's spectra catalogue uses:
/// two-character strings like `"TE"`, label tuples, fixed-size arrays, or
/// slices. Splitting is fallible because not every representation fixes the
/// arity in its type; `position` is the pair's index in the input and is
/// carried into the error for context.
pub trait FieldPair {
    type Label: Clone + Eq + Hash;

    fn labels(&self, position: usize) -> SortResult<(Self::Label, Self::Label)>;
}

impl FieldPair for &str {
    type Label = char;

    fn labels(&self, position: usize) -> SortResult<(char, char)> {
        let mut chars = self.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => Ok((a, b)),
            _ => Err(SortError::InvalidPair {
                position,
                arity: self.chars().count(),
            }),
        }
    }
}

impl FieldPair for String {
    type Label = char;

    fn labels(&self, position: usize) -> SortResult<(char, char)> {
        self.as_str().labels(position)
    }
}

impl<L: Clone + Eq + Hash> FieldPair for (L, L) {
    type Label = L;

    fn labels(&self, _position: usize) -> SortResult<(L, L)> {
        Ok((self.0.clone(), self.1.clone()))
    }
}

impl<L: Clone + Eq + Hash> FieldPair for [L; 2] {
    type Label = L;

    fn labels(&self, _position: usize) -> SortResult<(L, L)> {
        Ok((self[0].clone(), self[1].clone()))
    }
}

impl<L: Clone + Eq + Hash> FieldPair for &[L] {
    type Label = L;

    fn labels(&self, position: usize) -> SortResult<(L, L)> {
        if self.len() == 2 {
            Ok((self[0].clone(), self[1].clone()))
        } else {
            Err(SortError::InvalidPair {
                position,
                arity: self.len(),
            })
        }
    }
}

impl<L: Clone + Eq + Hash> FieldPair for Vec<L> {
    type Label = L;

    fn labels(&self, position: usize) -> SortResult<(L, L)> {
        self.as_slice().labels(position)
    }
}
