//! Sequence searches — linear scan and recursive binary search.

use std::cmp::Ordering;

use serde::Serialize;

/// Which search algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchAlgo {
    /// Sequential scan, O(n), no ordering requirement.
    Linear,
    /// Recursive halving, O(log n), requires ascending order.
    Binary,
}

impl SearchAlgo {
    /// Return a human-readable name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Binary => "binary",
        }
    }

    /// Parse a search algorithm from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "linear" => Some(Self::Linear),
            "binary" => Some(Self::Binary),
            _ => None,
        }
    }

    /// Run this search over `seq`.
    pub fn run<T: Ord>(&self, seq: &[T], target: &T) -> Option<usize> {
        match self {
            Self::Linear => linear_search(seq, target),
            Self::Binary => binary_search(seq, target),
        }
    }
}

impl std::fmt::Display for SearchAlgo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Linear search: index of the first element equal to `target`, or
/// `None` when no element matches. O(n).
pub fn linear_search<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    seq.iter().position(|item| item == target)
}

/// Binary search by recursive halving. O(log n).
///
/// `seq` must be sorted ascending; on unsorted input the result is
/// unspecified (the caller's responsibility; ordering is not validated).
/// Under duplicates any matching index may be returned.
pub fn binary_search<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    if seq.is_empty() {
        return None;
    }
    let mid = seq.len() / 2;
    match target.cmp(&seq[mid]) {
        Ordering::Equal => Some(mid),
        Ordering::Less => binary_search(&seq[..mid], target),
        Ordering::Greater => binary_search(&seq[mid + 1..], target).map(|i| i + mid + 1),
    }
}
