//! In-place comparison sorts — bubble, merge, quick.

use serde::Serialize;

/// Which sorting algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortAlgo {
    /// Adjacent-swap passes, O(n²), stable.
    Bubble,
    /// Recursive midpoint split and stable merge, O(n log n).
    Merge,
    /// Lomuto-partition quicksort, average O(n log n).
    Quick,
}

impl SortAlgo {
    /// Return a human-readable name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Merge => "merge",
            Self::Quick => "quick",
        }
    }

    /// Parse a sort algorithm from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bubble" => Some(Self::Bubble),
            "merge" => Some(Self::Merge),
            "quick" => Some(Self::Quick),
            _ => None,
        }
    }

    /// Sort `seq` in place with this algorithm.
    pub fn run<T: Ord + Clone>(&self, seq: &mut [T]) {
        match self {
            Self::Bubble => bubble_sort(seq),
            Self::Merge => merge_sort(seq),
            Self::Quick => quick_sort(seq),
        }
    }
}

impl std::fmt::Display for SortAlgo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Bubble sort: repeated adjacent-swap passes. O(n²), stable, in place.
///
/// Runs the full unoptimized pass count: pass `i` bubbles the largest
/// remaining element to position `n - i - 1`.
pub fn bubble_sort<T: Ord>(seq: &mut [T]) {
    let n = seq.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if seq[j] > seq[j + 1] {
                seq.swap(j, j + 1);
            }
        }
    }
}

/// Merge sort: recursive midpoint split, stable merge. O(n log n).
///
/// Sorts in place through temporary copies of the two halves; ties take
/// the left half's element first, which is what keeps the sort stable.
pub fn merge_sort<T: Ord + Clone>(seq: &mut [T]) {
    if seq.len() <= 1 {
        return;
    }
    let mid = seq.len() / 2;
    let mut left = seq[..mid].to_vec();
    let mut right = seq[mid..].to_vec();
    merge_sort(&mut left);
    merge_sort(&mut right);
    merge(&left, &right, seq);
}

/// Merge two sorted runs into `out`, left-biased on ties.
fn merge<T: Ord + Clone>(left: &[T], right: &[T], out: &mut [T]) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        if i < left.len() && (j >= right.len() || left[i] <= right[j]) {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// Quicksort with the Lomuto partition scheme. Average O(n log n), worst
/// O(n²) on adversarial input; in place, not stable.
pub fn quick_sort<T: Ord>(seq: &mut [T]) {
    if seq.len() <= 1 {
        return;
    }
    let pivot = partition(seq);
    let (lower, upper) = seq.split_at_mut(pivot);
    quick_sort(lower);
    quick_sort(&mut upper[1..]);
}

/// Lomuto partition: the last element is the pivot; one pass swaps every
/// element `<=` pivot into the growing lower region, then the pivot is
/// swapped into its final slot. Returns the pivot's final index.
fn partition<T: Ord>(seq: &mut [T]) -> usize {
    let last = seq.len() - 1;
    let mut boundary = 0;
    for j in 0..last {
        if seq[j] <= seq[last] {
            seq.swap(boundary, j);
            boundary += 1;
        }
    }
    seq.swap(boundary, last);
    boundary
}
