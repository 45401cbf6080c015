//! # bidstore-sort
//!
//! In-place comparison sorts over a flat `[Bid]` slice, ascending by
//! `title`. Independent of the store backends: callers own the slice,
//! the sorts only reorder it.
//!
//! Two strategies:
//!
//! - [`selection_sort`] - O(n²), minimal swaps
//! - [`quick_sort`] / [`quick_sort_by_title`] - Hoare partition with a
//!   midpoint pivot, O(n log n) average
//!
//! ## Index convention
//!
//! `quick_sort` takes **inclusive** `begin`/`end` indices - `end` is
//! the last valid index of the range, not one past it. The Hoare
//! split point lands inside `[begin, end)` and both recursive halves
//! (`[begin, split]`, `[split + 1, end]`) use the same convention.
//! Passing `end >= bids.len()` on a non-empty range panics; use
//! [`quick_sort_by_title`] to sort a whole slice without indexing.

use bidstore_core::Bid;

/// Selection sort, ascending by title, over the whole slice.
///
/// For each position, the minimum of the remaining suffix is swapped
/// into place. Any stability is incidental and not guaranteed.
pub fn selection_sort(bids: &mut [Bid]) {
    let len = bids.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let mut min_index = i;
        for j in i + 1..len {
            if bids[j].title < bids[min_index].title {
                min_index = j;
            }
        }
        if min_index != i {
            bids.swap(i, min_index);
        }
    }
}

/// Quicksort the whole slice ascending by title.
///
/// Convenience wrapper that handles the empty and single-element
/// slices for which no valid inclusive index range exists.
pub fn quick_sort_by_title(bids: &mut [Bid]) {
    if bids.len() > 1 {
        quick_sort(bids, 0, bids.len() - 1);
    }
}

/// Quicksort `bids[begin..=end]` ascending by title.
///
/// Hoare partition with the midpoint element as pivot. Both indices
/// are inclusive; a range with `begin >= end` is already sorted and
/// returns immediately.
///
/// # Panics
///
/// Panics if `begin < end` and `end >= bids.len()` - the inclusive
/// convention means `end` must be a valid index.
pub fn quick_sort(bids: &mut [Bid], begin: usize, end: usize) {
    if begin >= end {
        return;
    }
    assert!(
        end < bids.len(),
        "quick_sort takes an inclusive end index: end {} is out of bounds for {} bids",
        end,
        bids.len()
    );

    let split = partition(bids, begin, end);
    quick_sort(bids, begin, split);
    quick_sort(bids, split + 1, end);
}

/// Hoare partition of `bids[begin..=end]` around the midpoint title.
///
/// The low cursor walks right past titles below the pivot, the high
/// cursor walks left past titles above it; out-of-order pairs are
/// swapped until the cursors meet. Returns the high cursor as the
/// split point, which is always strictly below `end`, so recursion on
/// `[begin, split]` and `[split + 1, end]` terminates.
fn partition(bids: &mut [Bid], begin: usize, end: usize) -> usize {
    let pivot = bids[begin + (end - begin) / 2].title.clone();

    let mut low = begin;
    let mut high = end;
    loop {
        while bids[low].title < pivot {
            low += 1;
        }
        while bids[high].title > pivot {
            high -= 1;
        }
        if low >= high {
            return high;
        }
        bids.swap(low, high);
        low += 1;
        high -= 1;
    }
}
