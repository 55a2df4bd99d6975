// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! In-place sorting routines backing the [`List`](super::List) sort methods.
//!
//! Three independent algorithms, all total on empty, single-element,
//! already-sorted, reverse-sorted, and all-equal inputs:
//!
//! * [`insertion_by`]: predicate-driven insertion sort, stable.
//! * [`quick_by`]: comparator-driven recursive quicksort, unstable.
//! * [`merge_sort`]: stable top-down mergesort with guaranteed O(n log n).

use std::cmp::Ordering;

/// Insertion sort driven by a precedence predicate.
///
/// `before(l, r)` means "`l` must sort before `r`". Each element is walked
/// backwards through the sorted prefix until its predecessor no longer has
/// to yield, so equal elements keep their relative order.
pub(crate) fn insertion_by<T, F>(items: &mut [T], before: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for unsorted in 1..items.len() {
        let mut slot = unsorted;
        while slot > 0 && before(&items[slot], &items[slot - 1]) {
            items.swap(slot, slot - 1);
            slot -= 1;
        }
    }
}

/// Recursive quicksort driven by a three-way comparator.
///
/// The middle element is chosen as the pivot so already-sorted input does not
/// degenerate, then the slice is partitioned and both sides are sorted
/// independently. Each recursion excludes the pivot, so depth is bounded by
/// the slice length.
pub(crate) fn quick_by<T, F>(items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }

    let pivot = partition(items, compare);
    let (lower, upper) = items.split_at_mut(pivot);
    quick_by(lower, compare);
    quick_by(&mut upper[1..], compare);
}

/// Lomuto partition: moves the pivot to the end, sweeps everything that
/// compares less than it in front of the boundary, then swaps the pivot onto
/// the boundary. Returns the pivot's final position.
fn partition<T, F>(items: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let last = items.len() - 1;
    items.swap(last / 2, last);

    let mut boundary = 0;
    for probe in 0..last {
        if compare(&items[probe], &items[last]) == Ordering::Less {
            items.swap(probe, boundary);
            boundary += 1;
        }
    }

    items.swap(boundary, last);
    boundary
}

/// Stable top-down mergesort.
///
/// The elements are drained into a working vector, sorted by recursive
/// halving, and written back into the list's original allocation, so the
/// container's capacity is unchanged by the sort.
pub(crate) fn merge_sort<T: Ord>(items: &mut Vec<T>) {
    if items.len() <= 1 {
        return;
    }

    let drained: Vec<T> = items.drain(..).collect();
    let sorted = merge_halving(drained);
    items.extend(sorted);
}

fn merge_halving<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }

    let upper = items.split_off(items.len() / 2);
    merge(merge_halving(items), merge_halving(upper))
}

/// Merges two sorted runs, preferring the lower run on ties so equal
/// elements keep their original relative order.
fn merge<T: Ord>(lower: Vec<T>, upper: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(lower.len() + upper.len());
    let mut lower = lower.into_iter().peekable();
    let mut upper = upper.into_iter().peekable();

    loop {
        let take_lower = match (lower.peek(), upper.peek()) {
            (Some(l), Some(u)) => l <= u,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_lower { lower.next() } else { upper.next() };
        if let Some(item) = next {
            merged.push(item);
        }
    }

    merged
}
