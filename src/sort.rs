/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Sorting routines compared by the benchmark. Each one borrows its input and
//! returns a freshly sorted vector.

use superslice::Ext;

use super::merge;

/// Run length used by [`kway_merge_sort`] before handing runs to the k-way merge.
pub const RUN_LEN: usize = 32;

/// Top-down merge sort.
pub fn merge_sort<T>(seq: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    if seq.len() <= 1 {
        return seq.to_vec();
    }

    let (left, right) = seq.split_at(seq.len() / 2);

    merge::merge(&merge_sort(left), &merge_sort(right))
}

/// Textbook insertion sort over a copy of `seq`.
///
/// Each element walks left past every strictly greater one, which keeps the
/// sort stable.
pub fn insertion_sort<T>(seq: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut sorted = seq.to_vec();

    for i in 1..sorted.len() {
        let mut j = i;
        while j > 0 && sorted[j] < sorted[j - 1] {
            sorted.swap(j, j - 1);
            j -= 1;
        }
    }

    sorted
}

/// Insertion sort that binary-searches the sorted prefix for the insertion
/// point, then shifts once.
pub fn binary_insertion_sort<T>(seq: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut sorted = seq.to_vec();

    for i in 1..sorted.len() {
        let at = sorted[..i].upper_bound(&sorted[i]);
        sorted[at..=i].rotate_right(1);
    }

    sorted
}

/// The standard library's stable adaptive sort.
pub fn std_sorted<T>(seq: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut sorted = seq.to_vec();
    sorted.sort();
    sorted
}

/// The standard library's unstable sort.
pub fn std_sort_unstable<T>(seq: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut sorted = seq.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Insertion-sorts runs of [`RUN_LEN`] elements and merges them all at once
/// with [`merge::merge_all_unchecked`], the runs being sorted already.
pub fn kway_merge_sort<T>(seq: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let runs: Vec<Vec<T>> = seq.chunks(RUN_LEN).map(insertion_sort).collect();

    merge::merge_all_unchecked(&runs)
}
