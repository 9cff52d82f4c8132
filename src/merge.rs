/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Stable merging of pre-sorted sequences.
//!
//! Inputs are expected to be sorted ascending. That is not checked in release
//! builds: an unsorted input still yields every element exactly once, just not
//! in order.

use log::{debug, warn};

pub fn is_sorted<T>(seq: &[T]) -> bool
    where T: Ord
{
    seq.windows(2).all(|w| w[0] <= w[1])
}

/// Merges two sorted slices into a new sorted vector.
///
/// Ties go to `left`, so equal elements keep their left-then-right order.
pub fn merge<T>(left: &[T], right: &[T]) -> Vec<T>
    where T: Ord + Clone
{
    let (mut il, mut ir) = (0, 0);
    let mut merged = Vec::with_capacity(left.len() + right.len());

    while il < left.len() && ir < right.len()
    {
        // `<=`, not `<`: stability depends on it
        if left[il] <= right[ir]
        {
            merged.push(left[il].clone());
            il += 1;
        }
        else
        {
            merged.push(right[ir].clone());
            ir += 1;
        }
    }

    merged.extend_from_slice(&left[il..]);
    merged.extend_from_slice(&right[ir..]);

    merged
}

/// Merges any number of sorted sequences into one sorted vector.
///
/// Empty members are dropped up front. The survivors are split in half by
/// count (left half gets `count / 2`), each half is merged recursively and the
/// two results are combined with [`merge`]. Recursion depth is O(log k) and
/// total work O(n log k).
///
/// The merge is stable across members: of two equal elements, the one from the
/// earlier member comes first.
pub fn merge_all<T, S>(lists: &[S]) -> Vec<T>
    where T: Ord + Clone, S: AsRef<[T]>
{
    if cfg!(debug_assertions)
    {
        for (i, seq) in lists.iter().enumerate() {
            if !is_sorted(seq.as_ref()) {
                warn!("merge input {} is not sorted, output order is undefined", i); }
        }
    }

    merge_all_unchecked(lists)
}

/// [`merge_all`] without the debug-build sortedness scan, for callers whose
/// inputs are sorted by construction.
pub fn merge_all_unchecked<T, S>(lists: &[S]) -> Vec<T>
    where T: Ord + Clone, S: AsRef<[T]>
{
    let non_empty: Vec<&[T]> = lists.iter()
        .map(|s| s.as_ref())
        .filter(|s| !s.is_empty())
        .collect();

    debug!("merging {} sequences ({} non-empty)", lists.len(), non_empty.len());

    merge_halves(&non_empty)
}

fn merge_halves<T>(lists: &[&[T]]) -> Vec<T>
    where T: Ord + Clone
{
    match lists.len()
    {
        0 => vec![],
        1 => lists[0].to_vec(),
        2 => merge(lists[0], lists[1]),

        count =>
        {
            let (left, right) = lists.split_at(count / 2);
            merge(&merge_halves(left), &merge_halves(right))
        }
    }
}
