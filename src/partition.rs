// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Splitting an index range among workers.

use std::ops::Range;

/// Splits `0..total` into `parts` contiguous ranges whose lengths
/// differ by at most one.  The first `total % parts` ranges carry the
/// extra element.  Asking for zero parts is treated as asking for one.
pub fn split(total: u64, parts: usize) -> Vec<Range<u64>> {
    let parts = parts.max(1) as u64;
    let base = total / parts;
    let extra = total % parts;

    let mut start = 0;
    (0..parts)
        .map(|i| {
            let len = base + if i < extra { 1 } else { 0 };
            let range = start..start + len;
            start += len;
            range
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_cover_everything_once() {
        let ranges = split(10, 3);
        assert_eq!(ranges, vec![0..4, 4..7, 7..10]);
    }

    #[test]
    fn more_parts_than_items_leaves_empty_tails() {
        let ranges = split(2, 4);
        assert_eq!(ranges, vec![0..1, 1..2, 2..2, 2..2]);
    }

    #[test]
    fn zero_parts_means_one() {
        assert_eq!(split(5, 0), vec![0..5]);
    }

    #[test]
    fn lengths_are_balanced() {
        for parts in 1..17 {
            let lens: Vec<u64> = split(1000, parts).iter().map(|r| r.end - r.start).collect();
            let (lo, hi) = (lens.iter().min().unwrap(), lens.iter().max().unwrap());
            assert!(hi - lo <= 1);
            assert_eq!(lens.iter().sum::<u64>(), 1000);
        }
    }
}
