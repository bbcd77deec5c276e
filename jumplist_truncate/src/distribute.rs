// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Near-equal integer distribution with a remainder bias.

use smallvec::{SmallVec, smallvec};

/// Per-bucket counts.
///
/// Bucket counts are bounded by the alphabet (at most 13 kept groups for a
/// 26-letter list), so they stay inline in practice.
pub type Counts = SmallVec<[usize; 16]>;

/// Where the indivisible remainder lands when a total does not split evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bias {
    /// Leading buckets each absorb one extra unit.
    Start,
    /// The bucket at `floor((buckets - remainder) / 2)` absorbs the whole
    /// remainder.
    #[default]
    Center,
    /// Trailing buckets each absorb one extra unit.
    End,
}

/// Splits `total` into `buckets` near-equal non-negative integers.
///
/// - `buckets == 0` returns an empty sequence.
/// - `total < buckets` assigns `1` to each of the first `total` buckets and
///   `0` to the rest.
/// - Otherwise every bucket gets `total / buckets` and the remainder is
///   placed according to `bias`.
///
/// The `Center` placement is deliberately lumped rather than spread: the
/// reference behavior is `distribute_integer(10, 4, Center) == [2, 4, 2, 2]`,
/// and downstream cuts are pinned to it.
#[must_use]
pub fn distribute_integer(total: usize, buckets: usize, bias: Bias) -> Counts {
    if buckets == 0 {
        return Counts::new();
    }
    if total < buckets {
        return (0..buckets).map(|i| usize::from(i < total)).collect();
    }
    let base = total / buckets;
    let remainder = total % buckets;
    let mut out: Counts = smallvec![base; buckets];
    match bias {
        Bias::Start => {
            for slot in out.iter_mut().take(remainder) {
                *slot += 1;
            }
        }
        Bias::End => {
            for slot in out.iter_mut().rev().take(remainder) {
                *slot += 1;
            }
        }
        Bias::Center => {
            if remainder > 0 {
                out[(buckets - remainder) / 2] += remainder;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{Bias, distribute_integer};

    #[test]
    fn center_lumps_the_remainder() {
        assert_eq!(
            distribute_integer(10, 4, Bias::Center).as_slice(),
            &[2, 4, 2, 2]
        );
        // Even splits have no remainder to place.
        assert_eq!(
            distribute_integer(12, 4, Bias::Center).as_slice(),
            &[3, 3, 3, 3]
        );
    }

    #[test]
    fn start_and_end_spread_the_remainder() {
        assert_eq!(
            distribute_integer(10, 4, Bias::Start).as_slice(),
            &[3, 3, 2, 2]
        );
        assert_eq!(
            distribute_integer(10, 4, Bias::End).as_slice(),
            &[2, 2, 3, 3]
        );
    }

    #[test]
    fn fewer_units_than_buckets_yields_ones_then_zeros() {
        assert_eq!(
            distribute_integer(3, 5, Bias::Center).as_slice(),
            &[1, 1, 1, 0, 0]
        );
    }

    #[test]
    fn zero_buckets_yields_an_empty_sequence() {
        assert!(distribute_integer(7, 0, Bias::Center).is_empty());
        assert!(distribute_integer(0, 0, Bias::Start).is_empty());
    }

    #[test]
    fn totals_are_preserved() {
        for total in 0..40 {
            for buckets in 1..15 {
                for bias in [Bias::Start, Bias::Center, Bias::End] {
                    let out = distribute_integer(total, buckets, bias);
                    assert_eq!(out.len(), buckets);
                    let sum: usize = out.iter().sum();
                    assert_eq!(sum, total, "sum mismatch for {total}/{buckets}");
                }
            }
        }
    }
}
