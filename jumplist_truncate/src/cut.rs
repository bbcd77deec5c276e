// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The string-cut solver: which characters survive, and where the pipes go.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::distribute::{Bias, Counts, distribute_integer};

/// Placeholder rendered for each elided run.
pub const PLACEHOLDER: char = '|';

/// A solved cut of an index string.
#[derive(Debug, Clone, PartialEq)]
pub struct StringCut {
    /// Number of kept characters (`k`).
    pub kept: usize,
    /// Number of elided runs (`p`, "pipes").
    pub pipes: usize,
    /// Kept characters per group; `pipes + 1` entries, each at least 1.
    pub groups: Counts,
    /// Elided characters per gap; `pipes` entries, each at least 2.
    pub gaps: Counts,
    /// The reconstructed display string with one [`PLACEHOLDER`] per gap.
    pub display: String,
    /// Indices into the original string of every retained character.
    pub retained: Vec<usize>,
}

impl StringCut {
    /// A cut that keeps the whole input unchanged.
    fn identity(original: &str) -> Self {
        let total = original.chars().count();
        let mut groups = Counts::new();
        groups.push(total);
        Self {
            kept: total,
            pipes: 0,
            groups,
            gaps: Counts::new(),
            display: original.to_string(),
            retained: (0..total).collect(),
        }
    }
}

/// Failure to cut a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutError {
    /// The input has fewer than 2 characters; there is nothing to cut
    /// between.
    TooShort,
    /// No pipe count satisfies the constraints for this removal count.
    Infeasible,
}

impl core::fmt::Display for CutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooShort => write!(f, "input shorter than 2 characters"),
            Self::Infeasible => write!(f, "no feasible cut for this removal count"),
        }
    }
}

/// Decides which characters of `original` to keep and which runs to elide so
/// that roughly `remove_count` characters disappear.
///
/// The display string shrinks by `remove_count` positions; because every
/// elided run must drop at least 2 characters while contributing 1
/// placeholder, the number of *original* characters removed can exceed
/// `remove_count` (removing "one" character from `ABCDEFGHIJKLMN` actually
/// drops `GH` and shows `ABCDEF|IJKLMN`).
///
/// Candidate pipe counts are searched from `remove_count` downward and the
/// first feasible one wins. This deterministic tie-break (favor the most
/// gaps) reproduces the reference outputs; it is not claimed optimal for
/// visual evenness.
///
/// Constraints on a feasible `(k, p)` with `k = total - remove_count - p`:
///
/// - `k >= 2` — the first and last character always survive,
/// - `total - k >= 2 * p` — each run elides at least 2 characters,
/// - `p <= k - 1` — no more gaps than boundaries between kept groups.
pub fn solve_string_cut(
    original: &str,
    remove_count: usize,
    bias: Bias,
) -> Result<StringCut, CutError> {
    let chars: Vec<char> = original.chars().collect();
    let total = chars.len();
    if total < 2 {
        return Err(CutError::TooShort);
    }
    if remove_count == 0 {
        return Ok(StringCut::identity(original));
    }
    let target_len = total
        .checked_sub(remove_count)
        .ok_or(CutError::Infeasible)?;

    let mut solution: Option<(usize, usize)> = None;
    for pipes in (1..=remove_count).rev() {
        let Some(kept) = target_len.checked_sub(pipes) else {
            continue;
        };
        if kept < 2 {
            continue;
        }
        if total - kept < 2 * pipes {
            continue;
        }
        if pipes > kept - 1 {
            continue;
        }
        solution = Some((kept, pipes));
        break;
    }
    let (kept, pipes) = solution.ok_or(CutError::Infeasible)?;
    let removed = total - kept;

    let groups = distribute_integer(kept, pipes + 1, bias);
    let mut gaps: Counts = distribute_integer(removed - 2 * pipes, pipes, bias);
    for gap in gaps.iter_mut() {
        *gap += 2;
    }

    let mut display = String::with_capacity(target_len);
    let mut retained = Vec::with_capacity(kept);
    let mut index = 0;
    for (g, group) in groups.iter().enumerate() {
        for _ in 0..*group {
            display.push(chars[index]);
            retained.push(index);
            index += 1;
        }
        if let Some(gap) = gaps.get(g) {
            index += gap;
            display.push(PLACEHOLDER);
        }
    }
    debug_assert_eq!(index, total, "cut must consume the whole input");

    Ok(StringCut {
        kept,
        pipes,
        groups,
        gaps,
        display,
        retained,
    })
}

#[cfg(test)]
mod tests {
    use super::{CutError, PLACEHOLDER, solve_string_cut};
    use crate::distribute::Bias;

    const FOURTEEN: &str = "ABCDEFGHIJKLMN";

    #[test]
    fn reference_cuts_for_fourteen_characters() {
        let cases = [
            (1, "ABCDEF|IJKLMN"),
            (2, "ABC|FGHI|LMN"),
            (3, "AB|EF|IJ|MN"),
            (4, "A|D|GH|K|N"),
        ];
        for (remove, expected) in cases {
            let cut = solve_string_cut(FOURTEEN, remove, Bias::Center).unwrap();
            assert_eq!(cut.display, expected, "removeCount={remove}");
            assert_eq!(cut.display.chars().count(), 14 - remove);
        }
    }

    #[test]
    fn kept_plus_removed_equals_total() {
        for total in 2..=26_usize {
            let original: alloc::string::String =
                ('A'..).take(total).collect();
            for remove in 0..total {
                let Ok(cut) = solve_string_cut(&original, remove, Bias::Center) else {
                    continue;
                };
                let removed: usize = cut.gaps.iter().sum();
                assert_eq!(cut.kept + removed, total);
                assert!(cut.gaps.iter().all(|g| *g >= 2), "gap shorter than 2");
                assert_eq!(cut.groups.len(), cut.pipes + 1);
                assert_eq!(cut.retained.len(), cut.kept);
                assert_eq!(
                    cut.display.chars().filter(|c| *c == PLACEHOLDER).count(),
                    cut.pipes
                );
            }
        }
    }

    #[test]
    fn first_and_last_characters_always_survive() {
        for remove in 1..=9 {
            let cut = solve_string_cut(FOURTEEN, remove, Bias::Center).unwrap();
            assert!(cut.display.starts_with('A'), "removeCount={remove}");
            assert!(cut.display.ends_with('N'), "removeCount={remove}");
        }
    }

    #[test]
    fn zero_removal_is_the_identity() {
        let cut = solve_string_cut(FOURTEEN, 0, Bias::Center).unwrap();
        assert_eq!(cut.display, FOURTEEN);
        assert_eq!(cut.pipes, 0);
        assert_eq!(cut.retained, (0..14).collect::<alloc::vec::Vec<_>>());
    }

    #[test]
    fn degenerate_inputs_are_flagged() {
        assert_eq!(
            solve_string_cut("A", 1, Bias::Center),
            Err(CutError::TooShort)
        );
        assert_eq!(
            solve_string_cut("", 0, Bias::Center),
            Err(CutError::TooShort)
        );
        // Removing more than the string can give up is infeasible.
        assert_eq!(
            solve_string_cut("ABCD", 3, Bias::Center),
            Err(CutError::Infeasible)
        );
        assert_eq!(
            solve_string_cut("ABCD", 9, Bias::Center),
            Err(CutError::Infeasible)
        );
    }

    #[test]
    fn bias_changes_where_groups_grow() {
        // removeCount=2 over 14 chars keeps 10 in 3 groups; the remainder
        // lands on the leading group for Start and the trailing one for End.
        let start = solve_string_cut(FOURTEEN, 2, Bias::Start).unwrap();
        assert_eq!(start.groups.as_slice(), &[4, 3, 3]);
        let end = solve_string_cut(FOURTEEN, 2, Bias::End).unwrap();
        assert_eq!(end.groups.as_slice(), &[3, 3, 4]);
    }
}
