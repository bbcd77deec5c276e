// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Jumplist Truncate: compact an index list by eliding interior letters.
//!
//! When an A–Z jump list is taller than the space it has, pagination is one
//! answer; the other is to *shorten the list itself* by dropping interior
//! letters and showing one placeholder per dropped run:
//!
//! ```text
//! A B C D E F G H I J K L M N   →   A B C | F G H I | L M N
//! ```
//!
//! The solver is split into small pure layers, each testable on its own:
//!
//! - [`letters_to_remove`] turns sampled row geometry into a removal count.
//! - [`solve_string_cut`] decides how many elided runs ("pipes") to use and
//!   which original characters survive, given a removal count.
//! - [`distribute_integer`] splits an integer into near-equal buckets with a
//!   configurable [`Bias`] for the indivisible remainder.
//! - [`RowElision`] applies a computed cut to the actual rows of a detected
//!   element through [`jumplist_surface::Surface`], and can undo everything.
//!
//! ```rust
//! use jumplist_truncate::{Bias, solve_string_cut};
//!
//! let cut = solve_string_cut("ABCDEFGHIJKLMN", 2, Bias::Center).unwrap();
//! assert_eq!(cut.display, "ABC|FGHI|LMN");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cut;
mod distribute;
mod elide;
mod measure;

pub use cut::{CutError, PLACEHOLDER, StringCut, solve_string_cut};
pub use distribute::{Bias, Counts, distribute_integer};
pub use elide::RowElision;
pub use measure::{RowMetrics, letters_to_remove};
