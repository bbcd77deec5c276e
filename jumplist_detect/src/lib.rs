// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Jumplist Detect: find the alphabetic index list embedded in a content tree.
//!
//! Pages with long grouped listings often carry a vertical A–Z jump list next
//! to the content. Nothing marks that list structurally, so this crate finds
//! it heuristically:
//!
//! - [`likely_an_alphabet`] tests whether a cleaned text run contains a
//!   strictly increasing run of consecutive uppercase letters of a configured
//!   minimum length (18 consecutive letters is almost certainly an index,
//!   a short "ABC" heading is not).
//! - [`detect`] walks the tree depth-first, children before parents, so the
//!   smallest node that still carries the whole alphabet wins over its
//!   ancestors. Geometry then gates the match: wide nodes are body content,
//!   and wide-but-short nodes are horizontal link bars, not vertical indexes.
//!
//! The walk consumes the host tree through [`jumplist_surface::Surface`], so
//! it runs unchanged over a live render tree or an in-memory test double.
//!
//! ```rust
//! use jumplist_detect::{DetectorConfig, likely_an_alphabet};
//!
//! let config = DetectorConfig::default();
//! assert!(likely_an_alphabet("ABCDEFGHIJKLMNOPQR", config.identification_min_size));
//! assert!(!likely_an_alphabet("abcdefghijklmnopqr", config.identification_min_size));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod alphabet;
mod detector;

pub use alphabet::{clean_text, likely_an_alphabet};
pub use detector::{DetectorConfig, IndexElement, detect};
