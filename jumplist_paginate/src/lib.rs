// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Jumplist Paginate: page an index list that is taller than the viewport.
//!
//! The pagination core is a small piece of *step algebra* over scroll
//! geometry: the list's scrollable extent is divided into viewport-height
//! pages ("steps"), and moving between steps rewrites the vertical
//! translation of the element's transform. The algebra is pure and lives in
//! standalone functions ([`calculate_steps`], [`step_offset`],
//! [`needs_overlay`]); the [`Pager`] controller wires it to a
//! [`jumplist_surface::Surface`] and owns the element's saved style snapshot
//! so a reset can put everything back.
//!
//! Two overlay looks share the one algebra through the [`Presentation`]
//! strategy:
//!
//! - [`CornerWidget`]: a single persistent control pinned near the element's
//!   corner.
//! - [`EdgeButtons`]: a directional pair at the element's edges that fades
//!   each button out at its boundary page and repositions after each
//!   transition on a fixed 500ms deadline (timer-based, no completion
//!   callback; a later step does not cancel an in-flight deadline).
//!
//! ```rust
//! use jumplist_paginate::{ElementGeometry, calculate_steps, step_offset};
//!
//! let geometry = ElementGeometry {
//!     top: 0.0,
//!     viewport_height: 700.0,
//!     scroll_height: 2000.0,
//!     client_height: 700.0,
//! };
//! let mut state = calculate_steps(&geometry);
//! assert_eq!(state.step_count, 3);
//!
//! state.step_number = 1;
//! assert_eq!(step_offset(&state, &geometry, 0.0), -700.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod pager;
mod presentation;
mod steps;

pub use pager::Pager;
pub use presentation::{CornerWidget, EdgeButtons, Presentation, TRANSITION_MS};
pub use steps::{
    ElementGeometry, LAST_PAGE_BOTTOM_MARGIN, PaginationState, StepDirection, advance,
    calculate_steps, needs_overlay, step_length, step_offset,
};
