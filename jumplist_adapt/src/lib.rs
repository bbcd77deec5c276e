// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Jumplist Adapt: the caller-owned orchestrator for index-list adaptation.
//!
//! An [`Adapter`] ties the pieces together over one host surface: it runs
//! the detector from a root node, and when the found index list overflows
//! its space it activates a paging overlay for it. The host owns the handle
//! (no global state) and drives it through explicit, timestamped entry
//! points:
//!
//! - [`Adapter::start`] applies an optional JSON [`Config`] and runs a full
//!   adaptation cycle; calling it again resets and recomputes.
//! - [`Adapter::page`] steps the active overlay.
//! - [`Adapter::on_mutation`] notes a tree change; recomputation is
//!   debounced ([`DEBOUNCE_MS`]) and fires on a later [`Adapter::on_tick`].
//! - [`Adapter::on_resize`] resets and recomputes immediately.
//!
//! No entry point is fallible from the host's point of view: bad config,
//! missing geometry, and unparseable styles all degrade to "no overlay
//! shown" (logged through the `log` facade).
//!
//! ```rust
//! use jumplist_adapt::Adapter;
//! use jumplist_paginate::{EdgeButtons, StepDirection};
//! use jumplist_surface::{MemNode, MemSurface};
//! use kurbo::{Rect, Size};
//!
//! let mut surface = MemSurface::new(Size::new(390.0, 700.0));
//! let root = surface.insert(None, MemNode::default());
//! let list = surface.insert(
//!     Some(root),
//!     MemNode {
//!         rect: Some(Rect::new(370.0, 0.0, 388.0, 700.0)),
//!         ..MemNode::default()
//!     },
//! );
//! surface.set_scroll_metrics(list, 2000.0, 700.0);
//! for letter in 'A'..='Z' {
//!     surface.insert(
//!         Some(list),
//!         MemNode {
//!             text: letter.to_string(),
//!             ..MemNode::default()
//!         },
//!     );
//! }
//!
//! let mut adapter = Adapter::new(root, EdgeButtons::new());
//! adapter.start(&mut surface, None);
//! assert!(adapter.overlay_active());
//! assert!(adapter.page(&mut surface, StepDirection::Down, 0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod config;
mod debounce;

pub use adapter::Adapter;
pub use config::Config;
pub use debounce::{DEBOUNCE_MS, Debouncer};
