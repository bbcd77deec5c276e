// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Jumplist Surface: the rendering-surface seam for jump-list adaptation.
//!
//! The jump-list crates never talk to a concrete render tree directly. They
//! consume capabilities through the [`Surface`] trait:
//!
//! - tree traversal (child enumeration, text content),
//! - visibility and geometry queries (bounding rects, scroll/client extents,
//!   viewport size),
//! - computed-style queries and inline-style mutation (transform, transition,
//!   height, display, opacity),
//! - creation and positioning of small overlay control nodes.
//!
//! Hosts implement [`Surface`] once for their render tree (a DOM bridge, a
//! retained-mode scene, a test double) and hand it to the higher-level crates.
//!
//! Two more pieces live here because every consumer needs them:
//!
//! - [`Transform`]: a parsed `matrix(...)`/`matrix3d(...)` transform with
//!   accessors for the vertical translation component. Pagination composes
//!   its per-page offsets with whatever transform the host page already
//!   applied, so round-tripping the host's matrix faithfully matters.
//! - [`MemSurface`]: a first-party in-memory surface used by tests and demos.
//!   It stores a node tree with geometry and flags, and keeps inline style
//!   overrides in a side table so a reset can drop them wholesale.
//!
//! ## Minimal example
//!
//! ```rust
//! use jumplist_surface::{MemNode, MemSurface, Surface};
//! use kurbo::{Rect, Size};
//!
//! let mut surface = MemSurface::new(Size::new(390.0, 700.0));
//! let root = surface.insert(
//!     None,
//!     MemNode {
//!         rect: Some(Rect::new(0.0, 0.0, 390.0, 700.0)),
//!         ..MemNode::default()
//!     },
//! );
//!
//! assert!(surface.is_visible(&root));
//! assert_eq!(surface.viewport_size().height, 700.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod mem;
mod surface;
mod transform;

pub use mem::{MemNode, MemSurface, NodeFlags, NodeId};
pub use surface::{DisplayMode, StyleSnapshot, Surface};
pub use transform::{Transform, TransformParseError, translate_y_css, vertical_offset_of};
