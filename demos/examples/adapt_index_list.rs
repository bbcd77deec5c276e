// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end adaptation of a tall A-Z index list over `MemSurface`.
//!
//! This example shows how to combine:
//! - `jumplist_adapt` for the detect-then-page lifecycle,
//! - `jumplist_paginate` for the overlay presentation,
//! - `jumplist_truncate` for the elision alternative on the same list.
//!
//! Run:
//! - `cargo run -p jumplist_demos --example adapt_index_list`

use jumplist_adapt::Adapter;
use jumplist_paginate::{EdgeButtons, StepDirection, TRANSITION_MS};
use jumplist_surface::{MemNode, MemSurface, NodeId, Surface};
use jumplist_truncate::{Bias, RowElision};
use kurbo::{Rect, Size};

const ROW_HEIGHT: f64 = 40.0;

/// Builds a phone-sized page with a 26-row index list hugging the right
/// edge. The rows total 1040px against a 700px viewport, so the list needs
/// adaptation.
fn build_page(surface: &mut MemSurface) -> (NodeId, NodeId) {
    let root = surface.insert(None, MemNode::default());
    let list = surface.insert(
        Some(root),
        MemNode {
            rect: Some(Rect::new(370.0, 0.0, 388.0, 700.0)),
            ..MemNode::default()
        },
    );
    surface.set_scroll_metrics(list, ROW_HEIGHT * 26.0, 700.0);
    for (i, letter) in ('A'..='Z').enumerate() {
        let top = i as f64 * ROW_HEIGHT;
        surface.insert(
            Some(list),
            MemNode {
                rect: Some(Rect::new(370.0, top, 388.0, top + ROW_HEIGHT)),
                text: letter.to_string(),
                ..MemNode::default()
            },
        );
    }
    (root, list)
}

fn main() {
    let mut surface = MemSurface::new(Size::new(390.0, 700.0));
    let (root, list) = build_page(&mut surface);

    // Detect the list and show the paging overlay.
    let mut adapter = Adapter::new(root, EdgeButtons::new());
    adapter.start(&mut surface, Some(r#"{"identificationMinSize": 20}"#));
    let state = adapter.pagination().copied();
    println!("overlay active: {}", adapter.overlay_active());
    if let Some(state) = state {
        println!("pages: {}", state.step_count);
    }

    // Page all the way down, pumping time so the controls reposition.
    let mut now = 0;
    while adapter.page(&mut surface, StepDirection::Down, now) {
        now += TRANSITION_MS + 100;
        adapter.on_tick(&mut surface, now);
        let step = adapter.pagination().map(|s| s.step_number).unwrap_or(0);
        let transform = surface.computed_transform(&list);
        println!("step {step}: transform {transform:?}");
    }

    // Undo everything, then show the truncation alternative on the same list.
    adapter.stop(&mut surface);
    println!("after stop: transform {:?}", surface.computed_transform(&list));

    let mut elision =
        RowElision::apply(&mut surface, &list, Bias::Center).unwrap_or_else(|err| {
            eprintln!("elision failed: {err}");
            std::process::exit(1);
        });
    if let Some(cut) = elision.cut() {
        println!("truncated display: {}", cut.display);
    }
    elision.reset(&mut surface);
    println!("rows restored: {}", surface.text(&list));
}
