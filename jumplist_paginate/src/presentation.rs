// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay presentation strategies.
//!
//! Both strategies drive the same step algebra; they differ only in what the
//! controls look like and when they fade or move. Strategies own their
//! control nodes across show/hide cycles so repeated adaptation cycles do
//! not leak controls into the host tree.

use jumplist_surface::{DisplayMode, Surface};
use kurbo::{Point, Rect};

use crate::steps::PaginationState;

/// Duration of the overlay transition, in milliseconds. Repositioning after
/// a step is scheduled this far in the future rather than on a completion
/// callback.
pub const TRANSITION_MS: u64 = 500;

/// Horizontal gap between the element and its controls.
const CONTROL_GAP: f64 = 4.0;

/// How a paging overlay looks and behaves around the element.
///
/// The [`Pager`](crate::Pager) calls these in a fixed order: `show` when the
/// overlay first appears, `after_step` after every accepted step,
/// `on_tick` whenever the host pumps time forward, and `hide` on reset.
pub trait Presentation<S: Surface> {
    /// Creates (if needed) and reveals the controls for `element`.
    fn show(&mut self, surface: &mut S, element: &S::Node, state: &PaginationState);

    /// Reacts to an accepted step: fade boundary controls, schedule any
    /// delayed repositioning.
    fn after_step(&mut self, surface: &mut S, element: &S::Node, state: &PaginationState, now: u64);

    /// Flushes any repositioning deadline that has expired by `now`.
    fn on_tick(&mut self, surface: &mut S, element: &S::Node, now: u64);

    /// Hides all controls.
    fn hide(&mut self, surface: &mut S);

    /// Removes all controls from the host tree.
    fn teardown(&mut self, surface: &mut S);
}

/// A single persistent control pinned near the element's bottom corner.
#[derive(Debug, Default)]
pub struct CornerWidget<S: Surface> {
    control: Option<S::Node>,
}

impl<S: Surface> CornerWidget<S> {
    /// Creates a widget with no control materialized yet.
    #[must_use]
    pub fn new() -> Self {
        Self { control: None }
    }

    /// The control node, if it has been materialized.
    #[must_use]
    pub fn control(&self) -> Option<&S::Node> {
        self.control.as_ref()
    }

    fn ensure_control(&mut self, surface: &mut S) -> S::Node {
        if let Some(control) = &self.control {
            return control.clone();
        }
        let control = surface.create_control("\u{2195}");
        self.control = Some(control.clone());
        control
    }

    fn position(surface: &mut S, control: &S::Node, element: &S::Node) {
        if let Some(rect) = surface.bounding_rect(element) {
            surface.set_control_origin(control, Point::new(rect.x0, rect.y1 + CONTROL_GAP));
        }
    }
}

impl<S: Surface> Presentation<S> for CornerWidget<S> {
    fn show(&mut self, surface: &mut S, element: &S::Node, _state: &PaginationState) {
        let control = self.ensure_control(surface);
        Self::position(surface, &control, element);
        surface.set_display(&control, DisplayMode::Default);
        surface.set_opacity(&control, 1.0);
    }

    fn after_step(
        &mut self,
        _surface: &mut S,
        _element: &S::Node,
        _state: &PaginationState,
        _now: u64,
    ) {
        // The corner widget is persistent; nothing fades or moves.
    }

    fn on_tick(&mut self, _surface: &mut S, _element: &S::Node, _now: u64) {}

    fn hide(&mut self, surface: &mut S) {
        if let Some(control) = &self.control {
            surface.set_display(control, DisplayMode::Hidden);
        }
    }

    fn teardown(&mut self, surface: &mut S) {
        if let Some(control) = self.control.take() {
            surface.remove_control(&control);
        }
    }
}

/// A fading up/down pair at the element's top and bottom edges.
#[derive(Debug, Default)]
pub struct EdgeButtons<S: Surface> {
    up: Option<S::Node>,
    down: Option<S::Node>,
    /// Timestamp at which both buttons are repositioned to the element's
    /// post-transition bounding box. Overwritten, never cancelled: a step
    /// taken while a deadline is pending simply schedules the newer one.
    reposition_at: Option<u64>,
}

impl<S: Surface> EdgeButtons<S> {
    /// Creates a button pair with no controls materialized yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            up: None,
            down: None,
            reposition_at: None,
        }
    }

    /// The up/down control nodes, if materialized.
    #[must_use]
    pub fn controls(&self) -> (Option<&S::Node>, Option<&S::Node>) {
        (self.up.as_ref(), self.down.as_ref())
    }

    /// Whether a reposition deadline is pending.
    #[must_use]
    pub fn reposition_pending(&self) -> bool {
        self.reposition_at.is_some()
    }

    fn ensure_controls(&mut self, surface: &mut S) -> (S::Node, S::Node) {
        let up = match &self.up {
            Some(node) => node.clone(),
            None => {
                let node = surface.create_control("\u{25b2}");
                self.up = Some(node.clone());
                node
            }
        };
        let down = match &self.down {
            Some(node) => node.clone(),
            None => {
                let node = surface.create_control("\u{25bc}");
                self.down = Some(node.clone());
                node
            }
        };
        (up, down)
    }

    fn reposition(&self, surface: &mut S, element: &S::Node) {
        let Some(rect) = surface.bounding_rect(element) else {
            return;
        };
        if let Some(up) = &self.up {
            surface.set_control_origin(up, edge_origin(rect, true));
        }
        if let Some(down) = &self.down {
            surface.set_control_origin(down, edge_origin(rect, false));
        }
    }

    fn apply_fades(&self, surface: &mut S, state: &PaginationState) {
        let at_first = state.step_number == 0;
        let at_last = state.step_count == 0 || state.step_number == state.step_count - 1;
        if let Some(up) = &self.up {
            surface.set_opacity(up, if at_first { 0.0 } else { 1.0 });
        }
        if let Some(down) = &self.down {
            surface.set_opacity(down, if at_last { 0.0 } else { 1.0 });
        }
    }
}

fn edge_origin(rect: Rect, top_edge: bool) -> Point {
    if top_edge {
        Point::new(rect.x0, rect.y0 - CONTROL_GAP)
    } else {
        Point::new(rect.x0, rect.y1 + CONTROL_GAP)
    }
}

impl<S: Surface> Presentation<S> for EdgeButtons<S> {
    fn show(&mut self, surface: &mut S, element: &S::Node, state: &PaginationState) {
        let (up, down) = self.ensure_controls(surface);
        self.reposition(surface, element);
        surface.set_display(&up, DisplayMode::Default);
        surface.set_display(&down, DisplayMode::Default);
        self.apply_fades(surface, state);
    }

    fn after_step(&mut self, surface: &mut S, _element: &S::Node, state: &PaginationState, now: u64) {
        self.apply_fades(surface, state);
        self.reposition_at = Some(now + TRANSITION_MS);
    }

    fn on_tick(&mut self, surface: &mut S, element: &S::Node, now: u64) {
        if let Some(deadline) = self.reposition_at
            && now >= deadline
        {
            self.reposition_at = None;
            self.reposition(surface, element);
        }
    }

    fn hide(&mut self, surface: &mut S) {
        for control in [&self.up, &self.down].into_iter().flatten() {
            surface.set_display(control, DisplayMode::Hidden);
        }
        self.reposition_at = None;
    }

    fn teardown(&mut self, surface: &mut S) {
        for control in [self.up.take(), self.down.take()].into_iter().flatten() {
            surface.remove_control(&control);
        }
        self.reposition_at = None;
    }
}
