// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Pager`] controller: wires the step algebra to a live surface.

use alloc::string::String;

use jumplist_surface::{StyleSnapshot, Surface, Transform, translate_y_css, vertical_offset_of};

use crate::presentation::Presentation;
use crate::steps::{
    ElementGeometry, PaginationState, StepDirection, advance, calculate_steps, needs_overlay,
    step_offset,
};

/// Inline transition applied to the element while the overlay is active, so
/// page changes animate instead of jumping.
const TRANSITION_CSS: &str = "transform 0.5s ease";

/// Drives one element's paging overlay.
///
/// Construction measures the element, decides whether an overlay is needed at
/// all, and if so saves the element's inline style state and shows the
/// presentation's controls. Every accepted step rewrites the vertical
/// translation of the element's transform; [`Pager::release`] puts the saved
/// styles back and hides the controls, returning the presentation for reuse
/// in a later cycle.
#[derive(Debug)]
pub struct Pager<S: Surface, P: Presentation<S>> {
    element: S::Node,
    snapshot: StyleSnapshot,
    /// Vertical translation the element carried before paging touched it.
    baseline: f64,
    state: PaginationState,
    presentation: P,
    active: bool,
}

impl<S: Surface, P: Presentation<S>> Pager<S, P> {
    /// Measures `element` and activates the overlay when its content
    /// overflows the space it has.
    ///
    /// An inactive pager touches nothing and refuses all steps; it still has
    /// to be [`release`](Self::release)d to get the presentation back.
    pub fn new(surface: &mut S, element: S::Node, presentation: P) -> Self {
        let mut pager = Self {
            snapshot: surface.style_snapshot(&element),
            baseline: vertical_offset_of(surface.computed_transform(&element).as_deref()),
            state: PaginationState::default(),
            presentation,
            active: false,
            element,
        };
        let Some(geometry) = read_geometry(surface, &pager.element) else {
            return pager;
        };
        pager.state = calculate_steps(&geometry);
        if !needs_overlay(&geometry) || pager.state.step_count < 2 {
            pager.state = PaginationState::default();
            return pager;
        }
        pager.active = true;
        surface.set_transition(&pager.element, Some(TRANSITION_CSS));
        pager
            .presentation
            .show(surface, &pager.element, &pager.state);
        pager
    }

    /// Whether the overlay is showing and accepting steps.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The current paging position.
    #[must_use]
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Steps one page in `direction` at time `now` (milliseconds).
    ///
    /// Returns `false` without touching anything when the pager is inactive,
    /// the element can no longer be measured, or the step would cross a
    /// boundary page.
    pub fn step(&mut self, surface: &mut S, direction: StepDirection, now: u64) -> bool {
        if !self.active {
            return false;
        }
        let Some(geometry) = read_geometry(surface, &self.element) else {
            return false;
        };
        if !advance(&mut self.state, direction) {
            return false;
        }
        let offset = step_offset(&self.state, &geometry, self.baseline);
        let css = offset_css(surface.computed_transform(&self.element).as_deref(), offset);
        surface.set_transform(&self.element, Some(&css));
        self.presentation
            .after_step(surface, &self.element, &self.state, now);
        true
    }

    /// Pumps time forward, flushing any presentation deadline due by `now`.
    pub fn on_tick(&mut self, surface: &mut S, now: u64) {
        if self.active {
            self.presentation.on_tick(surface, &self.element, now);
        }
    }

    /// Restores the element's saved inline styles, hides the controls, and
    /// hands the presentation back for the next cycle.
    pub fn release(mut self, surface: &mut S) -> P {
        if self.active {
            surface.restore_snapshot(&self.element, &self.snapshot);
        }
        self.presentation.hide(surface);
        self.presentation
    }
}

/// Live geometry of the element, or `None` when it cannot be measured.
fn read_geometry<S: Surface>(surface: &S, element: &S::Node) -> Option<ElementGeometry> {
    let rect = surface.bounding_rect(element)?;
    Some(ElementGeometry {
        top: rect.y0,
        viewport_height: surface.viewport_size().height,
        scroll_height: surface.scroll_height(element),
        client_height: surface.client_height(element),
    })
}

/// Rewrites the vertical translation of `current` to `offset`, preserving any
/// other transform components the element carries. Values this crate cannot
/// parse fall back to a plain `translateY`, paging the element from its
/// natural position.
fn offset_css(current: Option<&str>, offset: f64) -> String {
    match current.map(Transform::from_css) {
        Some(Ok(Some(mut transform))) => {
            transform.set_translate_y(offset);
            transform.to_css()
        }
        None | Some(Ok(None)) => translate_y_css(offset),
        Some(Err(err)) => {
            log::debug!("unparseable transform ({err}); overwriting with translateY");
            translate_y_css(offset)
        }
    }
}
