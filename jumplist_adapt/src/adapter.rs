// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The caller-owned [`Adapter`] handle.

use jumplist_detect::detect;
use jumplist_paginate::{Pager, PaginationState, Presentation, StepDirection};
use jumplist_surface::Surface;

use crate::config::Config;
use crate::debounce::Debouncer;

/// Owns one adaptation lifecycle over a host surface.
///
/// The adapter composes the detector and the paging controller: each cycle
/// releases whatever the previous cycle changed, re-runs detection from the
/// root, and activates a [`Pager`] for the found element when its content
/// overflows. Nothing is cached across cycles; geometry is always re-read
/// from the live surface.
///
/// The host drives the adapter through explicit entry points with
/// millisecond timestamps: [`on_mutation`](Adapter::on_mutation) debounces
/// tree-change bursts, [`on_resize`](Adapter::on_resize) recomputes
/// immediately, and [`on_tick`](Adapter::on_tick) pumps expired deadlines
/// (debounce and presentation repositioning alike).
#[derive(Debug)]
pub struct Adapter<S: Surface, P: Presentation<S>> {
    root: S::Node,
    config: Config,
    /// The presentation while no pager holds it.
    idle: Option<P>,
    pager: Option<Pager<S, P>>,
    debounce: Debouncer,
    started: bool,
}

impl<S: Surface, P: Presentation<S>> Adapter<S, P> {
    /// Creates an adapter searching under `root`, not yet started.
    #[must_use]
    pub fn new(root: S::Node, presentation: P) -> Self {
        Self {
            root,
            config: Config::default(),
            idle: Some(presentation),
            pager: None,
            debounce: Debouncer::new(),
            started: false,
        }
    }

    /// Starts (or restarts) the adaptation.
    ///
    /// Idempotent: the first call runs the initial cycle; later calls
    /// re-apply `config` on top of the current values and force a full
    /// reset-and-recompute. `config` is an optional JSON object; see
    /// [`Config::apply_json`] for its failure modes.
    pub fn start(&mut self, surface: &mut S, config: Option<&str>) {
        if let Some(json) = config {
            self.config.apply_json(json);
        }
        self.started = true;
        self.debounce.clear();
        self.recompute(surface);
    }

    /// Undoes all style changes, removes the overlay controls from the host
    /// tree, and stops reacting to notifications until the next `start`.
    pub fn stop(&mut self, surface: &mut S) {
        self.release_pager(surface);
        if let Some(presentation) = &mut self.idle {
            presentation.teardown(surface);
        }
        self.debounce.clear();
        self.started = false;
    }

    /// Steps the active overlay one page in `direction` at time `now`.
    ///
    /// Returns `false` when no overlay is active or the step hit a boundary.
    pub fn page(&mut self, surface: &mut S, direction: StepDirection, now: u64) -> bool {
        match &mut self.pager {
            Some(pager) => pager.step(surface, direction, now),
            None => false,
        }
    }

    /// Notes a tree mutation at time `now`. Recomputation is debounced and
    /// happens on a later [`on_tick`](Adapter::on_tick).
    pub fn on_mutation(&mut self, now: u64) {
        if self.started {
            self.debounce.note(now);
        }
    }

    /// Reacts to a viewport resize: unconditional reset-and-recompute.
    pub fn on_resize(&mut self, surface: &mut S) {
        if self.started {
            self.debounce.clear();
            self.recompute(surface);
        }
    }

    /// Pumps time forward: flushes an expired mutation debounce into a
    /// recompute and forwards the tick to the active pager.
    pub fn on_tick(&mut self, surface: &mut S, now: u64) {
        if !self.started {
            return;
        }
        if self.debounce.flush(now) {
            self.recompute(surface);
        }
        if let Some(pager) = &mut self.pager {
            pager.on_tick(surface, now);
        }
    }

    /// Whether a paging overlay is currently showing.
    #[must_use]
    pub fn overlay_active(&self) -> bool {
        self.pager.as_ref().is_some_and(Pager::is_active)
    }

    /// The active overlay's paging position, if one is showing.
    #[must_use]
    pub fn pagination(&self) -> Option<&PaginationState> {
        self.pager
            .as_ref()
            .filter(|pager| pager.is_active())
            .map(Pager::state)
    }

    /// The effective configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn recompute(&mut self, surface: &mut S) {
        self.release_pager(surface);
        let Some(found) = detect(surface, &self.root, &self.config.detector) else {
            return;
        };
        let Some(presentation) = self.idle.take() else {
            return;
        };
        self.pager = Some(Pager::new(surface, found.node, presentation));
    }

    fn release_pager(&mut self, surface: &mut S) {
        if let Some(pager) = self.pager.take() {
            self.idle = Some(pager.release(surface));
        }
    }
}
