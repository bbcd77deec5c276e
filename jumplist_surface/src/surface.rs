// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Surface`] trait: capabilities the jump-list core consumes from a host
//! render tree.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect, Size};

/// Inline display mode for a node.
///
/// Only the two states the adaptation needs: a node either renders with
/// whatever display the host computed for it, or is removed from rendering
/// entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Render with the host's default/computed display.
    #[default]
    Default,
    /// Do not render the node at all.
    Hidden,
}

/// Saved inline styles for one node, captured before the adaptation mutates
/// them and written back verbatim on reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSnapshot {
    /// Inline transform at capture time, if any.
    pub transform: Option<String>,
    /// Inline transition at capture time, if any.
    pub transition: Option<String>,
}

/// Capabilities the jump-list core consumes from a host render tree.
///
/// Queries are read-only and must reflect the *live* tree: the core re-reads
/// geometry on every adaptation cycle and never caches it across cycles.
/// Mutations write inline styles that override whatever the host computed;
/// passing `None` clears the inline value so the host's own styling shows
/// through again.
///
/// Notifications (tree mutation, viewport resize) are deliberately not part
/// of this trait. Hosts forward them to the orchestrator's explicit entry
/// points together with a millisecond timestamp, which keeps debouncing and
/// delayed repositioning testable without a live clock.
pub trait Surface {
    /// Handle to a node in the host tree.
    type Node: Clone + PartialEq + core::fmt::Debug;

    /// Child nodes of `node`, in document order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Concatenated text content of `node` and its descendants.
    fn text(&self, node: &Self::Node) -> String;

    /// Whether `node` currently renders (itself and its ancestors).
    fn is_visible(&self, node: &Self::Node) -> bool;

    /// Bounding rectangle of `node` in viewport coordinates.
    ///
    /// Returns `None` when the host cannot provide geometry for this node;
    /// the detector treats such nodes as non-candidates and keeps searching.
    fn bounding_rect(&self, node: &Self::Node) -> Option<Rect>;

    /// Full scrollable extent of `node`'s content, in logical pixels.
    fn scroll_height(&self, node: &Self::Node) -> f64;

    /// Visible (client) extent of `node`, in logical pixels.
    fn client_height(&self, node: &Self::Node) -> f64;

    /// Current viewport dimensions.
    fn viewport_size(&self) -> Size;

    /// The node's effective transform, in computed (CSS matrix) form.
    fn computed_transform(&self, node: &Self::Node) -> Option<String>;

    /// The node's effective transition, if any.
    fn computed_transition(&self, node: &Self::Node) -> Option<String>;

    /// Sets or clears the inline transform.
    fn set_transform(&mut self, node: &Self::Node, value: Option<&str>);

    /// Sets or clears the inline transition.
    fn set_transition(&mut self, node: &Self::Node, value: Option<&str>);

    /// Sets or clears the inline height, in logical pixels.
    fn set_height(&mut self, node: &Self::Node, value: Option<f64>);

    /// Sets the inline display mode.
    fn set_display(&mut self, node: &Self::Node, mode: DisplayMode);

    /// Sets the inline opacity in `[0, 1]`.
    fn set_opacity(&mut self, node: &Self::Node, value: f64);

    /// Replaces the node's own text content.
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Captures the inline styles the adaptation is about to mutate.
    fn style_snapshot(&self, node: &Self::Node) -> StyleSnapshot;

    /// Writes a previously captured snapshot back.
    fn restore_snapshot(&mut self, node: &Self::Node, snapshot: &StyleSnapshot) {
        self.set_transform(node, snapshot.transform.as_deref());
        self.set_transition(node, snapshot.transition.as_deref());
    }

    /// Creates a floating overlay control (e.g. a paging button) with the
    /// given label, initially hidden.
    fn create_control(&mut self, label: &str) -> Self::Node;

    /// Removes an overlay control created by [`Surface::create_control`].
    fn remove_control(&mut self, node: &Self::Node);

    /// Moves an overlay control so its top-left corner sits at `origin`,
    /// in viewport coordinates.
    fn set_control_origin(&mut self, node: &Self::Node, origin: Point);
}
