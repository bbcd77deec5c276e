// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Surface`] for tests and demos.
//!
//! [`MemSurface`] stores a small node tree with geometry, flags, and text,
//! plus a side table of inline style overrides. Queries consult the override
//! first and fall back to the node's base value, which mirrors how inline
//! styles overlay computed styles in a real render tree and keeps "restore"
//! semantics honest: clearing an inline value reveals the base value again.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};

use crate::surface::{DisplayMode, StyleSnapshot, Surface};

/// Identifier for a node in a [`MemSurface`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling visibility.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node participates in rendering.
        const VISIBLE = 0b0000_0001;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Base (host-computed) data for one node.
#[derive(Clone, Debug)]
pub struct MemNode {
    /// Bounding rect in viewport coordinates; `None` models a node the host
    /// cannot measure.
    pub rect: Option<Rect>,
    /// The node's own text content.
    pub text: String,
    /// Scrollable content extent. Defaults to the rect height.
    pub scroll_height: Option<f64>,
    /// Visible (client) extent. Defaults to the rect height.
    pub client_height: Option<f64>,
    /// Visibility flags.
    pub flags: NodeFlags,
    /// Base computed transform, if any.
    pub transform: Option<String>,
    /// Base computed transition, if any.
    pub transition: Option<String>,
}

impl Default for MemNode {
    fn default() -> Self {
        Self {
            rect: None,
            text: String::new(),
            scroll_height: None,
            client_height: None,
            flags: NodeFlags::default(),
            transform: None,
            transition: None,
        }
    }
}

#[derive(Clone, Debug)]
struct Slot {
    node: MemNode,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Inline style overrides for one node.
#[derive(Clone, Debug, Default)]
struct InlineStyle {
    transform: Option<String>,
    transition: Option<String>,
    height: Option<f64>,
    display: DisplayMode,
    opacity: Option<f64>,
}

/// An in-memory surface backed by a slot vector of nodes.
#[derive(Debug, Default)]
pub struct MemSurface {
    slots: Vec<Option<Slot>>,
    inline: HashMap<NodeId, InlineStyle>,
    viewport: Size,
}

impl MemSurface {
    /// Creates an empty surface with the given viewport size.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            slots: Vec::new(),
            inline: HashMap::new(),
            viewport,
        }
    }

    /// Inserts a node under `parent` (or as a root when `None`).
    pub fn insert(&mut self, parent: Option<NodeId>, node: MemNode) -> NodeId {
        let id = NodeId(u32::try_from(self.slots.len()).unwrap_or(u32::MAX));
        self.slots.push(Some(Slot {
            node,
            parent,
            children: Vec::new(),
        }));
        if let Some(p) = parent
            && let Some(slot) = self.slot_mut(p)
        {
            slot.children.push(id);
        }
        id
    }

    /// Changes the viewport size (models a window resize).
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Replaces a node's bounding rect.
    pub fn set_rect(&mut self, id: NodeId, rect: Option<Rect>) {
        if let Some(slot) = self.slot_mut(id) {
            slot.node.rect = rect;
        }
    }

    /// Sets explicit scroll/client extents (models internal overflow).
    pub fn set_scroll_metrics(&mut self, id: NodeId, scroll_height: f64, client_height: f64) {
        if let Some(slot) = self.slot_mut(id) {
            slot.node.scroll_height = Some(scroll_height);
            slot.node.client_height = Some(client_height);
        }
    }

    /// Replaces a node's flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(slot) = self.slot_mut(id) {
            slot.node.flags = flags;
        }
    }

    /// Inline display of a node, for assertions in tests.
    #[must_use]
    pub fn display_of(&self, id: NodeId) -> DisplayMode {
        self.inline.get(&id).map(|s| s.display).unwrap_or_default()
    }

    /// Effective opacity of a node (inline override, else fully opaque).
    #[must_use]
    pub fn opacity_of(&self, id: NodeId) -> f64 {
        self.inline
            .get(&id)
            .and_then(|s| s.opacity)
            .unwrap_or(1.0)
    }

    /// Top-left corner of a node's rect, if it has one.
    #[must_use]
    pub fn origin_of(&self, id: NodeId) -> Option<Point> {
        self.slot(id)?.node.rect.map(|r| r.origin())
    }

    /// Effective height override of a node, if one was set inline.
    #[must_use]
    pub fn inline_height_of(&self, id: NodeId) -> Option<f64> {
        self.inline.get(&id).and_then(|s| s.height)
    }

    fn slot(&self, id: NodeId) -> Option<&Slot> {
        self.slots.get(id.idx()).and_then(|s| s.as_ref())
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Slot> {
        self.slots.get_mut(id.idx()).and_then(|s| s.as_mut())
    }

    fn inline_mut(&mut self, id: NodeId) -> &mut InlineStyle {
        self.inline.entry(id).or_default()
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(slot) = self.slot(id) else { return };
        out.push_str(&slot.node.text);
        for child in &slot.children {
            self.collect_text(*child, out);
        }
    }
}

impl Surface for MemSurface {
    type Node = NodeId;

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.slot(*node)
            .map(|s| s.children.clone())
            .unwrap_or_default()
    }

    fn text(&self, node: &NodeId) -> String {
        let mut out = String::new();
        self.collect_text(*node, &mut out);
        out
    }

    fn is_visible(&self, node: &NodeId) -> bool {
        let mut current = Some(*node);
        while let Some(id) = current {
            let Some(slot) = self.slot(id) else {
                return false;
            };
            if !slot.node.flags.contains(NodeFlags::VISIBLE) {
                return false;
            }
            if self.display_of(id) == DisplayMode::Hidden {
                return false;
            }
            current = slot.parent;
        }
        true
    }

    fn bounding_rect(&self, node: &NodeId) -> Option<Rect> {
        self.slot(*node)?.node.rect
    }

    fn scroll_height(&self, node: &NodeId) -> f64 {
        let Some(slot) = self.slot(*node) else {
            return 0.0;
        };
        slot.node
            .scroll_height
            .or_else(|| slot.node.rect.map(|r| r.height()))
            .unwrap_or(0.0)
    }

    fn client_height(&self, node: &NodeId) -> f64 {
        if let Some(h) = self.inline.get(node).and_then(|s| s.height) {
            return h;
        }
        let Some(slot) = self.slot(*node) else {
            return 0.0;
        };
        slot.node
            .client_height
            .or_else(|| slot.node.rect.map(|r| r.height()))
            .unwrap_or(0.0)
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn computed_transform(&self, node: &NodeId) -> Option<String> {
        if let Some(inline) = self.inline.get(node)
            && inline.transform.is_some()
        {
            return inline.transform.clone();
        }
        self.slot(*node)?.node.transform.clone()
    }

    fn computed_transition(&self, node: &NodeId) -> Option<String> {
        if let Some(inline) = self.inline.get(node)
            && inline.transition.is_some()
        {
            return inline.transition.clone();
        }
        self.slot(*node)?.node.transition.clone()
    }

    fn set_transform(&mut self, node: &NodeId, value: Option<&str>) {
        self.inline_mut(*node).transform = value.map(ToString::to_string);
    }

    fn set_transition(&mut self, node: &NodeId, value: Option<&str>) {
        self.inline_mut(*node).transition = value.map(ToString::to_string);
    }

    fn set_height(&mut self, node: &NodeId, value: Option<f64>) {
        self.inline_mut(*node).height = value;
    }

    fn set_display(&mut self, node: &NodeId, mode: DisplayMode) {
        self.inline_mut(*node).display = mode;
    }

    fn set_opacity(&mut self, node: &NodeId, value: f64) {
        self.inline_mut(*node).opacity = Some(value.clamp(0.0, 1.0));
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        if let Some(slot) = self.slot_mut(*node) {
            slot.node.text = text.to_string();
        }
    }

    fn style_snapshot(&self, node: &NodeId) -> StyleSnapshot {
        let inline = self.inline.get(node);
        StyleSnapshot {
            transform: inline.and_then(|s| s.transform.clone()),
            transition: inline.and_then(|s| s.transition.clone()),
        }
    }

    fn create_control(&mut self, label: &str) -> NodeId {
        let id = self.insert(
            None,
            MemNode {
                rect: Some(Rect::new(0.0, 0.0, 24.0, 24.0)),
                text: label.to_string(),
                ..MemNode::default()
            },
        );
        self.set_display(&id, DisplayMode::Hidden);
        id
    }

    fn remove_control(&mut self, node: &NodeId) {
        if let Some(slot) = self.slots.get_mut(node.idx()) {
            *slot = None;
        }
        self.inline.remove(node);
    }

    fn set_control_origin(&mut self, node: &NodeId, origin: Point) {
        if let Some(slot) = self.slot_mut(*node)
            && let Some(rect) = slot.node.rect
        {
            slot.node.rect = Some(Rect::new(
                origin.x,
                origin.y,
                origin.x + rect.width(),
                origin.y + rect.height(),
            ));
        }
    }
}
