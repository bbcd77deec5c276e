// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first candidate search over a surface tree.

use jumplist_surface::Surface;
use kurbo::{Rect, Size};

use crate::alphabet::{clean_text, likely_an_alphabet};

/// Upper bound on cleaned text length for a node to be run-tested at all.
///
/// A jump list concatenates to roughly the 26 letters plus light decoration;
/// anything longer is body content that happens to contain letters.
const MAX_CANDIDATE_TEXT: usize = 64;

/// Thresholds for candidate identification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    /// Minimum height-to-width ratio of the candidate. Nodes with
    /// `width * ratio > height` are rejected as wide/short blocks.
    /// Valid range `(0, 30]`.
    pub height_width_min_ratio: f64,
    /// Minimum alphabetic run length, and minimum child count of a
    /// candidate. Valid range `(0, 26]`.
    pub identification_min_size: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            height_width_min_ratio: 10.0,
            identification_min_size: 18,
        }
    }
}

impl DetectorConfig {
    /// Applies a ratio override if it is usable: finite, positive, clamped
    /// to at most 30. Anything else keeps the current value.
    pub fn apply_ratio(&mut self, ratio: f64) {
        if ratio.is_finite() && ratio > 0.0 {
            self.height_width_min_ratio = if ratio > 30.0 { 30.0 } else { ratio };
        }
    }

    /// Applies a minimum-size override if it is usable: positive, clamped
    /// to at most 26 (the alphabet). Anything else keeps the current value.
    pub fn apply_min_size(&mut self, size: i64) {
        if size > 0 {
            self.identification_min_size = usize::try_from(size).unwrap_or(26).min(26);
        }
    }
}

/// The detected index element with the geometry read at detection time.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexElement<N> {
    /// Handle to the detected node.
    pub node: N,
    /// Bounding rect at detection time, in viewport coordinates.
    pub rect: Rect,
    /// Scrollable content extent at detection time.
    pub scroll_height: f64,
    /// Visible (client) extent at detection time.
    pub client_height: f64,
}

/// Searches the tree under `root` for an alphabetic index list.
///
/// Recursion descends into children before evaluating the current node, so
/// the deepest (smallest) node carrying the alphabet is preferred over its
/// ancestors. Invisible subtrees and subtrees whose cleaned text is already
/// shorter than the configured run length are pruned: a child can never have
/// more text than its parent.
#[must_use]
pub fn detect<S: Surface>(
    surface: &S,
    root: &S::Node,
    config: &DetectorConfig,
) -> Option<IndexElement<S::Node>> {
    let viewport = surface.viewport_size();
    walk(surface, root, config, viewport)
}

fn walk<S: Surface>(
    surface: &S,
    node: &S::Node,
    config: &DetectorConfig,
    viewport: Size,
) -> Option<IndexElement<S::Node>> {
    if !surface.is_visible(node) {
        return None;
    }
    let cleaned = clean_text(&surface.text(node));
    if cleaned.len() < config.identification_min_size {
        return None;
    }

    let children = surface.children(node);
    for child in &children {
        if let Some(found) = walk(surface, child, config, viewport) {
            return Some(found);
        }
    }

    // No child matched; evaluate this node.
    let has_run = cleaned.len() <= MAX_CANDIDATE_TEXT
        && children.len() >= config.identification_min_size
        && likely_an_alphabet(&cleaned, config.identification_min_size);

    // Without geometry this node cannot be adapted; keep searching elsewhere.
    let rect = surface.bounding_rect(node)?;
    if rect.width() >= viewport.width / 2.0 {
        // Wide nodes are main body content, not a vertical index.
        return None;
    }
    if rect.width() * config.height_width_min_ratio > rect.height() {
        return None;
    }
    if !has_run {
        return None;
    }

    Some(IndexElement {
        node: node.clone(),
        rect,
        scroll_height: surface.scroll_height(node),
        client_height: surface.client_height(node),
    })
}

#[cfg(test)]
mod tests {
    use super::{DetectorConfig, detect};
    use alloc::string::ToString;
    use jumplist_surface::{MemNode, MemSurface, NodeFlags, NodeId};
    use kurbo::{Rect, Size};

    const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    /// Builds a surface with a page root and a 26-row index list; returns
    /// `(surface, root, list)`.
    fn page_with_index(list_rect: Rect) -> (MemSurface, NodeId, NodeId) {
        let mut s = MemSurface::new(Size::new(390.0, 700.0));
        let root = s.insert(
            None,
            MemNode {
                rect: Some(Rect::new(0.0, 0.0, 390.0, 2000.0)),
                ..MemNode::default()
            },
        );
        // Body content: wide, lots of text.
        s.insert(
            Some(root),
            MemNode {
                rect: Some(Rect::new(0.0, 0.0, 360.0, 2000.0)),
                text: "Lorem ipsum dolor sit amet ABCDEFGHIJKLMNOPQRSTUVWXYZ and more body text"
                    .to_string(),
                ..MemNode::default()
            },
        );
        let list = s.insert(
            Some(root),
            MemNode {
                rect: Some(list_rect),
                ..MemNode::default()
            },
        );
        let row_h = list_rect.height() / 26.0;
        for (i, letter) in ALPHABET.chars().enumerate() {
            let top = list_rect.y0 + row_h * i as f64;
            s.insert(
                Some(list),
                MemNode {
                    rect: Some(Rect::new(
                        list_rect.x0,
                        top,
                        list_rect.x1,
                        top + row_h,
                    )),
                    text: letter.to_string(),
                    ..MemNode::default()
                },
            );
        }
        (s, root, list)
    }

    #[test]
    fn finds_the_deepest_matching_node() {
        let (s, root, list) = page_with_index(Rect::new(370.0, 50.0, 388.0, 650.0));
        let found = detect(&s, &root, &DetectorConfig::default()).expect("index list detected");
        // The list itself, not the page root that also contains its text.
        assert_eq!(found.node, list);
        assert_eq!(found.rect, Rect::new(370.0, 50.0, 388.0, 650.0));
    }

    #[test]
    fn wide_nodes_are_rejected_as_body_content() {
        // Same structure, but the list spans more than half the viewport width.
        let (s, root, _list) = page_with_index(Rect::new(100.0, 50.0, 330.0, 650.0));
        assert!(detect(&s, &root, &DetectorConfig::default()).is_none());
    }

    #[test]
    fn wide_short_blocks_fail_the_aspect_gate() {
        // 18 wide, 120 tall: 18 * 10 > 120, so the default ratio rejects it.
        let (s, root, _list) = page_with_index(Rect::new(370.0, 50.0, 388.0, 170.0));
        assert!(detect(&s, &root, &DetectorConfig::default()).is_none());

        // A permissive ratio accepts the same geometry.
        let mut config = DetectorConfig::default();
        config.apply_ratio(5.0);
        assert!(detect(&s, &root, &config).is_some());
    }

    #[test]
    fn invisible_subtrees_are_pruned() {
        let (mut s, root, list) = page_with_index(Rect::new(370.0, 50.0, 388.0, 650.0));
        s.set_flags(list, NodeFlags::empty());
        assert!(detect(&s, &root, &DetectorConfig::default()).is_none());
    }

    #[test]
    fn nodes_without_geometry_do_not_stop_the_search() {
        let mut s = MemSurface::new(Size::new(390.0, 700.0));
        let root = s.insert(
            None,
            MemNode {
                rect: Some(Rect::new(0.0, 0.0, 390.0, 2000.0)),
                ..MemNode::default()
            },
        );
        // A measureless node carrying the full alphabet comes first in
        // document order; the search must continue past it.
        let ghost = s.insert(Some(root), MemNode::default());
        for letter in ALPHABET.chars() {
            s.insert(
                Some(ghost),
                MemNode {
                    text: letter.to_string(),
                    ..MemNode::default()
                },
            );
        }
        let list_rect = Rect::new(370.0, 50.0, 388.0, 650.0);
        let list = s.insert(
            Some(root),
            MemNode {
                rect: Some(list_rect),
                ..MemNode::default()
            },
        );
        for letter in ALPHABET.chars() {
            s.insert(
                Some(list),
                MemNode {
                    text: letter.to_string(),
                    rect: Some(list_rect),
                    ..MemNode::default()
                },
            );
        }
        let found = detect(&s, &root, &DetectorConfig::default()).expect("detected");
        assert_eq!(found.node, list);
    }

    #[test]
    fn config_overrides_clamp_and_ignore_garbage() {
        let mut config = DetectorConfig::default();
        config.apply_ratio(f64::NAN);
        config.apply_ratio(-3.0);
        assert_eq!(config.height_width_min_ratio, 10.0);
        config.apply_ratio(100.0);
        assert_eq!(config.height_width_min_ratio, 30.0);

        config.apply_min_size(0);
        assert_eq!(config.identification_min_size, 18);
        config.apply_min_size(40);
        assert_eq!(config.identification_min_size, 26);
        config.apply_min_size(20);
        assert_eq!(config.identification_min_size, 20);
    }
}
