// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying a solved cut to the actual rows of an index element.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use jumplist_surface::{DisplayMode, Surface};

use crate::cut::{CutError, StringCut, solve_string_cut};
use crate::distribute::Bias;
use crate::measure::{RowMetrics, letters_to_remove};

/// One classified child row of the index element.
#[derive(Debug, Clone)]
struct Row<N> {
    node: N,
    letter: Option<char>,
    height: f64,
}

/// An applied (and undoable) row elision.
///
/// `apply` reads the element's live geometry, derives a removal count, solves
/// the cut over the alphabetic rows, and mutates row styles through the
/// surface: the first row of every elided run collapses to the placeholder
/// glyph, the remaining rows of the run are hidden outright, and retained
/// rows are pinned to their default display. Everything recorded here is
/// undone by [`RowElision::reset`].
#[derive(Debug)]
pub struct RowElision<S: Surface> {
    element: S::Node,
    /// Rows whose text was replaced by the placeholder, with their original
    /// text for restoration.
    collapsed: Vec<(S::Node, String)>,
    /// Rows hidden outright.
    hidden: Vec<S::Node>,
    /// Whether an inline height was pinned on the element.
    height_pinned: bool,
    /// The solved cut, if any elision happened.
    cut: Option<StringCut>,
}

impl<S: Surface> RowElision<S> {
    /// Measures `element` and applies whatever elision is needed to make it
    /// fit. Returns an empty elision (and touches nothing) when the content
    /// already fits or the element cannot be measured.
    pub fn apply(surface: &mut S, element: &S::Node, bias: Bias) -> Result<Self, CutError> {
        let mut elision = Self {
            element: element.clone(),
            collapsed: Vec::new(),
            hidden: Vec::new(),
            height_pinned: false,
            cut: None,
        };

        let Some(rect) = surface.bounding_rect(element) else {
            return Ok(elision);
        };
        let rows = classify_rows(surface, element);
        let alpha: Vec<&Row<S::Node>> = rows.iter().filter(|r| r.letter.is_some()).collect();
        if alpha.is_empty() {
            return Ok(elision);
        }

        let viewport = surface.viewport_size();
        let client = surface.client_height(element);
        let visible = (viewport.height - rect.y0).min(client).max(0.0);
        let metrics = RowMetrics {
            visible_height: visible,
            scroll_height: surface.scroll_height(element),
            char_height: alpha[0].height,
            rows_total_height: rows.iter().map(|r| r.height).sum(),
            non_alpha_rows: rows.len() - alpha.len(),
            alpha_total: alpha.len(),
        };
        let remove = letters_to_remove(&metrics);
        if remove == 0 {
            return Ok(elision);
        }

        let original: String = alpha.iter().filter_map(|r| r.letter).collect();
        let cut = solve_string_cut(&original, remove, bias)?;

        let retained: Vec<bool> = {
            let mut mask = alloc::vec![false; alpha.len()];
            for index in &cut.retained {
                mask[*index] = true;
            }
            mask
        };
        for (index, row) in alpha.iter().enumerate() {
            if retained[index] {
                surface.set_display(&row.node, DisplayMode::Default);
            } else if index == 0 || retained[index - 1] {
                // First row of an elided run becomes the placeholder.
                let original_text = surface.text(&row.node);
                surface.set_text(&row.node, &crate::cut::PLACEHOLDER.to_string());
                surface.set_display(&row.node, DisplayMode::Default);
                elision.collapsed.push((row.node.clone(), original_text));
            } else {
                surface.set_display(&row.node, DisplayMode::Hidden);
                elision.hidden.push(row.node.clone());
            }
        }

        // Pin the element to the space it actually has, so the shortened
        // list stops overflowing.
        surface.set_height(element, Some(visible));
        elision.height_pinned = true;
        elision.cut = Some(cut);
        Ok(elision)
    }

    /// The solved cut, when elision happened.
    #[must_use]
    pub fn cut(&self) -> Option<&StringCut> {
        self.cut.as_ref()
    }

    /// Returns `true` if no row was touched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cut.is_none()
    }

    /// Restores every hidden row's display and every placeholder row's
    /// cached text, then clears tracking state.
    pub fn reset(&mut self, surface: &mut S) {
        for node in self.hidden.drain(..) {
            surface.set_display(&node, DisplayMode::Default);
        }
        for (node, text) in self.collapsed.drain(..) {
            surface.set_text(&node, &text);
        }
        if self.height_pinned {
            surface.set_height(&self.element, None);
            self.height_pinned = false;
        }
        self.cut = None;
    }
}

/// Classifies the element's child rows: a row whose cleaned text is a single
/// ASCII uppercase letter is alphabetic; everything else is decoration.
fn classify_rows<S: Surface>(surface: &S, element: &S::Node) -> Vec<Row<S::Node>> {
    surface
        .children(element)
        .into_iter()
        .map(|node| {
            let text = surface.text(&node);
            let trimmed = text.trim();
            let mut chars = trimmed.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_uppercase() => Some(c),
                _ => None,
            };
            let height = surface
                .bounding_rect(&node)
                .map(|r| r.height())
                .unwrap_or(0.0);
            Row {
                node,
                letter,
                height,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::RowElision;
    use crate::distribute::Bias;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use jumplist_surface::{DisplayMode, MemNode, MemSurface, NodeId, Surface};
    use kurbo::{Rect, Size};

    const ROW_H: f64 = 25.0;

    /// A 26-row list plus an optional decorative "#" row, `client_height`
    /// tall in a 700px viewport.
    fn list_surface(client_height: f64, decorated: bool) -> (MemSurface, NodeId, Vec<NodeId>) {
        let mut s = MemSurface::new(Size::new(390.0, 700.0));
        let letters = 26 + usize::from(decorated);
        let scroll = ROW_H * letters as f64;
        let list = s.insert(
            None,
            MemNode {
                rect: Some(Rect::new(370.0, 0.0, 388.0, client_height)),
                ..MemNode::default()
            },
        );
        s.set_scroll_metrics(list, scroll, client_height);
        let mut rows = Vec::new();
        if decorated {
            rows.push(insert_row(&mut s, list, "#", 0));
        }
        for (i, letter) in ('A'..='Z').enumerate() {
            let slot = i + usize::from(decorated);
            rows.push(insert_row(&mut s, list, &letter.to_string(), slot));
        }
        (s, list, rows)
    }

    fn insert_row(s: &mut MemSurface, list: NodeId, text: &str, slot: usize) -> NodeId {
        let top = ROW_H * slot as f64;
        s.insert(
            Some(list),
            MemNode {
                rect: Some(Rect::new(370.0, top, 388.0, top + ROW_H)),
                text: text.to_string(),
                ..MemNode::default()
            },
        )
    }

    #[test]
    fn fitting_list_is_left_untouched() {
        let (mut s, list, rows) = list_surface(650.0, false);
        let elision = RowElision::apply(&mut s, &list, Bias::Center).unwrap();
        assert!(elision.is_empty());
        assert!(rows.iter().all(|r| s.display_of(*r) == DisplayMode::Default));
        assert_eq!(s.inline_height_of(list), None);
    }

    #[test]
    fn overflowing_list_collapses_runs_to_placeholders() {
        // 650px of rows in 500px of space: 6 letters must go.
        let (mut s, list, rows) = list_surface(500.0, false);
        let elision = RowElision::apply(&mut s, &list, Bias::Center).unwrap();
        let cut = elision.cut().expect("elision happened");
        assert_eq!(cut.display, "AB|EF|IJ|MN|QR|UV|YZ");

        // First row of each elided run shows the placeholder...
        let c = rows[2];
        assert_eq!(s.text(&c), "|");
        assert_eq!(s.display_of(c), DisplayMode::Default);
        // ...and the rest of the run is hidden outright.
        let d = rows[3];
        assert_eq!(s.display_of(d), DisplayMode::Hidden);
        // Retained rows render normally.
        assert_eq!(s.display_of(rows[0]), DisplayMode::Default);
        assert_eq!(s.text(&rows[0]), "A");

        // The element is pinned to the space it has.
        assert_eq!(s.inline_height_of(list), Some(500.0));
    }

    #[test]
    fn decorative_rows_increase_the_removal_but_are_never_elided() {
        let (mut s, list, rows) = list_surface(500.0, true);
        let elision = RowElision::apply(&mut s, &list, Bias::Center).unwrap();
        assert!(!elision.is_empty());
        // The "#" row stays visible with its own text.
        assert_eq!(s.text(&rows[0]), "#");
        assert_eq!(s.display_of(rows[0]), DisplayMode::Default);
    }

    #[test]
    fn reset_restores_text_display_and_height() {
        let (mut s, list, rows) = list_surface(500.0, false);
        let mut elision = RowElision::apply(&mut s, &list, Bias::Center).unwrap();
        assert!(!elision.is_empty());

        elision.reset(&mut s);
        assert!(elision.is_empty());
        for (i, letter) in ('A'..='Z').enumerate() {
            assert_eq!(s.text(&rows[i]), letter.to_string());
            assert_eq!(s.display_of(rows[i]), DisplayMode::Default);
        }
        assert_eq!(s.inline_height_of(list), None);
    }
}
