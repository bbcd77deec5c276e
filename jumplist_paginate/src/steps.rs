// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure step algebra: scroll geometry in, page counts and offsets out.

/// Breathing room left below the last page when the element has no internal
/// overflow (its client height already equals its scroll height).
pub const LAST_PAGE_BOTTOM_MARGIN: f64 = 20.0;

/// Scroll geometry of the index element, read live from the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementGeometry {
    /// Top of the element's bounding rect in viewport coordinates.
    pub top: f64,
    /// Viewport height.
    pub viewport_height: f64,
    /// Full scrollable extent of the element's content.
    pub scroll_height: f64,
    /// Visible (client) extent of the element.
    pub client_height: f64,
}

/// Current paging position.
///
/// Invariant: `step_number < step_count` whenever `step_count > 0`. The
/// state is zeroed whenever a new element is shown or the overlay resets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaginationState {
    /// Current page, 0-based.
    pub step_number: usize,
    /// Total number of pages.
    pub step_count: usize,
    /// Extra extent of the first page when the element's top is inside the
    /// viewport but its content already exceeds the space below that top.
    pub first_page_top: f64,
}

/// Paging direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Toward the first page.
    Up,
    /// Toward the last page.
    Down,
}

/// One page's worth of vertical travel.
#[must_use]
pub fn step_length(geometry: &ElementGeometry) -> f64 {
    geometry.viewport_height.min(geometry.client_height)
}

/// Derives the page count and first-page adjustment from live geometry.
///
/// When the element starts partway down the viewport and its content does
/// not fit in the space that remains, the first page is effectively shorter;
/// the top offset is added to the total so the tail is still reachable.
#[must_use]
pub fn calculate_steps(geometry: &ElementGeometry) -> PaginationState {
    let mut total = geometry.scroll_height;
    let mut first_page_top = 0.0;
    if geometry.top >= 0.0
        && geometry.top < geometry.viewport_height
        && geometry.client_height > geometry.viewport_height - geometry.top
    {
        first_page_top = geometry.top;
        total += geometry.top;
    }
    PaginationState {
        step_number: 0,
        step_count: ceil_ratio(total, step_length(geometry)),
        first_page_top,
    }
}

/// Whether the overlay should be shown at all: the content overflows the
/// space the element actually has.
#[must_use]
pub fn needs_overlay(geometry: &ElementGeometry) -> bool {
    let available = (geometry.viewport_height - geometry.top).min(geometry.client_height);
    available < geometry.scroll_height - 1.0
}

/// Adjusts `state` one step in `direction`.
///
/// Returns `false` (leaving the state untouched) at the boundary pages.
pub fn advance(state: &mut PaginationState, direction: StepDirection) -> bool {
    match direction {
        StepDirection::Up => {
            if state.step_number == 0 {
                return false;
            }
            state.step_number -= 1;
        }
        StepDirection::Down => {
            if state.step_count == 0 || state.step_number >= state.step_count - 1 {
                return false;
            }
            state.step_number += 1;
        }
    }
    true
}

/// Vertical transform offset for the current page.
///
/// `baseline` is the element's own vertical translation before pagination
/// touched it, parsed from its transform when it was first shown.
///
/// The last page is recomputed from scroll geometry rather than derived as
/// `step_length * step_number`, so the list never over-scrolls past its true
/// end.
#[must_use]
pub fn step_offset(state: &PaginationState, geometry: &ElementGeometry, baseline: f64) -> f64 {
    if state.step_number == 0 {
        return baseline;
    }
    if state.step_count > 0 && state.step_number == state.step_count - 1 {
        let last_visible = if geometry.client_height == geometry.scroll_height {
            geometry.viewport_height - LAST_PAGE_BOTTOM_MARGIN
        } else {
            geometry.viewport_height.min(geometry.client_height)
        };
        return baseline - (geometry.scroll_height + state.first_page_top - last_visible);
    }
    baseline - step_length(geometry) * state.step_number as f64
}

/// Ceiling of `total / step` for positive inputs, without `std` float
/// intrinsics. Degenerate inputs yield 0 pages.
fn ceil_ratio(total: f64, step: f64) -> usize {
    if step <= 0.0 || total <= 0.0 {
        return 0;
    }
    let ratio = total / step;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "ratio is non-negative and bounded by page counts in practice"
    )]
    let floor = ratio as usize;
    if (floor as f64) < ratio { floor + 1 } else { floor }
}

#[cfg(test)]
mod tests {
    use super::{
        ElementGeometry, StepDirection, advance, calculate_steps, needs_overlay, step_length,
        step_offset,
    };

    /// 2000px of content paged through a 700px viewport from the very top.
    fn three_pages() -> ElementGeometry {
        ElementGeometry {
            top: 0.0,
            viewport_height: 700.0,
            scroll_height: 2000.0,
            client_height: 700.0,
        }
    }

    #[test]
    fn step_count_is_ceiling_of_total_over_step_length() {
        let state = calculate_steps(&three_pages());
        assert_eq!(state.step_number, 0);
        assert_eq!(state.step_count, 3);
        assert_eq!(state.first_page_top, 0.0);
    }

    #[test]
    fn an_offset_top_shortens_the_first_page() {
        // The element starts 100px down and its content does not fit in the
        // remaining 600px, so the first page is 100px shorter.
        let geometry = ElementGeometry {
            top: 100.0,
            ..three_pages()
        };
        let state = calculate_steps(&geometry);
        assert_eq!(state.first_page_top, 100.0);
        assert_eq!(state.step_count, 3);
    }

    #[test]
    fn intermediate_pages_move_by_whole_steps() {
        let geometry = three_pages();
        let mut state = calculate_steps(&geometry);

        assert!(advance(&mut state, StepDirection::Down));
        assert_eq!(state.step_number, 1);
        assert_eq!(step_offset(&state, &geometry, 0.0), -700.0);
    }

    #[test]
    fn the_last_page_is_recomputed_from_scroll_geometry() {
        let geometry = three_pages();
        let mut state = calculate_steps(&geometry);
        advance(&mut state, StepDirection::Down);
        advance(&mut state, StepDirection::Down);
        assert_eq!(state.step_number, 2);

        // client == scroll is false here (700 != 2000): the last visible
        // chunk is min(viewport, client) = 700, so the offset is
        // -(2000 - 700) = -1300, not -1400.
        assert_eq!(step_offset(&state, &geometry, 0.0), -1300.0);
    }

    #[test]
    fn the_bottom_margin_applies_without_internal_overflow() {
        // client == scroll: the element scrolls with the page rather than
        // internally, so the last page leaves the fixed bottom margin.
        let geometry = ElementGeometry {
            top: 0.0,
            viewport_height: 700.0,
            scroll_height: 2000.0,
            client_height: 2000.0,
        };
        let mut state = calculate_steps(&geometry);
        assert_eq!(state.step_count, 3);
        state.step_number = state.step_count - 1;
        // last_visible = 700 - 20; offset = -(2000 - 680) = -1320.
        assert_eq!(step_offset(&state, &geometry, 0.0), -1320.0);
    }

    #[test]
    fn boundary_steps_are_no_ops() {
        let geometry = three_pages();
        let mut state = calculate_steps(&geometry);

        assert!(!advance(&mut state, StepDirection::Up));
        assert_eq!(state.step_number, 0);

        state.step_number = 2;
        assert!(!advance(&mut state, StepDirection::Down));
        assert_eq!(state.step_number, 2);
    }

    #[test]
    fn returning_to_the_top_restores_the_baseline() {
        let geometry = three_pages();
        let mut state = calculate_steps(&geometry);
        advance(&mut state, StepDirection::Down);
        advance(&mut state, StepDirection::Up);
        assert_eq!(state.step_number, 0);
        assert_eq!(step_offset(&state, &geometry, -15.0), -15.0);
    }

    #[test]
    fn baseline_composes_with_page_offsets() {
        let geometry = three_pages();
        let mut state = calculate_steps(&geometry);
        advance(&mut state, StepDirection::Down);
        assert_eq!(step_offset(&state, &geometry, 40.0), 40.0 - 700.0);
    }

    #[test]
    fn overlay_gate_compares_available_space_to_scroll_extent() {
        assert!(needs_overlay(&three_pages()));

        let fitting = ElementGeometry {
            top: 0.0,
            viewport_height: 700.0,
            scroll_height: 650.0,
            client_height: 650.0,
        };
        assert!(!needs_overlay(&fitting));

        // Within the 1px tolerance: no overlay.
        let borderline = ElementGeometry {
            top: 0.0,
            viewport_height: 700.0,
            scroll_height: 700.5,
            client_height: 700.0,
        };
        assert!(!needs_overlay(&borderline));
    }

    #[test]
    fn step_length_is_bounded_by_viewport_and_client() {
        assert_eq!(step_length(&three_pages()), 700.0);
        let short_client = ElementGeometry {
            client_height: 500.0,
            ..three_pages()
        };
        assert_eq!(step_length(&short_client), 500.0);
    }
}
