#![forbid(unsafe_code)]

//! Clamping policy and default placement.
//!
//! The position clamp is two-tier per axis: prefer a cosmetic
//! [`EDGE_MARGIN`] gap from the viewport edges, degrade to edge-to-edge
//! placement when the viewport leaves no room for a margin. Order of
//! min/max operations matters here; each concern is a separate small
//! function so the properties in `tests/proptest_clamp_invariants.rs`
//! can pin them down directly.

use floatpane_core::geometry::{Rect, ViewportSize};

/// Smallest allowed panel width.
pub const MIN_WIDTH: f64 = 280.0;
/// Smallest allowed panel height.
pub const MIN_HEIGHT: f64 = 220.0;
/// Largest allowed panel width.
pub const MAX_WIDTH: f64 = 620.0;
/// Largest allowed panel height.
pub const MAX_HEIGHT: f64 = 720.0;
/// Default panel width.
pub const DEFAULT_WIDTH: f64 = 360.0;
/// Default panel height.
pub const DEFAULT_HEIGHT: f64 = 420.0;
/// Preferred gap between the panel and the viewport edges.
pub const EDGE_MARGIN: f64 = 24.0;

/// Keyboard nudge distance.
pub const NUDGE_STEP: f64 = 12.0;
/// Keyboard nudge distance with Shift held.
pub const NUDGE_STEP_COARSE: f64 = 24.0;

/// Scalar clamp with the policy's degenerate-input rules:
/// NaN collapses to `min`, and an inverted range (`max < min`) collapses
/// to `min` rather than panicking.
fn clamp_value(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    if max < min {
        return min;
    }
    value.max(min).min(max)
}

/// Sanitize a viewport reading to safe positive integer bounds.
///
/// Non-finite or non-positive spans become 1; everything else is floored.
fn resolve_viewport(viewport: ViewportSize) -> ViewportSize {
    let resolve = |span: f64| {
        if span.is_finite() {
            span.floor().max(1.0)
        } else {
            1.0
        }
    };
    ViewportSize::new(resolve(viewport.width), resolve(viewport.height))
}

/// Clamp one axis position given the final size on that axis.
///
/// `available` is the travel left once the panel occupies `size` pixels.
/// When that travel is at most [`EDGE_MARGIN`] the margin is abandoned
/// and the value clamps into `[0, available]`; otherwise it clamps into
/// `[EDGE_MARGIN, available - EDGE_MARGIN]`, falling back to `available`
/// as the upper bound when the remainder is smaller than the margin.
fn clamp_axis(value: f64, size: f64, span: f64) -> f64 {
    let available = (span - size).max(0.0);

    if available <= EDGE_MARGIN {
        return clamp_value(value, 0.0, available);
    }

    let preferred_max = available - EDGE_MARGIN;
    let max = if preferred_max >= EDGE_MARGIN {
        preferred_max
    } else {
        available
    };

    clamp_value(value, EDGE_MARGIN, max.max(EDGE_MARGIN))
}

/// Map a candidate rectangle to the nearest rectangle satisfying the
/// size and containment invariants for `viewport`.
///
/// Sizes clamp first (bounds collapse toward the viewport dimension when
/// the viewport is smaller than the nominal minimum), then each axis
/// position clamps independently against the final size.
#[must_use]
pub fn clamp(rect: Rect, viewport: ViewportSize) -> Rect {
    let vp = resolve_viewport(viewport);

    let min_width = MIN_WIDTH.min(vp.width);
    let min_height = MIN_HEIGHT.min(vp.height);

    let max_width = MAX_WIDTH.min((vp.width - EDGE_MARGIN).max(min_width));
    let max_height = MAX_HEIGHT.min((vp.height - EDGE_MARGIN).max(min_height));

    let width = clamp_value(rect.width, min_width, max_width);
    let height = clamp_value(rect.height, min_height, max_height);

    Rect {
        x: clamp_axis(rect.x, width, vp.width),
        y: clamp_axis(rect.y, height, vp.height),
        width,
        height,
    }
}

/// Deterministic default placement for `viewport`: a
/// [`DEFAULT_WIDTH`]`×`[`DEFAULT_HEIGHT`] panel anchored to the top-right
/// corner with an [`EDGE_MARGIN`] gap, clamped so the result is valid
/// even on tiny viewports.
#[must_use]
pub fn default_rect(viewport: ViewportSize) -> Rect {
    let vp = resolve_viewport(viewport);

    let tentative = Rect {
        x: vp.width - DEFAULT_WIDTH - EDGE_MARGIN,
        y: EDGE_MARGIN,
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
    };

    clamp(tentative, vp)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: ViewportSize = ViewportSize::new(1280.0, 720.0);

    #[test]
    fn in_bounds_rect_passes_through() {
        let rect = Rect::new(100.0, 100.0, 300.0, 300.0);
        assert_eq!(clamp(rect, VIEWPORT), rect);
    }

    #[test]
    fn oversized_rect_shrinks_to_max() {
        let rect = Rect::new(0.0, 0.0, 5000.0, 5000.0);
        let out = clamp(rect, VIEWPORT);
        assert_eq!(out.width, MAX_WIDTH);
        // Height max degrades to viewport - margin before the nominal max.
        assert_eq!(out.height, 720.0 - EDGE_MARGIN);
    }

    #[test]
    fn undersized_rect_grows_to_min() {
        let out = clamp(Rect::new(100.0, 100.0, 10.0, 10.0), VIEWPORT);
        assert_eq!(out.width, MIN_WIDTH);
        assert_eq!(out.height, MIN_HEIGHT);
    }

    #[test]
    fn far_offscreen_rect_is_pulled_back() {
        let out = clamp(Rect::new(9999.0, 9999.0, 2000.0, 50.0), VIEWPORT);
        assert_eq!(out.width, MAX_WIDTH);
        assert_eq!(out.height, MIN_HEIGHT);
        assert_eq!(out.x, 1280.0 - MAX_WIDTH - EDGE_MARGIN);
        assert_eq!(out.y, 720.0 - MIN_HEIGHT - EDGE_MARGIN);
    }

    #[test]
    fn negative_position_clamps_to_margin() {
        let out = clamp(Rect::new(-500.0, -500.0, 300.0, 300.0), VIEWPORT);
        assert_eq!(out.x, EDGE_MARGIN);
        assert_eq!(out.y, EDGE_MARGIN);
    }

    #[test]
    fn nan_fields_collapse_to_minimums() {
        let rect = Rect::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN);
        let out = clamp(rect, VIEWPORT);
        assert_eq!(out.width, MIN_WIDTH);
        assert_eq!(out.height, MIN_HEIGHT);
        assert_eq!(out.x, EDGE_MARGIN);
        assert_eq!(out.y, EDGE_MARGIN);
    }

    #[test]
    fn tiny_viewport_collapses_bounds_without_panic() {
        let vp = ViewportSize::new(1.0, 1.0);
        let out = clamp(Rect::new(50.0, 50.0, 300.0, 300.0), vp);
        assert_eq!(out, Rect::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn viewport_narrower_than_min_bounds_to_viewport() {
        let vp = ViewportSize::new(200.0, 150.0);
        let out = clamp(Rect::new(0.0, 0.0, 300.0, 300.0), vp);
        assert_eq!(out.width, 200.0);
        assert_eq!(out.height, 150.0);
        assert_eq!(out.x, 0.0);
        assert_eq!(out.y, 0.0);
    }

    #[test]
    fn non_finite_viewport_resolves_to_unit() {
        let vp = ViewportSize::new(f64::INFINITY, f64::NAN);
        let out = clamp(Rect::new(10.0, 10.0, 300.0, 300.0), vp);
        assert_eq!(out, Rect::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn fractional_viewport_is_floored() {
        // 304.9 floors to 304; available = 304 - 280 = 24 <= margin,
        // so the axis clamps edge-to-edge.
        let vp = ViewportSize::new(304.9, 720.0);
        let out = clamp(Rect::new(9999.0, 100.0, 280.0, 300.0), vp);
        assert_eq!(out.x, 24.0);
        assert_eq!(out.width, 280.0);
    }

    #[test]
    fn margin_tier_boundary() {
        // available exactly EDGE_MARGIN: edge-to-edge tier.
        let vp = ViewportSize::new(MIN_WIDTH + EDGE_MARGIN, 720.0);
        let out = clamp(Rect::new(9999.0, 100.0, MIN_WIDTH, 300.0), vp);
        assert_eq!(out.x, EDGE_MARGIN);

        // available just over EDGE_MARGIN but under 2×: the preferred
        // max would violate the lower margin, so the whole travel is used.
        let vp = ViewportSize::new(MIN_WIDTH + EDGE_MARGIN + 10.0, 720.0);
        let out = clamp(Rect::new(9999.0, 100.0, MIN_WIDTH, 300.0), vp);
        assert_eq!(out.x, EDGE_MARGIN + 10.0);
    }

    #[test]
    fn default_rect_anchors_top_right() {
        let out = default_rect(VIEWPORT);
        assert_eq!(
            out,
            Rect::new(
                1280.0 - DEFAULT_WIDTH - EDGE_MARGIN,
                EDGE_MARGIN,
                DEFAULT_WIDTH,
                DEFAULT_HEIGHT
            )
        );
    }

    #[test]
    fn default_rect_is_clamp_fixed_point_on_tiny_viewport() {
        for vp in [
            ViewportSize::new(1.0, 1.0),
            ViewportSize::new(120.0, 90.0),
            ViewportSize::new(300.0, 250.0),
        ] {
            let d = default_rect(vp);
            assert_eq!(clamp(d, vp), d, "not a fixed point for {vp:?}");
        }
    }

    #[test]
    fn clamp_is_idempotent() {
        let rect = Rect::new(-40.0, 9999.0, 5.0, 9000.0);
        let once = clamp(rect, VIEWPORT);
        assert_eq!(clamp(once, VIEWPORT), once);
    }
}
