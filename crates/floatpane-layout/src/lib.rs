#![forbid(unsafe_code)]

//! Pure geometry policy for the floating panel.
//!
//! # Role in Floatpane
//! This crate is the single source of truth for "the panel is never
//! off-screen and never outside its size limits". Everything here is a
//! pure function: candidate rectangle in, invariant-satisfying rectangle
//! out. The controller (`floatpane-runtime`) routes every mutation
//! through [`clamp`].
//!
//! # Invariants enforced by [`clamp`]
//!
//! For a resolved viewport `vw × vh`:
//!
//! 1. `0 <= x` and `x + width <= vw` (same for the y axis)
//! 2. `min(MIN_WIDTH, vw) <= width <= min(MAX_WIDTH, vw)` (same for height)
//! 3. No input — NaN, infinities, negative sizes, degenerate viewports —
//!    causes a panic; every candidate maps to the nearest valid rectangle.

pub mod policy;

pub use floatpane_core::geometry::{Rect, ViewportSize};
pub use policy::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, EDGE_MARGIN, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH,
    NUDGE_STEP, NUDGE_STEP_COARSE, clamp, default_rect,
};
