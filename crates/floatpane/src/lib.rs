#![forbid(unsafe_code)]

//! Floatpane public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use floatpane_core::event::{KeyCode, KeyEvent, Modifiers, PointerEvent, PointerId};
pub use floatpane_core::geometry::{Rect, ViewportSize};

// --- Layout re-exports -----------------------------------------------------

pub use floatpane_layout::policy::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, EDGE_MARGIN, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH,
    NUDGE_STEP, NUDGE_STEP_COARSE, clamp, default_rect,
};

// --- Runtime re-exports ----------------------------------------------------

pub use floatpane_runtime::{
    CaptureError, CursorHint, InteractionKind, MemoryStore, NoopHooks, PanelController,
    PanelHooks, PanelStore, ResizeEdges, STORAGE_KEY, StoreError, StoreResult, ViewportSource,
};

// --- Panel builder ---------------------------------------------------------

/// Builder wiring a [`PanelController`] to its collaborators.
///
/// Starts from the headless defaults (in-memory store, fixed viewport,
/// no host hooks) so tests and embeddings only replace the seams they
/// care about.
///
/// ```
/// use floatpane::{Panel, ViewportSize};
///
/// let panel = Panel::new(ViewportSize::new(1280.0, 720.0)).hydrated();
/// assert!(panel.rect().is_some());
/// ```
pub struct Panel<S = MemoryStore, V = ViewportSize, H = NoopHooks> {
    store: S,
    viewport: V,
    hooks: H,
}

impl Panel<MemoryStore, ViewportSize, NoopHooks> {
    /// Start from the headless defaults with a fixed viewport.
    #[must_use]
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            store: MemoryStore::new(),
            viewport,
            hooks: NoopHooks,
        }
    }
}

impl<S, V, H> Panel<S, V, H> {
    /// Replace the storage backend.
    #[must_use]
    pub fn store<S2: PanelStore>(self, store: S2) -> Panel<S2, V, H> {
        Panel {
            store,
            viewport: self.viewport,
            hooks: self.hooks,
        }
    }

    /// Replace the viewport reader.
    #[must_use]
    pub fn viewport<V2: ViewportSource>(self, viewport: V2) -> Panel<S, V2, H> {
        Panel {
            store: self.store,
            viewport,
            hooks: self.hooks,
        }
    }

    /// Replace the host hooks.
    #[must_use]
    pub fn hooks<H2: PanelHooks>(self, hooks: H2) -> Panel<S, V, H2> {
        Panel {
            store: self.store,
            viewport: self.viewport,
            hooks,
        }
    }
}

impl<S, V, H> Panel<S, V, H>
where
    S: PanelStore,
    V: ViewportSource,
    H: PanelHooks,
{
    /// Build the controller without hydrating it.
    #[must_use]
    pub fn build(self) -> PanelController<S, V, H> {
        PanelController::new(self.store, self.viewport, self.hooks)
    }

    /// Build the controller and hydrate it immediately.
    #[must_use]
    pub fn hydrated(self) -> PanelController<S, V, H> {
        let mut controller = self.build();
        controller.hydrate();
        controller
    }
}

// --- Prelude ----------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CursorHint, InteractionKind, KeyCode, KeyEvent, MemoryStore, Modifiers, NoopHooks, Panel,
        PanelController, PanelHooks, PanelStore, PointerEvent, PointerId, Rect, ResizeEdges,
        ViewportSize, ViewportSource,
    };

    pub use crate::{core, layout, runtime};
}

pub use floatpane_core as core;
pub use floatpane_layout as layout;
pub use floatpane_runtime as runtime;
