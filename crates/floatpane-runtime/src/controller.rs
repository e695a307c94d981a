#![forbid(unsafe_code)]

//! The panel interaction controller.
//!
//! # Role in Floatpane
//! [`PanelController`] is the single writer of the panel rectangle. It
//! consumes normalized pointer/keyboard events plus viewport-resize
//! notifications, runs the drag/resize state machine, validates every
//! candidate rectangle through the layout policy, and persists committed
//! geometry through the configured [`PanelStore`].
//!
//! # States
//! Idle, Dragging, Resizing. At most one interaction exists at a time;
//! a second pointer going down while one is tracked is ignored rather
//! than queued. The active interaction is keyed by [`PointerId`], so
//! events from other pointers pass through without effect even when the
//! host never implements pointer capture.
//!
//! # Invariants
//! - `rect()` is `None` before [`hydrate`](PanelController::hydrate) and
//!   a policy-clamped rectangle ever after.
//! - Every mutation of the committed rect goes through `clamp` against a
//!   fresh viewport read.
//! - Persistence happens on commit, rollback, nudge, reset, and
//!   viewport-driven re-clamps only, never per pointer-move.

use floatpane_core::event::{KeyCode, KeyEvent, PointerEvent, PointerId};
use floatpane_core::geometry::Rect;
use floatpane_layout::policy::{NUDGE_STEP, NUDGE_STEP_COARSE, clamp, default_rect};
use tracing::{debug, warn};

use crate::host::{CursorHint, PanelHooks, ViewportSource};
use crate::interaction::{InteractionKind, ResizeEdges};
use crate::persist::{load_rect, save_rect};
use crate::store::PanelStore;

/// Live pointer interaction: the frame of reference every subsequent
/// move is computed against.
#[derive(Debug, Clone, Copy)]
struct Interaction {
    kind: InteractionKind,
    /// Active handle; empty for a drag.
    edges: ResizeEdges,
    pointer: PointerId,
    origin_x: f64,
    origin_y: f64,
    /// Committed rect at pointer-down, the rollback target for Escape.
    initial: Rect,
}

/// Event-driven controller for one floating panel.
///
/// Generic over its three collaborator seams so hosts plug in their
/// storage backend, viewport reader, and cosmetic side effects; tests
/// use [`MemoryStore`](crate::store::MemoryStore), a fixed
/// [`ViewportSize`](floatpane_core::geometry::ViewportSize), and
/// [`NoopHooks`](crate::host::NoopHooks).
#[derive(Debug)]
pub struct PanelController<S, V, H> {
    store: S,
    viewport: V,
    hooks: H,
    /// Committed geometry; `None` until hydrated.
    rect: Option<Rect>,
    interaction: Option<Interaction>,
}

impl<S, V, H> PanelController<S, V, H>
where
    S: PanelStore,
    V: ViewportSource,
    H: PanelHooks,
{
    /// Create an un-hydrated controller. No store or viewport access
    /// happens until [`hydrate`](PanelController::hydrate).
    pub fn new(store: S, viewport: V, hooks: H) -> Self {
        Self {
            store,
            viewport,
            hooks,
            rect: None,
            interaction: None,
        }
    }

    /// Load persisted geometry (or the computed default) and start
    /// accepting input. Idempotent: repeat calls are ignored.
    ///
    /// Hydration never writes back to the store; the first write happens
    /// on the first committed change.
    pub fn hydrate(&mut self) {
        if self.rect.is_some() {
            debug!("hydrate called on a hydrated controller, ignoring");
            return;
        }
        let viewport = self.viewport.size();
        let rect = load_rect(&self.store, viewport);
        debug!(?rect, "panel hydrated");
        self.rect = Some(rect);
    }

    /// Committed panel rectangle, `None` before hydration.
    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// True once [`hydrate`](PanelController::hydrate) has run.
    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.rect.is_some()
    }

    /// Kind of the interaction in flight, `None` while idle.
    #[must_use]
    pub fn interaction_kind(&self) -> Option<InteractionKind> {
        self.interaction.as_ref().map(|i| i.kind)
    }

    /// Begin dragging the panel with `event`'s pointer.
    ///
    /// Ignored while un-hydrated or while another interaction is
    /// tracked.
    pub fn start_drag(&mut self, event: PointerEvent) {
        self.start_interaction(event, InteractionKind::Drag, ResizeEdges::empty());
    }

    /// Begin resizing via the handle described by `edges`.
    ///
    /// Ignored under the same conditions as
    /// [`start_drag`](PanelController::start_drag), and additionally when
    /// `edges` is not one of the eight valid handles.
    pub fn start_resize(&mut self, event: PointerEvent, edges: ResizeEdges) {
        if !edges.is_valid_handle() {
            debug!(?edges, "resize rejected: not a valid handle");
            return;
        }
        self.start_interaction(event, InteractionKind::Resize, edges);
    }

    fn start_interaction(&mut self, event: PointerEvent, kind: InteractionKind, edges: ResizeEdges) {
        let Some(initial) = self.rect else {
            debug!("interaction rejected: controller not hydrated");
            return;
        };
        if self.interaction.is_some() {
            debug!(pointer = event.pointer.get(), "interaction rejected: one already active");
            return;
        }

        // Capture is advisory; id filtering still protects us if the
        // host cannot capture.
        if let Err(err) = self.hooks.capture_pointer(event.pointer) {
            warn!(pointer = event.pointer.get(), error = %err, "pointer capture failed");
        }
        let cursor = match kind {
            InteractionKind::Drag => CursorHint::Grabbing,
            InteractionKind::Resize => edges.cursor_hint(),
        };
        self.hooks.interaction_started(kind, cursor);

        debug!(?kind, pointer = event.pointer.get(), "interaction started");
        self.interaction = Some(Interaction {
            kind,
            edges,
            pointer: event.pointer,
            origin_x: event.x,
            origin_y: event.y,
            initial,
        });
    }

    /// Track a pointer move: recompute the candidate rect from the
    /// interaction's starting snapshot plus the accumulated delta, then
    /// clamp it against a fresh viewport read.
    ///
    /// Moves from pointers other than the one that started the
    /// interaction are ignored.
    pub fn pointer_moved(&mut self, event: PointerEvent) {
        let Some(interaction) = self.interaction else {
            return;
        };
        if interaction.pointer != event.pointer {
            return;
        }

        let dx = event.x - interaction.origin_x;
        let dy = event.y - interaction.origin_y;
        let candidate = match interaction.kind {
            InteractionKind::Drag => interaction.initial.translated(dx, dy),
            InteractionKind::Resize => resize_candidate(interaction.initial, interaction.edges, dx, dy),
        };
        self.rect = Some(clamp(candidate, self.viewport.size()));
    }

    /// Commit the interaction: the current (already clamped) rect stands
    /// and is persisted.
    pub fn pointer_released(&mut self, event: PointerEvent) {
        self.finish_interaction(event.pointer, "released");
    }

    /// The platform cancelled the pointer stream (window lost focus,
    /// touch contact dropped). Treated as a commit: the last clamped
    /// rect stands.
    pub fn pointer_cancelled(&mut self, event: PointerEvent) {
        self.finish_interaction(event.pointer, "cancelled");
    }

    fn finish_interaction(&mut self, pointer: PointerId, cause: &str) {
        let Some(interaction) = self.interaction else {
            return;
        };
        if interaction.pointer != pointer {
            return;
        }
        self.interaction = None;

        if let Err(err) = self.hooks.release_pointer(pointer) {
            warn!(pointer = pointer.get(), error = %err, "pointer release failed");
        }
        self.hooks.interaction_finished();

        debug!(pointer = pointer.get(), cause, "interaction committed");
        self.persist();
    }

    /// Handle a key press.
    ///
    /// Escape rolls an active interaction back to its starting rect
    /// (re-clamped against the current viewport) and, while idle, resets
    /// the panel to the default placement. Arrow keys nudge the panel by
    /// [`NUDGE_STEP`] (or [`NUDGE_STEP_COARSE`] with Shift held).
    pub fn key_pressed(&mut self, event: KeyEvent) {
        if self.rect.is_none() {
            return;
        }
        match event.code {
            KeyCode::Escape => self.escape(),
            KeyCode::Left => self.nudge(-nudge_step(&event), 0.0),
            KeyCode::Right => self.nudge(nudge_step(&event), 0.0),
            KeyCode::Up => self.nudge(0.0, -nudge_step(&event)),
            KeyCode::Down => self.nudge(0.0, nudge_step(&event)),
            _ => {}
        }
    }

    fn escape(&mut self) {
        if let Some(interaction) = self.interaction.take() {
            if let Err(err) = self.hooks.release_pointer(interaction.pointer) {
                warn!(pointer = interaction.pointer.get(), error = %err, "pointer release failed");
            }
            self.hooks.interaction_finished();

            // The starting rect may no longer fit if the viewport shrank
            // mid-interaction, so the rollback target is re-clamped now.
            let restored = clamp(interaction.initial, self.viewport.size());
            debug!(?restored, "interaction rolled back");
            self.rect = Some(restored);
            self.persist();
        } else {
            debug!("escape while idle, resetting to default placement");
            self.reset();
        }
    }

    fn nudge(&mut self, dx: f64, dy: f64) {
        let Some(rect) = self.rect else {
            return;
        };
        self.rect = Some(clamp(rect.translated(dx, dy), self.viewport.size()));
        self.persist();
    }

    /// The host viewport changed size: re-clamp the committed rect and
    /// persist it if it actually moved.
    ///
    /// A live interaction keeps its starting snapshot untouched; its
    /// next pointer move re-clamps against the new viewport anyway.
    pub fn viewport_resized(&mut self) {
        let Some(rect) = self.rect else {
            return;
        };
        let clamped = clamp(rect, self.viewport.size());
        if clamped != rect {
            debug!(?clamped, "viewport resize moved the panel");
            self.rect = Some(clamped);
            self.persist();
        }
    }

    /// Discard the committed geometry in favor of the default placement
    /// for the current viewport, and persist it.
    ///
    /// Ignored while un-hydrated or while an interaction is in flight.
    pub fn reset(&mut self) {
        if self.rect.is_none() || self.interaction.is_some() {
            return;
        }
        self.rect = Some(default_rect(self.viewport.size()));
        self.persist();
    }

    fn persist(&mut self) {
        if let Some(rect) = self.rect {
            save_rect(&mut self.store, rect);
        }
    }
}

fn nudge_step(event: &KeyEvent) -> f64 {
    if event.shift() {
        NUDGE_STEP_COARSE
    } else {
        NUDGE_STEP
    }
}

/// Anchor-preserving resize: each moving edge follows the pointer delta
/// while the opposite edge stays put. Clamping afterwards may still move
/// the anchor when a size limit wins; containment beats anchor fidelity.
fn resize_candidate(initial: Rect, edges: ResizeEdges, dx: f64, dy: f64) -> Rect {
    let mut rect = initial;
    if edges.contains(ResizeEdges::LEFT) {
        let anchor = initial.right();
        rect.width = initial.width - dx;
        rect.x = anchor - rect.width;
    } else if edges.contains(ResizeEdges::RIGHT) {
        rect.width = initial.width + dx;
    }
    if edges.contains(ResizeEdges::TOP) {
        let anchor = initial.bottom();
        rect.height = initial.height - dy;
        rect.y = anchor - rect.height;
    } else if edges.contains(ResizeEdges::BOTTOM) {
        rect.height = initial.height + dy;
    }
    rect
}
