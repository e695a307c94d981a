#![forbid(unsafe_code)]

//! Host collaborator seams.
//!
//! The engine computes geometry and interaction state; everything that
//! touches the platform — reading the viewport, capturing a pointer,
//! changing the cursor, suppressing text selection — goes through the
//! traits here. A browser host maps them onto DOM APIs, a native host
//! onto its toolkit, and tests onto plain fixtures.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use floatpane_core::event::PointerId;
use floatpane_core::geometry::ViewportSize;

use crate::interaction::InteractionKind;

/// Synchronous reader for the current viewport dimensions.
///
/// The controller re-reads the source on every geometry operation, so a
/// host only needs to keep the source current — no resize notification
/// carries dimensions of its own.
pub trait ViewportSource {
    /// Current available width/height, same units as the panel rect.
    fn size(&self) -> ViewportSize;
}

/// A fixed viewport, useful for tests and single-size embeddings.
impl ViewportSource for ViewportSize {
    fn size(&self) -> ViewportSize {
        *self
    }
}

/// A shared mutable viewport for hosts that resize at runtime.
impl ViewportSource for Rc<Cell<ViewportSize>> {
    fn size(&self) -> ViewportSize {
        self.get()
    }
}

/// Error from a host pointer-capture call.
///
/// Capture is advisory: on failure the controller logs and falls back to
/// pointer-id filtering, which is the actual safety net.
#[derive(Debug)]
pub enum CaptureError {
    /// The platform has no pointer-capture mechanism.
    Unsupported,
    /// The platform rejected the call.
    Platform(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Unsupported => write!(f, "pointer capture unsupported"),
            CaptureError::Platform(msg) => write!(f, "pointer capture rejected: {msg}"),
        }
    }
}

impl std::error::Error for CaptureError {}

/// Cursor shape a host should display during an interaction.
///
/// Purely cosmetic; the engine derives it from the active handle so the
/// host does not re-encode the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    /// Closed-hand cursor while dragging.
    Grabbing,
    /// North-south resize cursor (top/bottom edges).
    ResizeVertical,
    /// East-west resize cursor (left/right edges).
    ResizeHorizontal,
    /// Northwest-southeast resize cursor (top-left/bottom-right corners).
    ResizeDiagonalDown,
    /// Northeast-southwest resize cursor (top-right/bottom-left corners).
    ResizeDiagonalUp,
}

/// Side-channel callbacks the controller invokes around an interaction.
///
/// All methods default to no-ops: capture is advisory, and a host with
/// no capture mechanism simply leans on the controller's pointer-id
/// filtering.
pub trait PanelHooks {
    /// Bind subsequent move/up/cancel delivery to `pointer`.
    ///
    /// Called once when an interaction starts. Errors are logged by the
    /// controller and the interaction proceeds regardless.
    fn capture_pointer(&mut self, pointer: PointerId) -> Result<(), CaptureError> {
        let _ = pointer;
        Ok(())
    }

    /// Release a capture taken by [`capture_pointer`](PanelHooks::capture_pointer).
    fn release_pointer(&mut self, pointer: PointerId) -> Result<(), CaptureError> {
        let _ = pointer;
        Ok(())
    }

    /// An interaction started; apply cosmetic state (cursor, suppress
    /// text selection).
    fn interaction_started(&mut self, kind: InteractionKind, cursor: CursorHint) {
        let _ = (kind, cursor);
    }

    /// The interaction ended (commit or cancel); clear cosmetic state.
    fn interaction_finished(&mut self) {}
}

/// Hooks implementation that does nothing.
///
/// Suitable for headless use and tests that don't observe side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl PanelHooks for NoopHooks {}
