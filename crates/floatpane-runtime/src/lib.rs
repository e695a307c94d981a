#![forbid(unsafe_code)]

//! Runtime: the event-driven interaction controller and its collaborators.
//!
//! # Role in Floatpane
//! `floatpane-runtime` owns the panel's committed rectangle and the
//! lifecycle of at most one pointer interaction (a drag or one of the
//! eight resize handles). Hosts forward raw pointer/keyboard events and
//! viewport-resize notifications; the controller converts them into
//! candidate rectangles, validates them through `floatpane-layout`, and
//! persists committed geometry through a pluggable key-value store.
//!
//! # Concurrency model
//! Single-threaded and cooperative: all mutation happens synchronously
//! inside one event-handler call. Admission control is pointer-id
//! filtering — events from any pointer other than the one that started
//! the interaction are ignored, so no lock is needed.
//!
//! # Failure philosophy
//! Nothing here is fatal. Corrupt persisted state falls back to the
//! computed default, store and pointer-capture failures are logged and
//! tolerated, and malformed input degrades to the nearest valid state.

pub mod controller;
pub mod host;
pub mod interaction;
pub mod persist;
pub mod store;

pub use controller::PanelController;
pub use host::{CaptureError, CursorHint, NoopHooks, PanelHooks, ViewportSource};
pub use interaction::{InteractionKind, ResizeEdges};
pub use persist::{STORAGE_KEY, load_rect, save_rect};
pub use store::{MemoryStore, PanelStore, StoreError, StoreResult};
