#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! These are the normalized events hosts forward to the controller. All
//! types derive `Clone`, `Copy`, and `PartialEq` for use in tests and
//! pattern matching.
//!
//! # Design Notes
//!
//! - Pointer coordinates are viewport-relative pixels, same units as
//!   [`Rect`](crate::geometry::Rect).
//! - `PointerId` is an opaque platform token; the controller only ever
//!   compares ids for equality.
//! - `Modifiers` use bitflags for easy combination.

use bitflags::bitflags;

/// Opaque identifier for a pointer (mouse, pen, touch contact).
///
/// Assigned by the platform; the engine treats it as a token for
/// admission control and never interprets the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(u64);

impl PointerId {
    /// Wrap a raw platform pointer id.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A pointer event (down, move, up, or cancel — the phase is conveyed by
/// which controller operation the host calls).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Which pointer produced the event.
    pub pointer: PointerId,
    /// X coordinate in viewport pixels.
    pub x: f64,
    /// Y coordinate in viewport pixels.
    pub y: f64,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[inline]
    #[must_use]
    pub const fn new(pointer: PointerId, x: f64, y: f64) -> Self {
        Self { pointer, x, y }
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if Shift is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Alt/Option is held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    /// Check if Super/Meta/Cmd is held.
    #[must_use]
    pub const fn super_key(&self) -> bool {
        self.modifiers.contains(Modifiers::SUPER)
    }
}

/// Key codes for keyboard events.
///
/// The controller acts on `Escape` and the arrow keys; the remaining
/// variants exist so hosts can forward key input unfiltered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Tab key.
    Tab,

    /// Home key.
    Home,

    /// End key.
    End,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_id_roundtrip() {
        let id = PointerId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(id, PointerId::new(42));
        assert_ne!(id, PointerId::new(7));
    }

    #[test]
    fn pointer_event_fields() {
        let ev = PointerEvent::new(PointerId::new(1), 120.5, 64.0);
        assert_eq!(ev.pointer, PointerId::new(1));
        assert_eq!(ev.x, 120.5);
        assert_eq!(ev.y, 64.0);
    }

    #[test]
    fn key_event_modifiers() {
        let ev = KeyEvent::new(KeyCode::Up).with_modifiers(Modifiers::SHIFT);
        assert!(ev.shift());
        assert!(!ev.ctrl());
        assert!(!ev.alt());
        assert!(!ev.super_key());
    }

    #[test]
    fn key_event_combined_modifiers() {
        let ev = KeyEvent::new(KeyCode::Left).with_modifiers(Modifiers::CTRL | Modifiers::SHIFT);
        assert!(ev.ctrl());
        assert!(ev.shift());
        assert!(!ev.alt());
    }

    #[test]
    fn modifiers_default() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }
}
