#![forbid(unsafe_code)]

//! Interaction classification: drag vs. resize, and which edges a resize
//! handle moves.

use bitflags::bitflags;

use crate::host::CursorHint;

/// What kind of pointer interaction is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    /// The whole panel follows the pointer.
    Drag,
    /// One or two adjacent edges follow the pointer.
    Resize,
}

bitflags! {
    /// Which edges a resize handle moves.
    ///
    /// A valid handle sets exactly one edge or two adjacent edges; the
    /// four corner handles are provided as named composites. Opposing
    /// pairs (`TOP | BOTTOM`, `LEFT | RIGHT`) are not meaningful and are
    /// rejected by [`is_valid_handle`](ResizeEdges::is_valid_handle).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResizeEdges: u8 {
        /// Top edge moves; the bottom edge is the anchor.
        const TOP    = 0b0001;
        /// Right edge moves; the left edge is the anchor.
        const RIGHT  = 0b0010;
        /// Bottom edge moves; the top edge is the anchor.
        const BOTTOM = 0b0100;
        /// Left edge moves; the right edge is the anchor.
        const LEFT   = 0b1000;

        /// Top-left corner handle.
        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        /// Top-right corner handle.
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        /// Bottom-left corner handle.
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        /// Bottom-right corner handle.
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

impl ResizeEdges {
    /// True if this edge set corresponds to one of the eight handles.
    #[must_use]
    pub fn is_valid_handle(self) -> bool {
        !self.is_empty()
            && !self.contains(Self::TOP | Self::BOTTOM)
            && !self.contains(Self::LEFT | Self::RIGHT)
    }

    /// The cursor a host should show while this handle is active.
    ///
    /// Falls back to [`CursorHint::Grabbing`] for edge sets that are not
    /// valid handles (which the controller rejects before this matters).
    #[must_use]
    pub fn cursor_hint(self) -> CursorHint {
        if self == Self::TOP || self == Self::BOTTOM {
            CursorHint::ResizeVertical
        } else if self == Self::LEFT || self == Self::RIGHT {
            CursorHint::ResizeHorizontal
        } else if self == Self::TOP_LEFT || self == Self::BOTTOM_RIGHT {
            CursorHint::ResizeDiagonalDown
        } else if self == Self::TOP_RIGHT || self == Self::BOTTOM_LEFT {
            CursorHint::ResizeDiagonalUp
        } else {
            CursorHint::Grabbing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_edges_are_valid_handles() {
        for edges in [
            ResizeEdges::TOP,
            ResizeEdges::RIGHT,
            ResizeEdges::BOTTOM,
            ResizeEdges::LEFT,
        ] {
            assert!(edges.is_valid_handle(), "{edges:?}");
        }
    }

    #[test]
    fn corners_are_valid_handles() {
        for edges in [
            ResizeEdges::TOP_LEFT,
            ResizeEdges::TOP_RIGHT,
            ResizeEdges::BOTTOM_LEFT,
            ResizeEdges::BOTTOM_RIGHT,
        ] {
            assert!(edges.is_valid_handle(), "{edges:?}");
        }
    }

    #[test]
    fn degenerate_edge_sets_are_rejected() {
        assert!(!ResizeEdges::empty().is_valid_handle());
        assert!(!(ResizeEdges::TOP | ResizeEdges::BOTTOM).is_valid_handle());
        assert!(!(ResizeEdges::LEFT | ResizeEdges::RIGHT).is_valid_handle());
        assert!(!ResizeEdges::all().is_valid_handle());
    }

    #[test]
    fn cursor_hints_match_handle_orientation() {
        assert_eq!(ResizeEdges::TOP.cursor_hint(), CursorHint::ResizeVertical);
        assert_eq!(ResizeEdges::BOTTOM.cursor_hint(), CursorHint::ResizeVertical);
        assert_eq!(ResizeEdges::LEFT.cursor_hint(), CursorHint::ResizeHorizontal);
        assert_eq!(ResizeEdges::RIGHT.cursor_hint(), CursorHint::ResizeHorizontal);
        assert_eq!(
            ResizeEdges::TOP_LEFT.cursor_hint(),
            CursorHint::ResizeDiagonalDown
        );
        assert_eq!(
            ResizeEdges::BOTTOM_RIGHT.cursor_hint(),
            CursorHint::ResizeDiagonalDown
        );
        assert_eq!(
            ResizeEdges::TOP_RIGHT.cursor_hint(),
            CursorHint::ResizeDiagonalUp
        );
        assert_eq!(
            ResizeEdges::BOTTOM_LEFT.cursor_hint(),
            CursorHint::ResizeDiagonalUp
        );
    }
}
