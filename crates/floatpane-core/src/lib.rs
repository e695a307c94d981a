#![forbid(unsafe_code)]

//! Core: geometry primitives and canonical input events.
//!
//! # Role in Floatpane
//! `floatpane-core` is the vocabulary layer. It defines the rectangle and
//! viewport types the policy crate computes over, plus the normalized
//! pointer/keyboard event types the controller consumes.
//!
//! # Primary responsibilities
//! - **Rect / ViewportSize**: panel geometry in device-independent pixels.
//! - **PointerEvent / KeyEvent**: canonical input events forwarded by hosts.
//!
//! # How it fits in the system
//! The policy crate (`floatpane-layout`) is a set of pure functions over
//! these types; the controller (`floatpane-runtime`) mutates a `Rect` in
//! response to events. Neither this crate nor the policy crate performs
//! any I/O, so hosts on any platform can feed events in.

pub mod event;
pub mod geometry;
