#![forbid(unsafe_code)]

//! Interaction classification and the per-gesture snapshot.
//!
//! The mode is decided once at pointer-down and frozen for the gesture's
//! duration: a resize stays a resize even if the pointer later leaves the
//! edge band. Edge flags always win over movability, so a draggable region
//! that reaches an edge still resizes from that edge.

use drs_core::edge::EdgeFlags;
use drs_core::geometry::{Point, Rect};

/// What a gesture is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Press over nothing interactive; the click passes through.
    Idle,
    /// Dragging the panel by a handle.
    Moving,
    /// Resizing from the given edges (two adjacent flags for corners).
    Resizing(EdgeFlags),
}

/// Classify a press from the current edge flags and movability.
#[must_use]
pub fn classify_press(edges: EdgeFlags, movable: bool) -> Mode {
    if !edges.is_empty() {
        Mode::Resizing(edges)
    } else if movable {
        Mode::Moving
    } else {
        Mode::Idle
    }
}

/// State frozen at pointer-down, destroyed at pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSnapshot {
    /// Pointer position at press, in viewport coordinates.
    pub pointer: Point,
    /// Panel rectangle at press.
    pub rect: Rect,
    /// The frozen interaction mode.
    pub mode: Mode,
}

impl GestureSnapshot {
    /// Snapshot a press.
    #[must_use]
    pub const fn new(pointer: Point, rect: Rect, mode: Mode) -> Self {
        Self {
            pointer,
            rect,
            mode,
        }
    }

    /// Pointer offset within the panel at press time.
    ///
    /// Used during a move so the grab point stays under the pointer.
    #[must_use]
    pub fn grab_offset(&self) -> Point {
        self.rect.offset_of(self.pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_win_over_movable() {
        let m = classify_press(EdgeFlags::LEFT, true);
        assert_eq!(m, Mode::Resizing(EdgeFlags::LEFT));
    }

    #[test]
    fn corner_press_keeps_both_edges() {
        let edges = EdgeFlags::TOP | EdgeFlags::RIGHT;
        assert_eq!(classify_press(edges, false), Mode::Resizing(edges));
    }

    #[test]
    fn movable_without_edges_is_moving() {
        assert_eq!(classify_press(EdgeFlags::empty(), true), Mode::Moving);
    }

    #[test]
    fn nothing_interactive_is_idle() {
        assert_eq!(classify_press(EdgeFlags::empty(), false), Mode::Idle);
    }

    #[test]
    fn grab_offset_is_panel_relative() {
        let snap = GestureSnapshot::new(
            Point::new(150.0, 130.0),
            Rect::new(100.0, 100.0, 200.0, 100.0),
            Mode::Moving,
        );
        assert_eq!(snap.grab_offset(), Point::new(50.0, 30.0));
    }
}
