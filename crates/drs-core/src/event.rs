#![forbid(unsafe_code)]

//! Pointer input and cursor-affordance types.
//!
//! The engine consumes one active pointer. Mouse and touch both map onto
//! [`PointerInput`]; the host timestamps events so the multi-press window
//! is deterministic and testable.

use crate::edge::EdgeFlags;
use crate::geometry::Point;

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Button pressed / touch started.
    Down,
    /// Pointer moved (with or without an active press).
    Move,
    /// Button released / touch ended.
    Up,
}

/// A single pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    /// The event phase.
    pub phase: PointerPhase,
    /// X coordinate in pixels.
    pub x: f64,
    /// Y coordinate in pixels.
    pub y: f64,
    /// Host-supplied timestamp in milliseconds.
    pub time_ms: u64,
}

impl PointerInput {
    /// Create a pointer event.
    #[must_use]
    pub const fn new(phase: PointerPhase, x: f64, y: f64, time_ms: u64) -> Self {
        Self {
            phase,
            x,
            y,
            time_ms,
        }
    }

    /// A press at the given position.
    #[must_use]
    pub const fn down(x: f64, y: f64, time_ms: u64) -> Self {
        Self::new(PointerPhase::Down, x, y, time_ms)
    }

    /// A move to the given position.
    #[must_use]
    pub const fn moved(x: f64, y: f64, time_ms: u64) -> Self {
        Self::new(PointerPhase::Move, x, y, time_ms)
    }

    /// A release at the given position.
    #[must_use]
    pub const fn up(x: f64, y: f64, time_ms: u64) -> Self {
        Self::new(PointerPhase::Up, x, y, time_ms)
    }

    /// Position as a [`Point`].
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Cursor affordance hint derived from the current edge flags.
///
/// Presentation-only output; never feeds back into gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// No interaction available at the pointer.
    #[default]
    Default,
    /// Pointer is over a draggable region.
    Move,
    /// Horizontal resize (left or right edge).
    ResizeEw,
    /// Vertical resize (top or bottom edge).
    ResizeNs,
    /// Diagonal resize, top-left/bottom-right corners.
    ResizeNwse,
    /// Diagonal resize, top-right/bottom-left corners.
    ResizeNesw,
}

impl CursorHint {
    /// Resolve the hint for the given edge flags and movability.
    ///
    /// Corner diagonals win over single edges; any resize hint wins over
    /// the move hint.
    #[must_use]
    pub fn resolve(edges: EdgeFlags, movable: bool) -> Self {
        let tl_br = edges.contains(EdgeFlags::TOP | EdgeFlags::LEFT)
            || edges.contains(EdgeFlags::BOTTOM | EdgeFlags::RIGHT);
        let tr_bl = edges.contains(EdgeFlags::TOP | EdgeFlags::RIGHT)
            || edges.contains(EdgeFlags::BOTTOM | EdgeFlags::LEFT);

        if tl_br {
            Self::ResizeNwse
        } else if tr_bl {
            Self::ResizeNesw
        } else if edges.intersects(EdgeFlags::LEFT | EdgeFlags::RIGHT) {
            Self::ResizeEw
        } else if edges.intersects(EdgeFlags::TOP | EdgeFlags::BOTTOM) {
            Self::ResizeNs
        } else if movable {
            Self::Move
        } else {
            Self::Default
        }
    }
}
