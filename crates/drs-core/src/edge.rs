#![forbid(unsafe_code)]

//! Edge and viewport-proximity classification.
//!
//! Pure functions called once per pointer move, before any gesture or snap
//! decision is made.
//!
//! # Boundary law
//!
//! A pointer is "on" an edge when its offset from that edge lies in
//! `(-outer, inner]`: inclusive at the inner band boundary, exclusive at
//! the outer one. The orthogonal coordinate must lie within the opposite
//! extent widened by `outer` on both sides, which lets outer bands extend
//! past the corners for reliable diagonal grabs.

use bitflags::bitflags;

use crate::geometry::{Point, Rect, Size};

bitflags! {
    /// Which panel edges the pointer is currently on.
    ///
    /// Corner grabs set two adjacent flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EdgeFlags: u8 {
        const TOP    = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT   = 0b0100;
        const RIGHT  = 0b1000;
    }
}

bitflags! {
    /// Which viewport boundaries the panel has been dragged past.
    ///
    /// `FULLSCREEN` is set when any side is beyond the fullscreen margin;
    /// the snap engine gives it priority over the per-edge flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Proximity: u8 {
        const LEFT       = 0b00001;
        const RIGHT      = 0b00010;
        const TOP        = 0b00100;
        const BOTTOM     = 0b01000;
        const FULLSCREEN = 0b10000;
    }
}

/// Result of [`classify_edges`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeReport {
    /// Edges the pointer is on.
    pub edges: EdgeFlags,
    /// Pointer x lies within the panel width widened by the outer margin.
    pub in_horizontal_span: bool,
    /// Pointer y lies within the panel height widened by the outer margin.
    pub in_vertical_span: bool,
}

/// Classify the pointer position against a panel's resize bands.
///
/// `inner` and `outer` are the band depths inside and outside the panel
/// boundary. Pure and side-effect-free.
#[must_use]
pub fn classify_edges(rect: Rect, pointer: Point, inner: f64, outer: f64) -> EdgeReport {
    let Point { x, y } = rect.offset_of(pointer);

    let in_horizontal_span = x > -outer && x < rect.width + outer;
    let in_vertical_span = y > -outer && y < rect.height + outer;

    let mut edges = EdgeFlags::empty();
    if y <= inner && y > -outer && in_horizontal_span {
        edges |= EdgeFlags::TOP;
    }
    if y >= rect.height - inner && y < rect.height + outer && in_horizontal_span {
        edges |= EdgeFlags::BOTTOM;
    }
    if x <= inner && x > -outer && in_vertical_span {
        edges |= EdgeFlags::LEFT;
    }
    if x >= rect.width - inner && x < rect.width + outer && in_vertical_span {
        edges |= EdgeFlags::RIGHT;
    }

    EdgeReport {
        edges,
        in_horizontal_span,
        in_vertical_span,
    }
}

/// Classify the panel's position against the viewport snap thresholds.
///
/// An edge flag is set once the corresponding panel side has been dragged
/// more than `snap_edge` pixels past the viewport; `FULLSCREEN` once any
/// side is more than `snap_full` pixels past.
#[must_use]
pub fn classify_proximity(rect: Rect, viewport: Size, snap_edge: f64, snap_full: f64) -> Proximity {
    let mut flags = Proximity::empty();
    if rect.left < -snap_edge {
        flags |= Proximity::LEFT;
    }
    if rect.right() > viewport.width + snap_edge {
        flags |= Proximity::RIGHT;
    }
    if rect.top < -snap_edge {
        flags |= Proximity::TOP;
    }
    if rect.bottom() > viewport.height + snap_edge {
        flags |= Proximity::BOTTOM;
    }
    if rect.left < -snap_full
        || rect.top < -snap_full
        || rect.right() > viewport.width + snap_full
        || rect.bottom() > viewport.height + snap_full
    {
        flags |= Proximity::FULLSCREEN;
    }
    flags
}
