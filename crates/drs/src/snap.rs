#![forbid(unsafe_code)]

//! Snap targets and the pre-snap memory state machine.
//!
//! # States
//!
//! `Free` and `Snapped`. A Moving gesture's release with a proximity match
//! snaps the panel and captures the pre-gesture rectangle; while snapped,
//! dragging repositions the panel at its pre-snap size, and a plain
//! click-release shrinks the snapped rectangle inward so an edge-flush
//! panel can always be recovered.
//!
//! # Priority
//!
//! Simultaneous proximity flags resolve by strict first match: fullscreen,
//! left, right, top, bottom. This biases corner drags toward the side
//! halves; the order is kept as-is because existing layouts depend on it.
//!
//! # Pre-snap retention
//!
//! After a click-to-shrink the engine leaves `Snapped` but keeps the
//! original rectangle so `restore_pre_snap` can still recover it. A
//! drag-away release discards the memory outright: the drag is the final
//! position. A confirmed resize destroys it the same way. At most one
//! pre-snap is alive per panel.

use drs_core::edge::Proximity;
use drs_core::geometry::{Point, Rect, Size};

/// The panel's geometry immediately before the most recent snap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreSnap {
    /// Rectangle before the snap was applied.
    pub original: Rect,
    /// The snap target currently applied.
    pub target: Rect,
    /// A drag gesture has pulled the panel off its snap target.
    pub dragged_away: bool,
}

/// What a Moving release decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// Apply this snap target.
    SnapTo(Rect),
    /// Apply this shrunken rectangle (click-to-shrink safeguard).
    Shrink(Rect),
    /// Leave the panel where the gesture put it.
    Keep,
}

/// Snap state machine. One per panel.
#[derive(Debug, Default)]
pub struct SnapEngine {
    snapped: bool,
    pre_snap: Option<PreSnap>,
}

impl SnapEngine {
    /// Create a free, memory-less engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the panel is logically snapped.
    #[must_use]
    pub const fn is_snapped(&self) -> bool {
        self.snapped
    }

    /// The live pre-snap memory, if any.
    #[must_use]
    pub const fn pre_snap(&self) -> Option<&PreSnap> {
        self.pre_snap.as_ref()
    }

    /// Compute the snap target for the given proximity flags.
    ///
    /// Strict first-match priority: fullscreen, left half, right half,
    /// top half, bottom half.
    #[must_use]
    pub fn snap_target(viewport: Size, proximity: Proximity) -> Option<Rect> {
        let Size { width, height } = viewport;
        if proximity.contains(Proximity::FULLSCREEN) {
            Some(Rect::from_size(viewport))
        } else if proximity.contains(Proximity::LEFT) {
            Some(Rect::new(0.0, 0.0, width / 2.0, height))
        } else if proximity.contains(Proximity::RIGHT) {
            Some(Rect::new(width / 2.0, 0.0, width / 2.0, height))
        } else if proximity.contains(Proximity::TOP) {
            Some(Rect::new(0.0, 0.0, width, height / 2.0))
        } else if proximity.contains(Proximity::BOTTOM) {
            Some(Rect::new(0.0, height / 2.0, width, height / 2.0))
        } else {
            None
        }
    }

    /// Position for a move while snapped: the pointer minus half the
    /// pre-snap dimensions, so the panel visually unsnaps at its pre-snap
    /// size. Marks the memory as dragged away. Returns `None` when free.
    pub fn drag_position(&mut self, pointer: Point) -> Option<Rect> {
        if !self.snapped {
            return None;
        }
        let p = self.pre_snap.as_mut()?;
        p.dragged_away = true;
        Some(Rect::new(
            pointer.x - p.original.width / 2.0,
            pointer.y - p.original.height / 2.0,
            p.original.width,
            p.original.height,
        ))
    }

    /// Resolve the release of a Moving gesture.
    ///
    /// `start_rect` is the panel rectangle frozen at pointer-down; it
    /// becomes the pre-snap original on a fresh snap. `shrink_inset` is
    /// the inner resize margin applied by the click-to-shrink safeguard.
    pub fn release_move(
        &mut self,
        start_rect: Rect,
        viewport: Size,
        proximity: Proximity,
        shrink_inset: f64,
    ) -> ReleaseOutcome {
        if let Some(target) = Self::snap_target(viewport, proximity) {
            // New snap, or a replacement target while already snapped; the
            // original rect survives replacement.
            let original = match self.pre_snap.take() {
                Some(p) if self.snapped => p.original,
                _ => start_rect,
            };
            self.pre_snap = Some(PreSnap {
                original,
                target,
                dragged_away: false,
            });
            self.snapped = true;
            tracing::debug!(?target, "panel snapped");
            return ReleaseOutcome::SnapTo(target);
        }

        if !self.snapped {
            return ReleaseOutcome::Keep;
        }
        self.snapped = false;

        match self.pre_snap.take() {
            // Dragged away: the drag is the final position.
            Some(p) if p.dragged_away => {
                tracing::debug!("panel unsnapped by drag");
                ReleaseOutcome::Keep
            }
            // Plain click on a snapped panel: shrink inward so the panel
            // never stays edge-flush and unsnappable. The original rect is
            // retained for restore_pre_snap.
            Some(p) => {
                let shrunk = p.target.inset(shrink_inset);
                self.pre_snap = Some(p);
                tracing::debug!(?shrunk, "snapped panel shrunk by click");
                ReleaseOutcome::Shrink(shrunk)
            }
            None => ReleaseOutcome::Keep,
        }
    }

    /// Resolve the release of a Resizing gesture.
    ///
    /// A manual resize commits the panel to its new geometry: the engine
    /// leaves `Snapped` and the pre-snap memory is destroyed, so a later
    /// click-release cannot shrink against a stale target.
    pub fn release_resize(&mut self) {
        if self.pre_snap.take().is_some() {
            tracing::debug!("resize confirmed, snap memory discarded");
        }
        self.snapped = false;
    }

    /// Consume the pre-snap memory, returning the rect to restore.
    ///
    /// No-op (returns `None`) when no memory exists.
    pub fn restore(&mut self) -> Option<Rect> {
        self.snapped = false;
        self.pre_snap.take().map(|p| p.original)
    }

    /// Direct snap command: capture `current` as the pre-snap original and
    /// enter `Snapped` on `target`, bypassing proximity detection.
    pub fn command_snap(&mut self, current: Rect, target: Rect) {
        self.pre_snap = Some(PreSnap {
            original: current,
            target,
            dragged_away: false,
        });
        self.snapped = true;
    }

    /// Capture `current` for later restore without entering `Snapped`.
    ///
    /// Used by `center()`: the panel is repositioned but not edge-flush,
    /// so the click-to-shrink safeguard does not apply.
    pub fn remember(&mut self, current: Rect, target: Rect) {
        self.pre_snap = Some(PreSnap {
            original: current,
            target,
            dragged_away: false,
        });
        self.snapped = false;
    }
}
