#![forbid(unsafe_code)]

//! Per-panel session: gesture lifecycle and the frame-driven update.
//!
//! Pointer handlers only refresh shared geometry and set a dirty flag;
//! [`Session::step`] performs all visible mutation, coalescing bursts of
//! move events into one update per frame. The host calls `step` from its
//! render loop; the session never schedules itself.
//!
//! # Invariants
//!
//! 1. At most one gesture snapshot is alive; a pointer-down during an
//!    active gesture is ignored until its release is observed.
//! 2. The gesture mode is frozen at press; `step` only interprets it.
//! 3. Releasing the pointer is the only way a gesture ends.

use drs_core::edge::{EdgeReport, Proximity, classify_edges, classify_proximity};
use drs_core::event::{CursorHint, PointerInput};
use drs_core::geometry::{Point, Rect, Size};
use drs_core::margins::Margins;

use crate::gesture::{GestureSnapshot, Mode, classify_press};
use crate::handle::{HandleSet, HandleSpec};
use crate::snap::{ReleaseOutcome, SnapEngine};
use crate::surface::{BoundsStyle, Surface, UnitsMode};

/// Ghost preview opacity while a snap target is live.
const GHOST_OPACITY: f32 = 0.2;

/// Centered-command size as a fraction of the viewport.
const CENTER_FRACTION: f64 = 0.75;

/// First-to-third press window for triple-press-to-center.
const TRIPLE_PRESS_WINDOW_MS: u64 = 400;

/// Inactivity gap after which the press ring resets.
const PRESS_RING_RESET_MS: u64 = 500;

/// Session options. All margins are clamped to a safe minimum at
/// construction (a zero margin produces an ungrabbable band).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Pixels past the viewport an edge must travel to trigger a half snap.
    pub snap_edge: f64,
    /// Pixels past the viewport to trigger a fullscreen snap.
    pub snap_full: f64,
    /// Resize band depth outside the panel boundary.
    pub resize_outer: f64,
    /// Resize band depth inside the panel boundary.
    pub resize_inner: f64,
    /// Minimum panel width after any resize.
    pub min_width: f64,
    /// Minimum panel height after any resize.
    pub min_height: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            snap_edge: 5.0,
            snap_full: 100.0,
            resize_outer: 5.0,
            resize_inner: 8.0,
            min_width: 60.0,
            min_height: 40.0,
        }
    }
}

impl Options {
    /// Interaction margins with the zero-clamp applied.
    #[must_use]
    pub fn margins(&self) -> Margins {
        Margins::new(
            self.resize_inner,
            self.resize_outer,
            self.snap_edge,
            self.snap_full,
        )
    }
}

/// Rolling three-slot timestamp ring for triple-press detection.
#[derive(Debug, Default)]
struct PressRing {
    stamps: [u64; 3],
    len: usize,
}

impl PressRing {
    /// Record an activation. Returns true when the third press lands
    /// within the window of the first.
    fn record(&mut self, time_ms: u64) -> bool {
        if self.len > 0 {
            let newest = self.stamps[self.len - 1];
            if time_ms.saturating_sub(newest) > PRESS_RING_RESET_MS {
                self.len = 0;
            }
        }
        if self.len == 3 {
            self.stamps.rotate_left(1);
            self.len = 2;
        }
        self.stamps[self.len] = time_ms;
        self.len += 1;

        if self.len == 3 && self.stamps[2].saturating_sub(self.stamps[0]) < TRIPLE_PRESS_WINDOW_MS {
            self.len = 0;
            true
        } else {
            false
        }
    }
}

/// Drag/resize/snap session for one panel.
///
/// Owns the panel's gesture state, snap memory, and units mode
/// exclusively; nothing is shared across instances.
#[derive(Debug)]
pub struct Session<S: Surface> {
    surface: S,
    handles: HandleSet,
    margins: Margins,
    min_size: Size,
    units: UnitsMode,

    /// Cached panel rect, refreshed from the surface on every event.
    rect: Rect,
    /// Latest pointer position.
    pointer: Point,
    /// Edge classification at the latest pointer position.
    report: EdgeReport,
    /// Viewport proximity at the latest panel position.
    proximity: Proximity,

    gesture: Option<GestureSnapshot>,
    snap: SnapEngine,
    /// Set by pointer moves, cleared by `step`.
    dirty: bool,

    presses: PressRing,
    /// Press time while no move has happened since pointer-down.
    press_without_motion: Option<u64>,
}

impl<S: Surface> Session<S> {
    /// Attach drag/resize/snap behavior to a panel.
    ///
    /// `specs` may be empty; the defaulting rules in
    /// [`HandleSet::new`] apply.
    pub fn new(mut surface: S, specs: Vec<HandleSpec>, options: Options) -> Self {
        let handles = HandleSet::new(specs, &mut surface);
        let rect = surface.panel_rect();
        Self {
            surface,
            handles,
            margins: options.margins(),
            min_size: Size::new(options.min_width, options.min_height),
            units: UnitsMode::Pixels,
            rect,
            pointer: Point::default(),
            report: EdgeReport::default(),
            proximity: Proximity::empty(),
            gesture: None,
            snap: SnapEngine::new(),
            dirty: false,
            presses: PressRing::default(),
            press_without_motion: None,
        }
    }

    /// Current panel rectangle as the session last applied or observed it.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Current units mode.
    #[must_use]
    pub const fn units(&self) -> UnitsMode {
        self.units
    }

    /// True while the panel is logically snapped.
    #[must_use]
    pub const fn is_snapped(&self) -> bool {
        self.snap.is_snapped()
    }

    /// Whether a step is pending.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Borrow the surface.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    // -----------------------------------------------------------------
    // Pointer events
    // -----------------------------------------------------------------

    /// Pointer pressed. Classifies and freezes the gesture mode.
    ///
    /// Ignored while a gesture is already active.
    pub fn on_pointer_down(&mut self, input: PointerInput) {
        if self.gesture.is_some() {
            return;
        }
        self.recompute(input.position());

        let offset = self.rect.offset_of(input.position());
        let movable = self.handles.movable(self.rect, offset, &self.surface);
        let mode = classify_press(self.report.edges, movable);
        tracing::trace!(?mode, "pointer down");

        if self.rect.contains(input.position()) {
            self.press_without_motion = Some(input.time_ms);
        }
        self.gesture = match mode {
            Mode::Idle => None,
            mode => Some(GestureSnapshot::new(input.position(), self.rect, mode)),
        };
    }

    /// Pointer moved. Refreshes geometry and marks the session dirty;
    /// all visible mutation is deferred to [`step`](Self::step).
    pub fn on_pointer_move(&mut self, input: PointerInput) {
        self.recompute(input.position());
        self.press_without_motion = None;
        self.dirty = true;
    }

    /// Pointer released. Resolves the gesture and the triple-press ring.
    pub fn on_pointer_up(&mut self, input: PointerInput) {
        self.recompute(input.position());

        if let Some(gesture) = self.gesture.take() {
            match gesture.mode {
                Mode::Moving => {
                    let outcome = self.snap.release_move(
                        gesture.rect,
                        self.surface.viewport(),
                        self.proximity,
                        self.margins.resize_inner,
                    );
                    match outcome {
                        ReleaseOutcome::SnapTo(rect) | ReleaseOutcome::Shrink(rect) => {
                            self.apply_rect(rect);
                        }
                        ReleaseOutcome::Keep => {}
                    }
                    self.hide_ghost();
                }
                Mode::Resizing(_) => {
                    // Re-serialize so percent-mode dimensions stay exact.
                    self.apply_rect(self.rect);
                    // The resized geometry is a commitment; snap memory
                    // does not survive it.
                    self.snap.release_resize();
                }
                Mode::Idle => {}
            }
        }

        if self.press_without_motion.take().is_some() && self.presses.record(input.time_ms) {
            tracing::debug!("triple press, centering");
            self.center();
        }
    }

    // -----------------------------------------------------------------
    // Frame update
    // -----------------------------------------------------------------

    /// Per-frame update. No-op unless a pointer move has happened since
    /// the last call.
    pub fn step(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;

        match self.gesture {
            Some(gesture) => match gesture.mode {
                Mode::Resizing(edges) => self.step_resize(&gesture, edges),
                Mode::Moving => self.step_move(&gesture),
                Mode::Idle => {}
            },
            None => {
                let offset = self.rect.offset_of(self.pointer);
                let movable = self.handles.movable(self.rect, offset, &self.surface);
                let hint = CursorHint::resolve(self.report.edges, movable);
                self.surface.set_cursor(hint);
            }
        }
    }

    /// Apply per-edge deltas against the frozen snapshot. Top/left
    /// resizes keep the far edge fixed; dimensions clamp to the minimums.
    fn step_resize(&mut self, gesture: &GestureSnapshot, edges: drs_core::edge::EdgeFlags) {
        use drs_core::edge::EdgeFlags;

        let mut rect = gesture.rect;
        let p = self.pointer;

        if edges.contains(EdgeFlags::RIGHT) {
            rect.width = (p.x - gesture.rect.left).max(self.min_size.width);
        }
        if edges.contains(EdgeFlags::BOTTOM) {
            rect.height = (p.y - gesture.rect.top).max(self.min_size.height);
        }
        if edges.contains(EdgeFlags::LEFT) {
            let right = gesture.rect.right();
            let width = (right - p.x).max(self.min_size.width);
            rect.left = right - width;
            rect.width = width;
        }
        if edges.contains(EdgeFlags::TOP) {
            let bottom = gesture.rect.bottom();
            let height = (bottom - p.y).max(self.min_size.height);
            rect.top = bottom - height;
            rect.height = height;
        }

        self.apply_rect(rect);
        self.hide_ghost();
    }

    /// Ghost preview plus position update for a move in flight.
    fn step_move(&mut self, gesture: &GestureSnapshot) {
        match SnapEngine::snap_target(self.surface.viewport(), self.proximity) {
            Some(target) => {
                let style = self.style(target);
                self.surface.set_ghost_bounds(style);
                self.surface.set_ghost_opacity(GHOST_OPACITY);
            }
            None => self.hide_ghost(),
        }

        // A snapped panel unsnaps visually at its pre-snap size.
        if let Some(rect) = self.snap.drag_position(self.pointer) {
            self.apply_rect(rect);
            return;
        }

        let grab = gesture.grab_offset();
        let rect = Rect::new(
            self.pointer.x - grab.x,
            self.pointer.y - grab.y,
            gesture.rect.width,
            gesture.rect.height,
        );
        self.apply_rect(rect);
    }

    // -----------------------------------------------------------------
    // Public commands
    // -----------------------------------------------------------------

    /// Toggle (or force) percent serialization and rewrite the bounds.
    pub fn toggle_percent_mode(&mut self, state: Option<bool>) {
        self.units = match state {
            Some(true) => UnitsMode::PercentOfViewport,
            Some(false) => UnitsMode::Pixels,
            None => self.units.toggled(),
        };
        tracing::debug!(units = ?self.units, "units mode changed");
        let rect = self.surface.panel_rect();
        self.apply_rect(rect);
    }

    /// Snap to the full viewport, capturing the pre-snap rect.
    pub fn snap_full_screen(&mut self) {
        self.rect = self.surface.panel_rect();
        let full = Rect::from_size(self.surface.viewport());
        self.snap.command_snap(self.rect, full);
        self.apply_rect(full);
    }

    /// Restore the pre-snap geometry. No-op without a pre-snap.
    pub fn restore_pre_snap(&mut self) {
        if let Some(original) = self.snap.restore() {
            self.apply_rect(original);
        }
    }

    /// Center the panel at 75% x 75% of the viewport, capturing the
    /// current rect for a later restore.
    pub fn center(&mut self) {
        let viewport = self.surface.viewport();
        let target = Rect::centered(
            Size::new(
                viewport.width * CENTER_FRACTION,
                viewport.height * CENTER_FRACTION,
            ),
            viewport,
        );
        self.rect = self.surface.panel_rect();
        self.snap.remember(self.rect, target);
        self.apply_rect(target);
    }

    // -----------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------

    /// Refresh the cached rect and classifications for a pointer position.
    fn recompute(&mut self, pointer: Point) {
        self.rect = self.surface.panel_rect();
        self.pointer = pointer;
        self.report = classify_edges(
            self.rect,
            pointer,
            self.margins.resize_inner,
            self.margins.resize_outer,
        );
        self.proximity = classify_proximity(
            self.rect,
            self.surface.viewport(),
            self.margins.snap_edge,
            self.margins.snap_full,
        );
    }

    fn style(&self, rect: Rect) -> BoundsStyle {
        BoundsStyle::serialize(
            rect,
            self.units,
            self.surface.viewport(),
            self.surface.document_width(),
        )
    }

    fn apply_rect(&mut self, rect: Rect) {
        let style = self.style(rect);
        self.surface.set_panel_bounds(style);
        self.rect = rect;
    }

    /// Park the ghost on the panel bounds at zero opacity.
    fn hide_ghost(&mut self) {
        let style = self.style(self.rect);
        self.surface.set_ghost_bounds(style);
        self.surface.set_ghost_opacity(0.0);
    }
}
