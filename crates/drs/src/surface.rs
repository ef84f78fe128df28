#![forbid(unsafe_code)]

//! The surface collaborator: everything the engine needs from its UI host.
//!
//! The engine is pure geometry and state; element creation, event wiring,
//! and style formatting live behind [`Surface`]. The host reads pointer
//! events from its platform, feeds them to the session, and drives
//! [`step`](crate::session::Session::step) from its render loop. The
//! engine never owns scheduling.

use drs_core::event::CursorHint;
use drs_core::geometry::{Rect, Size};

use crate::handle::HandleBounds;

/// Identifier for a host UI element used as a drag handle or affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// How the panel's bounds are serialized to the surface.
///
/// Affects only the written representation; all internal math stays in
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitsMode {
    /// Width and height written in pixels.
    #[default]
    Pixels,
    /// Width and height written as percentages of the viewport.
    PercentOfViewport,
}

impl UnitsMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Pixels => Self::PercentOfViewport,
            Self::PercentOfViewport => Self::Pixels,
        }
    }
}

/// A length as written to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// Pixels.
    Px(f64),
    /// Percent of the relevant viewport dimension.
    Percent(f64),
}

/// A rectangle serialized for the surface.
///
/// Position is always in pixels; the dimensions follow the units mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsStyle {
    pub left: f64,
    pub top: f64,
    pub width: Extent,
    pub height: Extent,
}

impl BoundsStyle {
    /// Serialize a pixel rectangle under the given units mode.
    ///
    /// Percent width converts against `document_width` rather than the
    /// viewport width so scrollbars are accounted for; height converts
    /// against the viewport height.
    #[must_use]
    pub fn serialize(rect: Rect, mode: UnitsMode, viewport: Size, document_width: f64) -> Self {
        let (width, height) = match mode {
            UnitsMode::Pixels => (Extent::Px(rect.width), Extent::Px(rect.height)),
            UnitsMode::PercentOfViewport => (
                Extent::Percent(rect.width / document_width * 100.0),
                Extent::Percent(rect.height / viewport.height * 100.0),
            ),
        };
        Self {
            left: rect.left,
            top: rect.top,
            width,
            height,
        }
    }
}

/// Host contract for a drag/resize/snap panel.
///
/// Reads are cheap queries against live layout; writes apply target
/// geometry. No method is expected to fail; a host that cannot satisfy a
/// read returns its best effort (e.g. `None` for a vanished element).
pub trait Surface {
    /// Current bounding rectangle of the panel, in viewport pixels.
    fn panel_rect(&self) -> Rect;

    /// Current viewport dimensions.
    fn viewport(&self) -> Size;

    /// Scrollbar-adjusted document width, used for percent width
    /// serialization. Defaults to the viewport width.
    fn document_width(&self) -> f64 {
        self.viewport().width
    }

    /// Current bounding rectangle of a host element, if it still exists.
    fn element_rect(&self, id: ElementId) -> Option<Rect>;

    /// Elements inside the panel marked as drag regions by the host.
    ///
    /// Consulted once at construction when no handles are supplied.
    fn marked_regions(&self) -> Vec<ElementId> {
        Vec::new()
    }

    /// Write the panel's bounds.
    fn set_panel_bounds(&mut self, bounds: BoundsStyle);

    /// Write the ghost preview's bounds.
    fn set_ghost_bounds(&mut self, bounds: BoundsStyle);

    /// Set the ghost preview's opacity (0 hides it).
    fn set_ghost_opacity(&mut self, opacity: f32);

    /// Update the cursor affordance.
    fn set_cursor(&mut self, hint: CursorHint);

    /// Create a visual affordance region for a bounds-type handle.
    ///
    /// The sides are panel-anchored offsets, `None` meaning unconstrained.
    /// Returns an id for later queries; hosts without visual affordances
    /// may return a dummy id.
    fn create_handle_region(&mut self, bounds: &HandleBounds) -> ElementId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_mode_toggles() {
        assert_eq!(UnitsMode::Pixels.toggled(), UnitsMode::PercentOfViewport);
        assert_eq!(UnitsMode::PercentOfViewport.toggled(), UnitsMode::Pixels);
    }

    #[test]
    fn pixel_serialization_passes_through() {
        let s = BoundsStyle::serialize(
            Rect::new(10.0, 20.0, 300.0, 150.0),
            UnitsMode::Pixels,
            Size::new(1000.0, 600.0),
            990.0,
        );
        assert_eq!(s.left, 10.0);
        assert_eq!(s.top, 20.0);
        assert_eq!(s.width, Extent::Px(300.0));
        assert_eq!(s.height, Extent::Px(150.0));
    }

    #[test]
    fn percent_width_uses_document_width() {
        let s = BoundsStyle::serialize(
            Rect::new(0.0, 0.0, 495.0, 300.0),
            UnitsMode::PercentOfViewport,
            Size::new(1000.0, 600.0),
            990.0,
        );
        // Width against the scrollbar-adjusted 990, height against 600.
        assert_eq!(s.width, Extent::Percent(50.0));
        assert_eq!(s.height, Extent::Percent(50.0));
    }

    #[test]
    fn position_stays_in_pixels_under_percent_mode() {
        let s = BoundsStyle::serialize(
            Rect::new(25.0, 35.0, 100.0, 100.0),
            UnitsMode::PercentOfViewport,
            Size::new(1000.0, 600.0),
            1000.0,
        );
        assert_eq!(s.left, 25.0);
        assert_eq!(s.top, 35.0);
    }
}
