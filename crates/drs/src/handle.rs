#![forbid(unsafe_code)]

//! Drag-handle descriptors and hit testing.
//!
//! A handle is a region of the panel whose pointer-down starts a move
//! gesture. Handles arrive in three shapes — a named preset, explicit
//! panel-anchored bounds, or a live host element — normalized through one
//! [`resolve`] entry point into a band in panel-relative coordinates.
//!
//! # Invariants
//!
//! 1. Resolution is pure given the panel's current rectangle: calling
//!    twice with the same rect yields identical output.
//! 2. Element handles read the live element rect on every resolve; nothing
//!    is cached across gestures.
//! 3. Missing sides are unconstrained and extend to the opposite edge;
//!    contradictory sides produce an empty band rather than an error.

use drs_core::geometry::{Point, Rect};

use crate::surface::{ElementId, Surface};

/// Band depth in pixels for the edge presets.
const PRESET_EDGE_DEPTH: f64 = 30.0;

/// Explicit panel-anchored handle bounds.
///
/// `left`/`top` are offsets from the panel's left/top edge, `right`/
/// `bottom` from its right/bottom edge, all measured inward. `None` means
/// unconstrained. When both opposing sides are given the dimension on that
/// axis is derived and any supplied `width`/`height` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandleBounds {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Named handle presets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandlePreset {
    /// Full-width band at the panel's top edge.
    Top,
    /// Full-width band at the panel's bottom edge.
    Bottom,
    /// Full-height band at the panel's left edge.
    Left,
    /// Full-height band at the panel's right edge.
    Right,
    /// The entire panel.
    Full,
    /// A region that never matches.
    None,
    /// Uniform inward inset of the given pixels on all sides.
    Inset(f64),
}

impl HandlePreset {
    /// Static bounds table. [`HandlePreset::None`] has no bounds; callers
    /// treat it as an empty band.
    #[must_use]
    fn bounds(self) -> Option<HandleBounds> {
        let b = match self {
            Self::Top => HandleBounds {
                left: Some(0.0),
                right: Some(0.0),
                top: Some(0.0),
                height: Some(PRESET_EDGE_DEPTH),
                ..Default::default()
            },
            Self::Bottom => HandleBounds {
                left: Some(0.0),
                right: Some(0.0),
                bottom: Some(0.0),
                height: Some(PRESET_EDGE_DEPTH),
                ..Default::default()
            },
            Self::Left => HandleBounds {
                top: Some(0.0),
                bottom: Some(0.0),
                left: Some(0.0),
                width: Some(PRESET_EDGE_DEPTH),
                ..Default::default()
            },
            Self::Right => HandleBounds {
                top: Some(0.0),
                bottom: Some(0.0),
                right: Some(0.0),
                width: Some(PRESET_EDGE_DEPTH),
                ..Default::default()
            },
            Self::Full => HandleBounds {
                left: Some(0.0),
                right: Some(0.0),
                top: Some(0.0),
                bottom: Some(0.0),
                ..Default::default()
            },
            Self::Inset(n) => HandleBounds {
                left: Some(n),
                right: Some(n),
                top: Some(n),
                bottom: Some(n),
                ..Default::default()
            },
            Self::None => return None,
        };
        Some(b)
    }
}

/// The shape of a handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleKind {
    /// Explicit panel-anchored bounds.
    Bound(HandleBounds),
    /// A named preset.
    Preset(HandlePreset),
    /// A live host element; its bounds are read on every resolve.
    Element(ElementId),
}

/// A drag-handle descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSpec {
    pub kind: HandleKind,
    /// Negate the hit-test result: areas *not* covered are draggable.
    pub invert: bool,
    /// Skip the visual affordance for this handle.
    pub hide: bool,
}

impl HandleSpec {
    /// A preset handle.
    #[must_use]
    pub const fn preset(preset: HandlePreset) -> Self {
        Self {
            kind: HandleKind::Preset(preset),
            invert: false,
            hide: false,
        }
    }

    /// An explicit-bounds handle.
    #[must_use]
    pub const fn bound(bounds: HandleBounds) -> Self {
        Self {
            kind: HandleKind::Bound(bounds),
            invert: false,
            hide: false,
        }
    }

    /// A handle delegating its bounds to a host element.
    #[must_use]
    pub const fn element(id: ElementId) -> Self {
        Self {
            kind: HandleKind::Element(id),
            invert: false,
            hide: false,
        }
    }

    /// Invert the hit-test result.
    #[must_use]
    pub const fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }

    /// Suppress the visual affordance.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.hide = true;
        self
    }
}

/// A handle band in panel-relative coordinates, ready for hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBounds {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl ResolvedBounds {
    /// A band that never matches.
    pub const EMPTY: Self = Self {
        x0: 0.0,
        x1: -1.0,
        y0: 0.0,
        y1: -1.0,
    };

    /// True when the band cannot contain any point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x0 > self.x1 || self.y0 > self.y1
    }

    /// Hit-test a panel-relative pointer offset.
    ///
    /// Band boundaries are inclusive; `invert` negates the result.
    #[must_use]
    pub fn hit(&self, offset: Point, invert: bool) -> bool {
        let inside = !self.is_empty()
            && offset.x >= self.x0
            && offset.x <= self.x1
            && offset.y >= self.y0
            && offset.y <= self.y1;
        inside != invert
    }
}

/// Resolve one axis of a bounds descriptor to a `[lo, hi]` interval.
///
/// `near` is the offset from the low side, `far` the inward offset from
/// the high side, `dim` the explicit dimension, `extent` the panel's
/// extent on this axis.
fn resolve_axis(near: Option<f64>, far: Option<f64>, dim: Option<f64>, extent: f64) -> (f64, f64) {
    match (near, far) {
        // Both opposing sides: dimension is derived, explicit dim ignored.
        (Some(n), Some(f)) => (n, extent - f),
        (Some(n), None) => match dim {
            Some(d) => (n, n + d),
            None => (n, extent),
        },
        (None, Some(f)) => match dim {
            Some(d) => (extent - f - d, extent - f),
            None => (0.0, extent - f),
        },
        (None, None) => match dim {
            Some(d) => (0.0, d),
            None => (0.0, extent),
        },
    }
}

/// Resolve a handle descriptor against the panel's current rectangle.
///
/// Element handles query the surface for the element's live rect; a
/// vanished element resolves to an empty band.
#[must_use]
pub fn resolve<S: Surface + ?Sized>(spec: &HandleSpec, panel: Rect, surface: &S) -> ResolvedBounds {
    let bounds = match &spec.kind {
        HandleKind::Element(id) => {
            return match surface.element_rect(*id) {
                Some(r) => ResolvedBounds {
                    x0: r.left - panel.left,
                    x1: r.right() - panel.left,
                    y0: r.top - panel.top,
                    y1: r.bottom() - panel.top,
                },
                None => ResolvedBounds::EMPTY,
            };
        }
        HandleKind::Bound(b) => *b,
        HandleKind::Preset(p) => match p.bounds() {
            Some(b) => b,
            None => return ResolvedBounds::EMPTY,
        },
    };

    let (x0, x1) = resolve_axis(bounds.left, bounds.right, bounds.width, panel.width);
    let (y0, y1) = resolve_axis(bounds.top, bounds.bottom, bounds.height, panel.height);
    ResolvedBounds { x0, x1, y0, y1 }
}

/// The full handle set attached to a panel.
#[derive(Debug)]
pub struct HandleSet {
    specs: Vec<HandleSpec>,
}

impl HandleSet {
    /// Build the handle set, applying the defaulting rules.
    ///
    /// With no specs supplied, the surface's marked regions are adopted;
    /// with none of those either, a synthetic full-panel handle is used.
    /// Non-hidden bounds and preset handles get a visual affordance region
    /// created on the surface.
    pub fn new<S: Surface>(mut specs: Vec<HandleSpec>, surface: &mut S) -> Self {
        if specs.is_empty() {
            let marked = surface.marked_regions();
            if marked.is_empty() {
                specs.push(HandleSpec::preset(HandlePreset::Full));
            } else {
                specs.extend(marked.into_iter().map(HandleSpec::element));
            }
        }

        for spec in &specs {
            if spec.hide {
                continue;
            }
            let affordance = match &spec.kind {
                HandleKind::Bound(b) => Some(*b),
                HandleKind::Preset(p) => p.bounds(),
                HandleKind::Element(_) => None,
            };
            if let Some(b) = affordance {
                let _ = surface.create_handle_region(&b);
            }
        }

        Self { specs }
    }

    /// Number of handles in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// True when the set has no handles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// The overall "movable" predicate: OR across every handle's hit test.
    #[must_use]
    pub fn movable<S: Surface + ?Sized>(&self, panel: Rect, offset: Point, surface: &S) -> bool {
        self.specs
            .iter()
            .any(|spec| resolve(spec, panel, surface).hit(offset, spec.invert))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drs_core::event::CursorHint;
    use drs_core::geometry::Size;
    use proptest::prelude::*;

    use crate::surface::BoundsStyle;

    struct StubSurface {
        elements: Vec<(ElementId, Rect)>,
        marked: Vec<ElementId>,
        created: Vec<HandleBounds>,
    }

    impl StubSurface {
        fn new() -> Self {
            Self {
                elements: Vec::new(),
                marked: Vec::new(),
                created: Vec::new(),
            }
        }
    }

    impl Surface for StubSurface {
        fn panel_rect(&self) -> Rect {
            Rect::new(100.0, 100.0, 200.0, 100.0)
        }
        fn viewport(&self) -> Size {
            Size::new(1000.0, 600.0)
        }
        fn element_rect(&self, id: ElementId) -> Option<Rect> {
            self.elements
                .iter()
                .find(|(e, _)| *e == id)
                .map(|(_, r)| *r)
        }
        fn marked_regions(&self) -> Vec<ElementId> {
            self.marked.clone()
        }
        fn set_panel_bounds(&mut self, _bounds: BoundsStyle) {}
        fn set_ghost_bounds(&mut self, _bounds: BoundsStyle) {}
        fn set_ghost_opacity(&mut self, _opacity: f32) {}
        fn set_cursor(&mut self, _hint: CursorHint) {}
        fn create_handle_region(&mut self, bounds: &HandleBounds) -> ElementId {
            self.created.push(*bounds);
            ElementId(self.created.len() as u64)
        }
    }

    const PANEL: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);

    // === preset table ===

    #[test]
    fn top_preset_is_full_width_band() {
        let s = StubSurface::new();
        let r = resolve(&HandleSpec::preset(HandlePreset::Top), PANEL, &s);
        assert_eq!((r.x0, r.x1), (0.0, 200.0));
        assert_eq!((r.y0, r.y1), (0.0, 30.0));
    }

    #[test]
    fn bottom_preset_anchors_to_bottom_edge() {
        let s = StubSurface::new();
        let r = resolve(&HandleSpec::preset(HandlePreset::Bottom), PANEL, &s);
        assert_eq!((r.y0, r.y1), (70.0, 100.0));
    }

    #[test]
    fn left_and_right_presets_are_full_height() {
        let s = StubSurface::new();
        let l = resolve(&HandleSpec::preset(HandlePreset::Left), PANEL, &s);
        assert_eq!((l.x0, l.x1), (0.0, 30.0));
        assert_eq!((l.y0, l.y1), (0.0, 100.0));
        let r = resolve(&HandleSpec::preset(HandlePreset::Right), PANEL, &s);
        assert_eq!((r.x0, r.x1), (170.0, 200.0));
    }

    #[test]
    fn full_preset_covers_the_panel() {
        let s = StubSurface::new();
        let r = resolve(&HandleSpec::preset(HandlePreset::Full), PANEL, &s);
        assert_eq!((r.x0, r.x1, r.y0, r.y1), (0.0, 200.0, 0.0, 100.0));
    }

    #[test]
    fn none_preset_never_matches() {
        let s = StubSurface::new();
        let r = resolve(&HandleSpec::preset(HandlePreset::None), PANEL, &s);
        assert!(r.is_empty());
        assert!(!r.hit(Point::new(50.0, 50.0), false));
    }

    #[test]
    fn inset_preset_shrinks_uniformly() {
        let s = StubSurface::new();
        let r = resolve(&HandleSpec::preset(HandlePreset::Inset(20.0)), PANEL, &s);
        assert_eq!((r.x0, r.x1, r.y0, r.y1), (20.0, 180.0, 20.0, 80.0));
    }

    // === bound normalization ===

    #[test]
    fn opposing_sides_derive_the_dimension() {
        let s = StubSurface::new();
        let b = HandleBounds {
            left: Some(10.0),
            right: Some(30.0),
            // Contradicts the sides; must be ignored.
            width: Some(999.0),
            ..Default::default()
        };
        let r = resolve(&HandleSpec::bound(b), PANEL, &s);
        assert_eq!((r.x0, r.x1), (10.0, 170.0));
    }

    #[test]
    fn side_plus_dimension_anchors_the_band() {
        let s = StubSurface::new();
        let b = HandleBounds {
            right: Some(10.0),
            width: Some(40.0),
            ..Default::default()
        };
        let r = resolve(&HandleSpec::bound(b), PANEL, &s);
        assert_eq!((r.x0, r.x1), (150.0, 190.0));
    }

    #[test]
    fn missing_sides_are_unconstrained() {
        let s = StubSurface::new();
        let b = HandleBounds {
            left: Some(50.0),
            ..Default::default()
        };
        let r = resolve(&HandleSpec::bound(b), PANEL, &s);
        assert_eq!((r.x0, r.x1), (50.0, 200.0));
        assert_eq!((r.y0, r.y1), (0.0, 100.0));
    }

    #[test]
    fn dimension_alone_anchors_to_the_near_side() {
        let s = StubSurface::new();
        let b = HandleBounds {
            height: Some(25.0),
            ..Default::default()
        };
        let r = resolve(&HandleSpec::bound(b), PANEL, &s);
        assert_eq!((r.y0, r.y1), (0.0, 25.0));
    }

    #[test]
    fn contradictory_sides_yield_an_empty_band() {
        let s = StubSurface::new();
        let b = HandleBounds {
            left: Some(150.0),
            right: Some(150.0),
            ..Default::default()
        };
        let r = resolve(&HandleSpec::bound(b), PANEL, &s);
        assert!(r.is_empty());
    }

    #[test]
    fn resolution_is_idempotent() {
        let s = StubSurface::new();
        let spec = HandleSpec::bound(HandleBounds {
            left: Some(5.0),
            top: Some(5.0),
            width: Some(60.0),
            height: Some(20.0),
            ..Default::default()
        });
        let a = resolve(&spec, PANEL, &s);
        let b = resolve(&spec, PANEL, &s);
        assert_eq!(a, b);
    }

    // === hit testing ===

    #[test]
    fn hit_is_inclusive_at_band_boundaries() {
        let r = ResolvedBounds {
            x0: 10.0,
            x1: 50.0,
            y0: 0.0,
            y1: 30.0,
        };
        assert!(r.hit(Point::new(10.0, 0.0), false));
        assert!(r.hit(Point::new(50.0, 30.0), false));
        assert!(!r.hit(Point::new(50.1, 30.0), false));
    }

    #[test]
    fn invert_negates_the_result() {
        let r = ResolvedBounds {
            x0: 10.0,
            x1: 50.0,
            y0: 0.0,
            y1: 30.0,
        };
        assert!(!r.hit(Point::new(20.0, 10.0), true));
        assert!(r.hit(Point::new(100.0, 10.0), true));
    }

    #[test]
    fn inverted_none_preset_matches_everywhere() {
        let s = StubSurface::new();
        let spec = HandleSpec::preset(HandlePreset::None).inverted();
        let r = resolve(&spec, PANEL, &s);
        assert!(r.hit(Point::new(0.0, 0.0), spec.invert));
        assert!(r.hit(Point::new(199.0, 99.0), spec.invert));
    }

    proptest! {
        #[test]
        fn opposing_sides_always_ignore_the_dimension(
            near in 0.0f64..100.0,
            far in 0.0f64..100.0,
            dim in proptest::option::of(0.0f64..500.0),
            extent in 0.0f64..400.0,
        ) {
            let (lo, hi) = resolve_axis(Some(near), Some(far), dim, extent);
            prop_assert_eq!(lo, near);
            prop_assert_eq!(hi, extent - far);
        }

        #[test]
        fn unconstrained_axis_spans_the_panel(
            dim in proptest::option::of(0.0f64..500.0),
            extent in 0.0f64..400.0,
        ) {
            let (lo, hi) = resolve_axis(None, None, None, extent);
            prop_assert_eq!((lo, hi), (0.0, extent));
            // A lone dimension anchors at the near side.
            if let Some(d) = dim {
                let (lo, hi) = resolve_axis(None, None, Some(d), extent);
                prop_assert_eq!((lo, hi), (0.0, d));
            }
        }
    }

    // === element handles ===

    #[test]
    fn element_handle_reads_live_rect() {
        let mut s = StubSurface::new();
        s.elements
            .push((ElementId(7), Rect::new(120.0, 110.0, 40.0, 20.0)));
        // Panel sits at (100, 100) in the stub.
        let spec = HandleSpec::element(ElementId(7));
        let r = resolve(&spec, s.panel_rect(), &s);
        assert_eq!((r.x0, r.x1, r.y0, r.y1), (20.0, 60.0, 10.0, 30.0));

        // Element moves; the next resolve sees the new position.
        s.elements[0].1.left = 140.0;
        let r = resolve(&spec, s.panel_rect(), &s);
        assert_eq!((r.x0, r.x1), (40.0, 80.0));
    }

    #[test]
    fn vanished_element_resolves_empty() {
        let s = StubSurface::new();
        let r = resolve(&HandleSpec::element(ElementId(42)), PANEL, &s);
        assert!(r.is_empty());
    }

    // === handle set defaulting ===

    #[test]
    fn empty_set_falls_back_to_full_handle() {
        let mut s = StubSurface::new();
        let set = HandleSet::new(Vec::new(), &mut s);
        assert_eq!(set.len(), 1);
        assert!(set.movable(PANEL, Point::new(100.0, 50.0), &s));
    }

    #[test]
    fn marked_regions_are_adopted_when_no_specs() {
        let mut s = StubSurface::new();
        s.marked.push(ElementId(3));
        s.elements
            .push((ElementId(3), Rect::new(100.0, 100.0, 50.0, 20.0)));
        let set = HandleSet::new(Vec::new(), &mut s);
        assert_eq!(set.len(), 1);
        let panel = s.panel_rect();
        assert!(set.movable(panel, Point::new(10.0, 10.0), &s));
        assert!(!set.movable(panel, Point::new(100.0, 80.0), &s));
    }

    #[test]
    fn affordances_created_for_visible_bound_handles() {
        let mut s = StubSurface::new();
        let specs = vec![
            HandleSpec::preset(HandlePreset::Top),
            HandleSpec::preset(HandlePreset::Bottom).hidden(),
            HandleSpec::element(ElementId(1)),
        ];
        let _set = HandleSet::new(specs, &mut s);
        // Only the visible preset gets an affordance.
        assert_eq!(s.created.len(), 1);
    }

    #[test]
    fn movable_is_an_or_across_handles() {
        let mut s = StubSurface::new();
        let specs = vec![
            HandleSpec::preset(HandlePreset::Top),
            HandleSpec::preset(HandlePreset::Bottom),
        ];
        let set = HandleSet::new(specs, &mut s);
        assert!(set.movable(PANEL, Point::new(100.0, 10.0), &s));
        assert!(set.movable(PANEL, Point::new(100.0, 90.0), &s));
        assert!(!set.movable(PANEL, Point::new(100.0, 50.0), &s));
    }
}
