#![forbid(unsafe_code)]

//! Hit-band and snap-threshold configuration.
//!
//! A margin of zero produces a zero-width hit band: an edge that can never
//! be grabbed and a snap that can never trigger. Construction therefore
//! clamps every margin to at least [`Margins::MIN`] instead of surfacing a
//! runtime fault.

/// Pixel distances from the panel boundary that define interaction bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Band depth inside the panel edge that still counts as "on" the edge.
    pub resize_inner: f64,
    /// Band depth outside the panel edge that still counts as "on" the edge.
    pub resize_outer: f64,
    /// How far past the viewport an edge must travel to trigger a half snap.
    pub snap_edge: f64,
    /// How far past the viewport an edge must travel to trigger fullscreen.
    pub snap_full: f64,
}

impl Margins {
    /// Smallest usable margin. Zero is unsnappable.
    pub const MIN: f64 = 1.0;

    /// Create margins, clamping each value to [`Margins::MIN`].
    #[must_use]
    pub fn new(resize_inner: f64, resize_outer: f64, snap_edge: f64, snap_full: f64) -> Self {
        Self {
            resize_inner: Self::clamp(resize_inner),
            resize_outer: Self::clamp(resize_outer),
            snap_edge: Self::clamp(snap_edge),
            snap_full: Self::clamp(snap_full),
        }
    }

    fn clamp(value: f64) -> f64 {
        if value < Self::MIN {
            crate::warn!(value, "margin below minimum, clamping");
            Self::MIN
        } else {
            value
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            resize_inner: 8.0,
            resize_outer: 5.0,
            snap_edge: 5.0,
            snap_full: 100.0,
        }
    }
}
