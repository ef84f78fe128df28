#![forbid(unsafe_code)]

//! Drag, resize, and edge-snap behavior for rectangular panels.
//!
//! The engine is pure geometry and state over a [`Surface`] collaborator
//! supplied by the host: the host feeds pointer events in, drives
//! [`Session::step`] from its render loop, and applies the bounds the
//! engine writes back.
//!
//! ```
//! use drs::{Options, Session, Surface, create};
//! # use drs::{BoundsStyle, ElementId, HandleBounds};
//! # use drs_core::event::CursorHint;
//! # use drs_core::geometry::{Rect, Size};
//! # struct Host;
//! # impl Surface for Host {
//! #     fn panel_rect(&self) -> Rect { Rect::new(10.0, 10.0, 200.0, 100.0) }
//! #     fn viewport(&self) -> Size { Size::new(800.0, 600.0) }
//! #     fn element_rect(&self, _: ElementId) -> Option<Rect> { None }
//! #     fn set_panel_bounds(&mut self, _: BoundsStyle) {}
//! #     fn set_ghost_bounds(&mut self, _: BoundsStyle) {}
//! #     fn set_ghost_opacity(&mut self, _: f32) {}
//! #     fn set_cursor(&mut self, _: CursorHint) {}
//! #     fn create_handle_region(&mut self, _: &HandleBounds) -> ElementId { ElementId(0) }
//! # }
//! let mut session = create(Host, Vec::new(), Options::default());
//! // host event loop: session.on_pointer_down(..) / step() / ..
//! session.snap_full_screen();
//! session.restore_pre_snap();
//! ```

pub mod gesture;
pub mod handle;
pub mod session;
pub mod snap;
pub mod surface;

pub use gesture::{GestureSnapshot, Mode};
pub use handle::{HandleBounds, HandleKind, HandlePreset, HandleSpec};
pub use session::{Options, Session};
pub use snap::{PreSnap, ReleaseOutcome, SnapEngine};
pub use surface::{BoundsStyle, ElementId, Extent, Surface, UnitsMode};

/// Attach drag/resize/snap behavior to a panel.
///
/// Convenience wrapper over [`Session::new`]. `handles` may be empty;
/// the surface's marked regions are adopted, falling back to a synthetic
/// full-panel handle.
pub fn create<S: Surface>(surface: S, handles: Vec<HandleSpec>, options: Options) -> Session<S> {
    Session::new(surface, handles, options)
}
