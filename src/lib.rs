//! Interaction core for the Pinch Viewer: the page catalog record, the
//! zoom/pan state machine, overlay toggles and the pure projection from
//! state to what the screen draws.

pub mod overlay;
pub mod page;
pub mod presentation;
pub mod zoom_pan;

pub use overlay::OverlayVisibility;
pub use page::{Page, Pages};
pub use presentation::{DrawerHandle, DrawerPlacement, ImageTransform, InfoReadout, Transition};
pub use zoom_pan::{Command, Gesture, Offset, SCALE_MAX, SCALE_MIN, ZOOM_STEP, ZoomPanState};
