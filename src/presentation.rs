//! Pure projection from interaction state to what the screen draws.

use crate::overlay::OverlayVisibility;
use crate::zoom_pan::{Command, Gesture, Offset, ZoomPanState};

/// Width of the drawer panel in layout units.
pub const DRAWER_WIDTH: f32 = 260.0;

/// Horizontal offset of the drawer from its top-right anchor when open.
pub const DRAWER_OPEN_OFFSET: f32 = 20.0;

/// Horizontal offset when closed; only the handle stays on screen.
pub const DRAWER_CLOSED_OFFSET: f32 = 215.0;

/// Transform applied to the displayed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageTransform {
    pub scale: f32,
    /// On-screen translation from the centered, fitted position.
    pub translation: Offset,
}

impl ImageTransform {
    /// The offset is applied before scaling about the image center, so the
    /// visible translation grows with the scale.
    pub fn from_state(state: &ZoomPanState) -> Self {
        Self {
            scale: state.scale(),
            translation: state.offset() * state.scale(),
        }
    }
}

/// Text shown in the info panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoReadout {
    pub scale: String,
    pub width: String,
    pub height: String,
}

impl InfoReadout {
    pub fn from_state(state: &ZoomPanState) -> Self {
        let offset = state.offset();
        Self {
            scale: format_value(state.scale()),
            width: format_value(offset.width),
            height: format_value(offset.height),
        }
    }
}

/// Formats a value the way a float is described: always with a fractional
/// part, otherwise at full precision ("1.0", "2.35", "-10.0").
pub fn format_value(value: f32) -> String {
    format!("{value:?}")
}

/// Which way the drawer handle chevron points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerHandle {
    PointLeft,
    PointRight,
}

impl DrawerHandle {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::PointLeft => "◀",
            Self::PointRight => "▶",
        }
    }
}

/// Position of the drawer relative to its top-right anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerPlacement {
    pub x_offset: f32,
    pub width: f32,
    pub handle: DrawerHandle,
}

impl DrawerPlacement {
    pub fn from_overlays(overlays: &OverlayVisibility) -> Self {
        if overlays.drawer_open {
            Self {
                x_offset: DRAWER_OPEN_OFFSET,
                width: DRAWER_WIDTH,
                handle: DrawerHandle::PointRight,
            }
        } else {
            Self {
                x_offset: DRAWER_CLOSED_OFFSET,
                width: DRAWER_WIDTH,
                handle: DrawerHandle::PointLeft,
            }
        }
    }

    /// Left edge of the drawer given the right edge of its container.
    pub fn left(&self, container_right: f32) -> f32 {
        container_right - self.width + self.x_offset
    }
}

/// Animation used to present a state change. Never affects the state itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Spring,
    Linear { seconds: f32 },
    EaseOut,
}

impl Transition {
    pub fn for_gesture(gesture: &Gesture) -> Self {
        match gesture {
            Gesture::DragChanged(_) | Gesture::PinchChanged(_) => Self::Linear { seconds: 1.0 },
            Gesture::DoubleTap | Gesture::DragEnded | Gesture::PinchEnded => Self::Spring,
        }
    }

    pub fn for_command(_command: &Command) -> Self {
        Self::Spring
    }

    /// Used for the info panel and drawer toggles.
    pub fn for_overlay() -> Self {
        Self::EaseOut
    }

    pub fn seconds(self) -> f32 {
        match self {
            Self::Spring => 0.55,
            Self::Linear { seconds } => seconds,
            Self::EaseOut => 0.35,
        }
    }
}
