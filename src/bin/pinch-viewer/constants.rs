/// Window and title bar text.
pub const TITLE: &str = "Pinch & Zoom";

/// Default window size (portrait, phone-like).
pub const DEFAULT_WINDOW_WIDTH: f32 = 430.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

/// Padding around the fitted image.
pub const IMAGE_PADDING: f32 = 16.0;

/// Corner radius of the displayed image.
pub const IMAGE_CORNER_RADIUS: u8 = 10;

/// Fade-in duration of the screen contents when first shown.
pub const APPEAR_SECONDS: f32 = 1.0;

/// How long the info hotspot must be held before it toggles the panel.
pub const LONG_PRESS_SECONDS: f64 = 1.0;

/// A trackpad or ctrl+scroll pinch ends after this long without zoom input.
pub const PINCH_IDLE_SECONDS: f64 = 0.15;

/// Side length of the info hotspot.
pub const HOTSPOT_SIZE: f32 = 40.0;

/// Distance of the info panel row from the top of the viewport.
pub const INFO_PANEL_TOP: f32 = 30.0;

/// Maximum width of the scale/offset readout.
pub const INFO_PANEL_MAX_WIDTH: f32 = 420.0;

/// Distance of the zoom controls from the bottom of the viewport.
pub const CONTROLS_BOTTOM: f32 = 30.0;

/// Size of the zoom control glyphs.
pub const CONTROL_ICON_SIZE: f32 = 28.0;

/// Height of the drawer handle chevron.
pub const DRAWER_HANDLE_HEIGHT: f32 = 40.0;

/// The drawer hangs this fraction of the viewport height below the top.
pub const DRAWER_TOP_FRACTION: f32 = 1.0 / 12.0;
