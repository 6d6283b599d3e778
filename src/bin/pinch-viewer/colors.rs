//! Color constants for the image, panels and drawer.

use eframe::egui::Color32;

// Image
pub const IMAGE_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 51);

// Translucent panels (info readout, controls, drawer)
pub const PANEL_FILL_DARK: Color32 = Color32::from_rgba_premultiplied(40, 40, 44, 200);
pub const PANEL_FILL_LIGHT: Color32 = Color32::from_rgba_premultiplied(230, 230, 235, 210);

// Hotspot and drawer handle
pub const HOTSPOT_OUTER: Color32 = Color32::from_rgb(150, 150, 160);
pub const HOTSPOT_INNER: Color32 = Color32::from_rgb(210, 210, 220);
pub const HANDLE: Color32 = Color32::from_rgb(140, 140, 150);
