//! Visibility flags for the info panel and the side drawer.

/// Controls visibility of the info panel and the thumbnail drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayVisibility {
    /// Whether the scale/offset readout is shown
    pub info_visible: bool,
    /// Whether the drawer is slid in
    pub drawer_open: bool,
}

impl OverlayVisibility {
    /// Long press on the info hotspot.
    pub fn on_long_press(&mut self) {
        self.info_visible = !self.info_visible;
        log::debug!("info panel visible: {}", self.info_visible);
    }

    /// Tap on the drawer handle.
    pub fn on_drawer_handle_tap(&mut self) {
        self.drawer_open = !self.drawer_open;
        log::debug!("drawer open: {}", self.drawer_open);
    }
}
