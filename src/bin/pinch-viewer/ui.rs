//! UI rendering methods for the Pinch Viewer application.

use crate::PinchViewerApp;
use crate::assets::{AssetLoadState, image_asset_path};
use crate::colors;
use crate::constants::{
    APPEAR_SECONDS, CONTROL_ICON_SIZE, CONTROLS_BOTTOM, DRAWER_HANDLE_HEIGHT, DRAWER_TOP_FRACTION,
    HOTSPOT_SIZE, IMAGE_CORNER_RADIUS, IMAGE_PADDING, INFO_PANEL_MAX_WIDTH, INFO_PANEL_TOP, TITLE,
};
use crate::gestures::PointerFrame;
use eframe::egui;
use pinch_viewer::{Command, DrawerPlacement, Gesture, ImageTransform, InfoReadout, Transition};

impl PinchViewerApp {
    fn apply_gesture(&mut self, gesture: Gesture) {
        self.transition = Transition::for_gesture(&gesture);
        self.zoom_pan.handle_gesture(gesture);
    }

    fn apply_command(&mut self, command: Command) {
        self.transition = Transition::for_command(&command);
        self.zoom_pan.handle_command(command);
    }

    /// Handles keyboard shortcuts for the zoom buttons and panel toggles.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        let (zoom_in, zoom_out, reset, info, drawer) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::Num0),
                i.key_pressed(egui::Key::I),
                i.key_pressed(egui::Key::D),
            )
        });

        if zoom_in {
            self.apply_command(Command::ZoomInStep);
        }
        if zoom_out {
            self.apply_command(Command::ZoomOutStep);
        }
        if reset {
            self.apply_command(Command::Reset);
        }
        if info {
            self.overlays.on_long_press();
        }
        if drawer {
            self.overlays.on_drawer_handle_tap();
        }
    }

    /// Renders the inline title bar.
    pub fn show_title_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(4.0);
                ui.strong(TITLE);
                ui.add_space(4.0);
            });
        });
    }

    /// Renders the bottom status bar with the controls hint.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    "Double-click: Zoom | Drag: Pan | Pinch: Magnify | +/-/0: Zoom | I: Info | D: Drawer",
                );
            });
        });
    }

    /// Renders the central panel containing the page image and its overlays.
    pub fn show_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(ctx.style().visuals.panel_fill))
            .show(ctx, |ui| {
                let Some(page) = self.page.clone() else {
                    ui.centered_and_justified(|ui| {
                        ui.label("No pages found in the bundled assets.");
                    });
                    return;
                };

                let panel_rect = ui.max_rect();
                let appear = ctx.animate_bool_with_time(
                    egui::Id::new("appear"),
                    self.is_appearing,
                    APPEAR_SECONDS,
                );

                self.show_page_image(ui, ctx, &image_asset_path(&page.image_name), appear);
                self.show_info_panel(ctx, panel_rect);
                self.show_zoom_controls(ctx, panel_rect, appear);
                self.show_drawer(ctx, panel_rect, appear);
            });
    }

    /// Renders the page image, scaled and translated by the zoom/pan state.
    fn show_page_image(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        path: &str,
        opacity: f32,
    ) {
        // Check loading state - errors are shown via toasts
        let aspect_ratio = match self.asset_cache.get(path) {
            Some(AssetLoadState::Loading(_)) | None => {
                ui.centered_and_justified(|ui| ui.spinner());
                return;
            }
            Some(AssetLoadState::Error(msg)) => {
                ui.centered_and_justified(|ui| {
                    ui.label(format!("Failed to load page: {msg}"));
                });
                return;
            }
            Some(AssetLoadState::Ready(decoded)) => decoded.aspect_ratio(),
        };

        let Some(texture) = self.texture_cache.get(path).cloned() else {
            ui.label("Failed to create texture");
            return;
        };

        let viewport_rect = ui.max_rect();
        let fit_rect = viewport_rect.shrink(IMAGE_PADDING);
        if !fit_rect.is_positive() {
            return;
        }
        let fit_size = if fit_rect.width() / fit_rect.height() > aspect_ratio {
            egui::vec2(fit_rect.height() * aspect_ratio, fit_rect.height())
        } else {
            egui::vec2(fit_rect.width(), fit_rect.width() / aspect_ratio)
        };

        // Gestures target the image where it currently sits on screen
        let target = ImageTransform::from_state(&self.zoom_pan);
        let hit_rect = egui::Rect::from_center_size(
            viewport_rect.center()
                + egui::vec2(target.translation.width, target.translation.height),
            fit_size * target.scale,
        )
        .intersect(viewport_rect);
        let response = ui.interact(
            hit_rect,
            egui::Id::new("page_image"),
            egui::Sense::click_and_drag(),
        );

        let frame = PointerFrame::capture(ui, &response, self.gestures.pinch_active());
        for gesture in self.gestures.recognize(&frame) {
            self.apply_gesture(gesture);
        }
        if self.gestures.pinch_active() {
            ctx.request_repaint();
        }

        let shown = self.animated_transform(ctx);
        let image_rect = egui::Rect::from_center_size(
            viewport_rect.center() + egui::vec2(shown.translation.width, shown.translation.height),
            fit_size * shown.scale,
        );

        ui.set_clip_rect(viewport_rect);

        let shadow = egui::epaint::Shadow {
            offset: [2, 2],
            blur: 12,
            spread: 0,
            color: colors::IMAGE_SHADOW.gamma_multiply(opacity),
        };
        ui.painter().add(shadow.as_shape(image_rect, IMAGE_CORNER_RADIUS));

        egui::Image::from_texture(egui::load::SizedTexture::from_handle(&texture))
            .corner_radius(IMAGE_CORNER_RADIUS)
            .tint(egui::Color32::WHITE.gamma_multiply(opacity))
            .paint_at(ui, image_rect);
    }

    /// Eases the displayed transform towards the current state.
    fn animated_transform(&self, ctx: &egui::Context) -> ImageTransform {
        let target = ImageTransform::from_state(&self.zoom_pan);
        let seconds = self.transition.seconds();

        let mut shown = target;
        shown.scale =
            ctx.animate_value_with_time(egui::Id::new("image_scale"), target.scale, seconds);
        shown.translation.width = ctx.animate_value_with_time(
            egui::Id::new("image_translation_x"),
            target.translation.width,
            seconds,
        );
        shown.translation.height = ctx.animate_value_with_time(
            egui::Id::new("image_translation_y"),
            target.translation.height,
            seconds,
        );
        shown
    }

    /// Renders the info hotspot and, when toggled on, the scale/offset readout.
    fn show_info_panel(&mut self, ctx: &egui::Context, panel_rect: egui::Rect) {
        let anchor_pos = panel_rect.left_top() + egui::vec2(IMAGE_PADDING, INFO_PANEL_TOP);
        let readout = InfoReadout::from_state(&self.zoom_pan);
        let visibility = ctx.animate_bool_with_time(
            egui::Id::new("info_panel_visibility"),
            self.overlays.info_visible,
            Transition::for_overlay().seconds(),
        );

        egui::Area::new(egui::Id::new("info_panel"))
            .fixed_pos(anchor_pos)
            .interactable(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(HOTSPOT_SIZE, HOTSPOT_SIZE),
                        egui::Sense::click(),
                    );
                    let center = rect.center();
                    ui.painter().circle_stroke(
                        center,
                        HOTSPOT_SIZE / 2.0 - 2.0,
                        egui::Stroke::new(3.0, colors::HOTSPOT_OUTER),
                    );
                    ui.painter()
                        .circle_filled(center, HOTSPOT_SIZE / 4.0, colors::HOTSPOT_INNER);

                    let time = ui.input(|i| i.time);
                    if self
                        .hotspot_press
                        .update(response.is_pointer_button_down_on(), time)
                    {
                        self.overlays.on_long_press();
                    }
                    if self.hotspot_press.is_pending() {
                        ctx.request_repaint();
                    }

                    if visibility > 0.0 {
                        ui.add_space(8.0);
                        ui.scope(|ui| {
                            ui.set_opacity(visibility);
                            show_readout(ui, &readout, panel_rect.width());
                        });
                    }
                });
            });
    }

    /// Renders the floating zoom-out / reset / zoom-in buttons.
    fn show_zoom_controls(&mut self, ctx: &egui::Context, panel_rect: egui::Rect, opacity: f32) {
        let anchor_pos = egui::pos2(panel_rect.center().x, panel_rect.bottom() - CONTROLS_BOTTOM);

        egui::Area::new(egui::Id::new("zoom_controls"))
            .pivot(egui::Align2::CENTER_BOTTOM)
            .fixed_pos(anchor_pos)
            .interactable(true)
            .show(ctx, |ui| {
                ui.set_opacity(opacity);
                panel_frame(ui)
                    .corner_radius(egui::CornerRadius::same(12))
                    .inner_margin(egui::Margin::symmetric(20, 12))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let zoom_out = ui
                                .add_enabled(self.zoom_pan.can_zoom_out(), control_button("−"))
                                .on_hover_text("Zoom out (-)");
                            let reset = ui
                                .add(control_button("1×"))
                                .on_hover_text("Reset (0)");
                            let zoom_in = ui
                                .add_enabled(self.zoom_pan.can_zoom_in(), control_button("+"))
                                .on_hover_text("Zoom in (+)");

                            if zoom_out.clicked() {
                                self.apply_command(Command::ZoomOutStep);
                            }
                            if reset.clicked() {
                                self.apply_command(Command::Reset);
                            }
                            if zoom_in.clicked() {
                                self.apply_command(Command::ZoomInStep);
                            }
                        });
                    });
            });
    }

    /// Renders the side drawer with its handle; thumbnails are not populated.
    fn show_drawer(&mut self, ctx: &egui::Context, panel_rect: egui::Rect, opacity: f32) {
        let placement = DrawerPlacement::from_overlays(&self.overlays);
        let left = ctx.animate_value_with_time(
            egui::Id::new("drawer_left"),
            placement.left(panel_rect.right()),
            Transition::for_overlay().seconds(),
        );
        let top = panel_rect.top() + panel_rect.height() * DRAWER_TOP_FRACTION;

        egui::Area::new(egui::Id::new("drawer"))
            .fixed_pos(egui::pos2(left, top))
            .interactable(true)
            .show(ctx, |ui| {
                ui.set_opacity(opacity);
                let margin = egui::Margin {
                    left: 8,
                    right: 20,
                    top: 16,
                    bottom: 16,
                };
                panel_frame(ui)
                    .corner_radius(egui::CornerRadius::same(12))
                    .inner_margin(margin)
                    .show(ui, |ui| {
                        ui.set_width(placement.width - margin.sum().x);
                        ui.horizontal(|ui| {
                            let handle = ui
                                .add(
                                    egui::Label::new(
                                        egui::RichText::new(placement.handle.glyph())
                                            .size(DRAWER_HANDLE_HEIGHT * 0.7)
                                            .color(colors::HANDLE),
                                    )
                                    .sense(egui::Sense::click()),
                                )
                                .on_hover_cursor(egui::CursorIcon::PointingHand);
                            if handle.clicked() {
                                self.overlays.on_drawer_handle_tap();
                            }

                            // Thumbnails
                            ui.add_space(ui.available_width());
                        });
                    });
            });
    }
}

/// Translucent frame shared by the readout, controls and drawer.
fn panel_frame(ui: &egui::Ui) -> egui::Frame {
    let fill = if ui.visuals().dark_mode {
        colors::PANEL_FILL_DARK
    } else {
        colors::PANEL_FILL_LIGHT
    };
    egui::Frame::new().fill(fill)
}

fn control_button(glyph: &str) -> egui::Button<'_> {
    egui::Button::new(egui::RichText::new(glyph).size(CONTROL_ICON_SIZE)).frame(false)
}

/// Width left for the readout beside the hotspot, never negative.
fn readout_max_width(available_width: f32) -> f32 {
    INFO_PANEL_MAX_WIDTH.min(available_width - HOTSPOT_SIZE - 48.0).max(0.0)
}

fn show_readout(ui: &mut egui::Ui, readout: &InfoReadout, available_width: f32) {
    panel_frame(ui)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_max_width(readout_max_width(available_width));
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.horizontal(|ui| {
                for (glyph, value) in [
                    ("×", &readout.scale),
                    ("↔", &readout.width),
                    ("↕", &readout.height),
                ] {
                    ui.small(glyph);
                    ui.small(value.as_str());
                    ui.add_space(12.0);
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_width_is_capped_on_wide_panels() {
        assert_eq!(readout_max_width(2000.0), INFO_PANEL_MAX_WIDTH);
        assert_eq!(readout_max_width(300.0), 300.0 - HOTSPOT_SIZE - 48.0);
    }

    #[test]
    fn readout_width_never_goes_negative() {
        assert_eq!(readout_max_width(10.0), 0.0);
        assert_eq!(readout_max_width(0.0), 0.0);
    }
}
