#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod assets;
mod colors;
mod constants;
mod gestures;
mod ui;

use assets::{AssetLoadState, image_asset_path, load_and_decode_image, load_pages};
use clap::Parser;
use constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, TITLE};
use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use gestures::{GestureRecognizer, LongPress};
use pinch_viewer::{OverlayVisibility, Page, Pages, Transition, ZoomPanState};
use std::collections::HashMap;
use std::sync::{Arc, mpsc};
use std::thread;

/// Pinch, drag and double-tap to explore a bundled page image.
#[derive(Parser, Debug)]
#[command(name = "pinch-viewer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Id of the page to display (defaults to the first page)
    #[arg(short, long, value_name = "ID")]
    page: Option<u32>,

    /// Initial window width
    #[arg(long, value_name = "POINTS", default_value_t = DEFAULT_WINDOW_WIDTH)]
    width: f32,

    /// Initial window height
    #[arg(long, value_name = "POINTS", default_value_t = DEFAULT_WINDOW_HEIGHT)]
    height: f32,

    /// Use the light theme instead of the dark one
    #[arg(long)]
    light: bool,
}

/// Main application state for the Pinch Viewer.
pub struct PinchViewerApp {
    page: Option<Page>,
    zoom_pan: ZoomPanState,
    overlays: OverlayVisibility,
    /// Presentation of the most recent state change
    transition: Transition,
    /// Set after the first frame so the contents fade in
    is_appearing: bool,
    gestures: GestureRecognizer,
    hotspot_press: LongPress,
    asset_cache: HashMap<String, AssetLoadState>,
    texture_cache: HashMap<String, TextureHandle>,
    toasts: Toasts,
}

impl PinchViewerApp {
    fn new(cc: &eframe::CreationContext<'_>, cli: &Cli) -> Self {
        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        cc.egui_ctx.set_theme(if cli.light {
            egui::Theme::Light
        } else {
            egui::Theme::Dark
        });

        let pages = match load_pages() {
            Ok(pages) => pages,
            Err(err) => {
                log::error!("{err}");
                toasts.add(error_toast(err.to_string(), 10.0));
                Vec::new()
            }
        };

        let page = select_page(&pages, cli.page);
        let mut asset_cache = HashMap::new();

        // Decode the page image in a background thread
        if let Some(page) = &page {
            log::info!("Showing page {} ({})", page.id, page.image_name);

            let (tx, rx) = mpsc::channel();
            let ctx = cc.egui_ctx.clone();
            let asset_path = image_asset_path(&page.image_name);

            thread::spawn({
                let asset_path = asset_path.clone();
                move || {
                    let result = load_and_decode_image(&asset_path);
                    let _ = tx.send(result);
                    ctx.request_repaint();
                }
            });

            asset_cache.insert(asset_path, AssetLoadState::Loading(rx));
        }

        Self {
            page,
            zoom_pan: ZoomPanState::new(),
            overlays: OverlayVisibility::default(),
            transition: Transition::Spring,
            is_appearing: false,
            gestures: GestureRecognizer::default(),
            hotspot_press: LongPress::default(),
            asset_cache,
            texture_cache: HashMap::new(),
            toasts,
        }
    }

    /// Polls all loading assets and creates textures for ready ones.
    fn poll_all_assets(&mut self, ctx: &egui::Context) {
        let mut updates: Vec<(String, AssetLoadState)> = Vec::new();
        let mut errors: Vec<String> = Vec::new();

        for (path, state) in &mut self.asset_cache {
            if let AssetLoadState::Loading(rx) = state {
                match rx.try_recv() {
                    Ok(Ok(decoded)) => {
                        log::info!("Decoded {path} ({}x{})", decoded.width, decoded.height);
                        updates.push((path.clone(), AssetLoadState::Ready(decoded)));
                    }
                    Ok(Err(err)) => {
                        let msg = format!("{}: {}", path, err);
                        errors.push(msg.clone());
                        updates.push((path.clone(), AssetLoadState::Error(msg)));
                    }
                    Err(mpsc::TryRecvError::Disconnected) => {
                        let msg = format!("{}: channel disconnected", path);
                        errors.push(msg.clone());
                        updates.push((path.clone(), AssetLoadState::Error(msg)));
                    }
                    Err(mpsc::TryRecvError::Empty) => {}
                }
            }
        }

        for (path, new_state) in updates {
            self.asset_cache.insert(path, new_state);
        }

        for err in errors {
            log::error!("{err}");
            self.toasts.add(error_toast(err, 8.0));
        }

        let ready_paths: Vec<_> = self
            .asset_cache
            .iter()
            .filter(|(path, state)| {
                matches!(state, AssetLoadState::Ready(_)) && !self.texture_cache.contains_key(*path)
            })
            .map(|(path, _)| path.clone())
            .collect();

        for path in ready_paths {
            if let Some(AssetLoadState::Ready(decoded)) = self.asset_cache.get(&path) {
                let image = ColorImage::from_rgba_unmultiplied(
                    [decoded.width as usize, decoded.height as usize],
                    &decoded.pixels,
                );
                let texture = ctx.load_texture(&path, image, TextureOptions::LINEAR);
                self.texture_cache.insert(path, texture);
            }
        }
    }
}

impl eframe::App for PinchViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_all_assets(ctx);
        self.handle_keyboard_input(ctx);

        self.show_title_bar(ctx);
        self.show_status_bar(ctx);
        self.show_central_panel(ctx);

        self.is_appearing = true;

        self.toasts.show(ctx);
    }
}

/// Picks the requested page, falling back to the first one.
fn select_page(pages: &Pages, requested: Option<u32>) -> Option<Page> {
    if let Some(id) = requested {
        if let Some(page) = pages.iter().find(|page| page.id == id) {
            return Some(page.clone());
        }
        log::warn!("Page {id} not found, showing the first page instead");
    }
    pages.first().cloned()
}

fn error_toast(text: String, seconds: f64) -> Toast {
    Toast {
        kind: ToastKind::Error,
        text: text.into(),
        options: ToastOptions::default()
            .duration_in_seconds(seconds)
            .show_icon(true),
        ..Default::default()
    }
}

fn load_icon() -> Option<egui::IconData> {
    let icon_bytes = include_bytes!("../../../assets/pinch-viewer-icon.ico");
    let icon_dir = ico::IconDir::read(std::io::Cursor::new(icon_bytes))
        .inspect_err(|err| log::warn!("Failed to read window icon: {err}"))
        .ok()?;
    let entry = icon_dir.entries().first()?;
    let image = entry
        .decode()
        .inspect_err(|err| log::warn!("Failed to decode window icon: {err}"))
        .ok()?;
    Some(egui::IconData {
        rgba: image.rgba_data().to_vec(),
        width: image.width(),
        height: image.height(),
    })
}

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(TITLE)
        .with_inner_size([cli.width, cli.height]);
    if let Some(icon) = load_icon() {
        viewport = viewport.with_icon(Arc::new(icon));
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(PinchViewerApp::new(cc, &cli)))),
    )
}
