//! Asset embedding and loading utilities.

use pinch_viewer::Pages;
use rust_embed::RustEmbed;
use std::sync::mpsc;
use thiserror::Error;

/// Embeds all assets from the assets/ directory into the binary.
/// In debug mode, assets are loaded from the filesystem for faster iteration.
/// In release mode, assets are compressed and embedded in the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// File extension of bundled page images.
const IMAGE_EXTENSION: &str = "png";

/// Errors that can occur when loading the page catalog.
#[derive(Error, Debug)]
pub enum PageLoadError {
    #[error("pages.ron not found in embedded assets")]
    PagesNotFound,
    #[error("invalid UTF-8 in pages.ron: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("failed to parse pages.ron: {0}")]
    ParseError(#[from] ron::de::SpannedError),
    #[error("pages.ron contains no pages")]
    Empty,
}

/// Errors that can occur when loading and decoding images.
#[derive(Error, Debug)]
pub enum ImageLoadError {
    #[error("asset not found: {0}")]
    AssetNotFound(String),
    #[error("failed to decode image '{path}': {source}")]
    DecodeError {
        path: String,
        source: image::ImageError,
    },
}

/// Decoded image data ready for texture creation.
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl DecodedImage {
    /// Width over height, used to fit the image into the viewport.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// State of an asset being loaded asynchronously.
pub enum AssetLoadState {
    /// Asset is being loaded in a background thread.
    Loading(mpsc::Receiver<Result<DecodedImage, ImageLoadError>>),
    /// Asset has been decoded and is ready for texture creation.
    Ready(DecodedImage),
    /// Loading failed; stores the error message (already displayed via toast).
    Error(String),
}

/// Resolves an image name from the catalog to its embedded file path.
pub fn image_asset_path(image_name: &str) -> String {
    format!("{image_name}.{IMAGE_EXTENSION}")
}

/// Loads and decodes an image from embedded assets.
pub fn load_and_decode_image(path: &str) -> Result<DecodedImage, ImageLoadError> {
    let file = Assets::get(path).ok_or_else(|| ImageLoadError::AssetNotFound(path.to_string()))?;

    let img =
        image::load_from_memory(&file.data).map_err(|source| ImageLoadError::DecodeError {
            path: path.to_string(),
            source,
        })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        pixels: rgba.into_raw(),
        width,
        height,
    })
}

/// Loads the page catalog from embedded assets.
pub fn load_pages() -> Result<Pages, PageLoadError> {
    let file = Assets::get("pages.ron").ok_or(PageLoadError::PagesNotFound)?;
    let ron_string = std::str::from_utf8(&file.data)?;
    let pages: Pages = ron::from_str(ron_string)?;
    if pages.is_empty() {
        return Err(PageLoadError::Empty);
    }
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_has_front_cover() {
        let pages = load_pages().unwrap();
        assert_eq!(pages[0].image_name, "magazine-front-cover");
    }

    #[test]
    fn every_page_image_decodes() {
        for page in load_pages().unwrap() {
            let decoded = load_and_decode_image(&image_asset_path(&page.image_name)).unwrap();
            assert!(decoded.width > 0 && decoded.height > 0);
            assert_eq!(
                decoded.pixels.len(),
                (decoded.width * decoded.height * 4) as usize
            );
        }
    }

    #[test]
    fn missing_asset_is_reported_by_path() {
        let err = load_and_decode_image("no-such-page.png").err().unwrap();
        assert!(matches!(err, ImageLoadError::AssetNotFound(ref path) if path == "no-such-page.png"));
    }

    #[test]
    fn image_names_resolve_to_png_files() {
        assert_eq!(
            image_asset_path("magazine-front-cover"),
            "magazine-front-cover.png"
        );
    }
}
