use serde::{Deserialize, Serialize};

/// Prefix prepended to an image name to get its thumbnail asset key.
pub const THUMBNAIL_PREFIX: &str = "thumb-";

/// A single gallery entry backed by a bundled image asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Stable identity of the page
    pub id: u32,
    /// Asset key of the full-size image (e.g., "magazine-front-cover")
    pub image_name: String,
}

impl Page {
    /// Asset key of the thumbnail shown in the drawer.
    pub fn thumbnail_name(&self) -> String {
        format!("{THUMBNAIL_PREFIX}{}", self.image_name)
    }
}

/// Root type for the pages data file
pub type Pages = Vec<Page>;
