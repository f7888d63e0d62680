use log::warn;
use rocket::figment::Figment;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::gallery::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_MAX_VISIBLE_PAGES};
use crate::loader::DataSource;

/// `[default.gallery]` table of Rocket.toml, or `ROCKET_GALLERY` in the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Local path or http(s) URL of the gallery JSON.
    pub source: String,
    pub items_per_page: usize,
    pub max_visible_pages: usize,
    pub fetch_timeout_secs: u64,
    pub data_dir: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            source: "gallery-data.json".to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            fetch_timeout_secs: 10,
            data_dir: "website".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Reads the same figment Rocket launches with.
    pub fn load() -> Self {
        Self::from_figment(&rocket::Config::figment())
    }

    pub fn from_figment(figment: &Figment) -> Self {
        match figment.extract_inner::<GalleryConfig>("gallery") {
            Ok(config) => config.normalized(),
            Err(e) => {
                warn!("No usable [gallery] config ({}), using defaults", e);
                Self::default()
            }
        }
    }

    fn normalized(mut self) -> Self {
        self.items_per_page = self.items_per_page.max(1);
        self.max_visible_pages = self.max_visible_pages.max(1);
        self
    }

    pub fn data_source(&self) -> DataSource {
        DataSource::parse(&self.source)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
