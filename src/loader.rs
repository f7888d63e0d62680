use log::{info, warn};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::gallery::GalleryError;
use crate::models::gallery::GalleryItem;

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    File(PathBuf),
    Remote(Url),
}

impl DataSource {
    /// http(s) URLs are fetched, everything else is read from disk.
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => DataSource::Remote(url),
            _ => DataSource::File(PathBuf::from(raw)),
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Remote(url) => write!(f, "{}", url),
        }
    }
}

pub fn parse_items(body: &str) -> Result<Vec<GalleryItem>, GalleryError> {
    serde_json::from_str(body)
        .map_err(|e| GalleryError::LoadFailure(format!("invalid gallery JSON: {}", e)))
}

pub fn load_items(source: &DataSource, timeout: Duration) -> Result<Vec<GalleryItem>, GalleryError> {
    let body = match source {
        DataSource::File(path) => fs::read_to_string(path).map_err(|e| {
            GalleryError::LoadFailure(format!("cannot read {}: {}", path.display(), e))
        })?,
        DataSource::Remote(url) => fetch(url, timeout)?,
    };
    parse_items(&body)
}

fn fetch(url: &Url, timeout: Duration) -> Result<String, GalleryError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GalleryError::LoadFailure(format!("HTTP client error: {}", e)))?;

    let resp = client
        .get(url.as_str())
        .send()
        .map_err(|e| GalleryError::LoadFailure(format!("request to {} failed: {}", url, e)))?;

    if !resp.status().is_success() {
        return Err(GalleryError::LoadFailure(format!(
            "{} returned {}",
            url,
            resp.status()
        )));
    }

    resp.text()
        .map_err(|e| GalleryError::LoadFailure(format!("reading {} failed: {}", url, e)))
}

/// Single attempt; any failure yields the sample set instead of an error.
pub fn load_or_fallback(source: &DataSource, timeout: Duration) -> Vec<GalleryItem> {
    match load_items(source, timeout) {
        Ok(items) => {
            info!("Loaded {} gallery items from {}", items.len(), source);
            items
        }
        Err(e) => {
            warn!("{}; serving sample gallery", e);
            GalleryItem::sample_data()
        }
    }
}
