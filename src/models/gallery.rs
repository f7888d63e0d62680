use serde::{Deserialize, Serialize};

/// One image in the gallery. Loaded once, never mutated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GalleryItem {
    pub id: i64,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub caption: String,
}

impl GalleryItem {
    pub fn new(id: i64, image: &str, category: &str, caption: &str) -> Self {
        GalleryItem {
            id,
            image: image.to_string(),
            category: category.to_string(),
            caption: caption.to_string(),
        }
    }

    /// Fixed set served when the real data cannot be loaded.
    pub fn sample_data() -> Vec<Self> {
        vec![
            GalleryItem::new(
                1,
                "/images/gallery/sample1.png",
                "economics",
                "Economic growth trends analysis showing positive trajectory",
            ),
            GalleryItem::new(
                2,
                "/images/gallery/sample2.png",
                "politics",
                "Political landscape visualization across regions",
            ),
            GalleryItem::new(
                3,
                "/images/gallery/sample3.png",
                "social",
                "Social indicators breakdown by demographics",
            ),
        ]
    }
}
