pub mod window;

use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::sync::Arc;

use crate::config::GalleryConfig;
use crate::models::gallery::GalleryItem;

pub use window::PageWindow;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

const ALL: &str = "all";

// ── Errors ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryError {
    /// Gallery data could not be read or parsed.
    LoadFailure(String),
    /// Lightbox index outside the filtered list.
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for GalleryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GalleryError::LoadFailure(msg) => write!(f, "gallery load failed: {}", msg),
            GalleryError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for {} filtered items", index, len)
            }
        }
    }
}

impl std::error::Error for GalleryError {}

// ── List state ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL {
            Filter::All
        } else {
            Filter::Category(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => ALL,
            Filter::Category(c) => c,
        }
    }

    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => item.category == *c,
        }
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Grid,
    Masonry,
}

impl ViewMode {
    /// Anything other than `masonry` is the plain grid.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "masonry" => ViewMode::Masonry,
            _ => ViewMode::Grid,
        }
    }
}

/// Filter and page position. Survives lightbox open/close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub filter: Filter,
    pub current_page: usize,
    pub items_per_page: usize,
    pub view: ViewMode,
}

// ── Lightbox ──────────────────────────────────────────

/// Open lightbox. `index` addresses the filtered list it was opened against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LightboxSession {
    index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightboxTarget {
    pub index: usize,
    pub item: GalleryItem,
    pub has_prev: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "prev" | "-1" => Some(Direction::Prev),
            "next" | "1" | "+1" => Some(Direction::Next),
            _ => None,
        }
    }

    fn offset(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum KeyOutcome {
    /// Lightbox closed or key not bound.
    Ignored,
    Closed,
    Moved(LightboxTarget),
    /// Arrow key at either end of the list.
    Stayed,
}

// ── Controller ────────────────────────────────────────

/// Filter, pagination and lightbox state over an immutable item collection.
#[derive(Debug, Clone)]
pub struct GalleryController {
    items: Arc<[GalleryItem]>,
    list: ListState,
    lightbox: Option<LightboxSession>,
    max_visible_pages: usize,
}

impl GalleryController {
    pub fn new(items: Arc<[GalleryItem]>) -> Self {
        Self::with_layout(items, DEFAULT_ITEMS_PER_PAGE, DEFAULT_MAX_VISIBLE_PAGES)
    }

    pub fn with_layout(
        items: Arc<[GalleryItem]>,
        items_per_page: usize,
        max_visible_pages: usize,
    ) -> Self {
        GalleryController {
            items,
            list: ListState {
                filter: Filter::All,
                current_page: 1,
                items_per_page: items_per_page.max(1),
                view: ViewMode::Grid,
            },
            lightbox: None,
            max_visible_pages: max_visible_pages.max(1),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.list
    }

    pub fn lightbox_index(&self) -> Option<usize> {
        self.lightbox.map(|s| s.index)
    }

    /// Switches category and returns to page 1. The open lightbox, if any,
    /// is closed because its index belongs to the previous filtered list.
    pub fn set_filter(&mut self, filter: &str) {
        self.list.filter = Filter::parse(filter);
        self.list.current_page = 1;
        self.lightbox = None;
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.list.view = view;
    }

    pub fn filtered_items(&self) -> Vec<&GalleryItem> {
        self.items
            .iter()
            .filter(|item| self.list.filter.matches(item))
            .collect()
    }

    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.list.items_per_page)
    }

    /// Page count of the current filtered list.
    pub fn page_count(&self) -> usize {
        self.total_pages(self.filtered_items().len())
    }

    /// Out-of-range pages are ignored. Returns whether the page was applied.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.page_count() {
            return false;
        }
        self.list.current_page = page;
        true
    }

    pub fn page_items(&self) -> Vec<&GalleryItem> {
        let start = (self.list.current_page - 1) * self.list.items_per_page;
        self.filtered_items()
            .into_iter()
            .skip(start)
            .take(self.list.items_per_page)
            .collect()
    }

    /// Filtered-list index of the card at `offset` on the current page.
    /// `None` if the position cannot be represented.
    pub fn filtered_index(&self, offset: usize) -> Option<usize> {
        (self.list.current_page - 1)
            .checked_mul(self.list.items_per_page)?
            .checked_add(offset)
    }

    pub fn open_lightbox(&mut self, index: usize) -> Result<LightboxTarget, GalleryError> {
        let target = self.target_at(index)?;
        self.lightbox = Some(LightboxSession { index });
        Ok(target)
    }

    /// Returns whether a lightbox was open.
    pub fn close_lightbox(&mut self) -> bool {
        self.lightbox.take().is_some()
    }

    pub fn current_target(&self) -> Option<LightboxTarget> {
        let session = self.lightbox?;
        self.target_at(session.index).ok()
    }

    /// Steps through the filtered list. `None` means nothing moved: the
    /// lightbox is closed or the step would leave the list.
    pub fn navigate(&mut self, direction: Direction) -> Option<LightboxTarget> {
        let session = self.lightbox?;
        let next = session.index.checked_add_signed(direction.offset())?;
        self.open_lightbox(next).ok()
    }

    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        if self.lightbox.is_none() {
            return KeyOutcome::Ignored;
        }
        let direction = match key {
            "Escape" => {
                self.close_lightbox();
                return KeyOutcome::Closed;
            }
            "ArrowLeft" => Direction::Prev,
            "ArrowRight" => Direction::Next,
            _ => return KeyOutcome::Ignored,
        };
        match self.navigate(direction) {
            Some(target) => KeyOutcome::Moved(target),
            None => KeyOutcome::Stayed,
        }
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn page_window(&self) -> Option<PageWindow> {
        PageWindow::compute(
            self.list.current_page,
            self.page_count(),
            self.max_visible_pages,
        )
    }

    fn target_at(&self, index: usize) -> Result<LightboxTarget, GalleryError> {
        let filtered = self.filtered_items();
        let len = filtered.len();
        let item = filtered
            .get(index)
            .ok_or(GalleryError::IndexOutOfRange { index, len })?;
        Ok(LightboxTarget {
            index,
            item: (*item).clone(),
            has_prev: index > 0,
            has_next: index + 1 < len,
        })
    }
}

// ── Shared collection ─────────────────────────────────

/// Loaded collection plus layout settings, handed out as fresh controllers.
#[derive(Debug, Clone)]
pub struct GalleryStore {
    items: Arc<[GalleryItem]>,
    items_per_page: usize,
    max_visible_pages: usize,
}

impl GalleryStore {
    pub fn new(items: Vec<GalleryItem>, config: &GalleryConfig) -> Self {
        GalleryStore {
            items: items.into(),
            items_per_page: config.items_per_page,
            max_visible_pages: config.max_visible_pages,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn controller(&self) -> GalleryController {
        GalleryController::with_layout(
            Arc::clone(&self.items),
            self.items_per_page,
            self.max_visible_pages,
        )
    }
}
