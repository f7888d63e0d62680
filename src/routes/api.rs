use log::debug;
use rocket::request::FromParam;
use rocket::serde::json::Json;
use rocket::State;
use serde::Serialize;

use crate::gallery::{
    Direction, Filter, GalleryController, GalleryStore, KeyOutcome, LightboxTarget, PageWindow,
    ViewMode,
};
use crate::models::gallery::GalleryItem;

impl<'a> FromParam<'a> for Direction {
    type Error = &'a str;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        Direction::parse(param).ok_or(param)
    }
}

/// Builds a controller for one request, positioned on `filter`.
fn controller_for(store: &GalleryStore, filter: Option<&str>) -> GalleryController {
    let mut gallery = store.controller();
    if let Some(f) = filter {
        gallery.set_filter(f);
    }
    gallery
}

// ── Gallery page ───────────────────────────────────────

/// A card on the current page. `index` is what the lightbox routes take.
#[derive(Debug, Serialize)]
pub struct PageCard {
    pub index: usize,
    pub item: GalleryItem,
}

#[derive(Debug, Serialize)]
pub struct GalleryPage {
    pub filter: Filter,
    pub view: ViewMode,
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    /// Size of the filtered list.
    pub total_items: usize,
    pub items: Vec<PageCard>,
    pub window: Option<PageWindow>,
    pub categories: Vec<String>,
}

impl GalleryPage {
    pub fn from_controller(gallery: &GalleryController) -> Self {
        let state = gallery.state();
        let total_items = gallery.filtered_items().len();
        GalleryPage {
            filter: state.filter.clone(),
            view: state.view,
            current_page: state.current_page,
            total_pages: gallery.total_pages(total_items),
            items_per_page: state.items_per_page,
            total_items,
            items: gallery
                .page_items()
                .into_iter()
                .enumerate()
                .filter_map(|(offset, item)| {
                    Some(PageCard {
                        index: gallery.filtered_index(offset)?,
                        item: item.clone(),
                    })
                })
                .collect(),
            window: gallery.page_window(),
            categories: gallery.categories().into_iter().map(String::from).collect(),
        }
    }
}

#[get("/gallery?<filter>&<page>&<view>")]
pub fn gallery_page(
    store: &State<GalleryStore>,
    filter: Option<&str>,
    page: Option<usize>,
    view: Option<&str>,
) -> Json<GalleryPage> {
    let mut gallery = controller_for(store, filter);
    if let Some(v) = view {
        gallery.set_view(ViewMode::parse(v));
    }
    if let Some(p) = page {
        if !gallery.set_page(p) {
            debug!("Ignoring out-of-range gallery page {}", p);
        }
    }
    Json(GalleryPage::from_controller(&gallery))
}

#[get("/gallery/items")]
pub fn gallery_items(store: &State<GalleryStore>) -> Json<Vec<GalleryItem>> {
    Json(store.items().to_vec())
}

// ── Lightbox ───────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct NavigateResponse {
    pub moved: bool,
    pub target: LightboxTarget,
}

#[get("/gallery/lightbox/<index>?<filter>")]
pub fn lightbox_open(
    store: &State<GalleryStore>,
    index: usize,
    filter: Option<&str>,
) -> Option<Json<LightboxTarget>> {
    let mut gallery = controller_for(store, filter);
    match gallery.open_lightbox(index) {
        Ok(target) => Some(Json(target)),
        Err(e) => {
            debug!("Lightbox open rejected: {}", e);
            None
        }
    }
}

#[get("/gallery/lightbox/<index>/<direction>?<filter>")]
pub fn lightbox_step(
    store: &State<GalleryStore>,
    index: usize,
    direction: Direction,
    filter: Option<&str>,
) -> Option<Json<NavigateResponse>> {
    let mut gallery = controller_for(store, filter);
    gallery.open_lightbox(index).ok()?;
    let response = match gallery.navigate(direction) {
        Some(target) => NavigateResponse { moved: true, target },
        None => NavigateResponse {
            moved: false,
            target: gallery.current_target()?,
        },
    };
    Some(Json(response))
}

#[derive(Debug, Serialize)]
pub struct KeyResponse {
    pub outcome: KeyOutcome,
    /// Lightbox position after the key, `None` once closed.
    pub index: Option<usize>,
}

/// Keyboard control of an open lightbox: `Escape`, `ArrowLeft`, `ArrowRight`.
#[get("/gallery/lightbox/<index>/key/<key>?<filter>")]
pub fn lightbox_key(
    store: &State<GalleryStore>,
    index: usize,
    key: &str,
    filter: Option<&str>,
) -> Option<Json<KeyResponse>> {
    let mut gallery = controller_for(store, filter);
    gallery.open_lightbox(index).ok()?;
    let outcome = gallery.handle_key(key);
    debug!("Lightbox key {} at {}: {:?}", key, index, outcome);
    Some(Json(KeyResponse {
        outcome,
        index: gallery.lightbox_index(),
    }))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![gallery_page, gallery_items, lightbox_open, lightbox_step, lightbox_key]
}
