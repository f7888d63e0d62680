#[macro_use]
extern crate rocket;

use log::error;
use rocket::serde::json::Json;
use rocket::{Build, Request, Rocket};
use serde_json::{json, Value};

mod boot;
mod config;
mod gallery;
mod loader;
mod models;
mod routes;

use config::GalleryConfig;
use gallery::GalleryStore;

#[catch(404)]
fn not_found(req: &Request<'_>) -> Json<Value> {
    Json(json!({ "error": "not found", "path": req.uri().path().as_str() }))
}

#[catch(500)]
fn server_error() -> Json<Value> {
    Json(json!({ "error": "internal server error" }))
}

pub fn build(store: GalleryStore) -> Rocket<Build> {
    rocket::build()
        .manage(store)
        .mount("/api", routes::api::routes())
        .register("/", catchers![not_found, server_error])
}

fn main() {
    env_logger::init();

    let config = GalleryConfig::load();

    // Boot check — data directory and gallery source
    boot::run(&config);

    let items = loader::load_or_fallback(&config.data_source(), config.fetch_timeout());
    let store = GalleryStore::new(items, &config);

    if let Err(e) = rocket::execute(build(store).launch()) {
        error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
