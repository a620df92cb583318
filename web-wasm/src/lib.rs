//! SmartCal Web App (Leptos + WASM)

mod app;
pub mod components;
mod api;
mod camera;
mod config;
mod logger;
mod payment;
mod surface;
pub mod identity_store;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    leptos::mount::mount_to_body(app::App);
}
