//! Job Tree Frontend Entry Point

mod api;
mod app;
mod bulk;
mod components;
mod config;
mod context;
mod dialog;
mod error;
mod models;
mod navigation;
mod selection;
mod store;
mod tree;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let page = config::load_page_data();
    let level = page.as_ref().ok().and_then(|p| p.log_level.clone());
    if let Err(e) = console_logger::init_with_level_str(level.as_deref()) {
        web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", e).into());
    }

    let page = page.unwrap_or_else(|e| {
        log::error!("[APP] Failed to load page data: {}", e);
        models::PageData::default()
    });

    mount_to_body(move || view! { <App page=page /> });
}
