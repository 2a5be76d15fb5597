//! Todo Sync Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod editor;
mod error;
mod list;
mod models;
mod store;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ApiConfig::from_build_env();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger not installed: {}", err).into());
    }
    log::info!("todo client starting");

    mount_to_body(move || view! { <App config=config /> });
}
