//! Pocket Ledger Frontend Entry Point

mod app;
mod browser;
mod components;
mod config;
mod context;
mod error;
mod ledger;
mod modal;
mod models;
mod render;
mod store;
mod toast;
mod tracker;

#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
