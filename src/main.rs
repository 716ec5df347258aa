//! Leads Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod fixtures;
mod format;
mod models;
mod pagination;
mod services;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_location();
    if let Err(err) = console_logger::init(config.log_level) {
        log::warn!("Logger already installed: {}", err);
    }
    log::info!("Starting leads dashboard against {}", config.api_base_url);

    match api::ApiClient::new(&config) {
        Ok(client) => {
            mount_to_body(move || view! { <App config=config client=client /> });
        }
        Err(err) => log::error!("Failed to build HTTP client: {}", err),
    }
}
