pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use app::App;
use leptos::prelude::*;
use shared::browser_storage::read_item;
use shared::config::{load_config, CONFIG_OVERRIDE_KEY};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // Everything is logged until the configured level is known
    _ = console_log::init_with_level(log::Level::Trace);
    console_error_panic_hook::set_once();

    let config = match load_config(read_item(CONFIG_OVERRIDE_KEY).as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("embedded configuration is invalid: {}", e);
            return;
        }
    };
    log::set_max_level(config.log_level().to_level_filter());
    log::info!("Freight Desk starting, API at {}", config.api_base());

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
