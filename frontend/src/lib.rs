mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    log::info!("Starting delivery frontend (wasm)");

    // window.__DELIVERY_ENV (env.js) takes precedence over ./config.json.
    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialized");
    });

    router::mount_app();
}
