//! Storefront web client entry point

use storefront_web::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::log_1(&"[WASM] Storefront initialized".into());
    dioxus::launch(App);
}

// Native entry point (desktop renderer, or dev tooling)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    storefront_web::shared::logging::init_tracing();
    tracing::info!("Starting storefront...");
    dioxus::launch(App);
}
