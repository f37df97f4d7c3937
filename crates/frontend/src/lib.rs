pub mod app;
pub mod layout;
pub mod session;
pub mod shared;
pub mod system;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    let config = shared::config::config();
    _ = console_log::init_with_level(config.log_level);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
    log::info!("EduGPT initialized");
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
