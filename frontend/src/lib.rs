#![allow(non_snake_case)]

pub mod components;
pub mod services;
pub mod utils;

mod app;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&"Starting Sahara DocuHub frontend".into());

    leptos::mount::mount_to_body(app::App);
}
