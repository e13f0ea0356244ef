//! Browser shell: a leptos CSR app saving to `localStorage`.
mod app;

pub use app::*;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
