pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod registry;
pub mod routes;
pub mod state;
pub mod theme;

pub use crate::app::App;

#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
