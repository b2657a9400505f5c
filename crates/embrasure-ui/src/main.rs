#![forbid(unsafe_code)]
//! Browser entry point for the console feedback shell.

#[cfg(target_arch = "wasm32")]
fn main() {
    embrasure_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    let api = embrasure_ui::ApiConfig::default();
    eprintln!(
        "embrasure-ui runs in the browser (target wasm32-unknown-unknown); default api base {}",
        api.base_url
    );
}
