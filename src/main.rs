#![allow(warnings)]
//! Curator Console Entry Point

mod api;
mod models;
mod store;
mod sync;
mod toast;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod http;

#[cfg(target_arch = "wasm32")]
fn main() {
    use app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// The console is a browser app; native builds exist only for `cargo test`.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
