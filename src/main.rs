//! CRUD Demo Frontend Entry Point

mod app;
mod components;
mod context;
mod controller;
mod errors;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init(LevelFilter::Debug) {
        web_sys::console::warn_1(&format!("console logger not installed: {}", e).into());
    }
    mount_to_body(App);
}
