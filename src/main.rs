//! Pokédex Dashboard Frontend Entry Point

mod models;
mod config;
mod error;
mod session;
mod storage;
mod api;
mod catalogue;
mod leaflet;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use rolling_logger::LogLine;

/// Mirror each log line to the browser console at its level
fn console_sink(line: &LogLine) {
    let text = wasm_bindgen::JsValue::from(line.to_string());
    match line.level {
        log::Level::Error => web_sys::console::error_1(&text),
        log::Level::Warn => web_sys::console::warn_1(&text),
        log::Level::Info => web_sys::console::info_1(&text),
        _ => web_sys::console::debug_1(&text),
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("PokeDashboard", console_sink) {
        web_sys::console::error_1(&format!("Logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
