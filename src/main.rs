//! Cocktail Favorites Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod controller;
mod dom;
mod error;
mod logging;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    mount_to_body(App);
}
