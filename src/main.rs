#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
pub mod context;
mod pages;
mod theme;

fn main() {
    // Fails only when a subscriber is already installed.
    let _ = dioxus::logger::init(tracing::Level::INFO);

    tracing::info!("Starting 76 Café Resto site");

    dioxus::launch(app::App);
}
