#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;


use iced::daemon;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    daemon(
        app::GifSearchApp::build,
        app::GifSearchApp::handle_update,
        app::GifSearchApp::render_view,
    )
    .subscription(app::GifSearchApp::handle_subscription)
    .run()
}
