use crate::app::{App, AppProps};

mod app;
mod components;
mod config;
mod logger;
mod tops_sheet;

fn main() {
    let loaded = config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logger::init(&config.log_level);
    if let Err(err) = loaded {
        log::warn!("ignoring invalid page configuration: {}", err);
    }

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
