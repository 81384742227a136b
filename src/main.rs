use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;

mod components;
mod config;
mod controller;
mod error;
mod i18n;
mod models;
mod services;

use components::MainScreen;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag("eatical"),
    );

    #[cfg(not(target_os = "android"))]
    {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(config::load_or_default);
    let locale = config.locale.clone();
    use_init_i18n(move || i18n::init_i18n(&locale));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        MainScreen { config }
    }
}
