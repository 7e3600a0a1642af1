#![allow(non_snake_case)]
use dioxus::prelude::*;

use gloo_console::error as console_error;
use tracing::{debug, error};

use ::common::config::{GalleryConfig, parse_config};

mod common;
use self::common::style;

mod gallery;
use gallery::Gallery;

mod upload;
use upload::Uploader;

const CONFIG_DOC: &str = include_str!("../gallery.toml");

fn main() {
    let parsed = parse_config(CONFIG_DOC);
    let config = parsed.as_ref().cloned().unwrap_or_default();

    if let Err(err) = dioxus_logger::init(config.level()) {
        console_error!(format!("failed to init logger: {err}"));
    }

    match parsed {
        Ok(_) => debug!({config = ?config}, "successfully parsed config"),
        Err(err) => error!("failed to parse config, using defaults: {err}"),
    }

    if !self::common::mount_point_exists(&config.mount_id) {
        return;
    }

    LaunchBuilder::web()
        .with_cfg(dioxus::web::Config::new().rootname(config.mount_id.clone()))
        .with_context(config)
        .launch(App);
}

// the two widgets share nothing but the config; either can be dropped from
// the page without affecting the other
#[component]
pub fn App() -> Element {
    rsx! {
        style { "{style::STYLES}" }
        Uploader {}
        Gallery {}
    }
}

pub fn use_config() -> GalleryConfig {
    use_context::<GalleryConfig>()
}
