use serde::{Deserialize, Serialize};
use toml;
use tracing::Level;

pub const DEFAULT_API_ROOT: &str = "https://backend-undangan-pernikahan-opang.vercel.app";
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

// grey box shown in place of thumbnails the browser could not decode
pub const DEFAULT_PLACEHOLDER_SRC: &str = "data:image/svg+xml;utf8,\
<svg xmlns='http://www.w3.org/2000/svg' width='200' height='200' viewBox='0 0 200 200'>\
<rect width='200' height='200' fill='%23e9e9e9'/>\
<text x='100' y='105' font-family='sans-serif' font-size='14' fill='%23888' text-anchor='middle'>\
image unavailable</text></svg>";

// gallery configuration
//
// this struct contains everything the widget needs to know about its backend and
// host page.  every field has a default so that a partial document still works
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct GalleryConfig {
    // scheme and host of the backend, without a trailing slash
    pub api_root: String,

    // endpoint paths, appended to api_root
    pub list_path: String,
    pub upload_path: String,

    // json key holding the base64 payload in each list record
    pub record_field: String,

    // multipart field name for the uploaded file
    pub upload_field: String,

    // horizontal distance a touch must travel before it counts as a swipe
    pub swipe_threshold: f64,

    // image shown when a thumbnail fails to load
    pub placeholder_src: String,

    // id of the host element the app is mounted into
    pub mount_id: String,

    // one of trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            api_root: String::from(DEFAULT_API_ROOT),
            list_path: String::from("/getGallery"),
            upload_path: String::from("/uploadGallery"),
            record_field: String::from("imageBase64"),
            upload_field: String::from("image"),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            placeholder_src: String::from(DEFAULT_PLACEHOLDER_SRC),
            mount_id: String::from("main"),
            log_level: String::from("debug"),
        }
    }
}

impl GalleryConfig {
    pub fn list_url(&self) -> String {
        join_url(&self.api_root, &self.list_path)
    }

    pub fn upload_url(&self) -> String {
        join_url(&self.api_root, &self.upload_path)
    }

    // unknown level names fall back to debug rather than silencing the logger
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::DEBUG)
    }

    pub fn threshold(&self) -> f64 {
        if self.swipe_threshold.is_finite() && self.swipe_threshold >= 0.0 {
            self.swipe_threshold
        } else {
            DEFAULT_SWIPE_THRESHOLD
        }
    }
}

fn join_url(root: &str, path: &str) -> String {
    format!(
        "{}/{}",
        root.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: GalleryConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<GalleryConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;

    Ok(data.config)
}
