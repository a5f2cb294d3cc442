//! Runtime configuration. Values can be overridden through environment
//! variables; nothing is read from or written to disk.

use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_GEOJSON_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/world.geojson");
pub const DEFAULT_OVERLAY_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/assets/french-guiana.geojson");
pub const DEFAULT_GEOJSON_URL: &str =
    "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_110m_admin_0_countries.geojson";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub geojson_path: PathBuf,
    pub geojson_url: String,
    pub overlay_path: PathBuf,
    pub timeout: Duration,
    pub retries: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        let geojson_path = env::var("TRAFFICKING_MAP_GEOJSON")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_GEOJSON_PATH));
        let geojson_url = env::var("TRAFFICKING_MAP_GEOJSON_URL")
            .unwrap_or_else(|_| DEFAULT_GEOJSON_URL.to_string());
        let overlay_path = env::var("TRAFFICKING_MAP_OVERLAY")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OVERLAY_PATH));
        let timeout = env::var("TRAFFICKING_MAP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));
        let retries = env::var("TRAFFICKING_MAP_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);
        let width = env::var("TRAFFICKING_MAP_WIDTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1200);
        let height = env::var("TRAFFICKING_MAP_HEIGHT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);

        Self {
            geojson_path,
            geojson_url,
            overlay_path,
            timeout,
            retries,
            width,
            height,
        }
    }
}
