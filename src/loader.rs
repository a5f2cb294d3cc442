//! Deferred load of the map geometry.
//!
//! The map area shows a loading placeholder until this finishes. Each
//! attempt walks the world sources in order (bundled file, then URL);
//! attempts are retried with linear backoff, and once they run out the
//! state is a permanent `Failed` until the user asks for a retry.

use std::{fs, path::PathBuf, thread, time::Duration};

use serde_json::Value;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::{MapError, Result};
use crate::geometry::MapGeometry;

/// A GeoJSON document provider.
pub trait GeometrySource {
    fn describe(&self) -> String;
    fn fetch(&self) -> Result<Value>;
}

#[derive(Debug, Clone)]
pub struct FileSource(pub PathBuf);

impl GeometrySource for FileSource {
    fn describe(&self) -> String {
        self.0.display().to_string()
    }

    fn fetch(&self) -> Result<Value> {
        let path = self.describe();
        let bytes = fs::read(&self.0).map_err(|source| MapError::Io { path, source })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// A document already in memory.
#[derive(Debug, Clone)]
pub struct InlineSource(pub Value);

impl GeometrySource for InlineSource {
    fn describe(&self) -> String {
        "inline".into()
    }

    fn fetch(&self) -> Result<Value> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    pub url: String,
    pub timeout: Duration,
}

impl GeometrySource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Value> {
        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        let resp = agent
            .get(&self.url)
            .set("Accept-Encoding", "identity")
            .call()
            .map_err(|e| MapError::Http {
                url: self.url.clone(),
                reason: e.to_string(),
            })?;
        Ok(serde_json::from_reader(resp.into_reader())?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(MapGeometry),
    Failed { attempts: u32, error: String },
}

impl LoadState {
    pub fn geometry(&self) -> Option<&MapGeometry> {
        match self {
            LoadState::Ready(g) => Some(g),
            _ => None,
        }
    }
}

pub struct MapLoader {
    world: Vec<Box<dyn GeometrySource>>,
    overlay: Box<dyn GeometrySource>,
    attempts: u32,
    backoff: Duration,
}

impl MapLoader {
    pub fn new(
        world: Vec<Box<dyn GeometrySource>>,
        overlay: Box<dyn GeometrySource>,
        attempts: u32,
        backoff: Duration,
    ) -> Self {
        Self {
            world,
            overlay,
            attempts: attempts.max(1),
            backoff,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            vec![
                Box::new(FileSource(config.geojson_path.clone())),
                Box::new(HttpSource {
                    url: config.geojson_url.clone(),
                    timeout: config.timeout,
                }),
            ],
            Box::new(FileSource(config.overlay_path.clone())),
            config.retries,
            Duration::from_secs(1),
        )
    }

    /// Runs the load to completion: `Ready` or `Failed`, never `Loading`.
    pub fn load(&self) -> LoadState {
        let mut last_error = String::from("no geometry sources configured");
        for attempt in 1..=self.attempts {
            info!(attempt, max = self.attempts, "loading map geometry");
            match self.try_once() {
                Ok(geometry) => {
                    info!(shapes = geometry.shape_count(), "map geometry ready");
                    return LoadState::Ready(geometry);
                }
                Err(e) => {
                    warn!(attempt, error = %e, "map geometry attempt failed");
                    last_error = e.to_string();
                }
            }
            if attempt < self.attempts && !self.backoff.is_zero() {
                thread::sleep(self.backoff * attempt);
            }
        }
        error!(attempts = self.attempts, error = %last_error, "giving up on map geometry");
        LoadState::Failed {
            attempts: self.attempts,
            error: last_error,
        }
    }

    fn try_once(&self) -> Result<MapGeometry> {
        let world = self.fetch_world()?;
        let overlay = match self.overlay.fetch() {
            Ok(doc) => doc,
            Err(e) => {
                warn!(source = %self.overlay.describe(), error = %e, "overlay unavailable, continuing without it");
                serde_json::json!({ "type": "FeatureCollection", "features": [] })
            }
        };
        MapGeometry::from_geojson(&world, &overlay)
    }

    fn fetch_world(&self) -> Result<Value> {
        let mut last = None;
        for source in &self.world {
            match source.fetch() {
                Ok(doc) => {
                    info!(source = %source.describe(), "world geometry fetched");
                    return Ok(doc);
                }
                Err(e) => {
                    warn!(source = %source.describe(), error = %e, "world source failed");
                    last = Some(e);
                }
            }
        }
        Err(last.unwrap_or_else(|| MapError::GeoJson("no world sources configured".into())))
    }
}
