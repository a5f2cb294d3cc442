//! Interactive map of drug-trafficking dynamics in Latin America.
//!
//! Countries are coloured by their role in the trafficking network,
//! trafficking routes are drawn as animated overlays, and selecting a
//! country opens a detail panel with statistics, programs and sources.
//! All data is static and bundled with the crate.

pub mod app;
pub mod boundary;
pub mod config;
pub mod data;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod loader;
pub mod modal;
pub mod panel;
pub mod policy;
pub mod render;
pub mod routes;
pub mod search;
pub mod selection;
pub mod viewport;

pub use app::{App, Event};
pub use config::Config;
pub use data::{Country, CountryStore, LonLat, Role, StaticDataset};
pub use error::{MapError, Result};
