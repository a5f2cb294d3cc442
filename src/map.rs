//! world-map — render the trafficking map once and exit.
//!
//! Loads the country polygons (bundled file, falling back to Natural
//! Earth over HTTP), applies the requested view, and writes:
//!   `map.svg`     — the map canvas (shapes, routes, labels, legend)
//!   `index.html`  — the full page with header, map and detail panel
//!
//! Fill colours:
//!   red    (#dc2626) — producer
//!   amber  (#f59e0b) — transit
//!   blue   (#2563eb) — consumer
//!   purple (#9333ea) — mixed

use std::{fs, path::PathBuf};

use anyhow::bail;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use trafficking_map::{
    app::Event, loader::LoadState, routes::RouteType, search::SearchKey, App, Config, CountryStore, LonLat,
};

#[derive(Debug, Parser)]
#[command(name = "world-map", about = "Render the Latin America trafficking map to SVG and HTML")]
struct Args {
    /// Output directory.
    #[arg(long, default_value = ".", env = "TRAFFICKING_MAP_OUT")]
    out_dir: PathBuf,

    /// Country to select, focusing the view on it (ISO alpha-3).
    #[arg(long)]
    select: Option<String>,

    /// Route types to hide (land, maritime, air).
    #[arg(long = "hide", value_parser = parse_route_type)]
    hide: Vec<RouteType>,

    /// Zoom level, overriding the default or country focus.
    #[arg(long)]
    zoom: Option<f64>,

    /// Canvas width in pixels; below 768 the mobile layout is used.
    #[arg(long, env = "TRAFFICKING_MAP_WIDTH")]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long, env = "TRAFFICKING_MAP_HEIGHT")]
    height: Option<u32>,

    /// Local world GeoJSON file.
    #[arg(long, env = "TRAFFICKING_MAP_GEOJSON")]
    geojson: Option<PathBuf>,
}

fn parse_route_type(s: &str) -> Result<RouteType, String> {
    RouteType::parse(s).ok_or_else(|| format!("unknown route type {s:?}"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "trafficking_map=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let mut config = Config::default();
    if let Some(w) = args.width {
        config.width = w;
    }
    if let Some(h) = args.height {
        config.height = h;
    }
    if let Some(path) = args.geojson {
        config.geojson_path = path;
    }

    let mut app = App::from_config(&config);
    eprintln!("[*] Loading country polygons...");
    app.load_map();
    if let LoadState::Failed { attempts, error } = app.map_state() {
        eprintln!("[!] Map geometry unavailable after {attempts} attempts: {error}");
    }

    if let Some(id) = &args.select {
        let id = id.to_ascii_uppercase();
        if app.store().get_country_by_id(&id).is_none() {
            bail!("unknown country id {id}");
        }
        app.handle(Event::SearchInput(id.clone()));
        let index = app.search().results().iter().position(|r| *r == id);
        match index {
            Some(i) => app.handle(Event::SearchPick(i)),
            None => {
                app.handle(Event::Key(SearchKey::Escape));
                app.handle(Event::Click(id));
            }
        }
    }
    for t in &args.hide {
        if app.visibility().is_enabled(*t) {
            app.handle(Event::ToggleRoute(*t));
        }
    }
    if let Some(zoom) = args.zoom {
        let center: LonLat = app.viewport().center;
        app.handle(Event::Gesture { center, zoom });
    }

    fs::create_dir_all(&args.out_dir)?;
    let svg = app.render_map();
    let svg_path = args.out_dir.join("map.svg");
    fs::write(&svg_path, &svg)?;
    let page = app.render_page();
    let page_path = args.out_dir.join("index.html");
    fs::write(&page_path, &page)?;

    info!(selected = ?app.selected(), zoom = app.viewport().zoom, "rendered");
    eprintln!("[*] Written {} ({} bytes)", svg_path.display(), svg.len());
    eprintln!("[*] Written {} ({} bytes)", page_path.display(), page.len());
    Ok(())
}
