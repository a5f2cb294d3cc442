//! build.rs — download build-time assets once.
//!
//! Assets downloaded:
//!   1. Natural Earth 110m admin-0 country GeoJSON → assets/world.geojson
//!
//! The supplementary French Guiana overlay (assets/french-guiana.geojson)
//! is checked in and never downloaded.
//!
//! A failed download is not fatal: the runtime loader retries against
//! the same URL (see `TRAFFICKING_MAP_GEOJSON_URL`).

use std::{env, fs, io::Read, path::Path, time::Duration};

const GEOJSON_URL: &str =
    "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_110m_admin_0_countries.geojson";
const GEOJSON_PATH: &str = "assets/world.geojson";
const TIMEOUT: Duration = Duration::from_secs(20);

fn main() {
    println!("cargo:rerun-if-changed={GEOJSON_PATH}");
    println!("cargo:rerun-if-env-changed=TRAFFICKING_MAP_SKIP_DOWNLOAD");

    if env::var_os("TRAFFICKING_MAP_SKIP_DOWNLOAD").is_some() {
        return;
    }

    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") else {
        return;
    };
    let assets = Path::new(&manifest_dir).join("assets");
    if let Err(e) = fs::create_dir_all(&assets) {
        println!("cargo:warning=could not create assets/ directory: {e}");
        return;
    }

    let geojson_dest = assets.join("world.geojson");
    if geojson_dest.exists() {
        eprintln!("[build] world.geojson already present, skipping.");
        return;
    }

    eprintln!("[build] Downloading world.geojson ...");
    match fetch(GEOJSON_URL) {
        Ok(body) => match fs::write(&geojson_dest, &body) {
            Ok(()) => eprintln!("[build] Saved {} bytes → {GEOJSON_PATH}", body.len()),
            Err(e) => println!("cargo:warning=failed to write world.geojson: {e}"),
        },
        Err(e) => {
            println!("cargo:warning=world.geojson download failed ({e}); the map will be fetched at runtime");
        }
    }
}

fn fetch(url: &str) -> Result<Vec<u8>, String> {
    let agent = ureq::AgentBuilder::new().timeout(TIMEOUT).build();
    let resp = agent
        .get(url)
        .set("Accept-Encoding", "identity")
        .call()
        .map_err(|e| format!("GET {url} failed: {e}"))?;
    let mut buf = Vec::new();
    resp.into_reader()
        .read_to_end(&mut buf)
        .map_err(|e| format!("failed to read response body: {e}"))?;
    Ok(buf)
}
