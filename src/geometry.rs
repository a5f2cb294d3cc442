//! Country shapes: GeoJSON features → interactive or background shapes.
//!
//! Base features carry numeric ISO 3166-1 ids which are mapped to the
//! alpha-3 keys the dataset uses. French Guiana is not a distinct shape
//! in the 110m world file (it is part of France's multipolygon), so it
//! comes from a separate overlay document and is always clickable.

use serde_json::Value;

use crate::data::LonLat;
use crate::error::{MapError, Result};

/// Alpha-3 key of the supplementary overlay shape.
pub const OVERLAY_ALPHA3: &str = "GUF";

/// Countries that take part in the simulation.
pub const IN_SCOPE: &[&str] = &[
    "MEX", "GTM", "BLZ", "HND", "SLV", "NIC", "CRI", "PAN", "COL", "VEN", "ECU", "PER", "BOL",
    "BRA", "PRY", "URY", "ARG", "CHL", "GUY", "SUR", "GUF", "CUB", "JAM", "HTI", "DOM", "TTO",
    "PRI", "USA", "CAN",
];

const NUMERIC_TO_ALPHA3: &[(u16, &str)] = &[
    // Americas
    (32, "ARG"),
    (44, "BHS"),
    (68, "BOL"),
    (76, "BRA"),
    (84, "BLZ"),
    (124, "CAN"),
    (152, "CHL"),
    (170, "COL"),
    (188, "CRI"),
    (192, "CUB"),
    (214, "DOM"),
    (218, "ECU"),
    (222, "SLV"),
    (238, "FLK"),
    (254, "GUF"),
    (304, "GRL"),
    (320, "GTM"),
    (328, "GUY"),
    (332, "HTI"),
    (340, "HND"),
    (388, "JAM"),
    (484, "MEX"),
    (558, "NIC"),
    (591, "PAN"),
    (600, "PRY"),
    (604, "PER"),
    (630, "PRI"),
    (740, "SUR"),
    (780, "TTO"),
    (840, "USA"),
    (858, "URY"),
    (862, "VEN"),
    // Destination and reference markets elsewhere
    (36, "AUS"),
    (56, "BEL"),
    (156, "CHN"),
    (250, "FRA"),
    (276, "DEU"),
    (288, "GHA"),
    (356, "IND"),
    (380, "ITA"),
    (528, "NLD"),
    (566, "NGA"),
    (620, "PRT"),
    (643, "RUS"),
    (710, "ZAF"),
    (724, "ESP"),
    (826, "GBR"),
];

/// Alpha-3 key for a numeric geo id such as `"170"` or `"084"`.
///
/// Unmapped or malformed ids give `""`, which renders as a
/// non-interactive background shape.
pub fn alpha3_for(numeric_geo_id: &str) -> &'static str {
    let Ok(code) = numeric_geo_id.trim().parse::<u16>() else {
        return "";
    };
    NUMERIC_TO_ALPHA3
        .iter()
        .find(|(n, _)| *n == code)
        .map(|(_, a)| *a)
        .unwrap_or("")
}

pub fn is_in_scope(alpha3: &str) -> bool {
    IN_SCOPE.contains(&alpha3)
}

/// Whether a shape responds to selection. Independent of dataset coverage.
pub fn is_clickable(alpha3: &str) -> bool {
    alpha3 == OVERLAY_ALPHA3 || is_in_scope(alpha3)
}

// ---------------------------------------------------------------------------
// Projection (equirectangular, composed with the viewport)
// ---------------------------------------------------------------------------

/// Equirectangular projection onto a `width` × `height` canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub width: f64,
    pub height: f64,
}

impl Projection {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn project(&self, p: LonLat) -> (f64, f64) {
        (
            (p.lon + 180.0) / 360.0 * self.width,
            (90.0 - p.lat) / 180.0 * self.height,
        )
    }

    #[inline]
    pub fn unproject(&self, x: f64, y: f64) -> LonLat {
        LonLat::new(x / self.width * 360.0 - 180.0, 90.0 - y / self.height * 180.0)
    }

    /// Canvas position of `p` with `center` in the middle at `zoom`.
    pub fn to_screen(&self, p: LonLat, center: LonLat, zoom: f64) -> (f64, f64) {
        let (x, y) = self.project(p);
        let (cx, cy) = self.project(center);
        (
            (x - cx) * zoom + self.width / 2.0,
            (y - cy) * zoom + self.height / 2.0,
        )
    }

    pub fn from_screen(&self, sx: f64, sy: f64, center: LonLat, zoom: f64) -> LonLat {
        let (cx, cy) = self.project(center);
        self.unproject(
            (sx - self.width / 2.0) / zoom + cx,
            (sy - self.height / 2.0) / zoom + cy,
        )
    }
}

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeLayer {
    Base,
    Overlay,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapShape {
    /// `""` for features outside the lookup table.
    pub alpha3: &'static str,
    pub name: String,
    pub clickable: bool,
    pub layer: ShapeLayer,
    pub rings: Vec<Vec<LonLat>>,
}

impl MapShape {
    /// Even-odd containment over all rings, so holes are excluded.
    pub fn contains(&self, p: LonLat) -> bool {
        self.rings
            .iter()
            .filter(|ring| ring_contains(ring, p))
            .count()
            % 2
            == 1
    }
}

/// Both shape layers, ready to render and hit-test.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapGeometry {
    pub base: Vec<MapShape>,
    pub overlay: Vec<MapShape>,
}

impl MapGeometry {
    pub fn from_geojson(world: &Value, overlay: &Value) -> Result<Self> {
        let base = features(world)?
            .iter()
            .map(|f| {
                let alpha3 = alpha3_for(&numeric_id(f).unwrap_or_default());
                shape(f, alpha3, is_clickable(alpha3), ShapeLayer::Base)
            })
            .collect();
        let overlay = features(overlay)?
            .iter()
            .map(|f| shape(f, OVERLAY_ALPHA3, true, ShapeLayer::Overlay))
            .collect();
        Ok(Self { base, overlay })
    }

    /// Topmost clickable shape under `p`. Overlay shapes sit above the base layer.
    pub fn clickable_at(&self, p: LonLat) -> Option<&MapShape> {
        self.overlay
            .iter()
            .chain(self.base.iter())
            .find(|s| s.clickable && s.contains(p))
    }

    pub fn shape_count(&self) -> usize {
        self.base.len() + self.overlay.len()
    }
}

fn features(doc: &Value) -> Result<&Vec<Value>> {
    match doc["type"].as_str() {
        Some("FeatureCollection") => doc["features"]
            .as_array()
            .ok_or_else(|| MapError::GeoJson("FeatureCollection without features".into())),
        Some(other) => Err(MapError::GeoJson(format!(
            "expected a FeatureCollection, got {other}"
        ))),
        None => Err(MapError::GeoJson("missing top-level type".into())),
    }
}

/// Numeric id from `id` or the Natural Earth `ISO_N3` property.
fn numeric_id(feature: &Value) -> Option<String> {
    let from = |v: &Value| match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    };
    from(&feature["id"])
        .filter(|s| s.trim().parse::<u16>().is_ok())
        .or_else(|| from(&feature["properties"]["ISO_N3"]))
        .or_else(|| from(&feature["properties"]["iso_n3"]))
}

fn shape(feature: &Value, alpha3: &'static str, clickable: bool, layer: ShapeLayer) -> MapShape {
    let props = &feature["properties"];
    let name = props["NAME"]
        .as_str()
        .or_else(|| props["name"].as_str())
        .unwrap_or_default()
        .to_string();
    MapShape {
        alpha3,
        name,
        clickable,
        layer,
        rings: geometry_rings(&feature["geometry"]),
    }
}

fn ring(coords: &[Value]) -> Vec<LonLat> {
    coords
        .iter()
        .filter_map(|pt| {
            let arr = pt.as_array()?;
            let lon = arr.first()?.as_f64()?;
            let lat = arr.get(1)?.as_f64()?;
            Some(LonLat::new(lon, lat))
        })
        .collect()
}

fn geometry_rings(geom: &Value) -> Vec<Vec<LonLat>> {
    let mut rings = Vec::new();
    match geom["type"].as_str().unwrap_or("") {
        "Polygon" => {
            if let Some(rs) = geom["coordinates"].as_array() {
                for r in rs {
                    if let Some(pts) = r.as_array() { rings.push(ring(pts)); }
                }
            }
        }
        "MultiPolygon" => {
            if let Some(polys) = geom["coordinates"].as_array() {
                for poly in polys {
                    if let Some(rs) = poly.as_array() {
                        for r in rs {
                            if let Some(pts) = r.as_array() { rings.push(ring(pts)); }
                        }
                    }
                }
            }
        }
        _ => {}
    }
    rings.retain(|r| r.len() >= 3);
    rings
}

/// Ray casting in lon/lat space.
fn ring_contains(ring: &[LonLat], p: LonLat) -> bool {
    let mut inside = false;
    let mut j = ring.len().wrapping_sub(1);
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.lat > p.lat) != (b.lat > p.lat)
            && p.lon < (b.lon - a.lon) * (p.lat - a.lat) / (b.lat - a.lat) + a.lon
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
