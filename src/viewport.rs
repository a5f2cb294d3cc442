//! Zoom and center of the map.
//!
//! One authoritative `{zoom, center}` pair. Programmatic commands
//! (buttons, search focus) and gesture reports both write it; the last
//! writer wins. The route layer reads a quantised view of the same zoom
//! (see [`RefreshGranularity`]) so intermediate gesture frames do not
//! force a route re-render.

use serde::Serialize;

use crate::data::LonLat;
use crate::layout::LayoutMode;

pub const MIN_ZOOM: f64 = 0.8;
pub const MAX_ZOOM: f64 = 8.0;
pub const ZOOM_FACTOR: f64 = 1.3;

/// Pan distance in degrees at zoom 1.
pub const PAN_STEP: f64 = 10.0;

pub const DEFAULT_CENTER: LonLat = LonLat::new(-80.0, 10.0);
pub const DEFAULT_ZOOM: f64 = 2.0;
pub const DEFAULT_ZOOM_MOBILE: f64 = 1.2;

/// Zoom applied when a search result is selected.
pub const COUNTRY_FOCUS_ZOOM: f64 = 4.0;

/// Bounds the center may move within (west/south, east/north corners).
pub const TRANSLATE_EXTENT: (LonLat, LonLat) = (LonLat::new(-180.0, -60.0), LonLat::new(0.0, 75.0));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "north" => Some(PanDirection::Up),
            "down" | "south" => Some(PanDirection::Down),
            "left" | "west" => Some(PanDirection::Left),
            "right" | "east" => Some(PanDirection::Right),
            _ => None,
        }
    }
}

/// How finely the route layer follows zoom changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum RefreshGranularity {
    /// Route styling tracks every zoom value.
    Continuous,
    /// Route zoom snaps to this many levels per doubling of zoom.
    StepsPerDoubling(u32),
}

impl Default for RefreshGranularity {
    fn default() -> Self {
        RefreshGranularity::StepsPerDoubling(4)
    }
}

impl RefreshGranularity {
    pub fn quantize(self, zoom: f64) -> f64 {
        match self {
            RefreshGranularity::Continuous | RefreshGranularity::StepsPerDoubling(0) => zoom,
            RefreshGranularity::StepsPerDoubling(steps) => {
                let steps = f64::from(steps);
                let level = (zoom.log2() * steps).round() / steps;
                level.exp2().clamp(MIN_ZOOM, MAX_ZOOM)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportState {
    pub zoom: f64,
    pub center: LonLat,
    #[serde(skip)]
    pub refresh: RefreshGranularity,
}

impl ViewportState {
    pub fn new(layout: LayoutMode) -> Self {
        Self {
            zoom: default_zoom(layout),
            center: DEFAULT_CENTER,
            refresh: RefreshGranularity::default(),
        }
    }

    pub fn with_refresh(mut self, refresh: RefreshGranularity) -> Self {
        self.refresh = refresh;
        self
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_FACTOR);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_FACTOR);
    }

    /// Moves the center by `PAN_STEP / zoom` degrees on one axis, so a
    /// step covers the same screen distance at every zoom.
    pub fn pan(&mut self, direction: PanDirection) {
        let step = PAN_STEP / self.zoom;
        let LonLat { lon, lat } = self.center;
        let next = match direction {
            PanDirection::Up => LonLat::new(lon, lat + step),
            PanDirection::Down => LonLat::new(lon, lat - step),
            PanDirection::Left => LonLat::new(lon - step, lat),
            PanDirection::Right => LonLat::new(lon + step, lat),
        };
        self.set_center(next);
    }

    pub fn reset(&mut self, layout: LayoutMode) {
        self.zoom = default_zoom(layout);
        self.center = DEFAULT_CENTER;
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn set_center(&mut self, center: LonLat) {
        let (min, max) = TRANSLATE_EXTENT;
        if center.lon.is_finite() && center.lat.is_finite() {
            self.center = LonLat::new(
                center.lon.clamp(min.lon, max.lon),
                center.lat.clamp(min.lat, max.lat),
            );
        }
    }

    /// Result of a drag or wheel gesture. Overrides any earlier command.
    pub fn on_gesture(&mut self, center: LonLat, zoom: f64) {
        self.set_center(center);
        self.set_zoom(zoom);
    }

    /// Zoom used for route stroke widths and dash lengths.
    pub fn route_zoom(&self) -> f64 {
        self.refresh.quantize(self.zoom)
    }
}

pub fn default_zoom(layout: LayoutMode) -> f64 {
    match layout {
        LayoutMode::Mobile => DEFAULT_ZOOM_MOBILE,
        LayoutMode::Desktop => DEFAULT_ZOOM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(zoom: f64) -> ViewportState {
        let mut v = ViewportState::new(LayoutMode::Desktop);
        v.set_zoom(zoom);
        v
    }

    #[test]
    fn zoom_in_then_out_restores_zoom_below_the_ceiling() {
        let mut z = MIN_ZOOM;
        while z * ZOOM_FACTOR <= MAX_ZOOM {
            let mut v = at(z);
            v.zoom_in();
            v.zoom_out();
            assert!((v.zoom - z).abs() < 1e-9, "z = {z}");
            z += 0.1;
        }
    }

    #[test]
    fn zoom_stays_within_bounds() {
        let mut v = at(1.0);
        for _ in 0..50 {
            v.zoom_in();
            assert!(v.zoom <= MAX_ZOOM);
        }
        assert_eq!(v.zoom, MAX_ZOOM);
        for _ in 0..50 {
            v.zoom_out();
            assert!(v.zoom >= MIN_ZOOM);
        }
        assert_eq!(v.zoom, MIN_ZOOM);
    }

    #[test]
    fn pan_step_is_inverse_to_zoom() {
        let mut a = at(2.0);
        let start_a = a.center;
        a.pan(PanDirection::Up);
        let mut b = at(4.0);
        let start_b = b.center;
        b.pan(PanDirection::Up);

        let da = a.center.lat - start_a.lat;
        let db = b.center.lat - start_b.lat;
        assert!((da - PAN_STEP / 2.0).abs() < 1e-9);
        assert!((db - da / 2.0).abs() < 1e-9);
        assert_eq!(a.center.lon, start_a.lon);
    }

    #[test]
    fn each_direction_moves_one_axis() {
        let mut v = at(1.0);
        v.pan(PanDirection::Left);
        assert_eq!(v.center, LonLat::new(DEFAULT_CENTER.lon - PAN_STEP, DEFAULT_CENTER.lat));
        v.pan(PanDirection::Right);
        v.pan(PanDirection::Down);
        assert_eq!(v.center, LonLat::new(DEFAULT_CENTER.lon, DEFAULT_CENTER.lat - PAN_STEP));
    }

    #[test]
    fn center_is_clamped_to_extent() {
        let mut v = at(MIN_ZOOM);
        for _ in 0..100 {
            v.pan(PanDirection::Up);
        }
        assert_eq!(v.center.lat, TRANSLATE_EXTENT.1.lat);
        v.set_center(LonLat::new(120.0, -89.0));
        assert_eq!(v.center, LonLat::new(TRANSLATE_EXTENT.1.lon, TRANSLATE_EXTENT.0.lat));
    }

    #[test]
    fn reset_depends_on_layout() {
        let mut v = at(6.0);
        v.pan(PanDirection::Left);
        v.reset(LayoutMode::Mobile);
        assert_eq!(v.zoom, DEFAULT_ZOOM_MOBILE);
        assert_eq!(v.center, DEFAULT_CENTER);
        v.reset(LayoutMode::Desktop);
        assert_eq!(v.zoom, DEFAULT_ZOOM);
        assert!(DEFAULT_ZOOM_MOBILE < DEFAULT_ZOOM);
    }

    #[test]
    fn gesture_overrides_last_command() {
        let mut v = at(2.0);
        v.zoom_in();
        v.on_gesture(LonLat::new(-60.0, -20.0), 3.3);
        assert_eq!(v.zoom, 3.3);
        assert_eq!(v.center, LonLat::new(-60.0, -20.0));
        v.on_gesture(LonLat::new(-60.0, -20.0), 40.0);
        assert_eq!(v.zoom, MAX_ZOOM);
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut v = at(2.0);
        v.set_zoom(f64::NAN);
        v.set_center(LonLat::new(f64::INFINITY, 0.0));
        assert_eq!(v.zoom, 2.0);
        assert_eq!(v.center, DEFAULT_CENTER);
    }

    #[test]
    fn route_zoom_snaps_to_steps() {
        let v = at(2.1);
        assert!((v.route_zoom() - 2.0).abs() < 1e-9);
        let fine = at(2.1).with_refresh(RefreshGranularity::Continuous);
        assert_eq!(fine.route_zoom(), 2.1);
        // Small gesture jitter does not change the route zoom.
        assert_eq!(at(2.02).route_zoom(), at(1.98).route_zoom());
    }
}
