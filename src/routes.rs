//! Route overlay: which routes are shown and how they are stroked.

use std::collections::BTreeSet;

use serde::Serialize;

pub use crate::data::routes::{RouteType, TraffickingRoute, Volume};

pub const MIN_STROKE: f64 = 0.15;
pub const MAX_STROKE: f64 = 3.0;

/// Route types currently enabled in the legend. Defaults to all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteVisibility(BTreeSet<RouteType>);

impl Default for RouteVisibility {
    fn default() -> Self {
        Self(RouteType::ALL.into_iter().collect())
    }
}

impl RouteVisibility {
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn only(types: &[RouteType]) -> Self {
        Self(types.iter().copied().collect())
    }

    pub fn is_enabled(&self, route_type: RouteType) -> bool {
        self.0.contains(&route_type)
    }

    /// Flips one type; returns whether it is now enabled.
    pub fn toggle(&mut self, route_type: RouteType) -> bool {
        if self.0.remove(&route_type) {
            false
        } else {
            self.0.insert(route_type);
            true
        }
    }

    pub fn set(&mut self, route_type: RouteType, enabled: bool) {
        if enabled {
            self.0.insert(route_type);
        } else {
            self.0.remove(&route_type);
        }
    }
}

/// Routes whose type is enabled, in their original order.
pub fn visible_routes<'a>(
    all: &'a [TraffickingRoute],
    enabled: &RouteVisibility,
) -> Vec<&'a TraffickingRoute> {
    all.iter().filter(|r| enabled.is_enabled(r.route_type)).collect()
}

fn base_width(volume: Volume) -> f64 {
    match volume {
        Volume::High => 0.6,
        Volume::Medium => 0.4,
        Volume::Low => 0.25,
    }
}

pub fn stroke_width(volume: Volume, zoom: f64) -> f64 {
    (base_width(volume) * zoom.powf(0.4)).clamp(MIN_STROKE, MAX_STROKE)
}

/// `(dash, gap)` lengths for a route type at `zoom`.
pub fn dash_pattern(route_type: RouteType, zoom: f64) -> (f64, f64) {
    let (dash, gap) = match route_type {
        RouteType::Land => (4.0, 2.0),
        RouteType::Maritime => (6.0, 3.0),
        RouteType::Air => (1.5, 3.0),
    };
    let scale = zoom.powf(0.3);
    (dash * scale, gap * scale)
}

/// Seconds per dash-offset cycle; independent of zoom.
pub fn animation_secs(route_type: RouteType) -> f64 {
    match route_type {
        RouteType::Land => 2.0,
        RouteType::Maritime => 3.0,
        RouteType::Air => 1.5,
    }
}

pub fn route_color(route_type: RouteType) -> &'static str {
    match route_type {
        RouteType::Land => "#b45309",
        RouteType::Maritime => "#0284c7",
        RouteType::Air => "#16a34a",
    }
}

/// Everything needed to stroke one route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStyle {
    pub color: &'static str,
    pub width: f64,
    pub dash: (f64, f64),
    pub animation_secs: f64,
}

impl RouteStyle {
    pub fn for_route(route: &TraffickingRoute, zoom: f64) -> Self {
        Self {
            color: route_color(route.route_type),
            width: stroke_width(route.volume, zoom),
            dash: dash_pattern(route.route_type, zoom),
            animation_secs: animation_secs(route.route_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ROUTES;

    #[test]
    fn filter_keeps_exactly_enabled_types_in_order() {
        let enabled = RouteVisibility::only(&[RouteType::Land, RouteType::Air]);
        let visible = visible_routes(ROUTES, &enabled);

        let expected: Vec<_> = ROUTES
            .iter()
            .filter(|r| r.route_type != RouteType::Maritime)
            .collect();
        assert_eq!(visible, expected);
        assert_eq!(visible, visible_routes(ROUTES, &enabled));
    }

    #[test]
    fn default_shows_everything_and_none_shows_nothing() {
        assert_eq!(visible_routes(ROUTES, &RouteVisibility::default()).len(), ROUTES.len());
        assert!(visible_routes(ROUTES, &RouteVisibility::none()).is_empty());
        assert!(visible_routes(&[], &RouteVisibility::default()).is_empty());
    }

    #[test]
    fn toggle_flips_one_type() {
        let mut v = RouteVisibility::default();
        assert!(!v.toggle(RouteType::Air));
        assert!(!v.is_enabled(RouteType::Air));
        assert!(v.is_enabled(RouteType::Land));
        assert!(v.toggle(RouteType::Air));
        assert_eq!(v, RouteVisibility::default());
    }

    #[test]
    fn stroke_width_follows_volume_and_is_clamped() {
        assert!((stroke_width(Volume::High, 1.0) - 0.6).abs() < 1e-12);
        assert!(stroke_width(Volume::High, 2.0) > stroke_width(Volume::Medium, 2.0));
        assert!(stroke_width(Volume::Medium, 2.0) > stroke_width(Volume::Low, 2.0));
        assert_eq!(stroke_width(Volume::High, 1e6), MAX_STROKE);
        assert_eq!(stroke_width(Volume::Low, 1e-6), MIN_STROKE);
    }

    #[test]
    fn dash_scales_with_zoom_and_differs_per_type() {
        let (d1, g1) = dash_pattern(RouteType::Land, 1.0);
        let (d8, g8) = dash_pattern(RouteType::Land, 8.0);
        let k = 8f64.powf(0.3);
        assert!((d8 - d1 * k).abs() < 1e-9 && (g8 - g1 * k).abs() < 1e-9);
        assert_ne!(dash_pattern(RouteType::Land, 1.0), dash_pattern(RouteType::Maritime, 1.0));
        assert_ne!(dash_pattern(RouteType::Maritime, 1.0), dash_pattern(RouteType::Air, 1.0));
    }

    #[test]
    fn animation_is_per_type() {
        assert_eq!(animation_secs(RouteType::Land), 2.0);
        assert_eq!(animation_secs(RouteType::Maritime), 3.0);
        assert_eq!(animation_secs(RouteType::Air), 1.5);
    }
}
