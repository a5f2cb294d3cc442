//! SVG rendering of the map canvas.
//!
//! Shapes, routes and labels are drawn in projected map units inside one
//! viewport group (`translate` + `scale`), so panning and zooming only
//! change that group's transform. Legend, controls and the tooltip are
//! drawn in screen space on top.

use std::fmt::Write as _;

use crate::data::{Country, LonLat, Role};
use crate::geometry::{MapGeometry, MapShape, Projection};
use crate::layout::LayoutMode;
use crate::loader::LoadState;
use crate::panel::escape;
use crate::policy::{self, RoleMap};
use crate::routes::{self, RouteStyle, RouteType, RouteVisibility, TraffickingRoute};
use crate::viewport::ViewportState;

const OCEAN: &str = "#0c1a2e";
const GRATICULE: &str = "#162032";
const BORDER: &str = "#1e293b";
const SELECTED_BORDER: &str = "#f8fafc";

const BASE_LABEL_PX: f64 = 6.0;
const MIN_LABEL_PX: f64 = 1.5;
const MAX_LABEL_PX: f64 = 10.0;

/// Label size in map units; shrinks as the map is zoomed so it stays legible.
pub fn label_size(zoom: f64) -> f64 {
    (BASE_LABEL_PX / zoom.sqrt()).clamp(MIN_LABEL_PX, MAX_LABEL_PX)
}

/// Floating hover card over a clickable country.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub name: String,
    pub role: Option<Role>,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendState {
    pub layout: LayoutMode,
    /// Only consulted on mobile; the desktop legend is always expanded.
    pub expanded: bool,
}

impl LegendState {
    pub fn is_expanded(&self) -> bool {
        !self.layout.is_mobile() || self.expanded
    }
}

/// Everything the canvas needs for one frame.
pub struct MapScene<'a> {
    pub geometry: &'a MapGeometry,
    pub projection: Projection,
    pub viewport: &'a ViewportState,
    pub selected: Option<&'a str>,
    pub visibility: &'a RouteVisibility,
    pub roles: &'a RoleMap,
    pub countries: &'a [Country],
    pub legend: LegendState,
    pub tooltip: Option<&'a Tooltip>,
}

// ---------------------------------------------------------------------------
// Route layer
// ---------------------------------------------------------------------------

/// Caches the route layer keyed on route zoom and enabled types, so it is
/// rebuilt only when one of them changes.
#[derive(Debug, Default)]
pub struct RouteLayerCache {
    key: Option<(u64, RouteVisibility, u64, u64)>,
    svg: String,
    builds: u32,
}

impl RouteLayerCache {
    pub fn layer(
        &mut self,
        all: &[TraffickingRoute],
        visibility: &RouteVisibility,
        route_zoom: f64,
        projection: Projection,
    ) -> &str {
        let key = (
            route_zoom.to_bits(),
            visibility.clone(),
            projection.width.to_bits(),
            projection.height.to_bits(),
        );
        if self.key.as_ref() != Some(&key) {
            self.svg = route_layer(all, visibility, route_zoom, projection);
            self.key = Some(key);
            self.builds += 1;
        }
        &self.svg
    }

    /// How many times the layer has been rebuilt.
    pub fn builds(&self) -> u32 {
        self.builds
    }
}

pub fn route_layer(
    all: &[TraffickingRoute],
    visibility: &RouteVisibility,
    route_zoom: f64,
    projection: Projection,
) -> String {
    let mut s = String::from("  <g class='routes' fill='none' stroke-linecap='round'>\n");
    for route in routes::visible_routes(all, visibility) {
        let style = RouteStyle::for_route(route, route_zoom);
        let (x0, y0) = projection.project(route.origin_hub);
        let (x1, y1) = projection.project(route.destination_hub);
        let (cx, cy) = control_point((x0, y0), (x1, y1));
        let (dash, gap) = style.dash;
        let title = route
            .description
            .map(|d| format!("<title>{}</title>", escape(d)))
            .unwrap_or_default();
        let _ = writeln!(
            s,
            "    <path id='route-{id}' class='route route-{kind}' d='M{x0:.2},{y0:.2} Q{cx:.2},{cy:.2} {x1:.2},{y1:.2}' \
             stroke='{color}' stroke-width='{width:.3}' stroke-dasharray='{dash:.2} {gap:.2}'>{title}\
             <animate attributeName='stroke-dashoffset' from='{period:.2}' to='0' dur='{secs}s' repeatCount='indefinite'/></path>",
            id = route.id,
            kind = route.route_type.label().to_ascii_lowercase(),
            color = style.color,
            width = style.width,
            period = dash + gap,
            secs = style.animation_secs,
        );
    }
    s.push_str("  </g>\n");
    s
}

/// Control point lifted perpendicular to the chord, for a gentle arc.
fn control_point((x0, y0): (f64, f64), (x1, y1): (f64, f64)) -> (f64, f64) {
    let (mx, my) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
    let (dx, dy) = (x1 - x0, y1 - y0);
    (mx - dy * 0.2, my + dx * 0.2)
}

// ---------------------------------------------------------------------------
// GeoJSON rings → SVG paths
// ---------------------------------------------------------------------------

fn ring_to_path(ring: &[LonLat], projection: Projection) -> String {
    let mut d = String::new();
    for (i, pt) in ring.iter().enumerate() {
        let (x, y) = projection.project(*pt);
        if i == 0 { let _ = write!(d, "M{x:.2},{y:.2}"); }
        else       { let _ = write!(d, "L{x:.2},{y:.2}"); }
    }
    d.push('Z');
    d
}

fn shape_path(shape: &MapShape, projection: Projection) -> String {
    shape
        .rings
        .iter()
        .map(|r| ring_to_path(r, projection))
        .collect::<Vec<_>>()
        .join("")
}

fn push_shapes(s: &mut String, shapes: &[MapShape], scene: &MapScene<'_>, class: &str) {
    let _ = writeln!(s, "  <g class='{class}' stroke='{BORDER}' stroke-width='0.3' fill-rule='evenodd'>");
    for shape in shapes {
        let fill = policy::color_for(shape.alpha3, scene.selected, scene.roles);
        let d = shape_path(shape, scene.projection);
        let selected = !shape.alpha3.is_empty() && scene.selected == Some(shape.alpha3);
        let extra = if selected {
            format!(" stroke='{SELECTED_BORDER}' stroke-width='0.8'")
        } else {
            String::new()
        };
        if shape.clickable {
            let _ = writeln!(
                s,
                "    <path class='country clickable' data-id='{}' fill='{fill}'{extra} d='{d}'/>",
                shape.alpha3
            );
        } else {
            let _ = writeln!(s, "    <path class='country' fill='{fill}' d='{d}'/>");
        }
    }
    s.push_str("  </g>\n");
}

fn push_labels(s: &mut String, scene: &MapScene<'_>) {
    let size = label_size(scene.viewport.zoom);
    let _ = writeln!(
        s,
        "  <g class='labels' font-family='sans-serif' font-size='{size:.2}' fill='#f8fafc' text-anchor='middle' pointer-events='none'>"
    );
    for c in scene.countries {
        let Some(center) = c.center else { continue };
        let (x, y) = scene.projection.project(center);
        let (weight, opacity) = match scene.selected {
            Some(id) if id == c.id => ("bold", 1.0),
            Some(_) => ("normal", 0.4),
            None => ("normal", 0.85),
        };
        let _ = writeln!(
            s,
            "    <text x='{x:.2}' y='{y:.2}' font-weight='{weight}' opacity='{opacity}'>{}</text>",
            escape(c.name)
        );
    }
    s.push_str("  </g>\n");
}

fn push_legend(s: &mut String, scene: &MapScene<'_>, height: f64) {
    let lx = 16.0_f64;
    s.push_str("  <g class='legend' font-family='monospace' font-size='12' fill='#e2e8f0'>\n");
    if !scene.legend.is_expanded() {
        let _ = writeln!(
            s,
            "    <text x='{lx:.1}' y='{:.1}' data-action='toggle-legend'>Legend ▸</text>",
            height - 16.0
        );
        s.push_str("  </g>\n");
        return;
    }

    let mut ly = height - 20.0 * (Role::ALL.len() + RouteType::ALL.len()) as f64 - 10.0;
    if scene.legend.layout.is_mobile() {
        let _ = writeln!(s, "    <text x='{lx:.1}' y='{:.1}' data-action='toggle-legend'>Legend ▾</text>", ly - 18.0);
    }
    for role in Role::ALL {
        let color = policy::role_color(role);
        let _ = writeln!(s, "    <rect x='{lx:.1}' y='{:.1}' width='12' height='12' fill='{color}'/>", ly - 6.0);
        let _ = writeln!(s, "    <text x='{:.1}' y='{:.1}'>{}</text>", lx + 18.0, ly + 4.5, role.label());
        ly += 20.0;
    }
    for t in RouteType::ALL {
        let on = scene.visibility.is_enabled(t);
        let color = routes::route_color(t);
        let (opacity, state) = if on { (1.0, "on") } else { (0.35, "off") };
        let _ = writeln!(
            s,
            "    <g data-action='toggle-route:{kind}' opacity='{opacity}'>\
             <line x1='{lx:.1}' y1='{ly:.1}' x2='{:.1}' y2='{ly:.1}' stroke='{color}' stroke-width='3' stroke-dasharray='4 2'/>\
             <text x='{:.1}' y='{:.1}'>{} ({state})</text></g>",
            lx + 12.0,
            lx + 18.0,
            ly + 4.5,
            t.label(),
            kind = t.label().to_ascii_lowercase(),
        );
        ly += 20.0;
    }
    s.push_str("  </g>\n");
}

fn push_controls(s: &mut String, width: f64) {
    let x = width - 40.0;
    s.push_str("  <g class='controls' font-family='monospace' font-size='14' fill='#e2e8f0' text-anchor='middle'>\n");
    let buttons = [
        ("zoom-in", "+"),
        ("zoom-out", "−"),
        ("pan-up", "↑"),
        ("pan-down", "↓"),
        ("pan-left", "←"),
        ("pan-right", "→"),
        ("reset", "⟲"),
    ];
    for (i, (action, glyph)) in buttons.iter().enumerate() {
        let y = 20.0 + i as f64 * 28.0;
        let _ = writeln!(
            s,
            "    <g data-action='{action}'><rect x='{:.1}' y='{y:.1}' width='24' height='24' rx='4' fill='#1e293b'/>\
             <text x='{x:.1}' y='{:.1}'>{glyph}</text></g>",
            x - 12.0,
            y + 17.0
        );
    }
    s.push_str("  </g>\n");
}

fn push_tooltip(s: &mut String, tooltip: &Tooltip) {
    let role = tooltip.role.map(|r| format!(" · {r}")).unwrap_or_default();
    let text = format!("{}{role}", escape(&tooltip.name));
    let w = 8.0 + text.chars().count() as f64 * 7.0;
    let (x, y) = (tooltip.x + 12.0, tooltip.y + 12.0);
    let _ = writeln!(
        s,
        "  <g class='tooltip' pointer-events='none'><rect x='{x:.1}' y='{y:.1}' width='{w:.1}' height='20' rx='3' fill='#0f172a' opacity='0.9'/>\
         <text x='{:.1}' y='{:.1}' font-family='sans-serif' font-size='12' fill='#f8fafc'>{text}</text></g>",
        x + 4.0,
        y + 14.0
    );
}

fn svg_open(s: &mut String, w: f64, h: f64) {
    let _ = write!(
        s,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <title>Drug Trafficking in Latin America</title>
  <desc>Countries coloured by role in the trafficking network, with trafficking routes.</desc>
"#
    );
    let _ = writeln!(s, "  <rect width='{w}' height='{h}' fill='{OCEAN}'/>");
}

/// Renders one frame. `route_layer` comes from a [`RouteLayerCache`].
pub fn render_svg(scene: &MapScene<'_>, route_layer: &str) -> String {
    let Projection { width: w, height: h } = scene.projection;
    let mut s = String::with_capacity(1 << 20);
    svg_open(&mut s, w, h);

    let zoom = scene.viewport.zoom;
    let (cx, cy) = scene.projection.project(scene.viewport.center);
    let _ = writeln!(
        s,
        "  <g class='viewport' transform='translate({:.3},{:.3}) scale({zoom:.4})'>",
        w / 2.0 - cx * zoom,
        h / 2.0 - cy * zoom
    );

    // graticule
    let _ = writeln!(s, "  <g stroke='{GRATICULE}' stroke-width='0.5'>");
    for lon in (-180..=180).step_by(30) {
        let (x, _) = scene.projection.project(LonLat::new(lon as f64, 0.0));
        let _ = writeln!(s, "    <line x1='{x:.1}' y1='0' x2='{x:.1}' y2='{h}'/>");
    }
    for lat in (-90..=90).step_by(30) {
        let (_, y) = scene.projection.project(LonLat::new(0.0, lat as f64));
        let _ = writeln!(s, "    <line x1='0' y1='{y:.1}' x2='{w}' y2='{y:.1}'/>");
    }
    s.push_str("  </g>\n");

    push_shapes(&mut s, &scene.geometry.base, scene, "countries");
    push_shapes(&mut s, &scene.geometry.overlay, scene, "overlay");
    s.push_str(route_layer);
    push_labels(&mut s, scene);
    s.push_str("  </g>\n");

    push_legend(&mut s, scene, h);
    push_controls(&mut s, w);
    if let Some(t) = scene.tooltip {
        push_tooltip(&mut s, t);
    }
    s.push_str("</svg>\n");
    s
}

/// Map area while geometry is loading or after the load gave up.
pub fn render_placeholder(state: &LoadState, projection: Projection) -> String {
    let Projection { width: w, height: h } = projection;
    let mut s = String::new();
    svg_open(&mut s, w, h);
    let (x, y) = (w / 2.0, h / 2.0);
    s.push_str("  <g font-family='sans-serif' fill='#e2e8f0' text-anchor='middle'>\n");
    match state {
        LoadState::Failed { attempts, error } => {
            let _ = writeln!(s, "    <text x='{x:.1}' y='{:.1}' font-size='18'>Map failed to load</text>", y - 20.0);
            let _ = writeln!(
                s,
                "    <text x='{x:.1}' y='{y:.1}' font-size='12' fill='#94a3b8'>{} (after {attempts} attempts)</text>",
                escape(error)
            );
            let _ = writeln!(s, "    <text x='{x:.1}' y='{:.1}' font-size='14' data-action='retry-map'>Retry</text>", y + 30.0);
        }
        _ => {
            let _ = writeln!(s, "    <text x='{x:.1}' y='{y:.1}' font-size='16'>Loading map…</text>");
        }
    }
    s.push_str("  </g>\n</svg>\n");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{StaticDataset, COUNTRIES, ROUTES};
    use crate::geometry::ShapeLayer;
    use crate::policy::role_map;

    fn geometry() -> MapGeometry {
        let square = |alpha3: &'static str, clickable, layer| MapShape {
            alpha3,
            name: alpha3.to_string(),
            clickable,
            layer,
            rings: vec![vec![
                LonLat::new(-79.0, -4.0),
                LonLat::new(-67.0, -4.0),
                LonLat::new(-67.0, 12.0),
                LonLat::new(-79.0, 12.0),
            ]],
        };
        MapGeometry {
            base: vec![square("COL", true, ShapeLayer::Base), square("FRA", false, ShapeLayer::Base)],
            overlay: vec![square("GUF", true, ShapeLayer::Overlay)],
        }
    }

    fn frame(selected: Option<&str>, legend: LegendState, visibility: &RouteVisibility) -> String {
        let geo = geometry();
        let viewport = ViewportState::new(LayoutMode::Desktop);
        let roles = role_map(&StaticDataset);
        let projection = Projection::new(1200.0, 600.0);
        let scene = MapScene {
            geometry: &geo,
            projection,
            viewport: &viewport,
            selected,
            visibility,
            roles: &roles,
            countries: COUNTRIES,
            legend,
            tooltip: None,
        };
        let layer = route_layer(ROUTES, visibility, viewport.route_zoom(), projection);
        render_svg(&scene, &layer)
    }

    const DESKTOP: LegendState = LegendState { layout: LayoutMode::Desktop, expanded: false };

    #[test]
    fn shapes_use_policy_colors_and_selection_outline() {
        let svg = frame(Some("COL"), DESKTOP, &RouteVisibility::default());
        assert!(svg.contains(&format!("data-id='COL' fill='{}' stroke='{SELECTED_BORDER}'", policy::PRODUCER_COLOR)));
        assert!(svg.contains(&format!("data-id='GUF' fill='{}'", policy::FADED_IN_SCOPE_COLOR)));
        assert!(svg.contains(&format!("<path class='country' fill='{}'", policy::FADED_OUT_OF_SCOPE_COLOR)));
    }

    #[test]
    fn hidden_route_types_are_not_drawn() {
        let svg = frame(None, DESKTOP, &RouteVisibility::only(&[RouteType::Air]));
        assert!(svg.contains("route-air"));
        assert!(!svg.contains("route-land"));
        assert!(!svg.contains("route-maritime"));
        assert!(svg.contains("Land (off)"));
        assert!(svg.contains("Air (on)"));
    }

    #[test]
    fn routes_animate_with_per_type_duration() {
        let layer = route_layer(ROUTES, &RouteVisibility::default(), 1.0, Projection::new(1200.0, 600.0));
        assert!(layer.contains("id='route-col-pan-maritime'"));
        let maritime = layer.lines().find(|l| l.contains("route-col-pan-maritime")).unwrap();
        assert!(maritime.contains("dur='3s'"));
        assert!(maritime.contains("stroke-width='0.600'"));
    }

    #[test]
    fn mobile_legend_collapses() {
        let collapsed = LegendState { layout: LayoutMode::Mobile, expanded: false };
        let svg = frame(None, collapsed, &RouteVisibility::default());
        assert!(svg.contains("Legend ▸"));
        assert!(!svg.contains("Producer"));

        let open = LegendState { layout: LayoutMode::Mobile, expanded: true };
        assert!(frame(None, open, &RouteVisibility::default()).contains("Producer"));
        assert!(frame(None, DESKTOP, &RouteVisibility::default()).contains("Producer"));
    }

    #[test]
    fn labels_emphasise_selection() {
        let svg = frame(Some("MEX"), DESKTOP, &RouteVisibility::default());
        assert!(svg.contains("font-weight='bold' opacity='1'>Mexico</text>"));
        assert!(svg.contains("font-weight='normal' opacity='0.4'>Colombia</text>"));
        // No registered center, no label.
        assert!(!svg.contains(">Puerto Rico</text>"));
    }

    #[test]
    fn label_size_shrinks_with_zoom() {
        assert!(label_size(4.0) < label_size(1.0));
        assert_eq!(label_size(4.0), 3.0);
        assert_eq!(label_size(1e9), MIN_LABEL_PX);
    }

    #[test]
    fn route_cache_rebuilds_only_on_key_change() {
        let mut cache = RouteLayerCache::default();
        let p = Projection::new(1200.0, 600.0);
        let all = RouteVisibility::default();
        cache.layer(ROUTES, &all, 2.0, p);
        cache.layer(ROUTES, &all, 2.0, p);
        assert_eq!(cache.builds(), 1);
        cache.layer(ROUTES, &RouteVisibility::none(), 2.0, p);
        cache.layer(ROUTES, &RouteVisibility::none(), 2.38, p);
        assert_eq!(cache.builds(), 3);
    }

    #[test]
    fn placeholder_reports_failure_with_retry() {
        let p = Projection::new(800.0, 400.0);
        assert!(render_placeholder(&LoadState::Loading, p).contains("Loading map"));
        let failed = LoadState::Failed { attempts: 3, error: "timed out".into() };
        let svg = render_placeholder(&failed, p);
        assert!(svg.contains("Map failed to load"));
        assert!(svg.contains("retry-map"));
        assert!(svg.contains("after 3 attempts"));
    }
}
