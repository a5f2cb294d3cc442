//! Root application state.
//!
//! `App` is the only owner of viewport, selection, route visibility,
//! search and modal state. Child renderers get read-only views; user
//! intent comes in as [`Event`]s through [`App::handle`].

use std::fmt::Write as _;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::boundary::ErrorBoundary;
use crate::config::Config;
use crate::data::{CountryStore, LonLat, StaticDataset, ROUTES};
use crate::error::MapError;
use crate::geometry::Projection;
use crate::layout::{InputMode, LayoutMode};
use crate::loader::{LoadState, MapLoader};
use crate::modal::{EventRegistry, ListenerKind, ModalScope};
use crate::panel::{escape, PanelView};
use crate::policy::{self, RoleMap};
use crate::render::{self, LegendState, MapScene, RouteLayerCache, Tooltip};
use crate::routes::{RouteType, RouteVisibility};
use crate::search::{SearchBox, SearchKey};
use crate::selection::Selection;
use crate::viewport::{PanDirection, ViewportState};

pub const TITLE: &str = "Drug Trafficking in Latin America";
pub const EXTERNAL_LINK: (&str, &str) = (
    "UNODC World Drug Report",
    "https://www.unodc.org/unodc/en/data-and-analysis/world-drug-report-2024.html",
);
/// The delegate background guide shown in the reference modal.
pub const REFERENCE_DOCUMENT: (&str, &str) = (
    "Background Guide: Drug Trafficking in Latin America",
    "https://www.unodc.org/documents/data-and-analysis/WDR_2024/WDR24_Contemporary_issues.pdf",
);

/// User input, as delivered by the page (or the terminal session).
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Click on a country shape, by id.
    Click(String),
    /// Click at canvas coordinates; hit-tested against the shapes.
    ClickAt { x: f64, y: f64 },
    Hover { x: f64, y: f64 },
    SearchInput(String),
    /// Pick a dropdown entry by position.
    SearchPick(usize),
    Key(SearchKey),
    ZoomIn,
    ZoomOut,
    Pan(PanDirection),
    Reset,
    /// End state of a drag or wheel gesture.
    Gesture { center: LonLat, zoom: f64 },
    ToggleRoute(RouteType),
    ToggleLegend,
    OpenDocs,
    CloseDocs,
    ClosePanel,
    OutsideClick,
    Resize { width: u32, height: u32 },
    SetInput(InputMode),
    RetryMap,
    RetryMapRender,
    RetryPanelRender,
}

/// Serializable view of the state, for diagnostics.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub selected: Option<&'a str>,
    pub viewport: &'a ViewportState,
    pub route_zoom: f64,
    pub routes: &'a RouteVisibility,
    pub search: &'a SearchBox,
    pub layout: LayoutMode,
    pub input: InputMode,
    pub legend_expanded: bool,
    pub docs_open: bool,
    pub panel_open: bool,
    pub scroll_locked: bool,
    pub map: &'static str,
    pub tooltip: Option<&'a str>,
}

pub struct App<S: CountryStore = StaticDataset> {
    store: S,
    roles: RoleMap,
    loader: MapLoader,
    map: LoadState,
    projection: Projection,
    layout: LayoutMode,
    input: InputMode,
    viewport: ViewportState,
    selection: Selection,
    visibility: RouteVisibility,
    search: SearchBox,
    legend_expanded: bool,
    tooltip: Option<Tooltip>,
    listeners: EventRegistry,
    panel_scope: Option<ModalScope>,
    docs_scope: Option<ModalScope>,
    route_cache: RouteLayerCache,
    map_boundary: ErrorBoundary,
    panel_boundary: ErrorBoundary,
}

impl App<StaticDataset> {
    pub fn from_config(config: &Config) -> Self {
        App::new(StaticDataset, config, MapLoader::from_config(config))
    }
}

impl<S: CountryStore> App<S> {
    pub fn new(store: S, config: &Config, loader: MapLoader) -> Self {
        let roles = policy::role_map(&store);
        let layout = LayoutMode::from_width(config.width);
        Self {
            store,
            roles,
            loader,
            map: LoadState::Loading,
            projection: Projection::new(f64::from(config.width), f64::from(config.height)),
            layout,
            input: InputMode::default(),
            viewport: ViewportState::new(layout),
            selection: Selection::default(),
            visibility: RouteVisibility::default(),
            search: SearchBox::default(),
            legend_expanded: false,
            tooltip: None,
            listeners: EventRegistry::new(),
            panel_scope: None,
            docs_scope: None,
            route_cache: RouteLayerCache::default(),
            map_boundary: ErrorBoundary::new("map"),
            panel_boundary: ErrorBoundary::new("panel"),
        }
    }

    /// Runs the deferred geometry load. The map shows a placeholder until then.
    pub fn load_map(&mut self) {
        self.map = self.loader.load();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn map_state(&self) -> &LoadState {
        &self.map
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn selected(&self) -> Option<&str> {
        self.selection.selected()
    }

    pub fn visibility(&self) -> &RouteVisibility {
        &self.visibility
    }

    pub fn search(&self) -> &SearchBox {
        &self.search
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn listeners(&self) -> &EventRegistry {
        &self.listeners
    }

    pub fn route_cache(&self) -> &RouteLayerCache {
        &self.route_cache
    }

    pub fn is_panel_open(&self) -> bool {
        self.selection.selected().is_some()
    }

    pub fn is_docs_open(&self) -> bool {
        self.docs_scope.is_some()
    }

    pub fn is_legend_expanded(&self) -> bool {
        self.legend_state().is_expanded()
    }

    fn legend_state(&self) -> LegendState {
        LegendState {
            layout: self.layout,
            expanded: self.legend_expanded,
        }
    }

    pub fn handle(&mut self, event: Event) {
        debug!(?event, "event");
        match event {
            Event::Click(id) => {
                self.search.blur();
                self.selection.on_country_click(&id);
            }
            Event::ClickAt { x, y } => {
                self.search.blur();
                if let Some(id) = self.hit_test(x, y) {
                    self.selection.on_country_click(id);
                }
            }
            Event::Hover { x, y } => self.hover(x, y),
            Event::SearchInput(text) => self.search.set_query(&text, &self.store),
            Event::SearchPick(index) => {
                if let Some(id) = self.search.commit(index) {
                    self.select_from_search(&id);
                }
            }
            Event::Key(key) => self.key(key),
            Event::ZoomIn => self.viewport.zoom_in(),
            Event::ZoomOut => self.viewport.zoom_out(),
            Event::Pan(direction) => self.viewport.pan(direction),
            Event::Reset => self.viewport.reset(self.layout),
            Event::Gesture { center, zoom } => self.viewport.on_gesture(center, zoom),
            Event::ToggleRoute(route_type) => {
                let on = self.visibility.toggle(route_type);
                info!(route_type = route_type.label(), on, "route layer toggled");
            }
            Event::ToggleLegend => {
                if self.layout.is_mobile() {
                    self.legend_expanded = !self.legend_expanded;
                }
            }
            Event::OpenDocs => {
                self.search.blur();
                self.open_docs();
            }
            Event::CloseDocs => self.close_docs(),
            Event::ClosePanel => self.selection.clear(),
            Event::OutsideClick => {
                self.search.blur();
                if self.listeners.is_listening(ListenerKind::OutsideClick) {
                    self.close_topmost();
                }
            }
            Event::Resize { width, height } => self.resize(width, height),
            Event::SetInput(mode) => {
                self.input = mode;
                if mode == InputMode::Touch {
                    self.tooltip = None;
                }
            }
            Event::RetryMap => self.load_map(),
            Event::RetryMapRender => self.map_boundary.retry(),
            Event::RetryPanelRender => self.panel_boundary.retry(),
        }
        self.sync_panel_scope();
    }

    fn select_from_search(&mut self, id: &str) {
        self.selection
            .on_search_select(id, &self.store, &mut self.viewport);
    }

    fn key(&mut self, key: SearchKey) {
        if self.search.is_focused() {
            if let Some(id) = self.search.on_key(key) {
                self.select_from_search(&id);
            }
            return;
        }
        if key == SearchKey::Escape && self.listeners.is_listening(ListenerKind::EscapeKey) {
            self.close_topmost();
        }
    }

    /// Docs modal sits above the panel, so it closes first.
    fn close_topmost(&mut self) {
        if self.docs_scope.is_some() {
            self.close_docs();
        } else {
            self.selection.clear();
        }
    }

    fn open_docs(&mut self) {
        if self.docs_scope.is_some() {
            return;
        }
        match ModalScope::acquire(&mut self.listeners) {
            Ok(scope) => self.docs_scope = Some(scope),
            Err(e) => warn!(error = %e, "could not open reference document"),
        }
    }

    fn close_docs(&mut self) {
        if let Some(scope) = self.docs_scope.take() {
            scope.release(&mut self.listeners);
        }
    }

    /// Holds the panel's listeners exactly while a country is selected.
    fn sync_panel_scope(&mut self) {
        match (self.is_panel_open(), self.panel_scope.is_some()) {
            (true, false) => match ModalScope::acquire(&mut self.listeners) {
                Ok(scope) => self.panel_scope = Some(scope),
                Err(e) => warn!(error = %e, "panel listeners unavailable"),
            },
            (false, true) => {
                if let Some(scope) = self.panel_scope.take() {
                    scope.release(&mut self.listeners);
                }
            }
            _ => {}
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.projection = Projection::new(f64::from(width), f64::from(height));
        let layout = LayoutMode::from_width(width);
        if layout != self.layout {
            info!(?layout, width, "layout changed");
            self.layout = layout;
            self.legend_expanded = false;
        }
    }

    fn hit_test(&self, x: f64, y: f64) -> Option<&'static str> {
        let geometry = self.map.geometry()?;
        let p = self
            .projection
            .from_screen(x, y, self.viewport.center, self.viewport.zoom);
        geometry.clickable_at(p).map(|s| s.alpha3)
    }

    fn hover(&mut self, x: f64, y: f64) {
        if self.input == InputMode::Touch {
            return;
        }
        self.tooltip = self.hit_test(x, y).map(|id| {
            let country = self.store.get_country_by_id(id);
            Tooltip {
                name: country.map(|c| c.name.to_string()).unwrap_or_else(|| id.to_string()),
                role: country.map(|c| c.role),
                x,
                y,
            }
        });
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            selected: self.selection.selected(),
            viewport: &self.viewport,
            route_zoom: self.viewport.route_zoom(),
            routes: &self.visibility,
            search: &self.search,
            layout: self.layout,
            input: self.input,
            legend_expanded: self.is_legend_expanded(),
            docs_open: self.is_docs_open(),
            panel_open: self.is_panel_open(),
            scroll_locked: self.listeners.is_scroll_locked(),
            map: match self.map {
                LoadState::Loading => "loading",
                LoadState::Ready(_) => "ready",
                LoadState::Failed { .. } => "failed",
            },
            tooltip: self.tooltip.as_ref().map(|t| t.name.as_str()),
        }
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// The map canvas: placeholder, error card, or the full frame.
    pub fn render_map(&mut self) -> String {
        let geometry = match &self.map {
            LoadState::Ready(g) => g,
            state => return render::render_placeholder(state, self.projection),
        };
        let scene = MapScene {
            geometry,
            projection: self.projection,
            viewport: &self.viewport,
            selected: self.selection.selected(),
            visibility: &self.visibility,
            roles: &self.roles,
            countries: self.store.list_countries(),
            legend: LegendState {
                layout: self.layout,
                expanded: self.legend_expanded,
            },
            tooltip: self.tooltip.as_ref(),
        };
        let route_cache = &mut self.route_cache;
        let route_zoom = self.viewport.route_zoom();
        self.map_boundary.render(|| {
            if geometry.shape_count() == 0 {
                return Err(MapError::Render("geometry has no shapes".into()));
            }
            let layer = route_cache.layer(ROUTES, scene.visibility, route_zoom, scene.projection);
            Ok(render::render_svg(&scene, layer))
        })
    }

    pub fn render_panel_text(&self) -> String {
        PanelView::for_selection(&self.store, self.selection.selected(), self.layout)
            .render_text(&self.store)
    }

    pub fn render_panel_html(&mut self) -> String {
        let store = &self.store;
        let view = PanelView::for_selection(store, self.selection.selected(), self.layout);
        self.panel_boundary.render(|| Ok(view.render_html(store)))
    }

    fn render_search_html(&self) -> String {
        let mut h = format!(
            "<div class=\"search\"><input type=\"search\" placeholder=\"Search countries\" value=\"{}\"/>",
            escape(self.search.query())
        );
        if self.search.shows_no_results() {
            h.push_str("<div class=\"dropdown\"><p class=\"no-results\">No countries found</p></div>");
        } else if self.search.is_open() {
            h.push_str("<ul class=\"dropdown\">");
            for (i, id) in self.search.results().iter().enumerate() {
                let Some(c) = self.store.get_country_by_id(id) else { continue };
                let active = if self.search.highlighted() == Some(id.as_str()) { " class=\"active\"" } else { "" };
                let _ = write!(
                    h,
                    "<li{active} data-action=\"search-pick:{i}\">{} {}</li>",
                    c.flag,
                    escape(c.name)
                );
            }
            h.push_str("</ul>");
        }
        h.push_str("</div>");
        h
    }

    fn render_docs_html(&self) -> String {
        if !self.is_docs_open() {
            return String::new();
        }
        let (title, url) = REFERENCE_DOCUMENT;
        format!(
            "<div class=\"modal-backdrop\" data-action=\"outside-click\"><div class=\"modal fullscreen\" role=\"dialog\" aria-modal=\"true\">\
             <button class=\"close\" data-action=\"close-docs\">×</button><h2>{}</h2>\
             <iframe src=\"{url}\" title=\"{}\"></iframe></div></div>\n",
            escape(title),
            escape(title)
        )
    }

    /// The whole page: header, map, panel and reference modal.
    pub fn render_page(&mut self) -> String {
        let map = self.render_map();
        let panel = self.render_panel_html();
        let search = self.render_search_html();
        let docs = self.render_docs_html();
        let (link_text, link_url) = EXTERNAL_LINK;
        let body_class = if self.listeners.is_scroll_locked() { " class=\"scroll-locked\"" } else { "" };
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"/>\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/><title>{TITLE}</title></head>\n\
             <body{body_class}>\n<header><h1>{TITLE}</h1>{search}\
             <button data-action=\"open-docs\">Background guide</button>\
             <a href=\"{link_url}\" target=\"_blank\" rel=\"noopener\">{link_text}</a></header>\n\
             <main class=\"layout-{layout}\">\n<div class=\"map\">\n{map}</div>\n{panel}</main>\n{docs}</body>\n</html>\n",
            layout = match self.layout {
                LayoutMode::Mobile => "mobile",
                LayoutMode::Desktop => "desktop",
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::InlineSource;
    use crate::viewport::{COUNTRY_FOCUS_ZOOM, DEFAULT_ZOOM, DEFAULT_ZOOM_MOBILE};
    use serde_json::json;
    use std::time::Duration;

    fn config(width: u32) -> Config {
        Config {
            width,
            height: 600,
            ..Config::default()
        }
    }

    fn world() -> serde_json::Value {
        json!({ "type": "FeatureCollection", "features": [
            { "type": "Feature", "id": "170", "properties": { "NAME": "Colombia" },
              "geometry": { "type": "Polygon", "coordinates":
                [[[-79.0, -4.0], [-67.0, -4.0], [-67.0, 12.0], [-79.0, 12.0], [-79.0, -4.0]]] } },
            { "type": "Feature", "id": "250", "properties": { "NAME": "France" },
              "geometry": { "type": "Polygon", "coordinates":
                [[[-5.0, 42.0], [8.0, 42.0], [8.0, 51.0], [-5.0, 51.0], [-5.0, 42.0]]] } }
        ]})
    }

    fn app(width: u32) -> App {
        let loader = MapLoader::new(
            vec![Box::new(InlineSource(world()))],
            Box::new(InlineSource(json!({ "type": "FeatureCollection", "features": [] }))),
            1,
            Duration::ZERO,
        );
        let mut app = App::new(StaticDataset, &config(width), loader);
        app.load_map();
        app
    }

    /// Canvas position of a geographic point under the current viewport.
    fn screen(app: &App, lon: f64, lat: f64) -> (f64, f64) {
        let v = app.viewport();
        app.projection.to_screen(LonLat::new(lon, lat), v.center, v.zoom)
    }

    #[test]
    fn panel_open_tracks_selection_and_listeners() {
        let mut app = app(1200);
        assert!(!app.is_panel_open());
        app.handle(Event::Click("COL".into()));
        assert!(app.is_panel_open());
        assert!(app.listeners().is_scroll_locked());

        app.handle(Event::Key(SearchKey::Escape));
        assert!(!app.is_panel_open());
        assert_eq!(app.listeners().listener_count(), 0);
        assert!(!app.listeners().is_scroll_locked());
    }

    #[test]
    fn escape_closes_panel_after_earlier_search() {
        let mut app = app(1200);
        app.handle(Event::SearchInput("pe".into()));
        app.handle(Event::SearchInput(String::new()));
        app.handle(Event::Click("COL".into()));
        assert!(!app.search().is_focused());

        app.handle(Event::Key(SearchKey::Escape));
        assert_eq!(app.selected(), None);
        assert_eq!(app.listeners().listener_count(), 0);
    }

    #[test]
    fn dismissed_dropdown_picks_nothing() {
        let mut app = app(1200);
        app.handle(Event::SearchInput("mex".into()));
        app.handle(Event::Key(SearchKey::Escape));
        app.handle(Event::SearchPick(0));
        assert_eq!(app.selected(), None);
        assert_eq!(app.viewport().zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn escape_closes_docs_before_panel() {
        let mut app = app(1200);
        app.handle(Event::Click("PER".into()));
        app.handle(Event::OpenDocs);
        assert_eq!(app.listeners().listener_count(), 4);

        app.handle(Event::Key(SearchKey::Escape));
        assert!(!app.is_docs_open());
        assert_eq!(app.selected(), Some("PER"));
        assert!(app.listeners().is_scroll_locked());

        app.handle(Event::OutsideClick);
        assert_eq!(app.selected(), None);
        assert!(!app.listeners().is_scroll_locked());
    }

    #[test]
    fn outside_click_without_modal_does_nothing() {
        let mut app = app(1200);
        app.handle(Event::OutsideClick);
        assert_eq!(app.selected(), None);
        assert_eq!(app.listeners().listener_count(), 0);
    }

    #[test]
    fn click_at_hit_tests_shapes() {
        let mut app = app(1200);
        let (x, y) = screen(&app, -73.0, 4.0);
        app.handle(Event::ClickAt { x, y });
        assert_eq!(app.selected(), Some("COL"));

        let (x, y) = screen(&app, 2.0, 46.0);
        app.handle(Event::ClickAt { x, y });
        assert_eq!(app.selected(), Some("COL"), "background shapes are inert");
    }

    #[test]
    fn hover_shows_tooltip_except_on_touch() {
        let mut app = app(1200);
        let (x, y) = screen(&app, -73.0, 4.0);
        app.handle(Event::Hover { x, y });
        assert_eq!(app.tooltip().map(|t| t.name.as_str()), Some("Colombia"));

        app.handle(Event::Hover { x: 0.0, y: 0.0 });
        assert!(app.tooltip().is_none());

        app.handle(Event::SetInput(InputMode::Touch));
        app.handle(Event::Hover { x, y });
        assert!(app.tooltip().is_none());
    }

    #[test]
    fn search_enter_selects_and_focuses() {
        let mut app = app(1200);
        app.handle(Event::SearchInput("mexico".into()));
        app.handle(Event::Key(SearchKey::Enter));
        assert_eq!(app.selected(), Some("MEX"));
        assert_eq!(app.viewport().zoom, COUNTRY_FOCUS_ZOOM);
        assert!(!app.search().is_open());
    }

    #[test]
    fn escape_in_search_does_not_close_panel() {
        let mut app = app(1200);
        app.handle(Event::Click("COL".into()));
        app.handle(Event::SearchInput("pe".into()));
        app.handle(Event::Key(SearchKey::Escape));
        assert!(!app.search().is_focused());
        assert_eq!(app.selected(), Some("COL"));
    }

    #[test]
    fn resize_switches_layout_and_legend_behaviour() {
        let mut app = app(1200);
        assert!(app.is_legend_expanded());
        app.handle(Event::ToggleLegend);
        assert!(app.is_legend_expanded());

        app.handle(Event::Resize { width: 390, height: 700 });
        assert_eq!(app.layout(), LayoutMode::Mobile);
        assert!(!app.is_legend_expanded());
        app.handle(Event::ToggleLegend);
        assert!(app.is_legend_expanded());

        app.handle(Event::Reset);
        assert_eq!(app.viewport().zoom, DEFAULT_ZOOM_MOBILE);
    }

    #[test]
    fn route_layer_is_not_rebuilt_for_gesture_jitter() {
        let mut app = app(1200);
        app.render_map();
        let c = app.viewport().center;
        app.handle(Event::Gesture { center: c, zoom: 2.02 });
        app.render_map();
        app.handle(Event::Gesture { center: c, zoom: 1.98 });
        app.render_map();
        assert_eq!(app.route_cache().builds(), 1);

        app.handle(Event::ToggleRoute(RouteType::Air));
        app.render_map();
        assert_eq!(app.route_cache().builds(), 2);
    }

    #[test]
    fn page_contains_every_surface() {
        let mut app = app(1200);
        app.handle(Event::Click("COL".into()));
        app.handle(Event::OpenDocs);
        let page = app.render_page();
        assert!(page.contains("<svg"));
        assert!(page.contains("sheet-side"));
        assert!(page.contains("modal fullscreen"));
        assert!(page.contains("scroll-locked"));
        assert!(page.contains(EXTERNAL_LINK.1));
    }

    #[test]
    fn search_dropdown_reports_no_results() {
        let mut app = app(1200);
        app.handle(Event::SearchInput("xyzzy-nonexistent".into()));
        assert!(app.render_page().contains("No countries found"));
    }

    #[test]
    fn loading_and_failed_maps_render_placeholders() {
        let mut app = App::new(
            StaticDataset,
            &config(1200),
            MapLoader::new(
                vec![Box::new(InlineSource(json!({ "type": "Feature" })))],
                Box::new(InlineSource(json!({ "type": "FeatureCollection", "features": [] }))),
                2,
                Duration::ZERO,
            ),
        );
        assert!(app.render_map().contains("Loading map"));
        app.load_map();
        assert!(matches!(app.map_state(), LoadState::Failed { attempts: 2, .. }));
        assert!(app.render_map().contains("Map failed to load"));
        assert_eq!(app.snapshot().map, "failed");
    }
}
