//! The single selected country.

use serde::Serialize;
use tracing::debug;

use crate::data::CountryStore;
use crate::geometry;
use crate::viewport::{ViewportState, COUNTRY_FOCUS_ZOOM};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    selected_country_id: Option<String>,
}

impl Selection {
    pub fn selected(&self) -> Option<&str> {
        self.selected_country_id.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected() == Some(id)
    }

    pub fn clear(&mut self) {
        self.selected_country_id = None;
    }

    /// Map click: toggles `id`, or switches to it. Non-clickable shapes are ignored.
    pub fn on_country_click(&mut self, id: &str) {
        if !geometry::is_clickable(id) {
            debug!(id, "click on non-interactive shape ignored");
            return;
        }
        if self.is_selected(id) {
            self.selected_country_id = None;
        } else {
            self.selected_country_id = Some(id.to_string());
        }
    }

    /// Search pick: always selects, and focuses the viewport on the
    /// country's registered center when it has one.
    pub fn on_search_select<S>(&mut self, id: &str, store: &S, viewport: &mut ViewportState)
    where
        S: CountryStore + ?Sized,
    {
        self.selected_country_id = Some(id.to_string());
        match store.get_country_by_id(id).and_then(|c| c.center) {
            Some(center) => {
                viewport.set_center(center);
                viewport.set_zoom(COUNTRY_FOCUS_ZOOM);
            }
            None => debug!(id, "no registered center, viewport unchanged"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{StaticDataset, COUNTRIES};
    use crate::layout::LayoutMode;

    #[test]
    fn clicking_twice_clears() {
        for c in COUNTRIES {
            let mut s = Selection::default();
            s.on_country_click(c.id);
            assert_eq!(s.selected(), Some(c.id));
            s.on_country_click(c.id);
            assert_eq!(s.selected(), None, "{}", c.id);
        }
    }

    #[test]
    fn clicking_another_country_switches() {
        let mut s = Selection::default();
        s.on_country_click("COL");
        s.on_country_click("PER");
        assert_eq!(s.selected(), Some("PER"));
    }

    #[test]
    fn non_clickable_click_is_a_no_op() {
        let mut s = Selection::default();
        s.on_country_click("COL");
        s.on_country_click("FRA");
        s.on_country_click("");
        assert_eq!(s.selected(), Some("COL"));
    }

    #[test]
    fn search_select_never_toggles() {
        let mut s = Selection::default();
        let mut v = ViewportState::new(LayoutMode::Desktop);
        s.on_search_select("MEX", &StaticDataset, &mut v);
        s.on_search_select("MEX", &StaticDataset, &mut v);
        assert_eq!(s.selected(), Some("MEX"));
        assert_eq!(v.zoom, COUNTRY_FOCUS_ZOOM);
    }
}
