//! Country search box: substring matching plus dropdown navigation.

use serde::Serialize;

use crate::data::{Country, CountryStore};

pub const MAX_RESULTS: usize = 8;

/// Countries whose name, id or capital contains `query`, case-insensitively,
/// in dataset order and capped at [`MAX_RESULTS`].
pub fn search<'a, S>(query: &str, store: &'a S) -> Vec<&'a Country>
where
    S: CountryStore + ?Sized,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    store
        .list_countries()
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.id.to_lowercase().contains(&needle)
                || c.capital.is_some_and(|cap| cap.to_lowercase().contains(&needle))
        })
        .take(MAX_RESULTS)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

impl SearchKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "down" | "arrowdown" => Some(SearchKey::ArrowDown),
            "up" | "arrowup" => Some(SearchKey::ArrowUp),
            "enter" | "return" => Some(SearchKey::Enter),
            "escape" | "esc" => Some(SearchKey::Escape),
            _ => None,
        }
    }
}

/// Dropdown state of the header search box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchBox {
    query: String,
    results: Vec<String>,
    highlighted: usize,
    open: bool,
    focused: bool,
}

impl SearchBox {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Ids of the current matches.
    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.results.get(self.highlighted).map(String::as_str)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Dropdown open with nothing to show.
    pub fn shows_no_results(&self) -> bool {
        self.open && self.results.is_empty()
    }

    pub fn set_query<S>(&mut self, query: &str, store: &S)
    where
        S: CountryStore + ?Sized,
    {
        self.query = query.to_string();
        self.results = search(query, store).iter().map(|c| c.id.to_string()).collect();
        self.highlighted = 0;
        self.open = !query.trim().is_empty();
        self.focused = true;
    }

    /// Handles a key while the box has focus. Returns the id to select on Enter.
    pub fn on_key(&mut self, key: SearchKey) -> Option<String> {
        let n = self.results.len();
        match key {
            SearchKey::ArrowDown if n > 0 => {
                self.highlighted = (self.highlighted + 1) % n;
                None
            }
            SearchKey::ArrowUp if n > 0 => {
                self.highlighted = (self.highlighted + n - 1) % n;
                None
            }
            SearchKey::Enter if self.open && n > 0 => self.commit(self.highlighted),
            SearchKey::Escape => {
                self.blur();
                None
            }
            _ => None,
        }
    }

    /// Closes the dropdown and drops focus, keeping the typed query.
    pub fn blur(&mut self) {
        self.open = false;
        self.focused = false;
    }

    /// Picks result `index` (by click or Enter), clearing and closing the box.
    /// Nothing is picked from a closed dropdown.
    pub fn commit(&mut self, index: usize) -> Option<String> {
        if !self.open {
            return None;
        }
        let id = self.results.get(index).cloned()?;
        *self = SearchBox::default();
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{StaticDataset, COUNTRIES};

    fn ids(results: &[&Country]) -> Vec<&'static str> {
        results.iter().map(|c| c.id).collect()
    }

    #[test]
    fn empty_query_has_no_results() {
        assert!(search("", &StaticDataset).is_empty());
        assert!(search("   \t", &StaticDataset).is_empty());
    }

    #[test]
    fn matches_name_id_and_capital_case_insensitively() {
        assert_eq!(ids(&search("colombia", &StaticDataset)), ["COL"]);
        assert_eq!(ids(&search("col", &StaticDataset))[0], "COL");
        assert_eq!(ids(&search("per", &StaticDataset)), ["PER"]);
        assert_eq!(ids(&search("LIMA", &StaticDataset)), ["PER"]);
        assert_eq!(ids(&search("bogotá", &StaticDataset)), ["COL"]);
    }

    #[test]
    fn results_are_capped_in_dataset_order() {
        let hits = search("a", &StaticDataset);
        assert_eq!(hits.len(), MAX_RESULTS);
        let expected: Vec<_> = COUNTRIES
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains('a')
                    || c.id.to_lowercase().contains('a')
                    || c.capital.is_some_and(|cap| cap.to_lowercase().contains('a'))
            })
            .take(MAX_RESULTS)
            .map(|c| c.id)
            .collect();
        assert_eq!(ids(&hits), expected);
    }

    #[test]
    fn unknown_query_shows_no_results() {
        let mut b = SearchBox::default();
        b.set_query("xyzzy-nonexistent", &StaticDataset);
        assert!(b.results().is_empty());
        assert!(b.shows_no_results());
        assert_eq!(b.on_key(SearchKey::Enter), None);
    }

    #[test]
    fn blank_query_keeps_dropdown_closed() {
        let mut b = SearchBox::default();
        b.set_query("  ", &StaticDataset);
        assert!(!b.is_open());
        assert!(!b.shows_no_results());
    }

    #[test]
    fn arrow_keys_wrap_and_enter_commits() {
        let mut b = SearchBox::default();
        b.set_query("gu", &StaticDataset);
        let n = b.results().len();
        assert!(n >= 2);
        let first = b.results()[0].clone();
        let last = b.results()[n - 1].clone();

        b.on_key(SearchKey::ArrowUp);
        assert_eq!(b.highlighted(), Some(last.as_str()));
        b.on_key(SearchKey::ArrowDown);
        assert_eq!(b.highlighted(), Some(first.as_str()));

        assert_eq!(b.on_key(SearchKey::Enter), Some(first));
        assert!(!b.is_open());
        assert_eq!(b.query(), "");
    }

    #[test]
    fn escape_closes_and_blurs() {
        let mut b = SearchBox::default();
        b.set_query("mex", &StaticDataset);
        assert!(b.is_open() && b.is_focused());
        assert_eq!(b.on_key(SearchKey::Escape), None);
        assert!(!b.is_open());
        assert!(!b.is_focused());
    }

    #[test]
    fn closed_dropdown_cannot_be_picked_from() {
        let mut b = SearchBox::default();
        b.set_query("mex", &StaticDataset);
        b.on_key(SearchKey::Escape);
        assert_eq!(b.results(), ["MEX".to_string()]);
        assert_eq!(b.commit(0), None);
    }
}
