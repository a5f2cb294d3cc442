//! Fill colours for country shapes.

use std::collections::HashMap;

use crate::data::{CountryStore, Role};
use crate::geometry;

/// Country id → role, derived once from a store.
pub type RoleMap = HashMap<&'static str, Role>;

pub const PRODUCER_COLOR: &str = "#dc2626";
pub const TRANSIT_COLOR: &str = "#f59e0b";
pub const CONSUMER_COLOR: &str = "#2563eb";
pub const MIXED_COLOR: &str = "#9333ea";
pub const OTHER_COLOR: &str = "#64748b";

/// Countries outside the dataset.
pub const UNKNOWN_COLOR: &str = "#d1d5db";
/// In-scope countries while another country is selected.
pub const FADED_IN_SCOPE_COLOR: &str = "#9ca3af";
/// Out-of-scope countries while a country is selected.
pub const FADED_OUT_OF_SCOPE_COLOR: &str = "#e5e7eb";

pub fn role_color(role: Role) -> &'static str {
    match role {
        Role::Producer => PRODUCER_COLOR,
        Role::Transit => TRANSIT_COLOR,
        Role::Consumer => CONSUMER_COLOR,
        Role::Mixed => MIXED_COLOR,
        Role::Other => OTHER_COLOR,
    }
}

pub fn role_map<S: CountryStore + ?Sized>(store: &S) -> RoleMap {
    store
        .list_countries()
        .iter()
        .map(|c| (c.id, c.role))
        .collect()
}

/// Fill colour for `country_id` given the current selection.
///
/// Total: every id, including the empty id of unmapped shapes, gets a colour.
pub fn color_for(country_id: &str, selected_id: Option<&str>, roles: &RoleMap) -> &'static str {
    if let Some(selected) = selected_id {
        if selected != country_id {
            return if geometry::is_in_scope(country_id) {
                FADED_IN_SCOPE_COLOR
            } else {
                FADED_OUT_OF_SCOPE_COLOR
            };
        }
    }
    match roles.get(country_id) {
        Some(role) => role_color(*role),
        None => UNKNOWN_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{StaticDataset, COUNTRIES};

    #[test]
    fn unselected_countries_use_their_role_color() {
        let roles = role_map(&StaticDataset);
        for c in COUNTRIES {
            assert_eq!(color_for(c.id, None, &roles), role_color(c.role), "{}", c.id);
        }
    }

    #[test]
    fn selected_country_keeps_role_color_and_others_fade() {
        let roles = role_map(&StaticDataset);
        assert_eq!(color_for("COL", Some("COL"), &roles), PRODUCER_COLOR);
        assert_eq!(color_for("MEX", Some("COL"), &roles), FADED_IN_SCOPE_COLOR);
        assert_eq!(color_for("FRA", Some("COL"), &roles), FADED_OUT_OF_SCOPE_COLOR);
        assert_eq!(color_for("", Some("COL"), &roles), FADED_OUT_OF_SCOPE_COLOR);
    }

    #[test]
    fn unknown_countries_are_gray() {
        let roles = role_map(&StaticDataset);
        assert_eq!(color_for("FRA", None, &roles), UNKNOWN_COLOR);
        assert_eq!(color_for("", None, &roles), UNKNOWN_COLOR);
    }

    #[test]
    fn role_colors_are_distinct() {
        let mut colors: Vec<_> = Role::ALL.iter().map(|r| role_color(*r)).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), Role::ALL.len());
    }
}
