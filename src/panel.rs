//! Country detail panel.
//!
//! Sections appear only when the country has data for them; there are no
//! empty-state placeholders, so panel length varies per country.

use std::fmt::Write as _;

use crate::data::{Country, CountryStore, DrugMeasure, ROUTES};
use crate::layout::LayoutMode;
use crate::policy;
use crate::routes::TraffickingRoute;

/// Which optional sections a country's record can fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelSections {
    pub producer_stats: bool,
    /// Aggregate seizures, shown only when there is no breakdown.
    pub legacy_seizures: bool,
    pub seizure_breakdown: bool,
    pub transit_volume: bool,
    pub consumption: bool,
    pub routes: bool,
    pub programs: bool,
    pub policy: bool,
    pub organizations: bool,
    pub sources: bool,
}

impl PanelSections {
    pub fn of(country: &Country) -> Self {
        let s = &country.stats;
        Self {
            producer_stats: s.cultivation_ha.is_some() || s.production_tons.is_some(),
            legacy_seizures: s.seizures_tons.is_some() && s.seizures.is_empty(),
            seizure_breakdown: !s.seizures.is_empty(),
            transit_volume: !s.transit_volume.is_empty(),
            consumption: !s.consumption.is_empty(),
            routes: !country.routes.is_empty(),
            programs: !country.programs.is_empty(),
            policy: country.policy.is_some_and(|p| !p.trim().is_empty()),
            organizations: !country.organizations.is_empty(),
            sources: !country.sources.is_empty(),
        }
    }

    pub fn has_stats(&self) -> bool {
        self.producer_stats
            || self.legacy_seizures
            || self.seizure_breakdown
            || self.transit_volume
            || self.consumption
    }
}

/// The panel as handed down from the app: content, open flag and layout.
#[derive(Debug, Clone, Copy)]
pub struct PanelView<'a> {
    pub country: Option<&'a Country>,
    pub is_open: bool,
    pub layout: LayoutMode,
}

impl<'a> PanelView<'a> {
    /// The panel for the current selection: open iff something is selected.
    pub fn for_selection<S>(store: &'a S, selected: Option<&str>, layout: LayoutMode) -> Self
    where
        S: CountryStore + ?Sized,
    {
        Self {
            country: selected.and_then(|id| store.get_country_by_id(id)),
            is_open: selected.is_some(),
            layout,
        }
    }

    fn visible_country(&self) -> Option<&'a Country> {
        self.country.filter(|_| self.is_open)
    }

    /// Plain-text rendering for the terminal session.
    pub fn render_text<S: CountryStore + ?Sized>(&self, store: &S) -> String {
        let Some(c) = self.visible_country() else {
            return String::new();
        };
        let sections = PanelSections::of(c);
        let mut s = String::new();

        let _ = writeln!(s, "{} {} ({})", c.flag, c.name, c.id);
        if let Some(capital) = c.capital {
            let _ = writeln!(s, "  Capital: {capital}");
        }
        let _ = writeln!(s, "  Population: {}", format_population(c.population));
        let _ = writeln!(s, "  Role: {}: {}", c.role, c.role_description);

        if sections.has_stats() {
            let _ = writeln!(s, "  Statistics");
            for (label, value) in stat_lines(c, &sections) {
                let _ = writeln!(s, "    {label}: {value}");
            }
        }
        if sections.routes {
            let _ = writeln!(s, "  Routes");
            for r in country_routes(c) {
                let _ = writeln!(s, "    {}", route_line(r, store));
            }
        }
        if sections.programs {
            let _ = writeln!(s, "  UNODC programs");
            for p in c.programs {
                match p.start_year {
                    Some(y) => {
                        let _ = writeln!(s, "    {} (since {y}): {}", p.name, p.description);
                    }
                    None => {
                        let _ = writeln!(s, "    {}: {}", p.name, p.description);
                    }
                }
            }
        }
        if let (true, Some(policy)) = (sections.policy, c.policy) {
            let _ = writeln!(s, "  Policy: {policy}");
        }
        if sections.organizations {
            let _ = writeln!(s, "  Criminal organizations");
            for o in c.organizations {
                let _ = writeln!(s, "    {}: {}", o.name, o.description);
            }
        }
        if sections.sources {
            let _ = writeln!(s, "  Sources");
            for url in c.sources {
                let _ = writeln!(s, "    {url}");
            }
        }
        s
    }

    /// HTML fragment. Mobile gets a bottom sheet, desktop a side sheet.
    pub fn render_html<S: CountryStore + ?Sized>(&self, store: &S) -> String {
        let Some(c) = self.visible_country() else {
            return String::new();
        };
        let body = html_body(c, store);
        let color = policy::role_color(c.role);
        match self.layout {
            LayoutMode::Mobile => format!(
                "<div class=\"sheet sheet-bottom\" role=\"dialog\" aria-modal=\"true\">\n\
                 <div class=\"sheet-handle\"></div>\n\
                 <header><span class=\"flag\">{flag}</span> <h2>{name}</h2>\
                 <span class=\"role-badge\" style=\"background:{color}\">{role}</span>\
                 <button class=\"close\" data-action=\"close-panel\">×</button></header>\n\
                 <div class=\"sheet-scroll\">\n{body}</div>\n</div>\n",
                flag = c.flag,
                name = escape(c.name),
                role = c.role,
            ),
            LayoutMode::Desktop => format!(
                "<aside class=\"sheet sheet-side\" aria-label=\"{name} details\">\n\
                 <div class=\"sheet-header\" style=\"border-left:4px solid {color}\">\
                 <button class=\"close\" data-action=\"close-panel\">×</button>\
                 <h2><span class=\"flag\">{flag}</span> {name}</h2>\
                 <p class=\"role\">{role}</p></div>\n\
                 <div class=\"sheet-columns\">\n{body}</div>\n</aside>\n",
                flag = c.flag,
                name = escape(c.name),
                role = c.role,
            ),
        }
    }
}

fn html_body<S: CountryStore + ?Sized>(c: &Country, store: &S) -> String {
    let sections = PanelSections::of(c);
    let mut h = String::new();

    h.push_str("<section class=\"overview\"><dl>");
    if let Some(capital) = c.capital {
        let _ = write!(h, "<dt>Capital</dt><dd>{}</dd>", escape(capital));
    }
    let _ = write!(
        h,
        "<dt>Population</dt><dd>{}</dd></dl><p>{}</p></section>\n",
        format_population(c.population),
        escape(c.role_description)
    );

    if sections.has_stats() {
        h.push_str("<section class=\"stats\"><h3>Statistics</h3><dl>");
        for (label, value) in stat_lines(c, &sections) {
            let _ = write!(h, "<dt>{}</dt><dd>{}</dd>", escape(&label), escape(&value));
        }
        h.push_str("</dl></section>\n");
    }
    if sections.routes {
        h.push_str("<section class=\"routes\"><h3>Routes</h3><ul>");
        for r in country_routes(c) {
            let _ = write!(h, "<li>{}</li>", escape(&route_line(r, store)));
        }
        h.push_str("</ul></section>\n");
    }
    if sections.programs {
        h.push_str("<section class=\"programs\"><h3>UNODC programs</h3>");
        for p in c.programs {
            let since = p
                .start_year
                .map(|y| format!(" <span class=\"since\">since {y}</span>"))
                .unwrap_or_default();
            let _ = write!(
                h,
                "<div class=\"program\"><h4>{}{since}</h4><p>{}</p></div>",
                escape(p.name),
                escape(p.description)
            );
        }
        h.push_str("</section>\n");
    }
    if let (true, Some(policy)) = (sections.policy, c.policy) {
        let _ = write!(
            h,
            "<section class=\"policy\"><h3>Policy stance</h3><p>{}</p></section>\n",
            escape(policy)
        );
    }
    if sections.organizations {
        h.push_str("<section class=\"organizations\"><h3>Criminal organizations</h3>");
        for o in c.organizations {
            let _ = write!(
                h,
                "<article class=\"org-card\"><h4>{}</h4><p>{}</p></article>",
                escape(o.name),
                escape(o.description)
            );
        }
        h.push_str("</section>\n");
    }
    if sections.sources {
        h.push_str("<section class=\"sources\"><h3>Sources</h3><ol>");
        for url in c.sources {
            let url = escape(url);
            let _ = write!(h, "<li><a href=\"{url}\" target=\"_blank\" rel=\"noopener\">{url}</a></li>");
        }
        h.push_str("</ol></section>\n");
    }
    h
}

fn stat_lines(c: &Country, sections: &PanelSections) -> Vec<(String, String)> {
    let s = &c.stats;
    let mut lines = Vec::new();
    if sections.producer_stats {
        if let Some(ha) = s.cultivation_ha {
            lines.push(("Cultivation".into(), format!("{} ha", format_number(ha))));
        }
        if let Some(t) = s.production_tons {
            lines.push(("Production".into(), format!("{} t", format_number(t))));
        }
    }
    if sections.legacy_seizures {
        if let Some(t) = s.seizures_tons {
            lines.push(("Seizures".into(), format!("{} t", format_number(t))));
        }
    }
    let breakdowns = [
        (sections.seizure_breakdown, "Seizures", s.seizures),
        (sections.transit_volume, "Transit", s.transit_volume),
        (sections.consumption, "Use prevalence", s.consumption),
    ];
    for (shown, heading, measures) in breakdowns {
        if shown {
            for m in measures {
                lines.push((format!("{heading} · {}", m.drug), format_measure(m)));
            }
        }
    }
    lines
}

fn country_routes(c: &Country) -> impl Iterator<Item = &'static TraffickingRoute> + '_ {
    c.routes
        .iter()
        .filter_map(|id| ROUTES.iter().find(|r| r.id == *id))
}

fn route_line<S: CountryStore + ?Sized>(r: &TraffickingRoute, store: &S) -> String {
    let name = |id: &str| {
        store
            .get_country_by_id(id)
            .map(|c| c.name.to_string())
            .unwrap_or_else(|| id.to_string())
    };
    let mut line = format!(
        "{} → {} ({}, {:?} volume)",
        name(r.origin),
        name(r.destination),
        r.route_type.label(),
        r.volume
    );
    if let Some(d) = r.description {
        let _ = write!(line, ": {d}");
    }
    line
}

pub fn format_measure(m: &DrugMeasure) -> String {
    let mut s = format!("{} {}", format_number(m.amount), m.unit.suffix());
    if let Some(y) = m.year {
        let _ = write!(s, " ({y})");
    }
    s
}

/// Thousands-separated, with one decimal only when the value needs it.
pub fn format_number(n: f64) -> String {
    let rounded = (n * 10.0).round() / 10.0;
    let whole = rounded.trunc() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    let frac = ((rounded - rounded.trunc()) * 10.0).round() as u64;
    if frac > 0 {
        let _ = write!(out, ".{frac}");
    }
    out
}

pub fn format_population(p: u64) -> String {
    match p {
        0 => "n/a".into(),
        p if p >= 1_000_000 => format!("{:.1}M", p as f64 / 1e6),
        p if p >= 1_000 => format!("{}k", p / 1_000),
        p => p.to_string(),
    }
}

pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Organization, Role, StaticDataset};

    fn view(country: &Country, layout: LayoutMode) -> PanelView<'_> {
        PanelView {
            country: Some(country),
            is_open: true,
            layout,
        }
    }

    #[test]
    fn missing_organizations_render_no_section() {
        let c = Country {
            id: "CUB",
            name: "Cuba",
            role: Role::Other,
            ..Country::BLANK
        };
        let html = view(&c, LayoutMode::Desktop).render_html(&StaticDataset);
        assert!(!html.contains("organizations"));
        assert!(!html.contains("org-card"));
        assert!(!html.contains("Statistics"));
        assert!(!html.contains("Sources"));
    }

    #[test]
    fn two_organizations_render_two_cards_in_order() {
        let c = Country {
            id: "XXA",
            name: "Testland",
            organizations: &[
                Organization { name: "First Group", description: "a" },
                Organization { name: "Second Group", description: "b" },
            ],
            ..Country::BLANK
        };
        let html = view(&c, LayoutMode::Mobile).render_html(&StaticDataset);
        assert_eq!(html.matches("class=\"org-card\"").count(), 2);
        let first = html.find("First Group").unwrap();
        let second = html.find("Second Group").unwrap();
        assert!(first < second);
    }

    #[test]
    fn sections_follow_available_data() {
        let col = StaticDataset.get_country_by_id("COL").unwrap();
        let s = PanelSections::of(col);
        assert!(s.producer_stats && s.seizure_breakdown && s.organizations);
        assert!(!s.legacy_seizures && !s.consumption);

        let bol = StaticDataset.get_country_by_id("BOL").unwrap();
        let s = PanelSections::of(bol);
        assert!(s.legacy_seizures && !s.seizure_breakdown && !s.organizations);

        assert_eq!(PanelSections::of(&Country::BLANK), PanelSections::default());
        assert!(!PanelSections::of(&Country::BLANK).has_stats());
    }

    #[test]
    fn layouts_produce_different_structures() {
        let mex = StaticDataset.get_country_by_id("MEX").unwrap();
        let mobile = view(mex, LayoutMode::Mobile).render_html(&StaticDataset);
        let desktop = view(mex, LayoutMode::Desktop).render_html(&StaticDataset);
        assert!(mobile.contains("sheet-bottom") && mobile.contains("sheet-handle"));
        assert!(desktop.starts_with("<aside") && desktop.contains("sheet-side"));
    }

    #[test]
    fn closed_or_empty_panel_renders_nothing() {
        let col = StaticDataset.get_country_by_id("COL").unwrap();
        let closed = PanelView { country: Some(col), is_open: false, layout: LayoutMode::Desktop };
        assert!(closed.render_html(&StaticDataset).is_empty());
        assert!(closed.render_text(&StaticDataset).is_empty());
        let empty = PanelView { country: None, is_open: true, layout: LayoutMode::Desktop };
        assert!(empty.render_text(&StaticDataset).is_empty());
    }

    #[test]
    fn text_panel_lists_routes_with_country_names() {
        let pan = StaticDataset.get_country_by_id("PAN").unwrap();
        let text = view(pan, LayoutMode::Desktop).render_text(&StaticDataset);
        assert!(text.contains("Colombia → Panama (Maritime"));
        assert!(text.contains("Container Control Programme (since 2004)"));
        assert!(!text.contains("Criminal organizations"));
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(230_000.0), "230,000");
        assert_eq!(format_number(2_664.0), "2,664");
        assert_eq!(format_number(1.7), "1.7");
        assert_eq!(format_number(27.0), "27");
        assert_eq!(format_population(52_100_000), "52.1M");
        assert_eq!(format_population(813_000), "813k");
        assert_eq!(escape("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
    }
}
