//! Static country and route fixtures.
//!
//! Everything here is built at compile time and never mutated. Consumers
//! go through [`CountryStore`] so the bundled dataset can be swapped for
//! another one without touching the map logic.

pub mod countries;
pub mod routes;

use std::fmt;

use serde::Serialize;

pub use countries::COUNTRIES;
pub use routes::ROUTES;

/// A longitude/latitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn is_valid(&self) -> bool {
        (-180.0..=180.0).contains(&self.lon) && (-90.0..=90.0).contains(&self.lat)
    }
}

/// A country's function in the trafficking network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Producer,
    Transit,
    Consumer,
    Mixed,
    Other,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Producer,
        Role::Transit,
        Role::Consumer,
        Role::Mixed,
        Role::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Producer => "Producer",
            Role::Transit => "Transit",
            Role::Consumer => "Consumer",
            Role::Mixed => "Mixed",
            Role::Other => "Other",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Tons,
    Kilograms,
    Hectares,
    /// Share of the adult population, in percent.
    Percent,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Tons => "t",
            Unit::Kilograms => "kg",
            Unit::Hectares => "ha",
            Unit::Percent => "%",
        }
    }
}

/// One figure of a per-drug breakdown (seizures, transit, consumption).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrugMeasure {
    pub drug: &'static str,
    pub amount: f64,
    pub unit: Unit,
    pub year: Option<u16>,
}

impl DrugMeasure {
    pub const fn new(drug: &'static str, amount: f64, unit: Unit, year: u16) -> Self {
        Self {
            drug,
            amount,
            unit,
            year: Some(year),
        }
    }
}

/// Optional statistics. Absent values mean "no data", never zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub cultivation_ha: Option<f64>,
    pub production_tons: Option<f64>,
    /// Aggregate seizures in tons, kept for records without a breakdown.
    pub seizures_tons: Option<f64>,
    pub seizures: &'static [DrugMeasure],
    pub transit_volume: &'static [DrugMeasure],
    pub consumption: &'static [DrugMeasure],
}

impl Stats {
    pub const NONE: Stats = Stats {
        cultivation_ha: None,
        production_tons: None,
        seizures_tons: None,
        seizures: &[],
        transit_volume: &[],
        consumption: &[],
    };

    fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        [self.cultivation_ha, self.production_tons, self.seizures_tons]
            .into_iter()
            .flatten()
            .chain(
                self.seizures
                    .iter()
                    .chain(self.transit_volume)
                    .chain(self.consumption)
                    .map(|m| m.amount),
            )
    }

    pub fn all_non_negative(&self) -> bool {
        self.numbers().all(|n| n >= 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Program {
    pub name: &'static str,
    pub description: &'static str,
    pub start_year: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Organization {
    pub name: &'static str,
    pub description: &'static str,
}

/// A country record keyed by ISO alpha-3 code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Country {
    pub id: &'static str,
    pub name: &'static str,
    pub capital: Option<&'static str>,
    pub population: u64,
    pub flag: &'static str,
    pub role: Role,
    pub role_description: &'static str,
    /// Focus coordinate used for labels and search zoom.
    pub center: Option<LonLat>,
    pub stats: Stats,
    /// Ids of entries in [`ROUTES`] that start or end here.
    pub routes: &'static [&'static str],
    pub programs: &'static [Program],
    pub policy: Option<&'static str>,
    pub organizations: &'static [Organization],
    pub sources: &'static [&'static str],
}

impl Country {
    /// Blank record for struct-update syntax in the fixture tables.
    pub const BLANK: Country = Country {
        id: "",
        name: "",
        capital: None,
        population: 0,
        flag: "",
        role: Role::Other,
        role_description: "",
        center: None,
        stats: Stats::NONE,
        routes: &[],
        programs: &[],
        policy: None,
        organizations: &[],
        sources: &[],
    };
}

/// Read-only access to a country dataset.
pub trait CountryStore {
    fn list_countries(&self) -> &[Country];

    fn get_country_by_id(&self, id: &str) -> Option<&Country> {
        self.list_countries().iter().find(|c| c.id == id)
    }
}

/// The dataset bundled with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDataset;

impl CountryStore for StaticDataset {
    fn list_countries(&self) -> &[Country] {
        COUNTRIES
    }
}

impl<T: CountryStore + ?Sized> CountryStore for &T {
    fn list_countries(&self) -> &[Country] {
        (**self).list_countries()
    }
}

/// A borrowed slice works as a store too; handy for tests and subsets.
impl CountryStore for [Country] {
    fn list_countries(&self) -> &[Country] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let mut seen = HashSet::new();
        for c in COUNTRIES {
            assert!(seen.insert(c.id), "duplicate id {}", c.id);
        }
        assert_eq!(seen.len(), COUNTRIES.len());
    }

    #[test]
    fn stats_are_non_negative() {
        for c in COUNTRIES {
            assert!(c.stats.all_non_negative(), "{} has negative stats", c.id);
        }
    }

    #[test]
    fn centers_are_valid_coordinates() {
        for c in COUNTRIES {
            if let Some(center) = c.center {
                assert!(center.is_valid(), "{} center out of range", c.id);
            }
        }
    }

    #[test]
    fn country_routes_reference_known_routes_touching_the_country() {
        for c in COUNTRIES {
            for route_id in c.routes {
                let route = ROUTES
                    .iter()
                    .find(|r| r.id == *route_id)
                    .unwrap_or_else(|| panic!("{} lists unknown route {route_id}", c.id));
                assert!(
                    route.origin == c.id || route.destination == c.id,
                    "{} lists route {route_id} that does not touch it",
                    c.id
                );
            }
        }
    }

    #[test]
    fn store_lookup() {
        let store = StaticDataset;
        assert_eq!(store.get_country_by_id("COL").map(|c| c.name), Some("Colombia"));
        assert!(store.get_country_by_id("ZZZ").is_none());
        assert_eq!(store.list_countries().len(), 29);
    }
}
