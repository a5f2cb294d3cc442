//! Trafficking route fixtures between country hub coordinates.

use serde::Serialize;

use super::LonLat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Land,
    Maritime,
    Air,
}

impl RouteType {
    pub const ALL: [RouteType; 3] = [RouteType::Land, RouteType::Maritime, RouteType::Air];

    pub fn label(self) -> &'static str {
        match self {
            RouteType::Land => "Land",
            RouteType::Maritime => "Maritime",
            RouteType::Air => "Air",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "land" => Some(RouteType::Land),
            "maritime" | "sea" => Some(RouteType::Maritime),
            "air" => Some(RouteType::Air),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Volume {
    High,
    Medium,
    Low,
}

/// A directed edge between two country hubs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraffickingRoute {
    pub id: &'static str,
    pub origin: &'static str,
    pub origin_hub: LonLat,
    pub destination: &'static str,
    pub destination_hub: LonLat,
    pub route_type: RouteType,
    pub volume: Volume,
    pub description: Option<&'static str>,
}

// Hub coordinates: representative ports, airports or border crossings,
// not geographic centroids.
const COL: LonLat = LonLat::new(-75.51, 10.39); // Cartagena
const COL_PACIFIC: LonLat = LonLat::new(-77.07, 3.88); // Buenaventura
const PER: LonLat = LonLat::new(-77.14, -12.05); // Callao
const BOL: LonLat = LonLat::new(-63.18, -17.78); // Santa Cruz
const ECU: LonLat = LonLat::new(-79.90, -2.19); // Guayaquil
const VEN: LonLat = LonLat::new(-71.64, 10.65); // Maracaibo
const BRA: LonLat = LonLat::new(-46.33, -23.96); // Santos
const PRY: LonLat = LonLat::new(-55.73, -22.55); // Pedro Juan Caballero
const ARG: LonLat = LonLat::new(-58.37, -34.60); // Buenos Aires
const CHL: LonLat = LonLat::new(-70.40, -23.65); // Antofagasta
const URY: LonLat = LonLat::new(-56.21, -34.90); // Montevideo
const GUY: LonLat = LonLat::new(-58.16, 6.80); // Georgetown
const SUR: LonLat = LonLat::new(-55.20, 5.85); // Paramaribo
const PAN: LonLat = LonLat::new(-79.90, 9.35); // Colón
const CRI: LonLat = LonLat::new(-83.03, 9.99); // Limón
const HND: LonLat = LonLat::new(-83.77, 15.26); // La Mosquitia
const GTM: LonLat = LonLat::new(-91.51, 14.08); // Pacific coast
const MEX: LonLat = LonLat::new(-104.31, 19.05); // Manzanillo
const MEX_NORTH: LonLat = LonLat::new(-106.49, 31.69); // Ciudad Juárez
const USA: LonLat = LonLat::new(-106.44, 31.76); // El Paso
const USA_EAST: LonLat = LonLat::new(-80.19, 25.76); // Miami
const CAN: LonLat = LonLat::new(-123.12, 49.28); // Vancouver
const DOM: LonLat = LonLat::new(-69.93, 18.48); // Santo Domingo
const HTI: LonLat = LonLat::new(-72.34, 18.54); // Port-au-Prince
const JAM: LonLat = LonLat::new(-76.79, 17.97); // Kingston
const TTO: LonLat = LonLat::new(-61.51, 10.65); // Port of Spain
const PRI: LonLat = LonLat::new(-66.11, 18.47); // San Juan

pub static ROUTES: &[TraffickingRoute] = &[
    TraffickingRoute {
        id: "col-pan-maritime",
        origin: "COL",
        origin_hub: COL,
        destination: "PAN",
        destination_hub: PAN,
        route_type: RouteType::Maritime,
        volume: Volume::High,
        description: Some("Caribbean go-fast boats staging through the Panamanian coast"),
    },
    TraffickingRoute {
        id: "col-cri-maritime",
        origin: "COL",
        origin_hub: COL_PACIFIC,
        destination: "CRI",
        destination_hub: CRI,
        route_type: RouteType::Maritime,
        volume: Volume::High,
        description: Some("Eastern Pacific semi-submersibles and fishing vessels"),
    },
    TraffickingRoute {
        id: "col-hnd-air",
        origin: "COL",
        origin_hub: COL,
        destination: "HND",
        destination_hub: HND,
        route_type: RouteType::Air,
        volume: Volume::Medium,
        description: Some("Light aircraft to clandestine airstrips in La Mosquitia"),
    },
    TraffickingRoute {
        id: "col-ven-land",
        origin: "COL",
        origin_hub: COL,
        destination: "VEN",
        destination_hub: VEN,
        route_type: RouteType::Land,
        volume: Volume::High,
        description: Some("Porous Catatumbo border crossings"),
    },
    TraffickingRoute {
        id: "col-ecu-land",
        origin: "COL",
        origin_hub: COL_PACIFIC,
        destination: "ECU",
        destination_hub: ECU,
        route_type: RouteType::Land,
        volume: Volume::High,
        description: Some("Putumayo and Nariño border into Ecuadorian ports"),
    },
    TraffickingRoute {
        id: "col-dom-maritime",
        origin: "COL",
        origin_hub: COL,
        destination: "DOM",
        destination_hub: DOM,
        route_type: RouteType::Maritime,
        volume: Volume::Medium,
        description: None,
    },
    TraffickingRoute {
        id: "ecu-mex-maritime",
        origin: "ECU",
        origin_hub: ECU,
        destination: "MEX",
        destination_hub: MEX,
        route_type: RouteType::Maritime,
        volume: Volume::High,
        description: Some("Containerised cocaine leaving Guayaquil"),
    },
    TraffickingRoute {
        id: "per-bol-land",
        origin: "PER",
        origin_hub: PER,
        destination: "BOL",
        destination_hub: BOL,
        route_type: RouteType::Land,
        volume: Volume::Medium,
        description: Some("Coca paste moved from the VRAEM towards Bolivian labs"),
    },
    TraffickingRoute {
        id: "per-bra-air",
        origin: "PER",
        origin_hub: PER,
        destination: "BRA",
        destination_hub: BRA,
        route_type: RouteType::Air,
        volume: Volume::Low,
        description: None,
    },
    TraffickingRoute {
        id: "bol-pry-air",
        origin: "BOL",
        origin_hub: BOL,
        destination: "PRY",
        destination_hub: PRY,
        route_type: RouteType::Air,
        volume: Volume::Medium,
        description: Some("Narco-flights into the Chaco"),
    },
    TraffickingRoute {
        id: "bol-chl-land",
        origin: "BOL",
        origin_hub: BOL,
        destination: "CHL",
        destination_hub: CHL,
        route_type: RouteType::Land,
        volume: Volume::Low,
        description: None,
    },
    TraffickingRoute {
        id: "pry-bra-land",
        origin: "PRY",
        origin_hub: PRY,
        destination: "BRA",
        destination_hub: BRA,
        route_type: RouteType::Land,
        volume: Volume::High,
        description: Some("Cannabis and cocaine across the dry border at Ponta Porã"),
    },
    TraffickingRoute {
        id: "pry-arg-maritime",
        origin: "PRY",
        origin_hub: PRY,
        destination: "ARG",
        destination_hub: ARG,
        route_type: RouteType::Maritime,
        volume: Volume::Medium,
        description: Some("Paraná–Paraguay waterway barges"),
    },
    TraffickingRoute {
        id: "pry-ury-maritime",
        origin: "PRY",
        origin_hub: PRY,
        destination: "URY",
        destination_hub: URY,
        route_type: RouteType::Maritime,
        volume: Volume::Low,
        description: None,
    },
    TraffickingRoute {
        id: "ven-tto-maritime",
        origin: "VEN",
        origin_hub: VEN,
        destination: "TTO",
        destination_hub: TTO,
        route_type: RouteType::Maritime,
        volume: Volume::Medium,
        description: Some("Gulf of Paria crossings"),
    },
    TraffickingRoute {
        id: "ven-hti-air",
        origin: "VEN",
        origin_hub: VEN,
        destination: "HTI",
        destination_hub: HTI,
        route_type: RouteType::Air,
        volume: Volume::Low,
        description: None,
    },
    TraffickingRoute {
        id: "ven-guy-land",
        origin: "VEN",
        origin_hub: VEN,
        destination: "GUY",
        destination_hub: GUY,
        route_type: RouteType::Land,
        volume: Volume::Low,
        description: None,
    },
    TraffickingRoute {
        id: "guy-sur-maritime",
        origin: "GUY",
        origin_hub: GUY,
        destination: "SUR",
        destination_hub: SUR,
        route_type: RouteType::Maritime,
        volume: Volume::Low,
        description: Some("Coastal shipping along the Guianas"),
    },
    TraffickingRoute {
        id: "hnd-gtm-land",
        origin: "HND",
        origin_hub: HND,
        destination: "GTM",
        destination_hub: GTM,
        route_type: RouteType::Land,
        volume: Volume::High,
        description: None,
    },
    TraffickingRoute {
        id: "gtm-mex-land",
        origin: "GTM",
        origin_hub: GTM,
        destination: "MEX",
        destination_hub: MEX,
        route_type: RouteType::Land,
        volume: Volume::High,
        description: Some("Petén and Chiapas land corridors"),
    },
    TraffickingRoute {
        id: "mex-usa-land",
        origin: "MEX",
        origin_hub: MEX_NORTH,
        destination: "USA",
        destination_hub: USA,
        route_type: RouteType::Land,
        volume: Volume::High,
        description: Some("Commercial crossings along the southwest border"),
    },
    TraffickingRoute {
        id: "mex-can-air",
        origin: "MEX",
        origin_hub: MEX,
        destination: "CAN",
        destination_hub: CAN,
        route_type: RouteType::Air,
        volume: Volume::Low,
        description: None,
    },
    TraffickingRoute {
        id: "jam-usa-maritime",
        origin: "JAM",
        origin_hub: JAM,
        destination: "USA",
        destination_hub: USA_EAST,
        route_type: RouteType::Maritime,
        volume: Volume::Low,
        description: Some("Cannabis and transshipped cocaine towards Florida"),
    },
    TraffickingRoute {
        id: "dom-pri-maritime",
        origin: "DOM",
        origin_hub: DOM,
        destination: "PRI",
        destination_hub: PRI,
        route_type: RouteType::Maritime,
        volume: Volume::Medium,
        description: Some("Mona Passage crossings"),
    },
    TraffickingRoute {
        id: "pri-usa-air",
        origin: "PRI",
        origin_hub: PRI,
        destination: "USA",
        destination_hub: USA_EAST,
        route_type: RouteType::Air,
        volume: Volume::Medium,
        description: Some("Couriers and air cargo to the mainland"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::COUNTRIES;
    use std::collections::HashSet;

    #[test]
    fn route_ids_are_unique() {
        let ids: HashSet<_> = ROUTES.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), ROUTES.len());
    }

    #[test]
    fn endpoints_are_dataset_countries_with_valid_hubs() {
        for r in ROUTES {
            for id in [r.origin, r.destination] {
                assert!(COUNTRIES.iter().any(|c| c.id == id), "{}: unknown {id}", r.id);
            }
            assert!(r.origin_hub.is_valid() && r.destination_hub.is_valid(), "{}", r.id);
            assert_ne!(r.origin, r.destination);
        }
    }

    #[test]
    fn every_type_is_represented() {
        for t in RouteType::ALL {
            assert!(ROUTES.iter().any(|r| r.route_type == t), "no {t:?} route");
        }
    }

    #[test]
    fn parse_route_type() {
        assert_eq!(RouteType::parse(" Maritime "), Some(RouteType::Maritime));
        assert_eq!(RouteType::parse("AIR"), Some(RouteType::Air));
        assert_eq!(RouteType::parse("rail"), None);
    }
}
