//! Country fixtures for the simulation scope.
//!
//! Figures are rounded from the cited public reports and are meant for
//! briefing, not analysis.

use super::{Country, DrugMeasure, LonLat, Organization, Program, Role, Stats, Unit};

const WDR: &str = "https://www.unodc.org/unodc/en/data-and-analysis/world-drug-report-2024.html";
const COCA_SURVEYS: &str =
    "https://www.unodc.org/unodc/en/crop-monitoring/index.html";
const CCP_URL: &str =
    "https://www.unodc.org/unodc/en/drug-trafficking/ccp/container-control-programme.html";
const INCSR: &str = "https://www.state.gov/international-narcotics-control-strategy-reports/";

const CCP: Program = Program {
    name: "Container Control Programme",
    description: "Joint UNODC–WCO port control units profiling high-risk containers",
    start_year: Some(2004),
};
const AIRCOP: Program = Program {
    name: "AIRCOP",
    description: "Joint airport interdiction task forces sharing passenger and cargo intelligence",
    start_year: Some(2010),
};
const CRIMJUST: Program = Program {
    name: "CRIMJUST",
    description: "Strengthens criminal justice cooperation along cocaine trafficking routes",
    start_year: Some(2016),
};
const SMART: Program = Program {
    name: "Global SMART",
    description: "Monitoring of synthetic drug markets and forensic capacity",
    start_year: Some(2008),
};
const ALT_DEV: Program = Program {
    name: "Alternative Development",
    description: "Licit livelihoods for farmers leaving coca cultivation",
    start_year: None,
};

const MS13: Organization = Organization {
    name: "MS-13",
    description: "Transnational street gang running local distribution and extortion",
};
const BARRIO18: Organization = Organization {
    name: "Barrio 18",
    description: "Rival gang to MS-13 with a similar territorial model",
};

pub static COUNTRIES: &[Country] = &[
    Country {
        id: "COL",
        name: "Colombia",
        capital: Some("Bogotá"),
        population: 52_100_000,
        flag: "🇨🇴",
        role: Role::Producer,
        role_description: "World's largest producer of coca leaf and cocaine hydrochloride.",
        center: Some(LonLat::new(-73.0, 4.0)),
        stats: Stats {
            cultivation_ha: Some(230_000.0),
            production_tons: Some(2_664.0),
            seizures: &[
                DrugMeasure::new("Cocaine", 746.0, Unit::Tons, 2023),
                DrugMeasure::new("Cannabis", 380.0, Unit::Tons, 2023),
            ],
            ..Stats::NONE
        },
        routes: &[
            "col-pan-maritime",
            "col-cri-maritime",
            "col-hnd-air",
            "col-ven-land",
            "col-ecu-land",
            "col-dom-maritime",
        ],
        programs: &[
            Program {
                name: "SIMCI",
                description: "Integrated Illicit Crop Monitoring System producing the annual coca survey",
                start_year: Some(1999),
            },
            ALT_DEV,
            CCP,
        ],
        policy: Some(
            "Shifted from forced eradication towards crop substitution and targeting of trafficking networks.",
        ),
        organizations: &[
            Organization {
                name: "Clan del Golfo",
                description: "Largest armed trafficking group, controls Caribbean departure points",
            },
            Organization {
                name: "FARC dissidents",
                description: "Factions outside the 2016 peace deal taxing coca in the south",
            },
            Organization {
                name: "ELN",
                description: "Guerrilla group active along the Venezuelan border",
            },
        ],
        sources: &[WDR, COCA_SURVEYS],
        ..Country::BLANK
    },
    Country {
        id: "PER",
        name: "Peru",
        capital: Some("Lima"),
        population: 34_400_000,
        flag: "🇵🇪",
        role: Role::Producer,
        role_description: "Second largest coca cultivator, concentrated in the VRAEM valleys.",
        center: Some(LonLat::new(-75.0, -9.2)),
        stats: Stats {
            cultivation_ha: Some(95_000.0),
            seizures_tons: Some(28.0),
            ..Stats::NONE
        },
        routes: &["per-bol-land", "per-bra-air"],
        programs: &[ALT_DEV, CRIMJUST],
        policy: Some("Eradication paired with alternative development in cocoa and coffee."),
        organizations: &[Organization {
            name: "Shining Path remnants",
            description: "Militarised faction protecting coca production in the VRAEM",
        }],
        sources: &[WDR, COCA_SURVEYS],
        ..Country::BLANK
    },
    Country {
        id: "BOL",
        name: "Bolivia",
        capital: Some("Sucre"),
        population: 12_400_000,
        flag: "🇧🇴",
        role: Role::Producer,
        role_description: "Third coca producer; legal traditional cultivation coexists with diversion.",
        center: Some(LonLat::new(-64.7, -16.3)),
        stats: Stats {
            cultivation_ha: Some(29_900.0),
            seizures_tons: Some(30.0),
            ..Stats::NONE
        },
        routes: &["per-bol-land", "bol-pry-air", "bol-chl-land"],
        programs: &[ALT_DEV],
        policy: Some("Recognises traditional coca use; caps licit cultivation by law."),
        sources: &[WDR, COCA_SURVEYS],
        ..Country::BLANK
    },
    Country {
        id: "MEX",
        name: "Mexico",
        capital: Some("Mexico City"),
        population: 128_500_000,
        flag: "🇲🇽",
        role: Role::Mixed,
        role_description: "Transit hub for cocaine and producer of heroin, methamphetamine and fentanyl.",
        center: Some(LonLat::new(-102.5, 23.6)),
        stats: Stats {
            cultivation_ha: Some(24_800.0),
            seizures: &[
                DrugMeasure::new("Cocaine", 23.0, Unit::Tons, 2023),
                DrugMeasure::new("Methamphetamine", 75.0, Unit::Tons, 2023),
                DrugMeasure::new("Fentanyl", 2_100.0, Unit::Kilograms, 2023),
            ],
            ..Stats::NONE
        },
        routes: &["ecu-mex-maritime", "gtm-mex-land", "mex-usa-land", "mex-can-air"],
        programs: &[SMART, CCP],
        policy: Some("Security-led strategy with a growing emphasis on precursor chemical controls."),
        organizations: &[
            Organization {
                name: "Sinaloa Cartel",
                description: "Dominant wholesale supplier to the United States",
            },
            Organization {
                name: "CJNG",
                description: "Jalisco New Generation Cartel, fast-expanding rival",
            },
        ],
        sources: &[WDR, INCSR],
        ..Country::BLANK
    },
    Country {
        id: "ECU",
        name: "Ecuador",
        capital: Some("Quito"),
        population: 18_200_000,
        flag: "🇪🇨",
        role: Role::Transit,
        role_description: "Main export platform for Colombian and Peruvian cocaine via Pacific ports.",
        center: Some(LonLat::new(-78.2, -1.4)),
        stats: Stats {
            seizures: &[DrugMeasure::new("Cocaine", 221.0, Unit::Tons, 2023)],
            ..Stats::NONE
        },
        routes: &["col-ecu-land", "ecu-mex-maritime"],
        programs: &[CCP, CRIMJUST],
        policy: Some("State of internal armed conflict declared against gangs in 2024."),
        organizations: &[
            Organization {
                name: "Los Choneros",
                description: "Prison-based gang allied with Mexican buyers",
            },
            Organization {
                name: "Los Lobos",
                description: "Largest gang, involved in cocaine logistics and illegal mining",
            },
        ],
        sources: &[WDR, CCP_URL],
        ..Country::BLANK
    },
    Country {
        id: "VEN",
        name: "Venezuela",
        capital: Some("Caracas"),
        population: 28_800_000,
        flag: "🇻🇪",
        role: Role::Transit,
        role_description: "Air and maritime bridge for Colombian cocaine to the Caribbean and Europe.",
        center: Some(LonLat::new(-66.6, 7.1)),
        stats: Stats {
            seizures_tons: Some(50.0),
            ..Stats::NONE
        },
        routes: &["col-ven-land", "ven-tto-maritime", "ven-hti-air", "ven-guy-land"],
        organizations: &[Organization {
            name: "Tren de Aragua",
            description: "Prison-born gang expanding across the region",
        }],
        sources: &[WDR, INCSR],
        ..Country::BLANK
    },
    Country {
        id: "BRA",
        name: "Brazil",
        capital: Some("Brasília"),
        population: 216_400_000,
        flag: "🇧🇷",
        role: Role::Mixed,
        role_description: "Major transit country for Europe and Africa and the region's largest cocaine market.",
        center: Some(LonLat::new(-51.9, -14.2)),
        stats: Stats {
            seizures: &[DrugMeasure::new("Cocaine", 70.0, Unit::Tons, 2022)],
            consumption: &[DrugMeasure::new("Cocaine", 1.0, Unit::Percent, 2022)],
            ..Stats::NONE
        },
        routes: &["per-bra-air", "pry-bra-land"],
        programs: &[CCP, AIRCOP],
        organizations: &[
            Organization {
                name: "PCC",
                description: "Primeiro Comando da Capital, controls exports through Santos",
            },
            Organization {
                name: "Comando Vermelho",
                description: "Rio de Janeiro faction with Amazon river routes",
            },
        ],
        sources: &[WDR],
        ..Country::BLANK
    },
    Country {
        id: "PRY",
        name: "Paraguay",
        capital: Some("Asunción"),
        population: 6_900_000,
        flag: "🇵🇾",
        role: Role::Mixed,
        role_description: "South America's main cannabis producer and a cocaine transit corridor.",
        center: Some(LonLat::new(-58.4, -23.4)),
        stats: Stats {
            cultivation_ha: Some(7_000.0),
            seizures: &[DrugMeasure::new("Cannabis", 1_000.0, Unit::Tons, 2022)],
            ..Stats::NONE
        },
        routes: &["bol-pry-air", "pry-bra-land", "pry-arg-maritime", "pry-ury-maritime"],
        programs: &[CCP],
        sources: &[WDR],
        ..Country::BLANK
    },
    Country {
        id: "ARG",
        name: "Argentina",
        capital: Some("Buenos Aires"),
        population: 46_700_000,
        flag: "🇦🇷",
        role: Role::Mixed,
        role_description: "Transit via the Paraná waterway and a sizeable domestic market.",
        center: Some(LonLat::new(-63.6, -38.4)),
        stats: Stats {
            consumption: &[DrugMeasure::new("Cocaine", 1.6, Unit::Percent, 2022)],
            ..Stats::NONE
        },
        routes: &["pry-arg-maritime"],
        sources: &[WDR],
        ..Country::BLANK
    },
    Country {
        id: "CHL",
        name: "Chile",
        capital: Some("Santiago"),
        population: 19_600_000,
        flag: "🇨🇱",
        role: Role::Transit,
        role_description: "Northern border and ports used for Bolivian and Peruvian cocaine.",
        center: Some(LonLat::new(-71.5, -35.7)),
        stats: Stats {
            seizures_tons: Some(40.0),
            ..Stats::NONE
        },
        routes: &["bol-chl-land"],
        programs: &[CCP],
        sources: &[WDR],
        ..Country::BLANK
    },
    Country {
        id: "URY",
        name: "Uruguay",
        capital: Some("Montevideo"),
        population: 3_400_000,
        flag: "🇺🇾",
        role: Role::Transit,
        role_description: "Montevideo port used for container shipments to Europe.",
        center: Some(LonLat::new(-55.8, -32.5)),
        routes: &["pry-ury-maritime"],
        policy: Some("First country to regulate a legal cannabis market (2013)."),
        sources: &[WDR],
        ..Country::BLANK
    },
    Country {
        id: "PAN",
        name: "Panama",
        capital: Some("Panama City"),
        population: 4_500_000,
        flag: "🇵🇦",
        role: Role::Transit,
        role_description: "Chokepoint between South and Central America with world-scale container ports.",
        center: Some(LonLat::new(-80.1, 8.5)),
        stats: Stats {
            seizures: &[DrugMeasure::new("Cocaine", 120.0, Unit::Tons, 2023)],
            ..Stats::NONE
        },
        routes: &["col-pan-maritime"],
        programs: &[CCP, CRIMJUST],
        sources: &[WDR, CCP_URL],
        ..Country::BLANK
    },
    Country {
        id: "CRI",
        name: "Costa Rica",
        capital: Some("San José"),
        population: 5_200_000,
        flag: "🇨🇷",
        role: Role::Transit,
        role_description: "Pacific and Caribbean coastlines used for storage and transshipment.",
        center: Some(LonLat::new(-84.0, 9.7)),
        stats: Stats {
            seizures_tons: Some(27.0),
            ..Stats::NONE
        },
        routes: &["col-cri-maritime"],
        programs: &[CCP],
        sources: &[WDR],
        ..Country::BLANK
    },
    Country {
        id: "NIC",
        name: "Nicaragua",
        capital: Some("Managua"),
        population: 6_900_000,
        flag: "🇳🇮",
        role: Role::Transit,
        role_description: "Caribbean coast used for refuelling go-fast boats.",
        center: Some(LonLat::new(-85.2, 12.9)),
        sources: &[INCSR],
        ..Country::BLANK
    },
    Country {
        id: "HND",
        name: "Honduras",
        capital: Some("Tegucigalpa"),
        population: 10_600_000,
        flag: "🇭🇳",
        role: Role::Transit,
        role_description: "Landing zone for cocaine flights from South America.",
        center: Some(LonLat::new(-86.8, 14.8)),
        stats: Stats {
            seizures_tons: Some(10.0),
            ..Stats::NONE
        },
        routes: &["col-hnd-air", "hnd-gtm-land"],
        programs: &[AIRCOP],
        organizations: &[MS13, BARRIO18],
        sources: &[INCSR],
        ..Country::BLANK
    },
    Country {
        id: "SLV",
        name: "El Salvador",
        capital: Some("San Salvador"),
        population: 6_300_000,
        flag: "🇸🇻",
        role: Role::Transit,
        role_description: "Pacific transit with gang-run local distribution.",
        center: Some(LonLat::new(-88.9, 13.8)),
        organizations: &[MS13, BARRIO18],
        sources: &[INCSR],
        ..Country::BLANK
    },
    Country {
        id: "GTM",
        name: "Guatemala",
        capital: Some("Guatemala City"),
        population: 18_100_000,
        flag: "🇬🇹",
        role: Role::Transit,
        role_description: "Last stop before Mexico; also cultivates opium poppy.",
        center: Some(LonLat::new(-90.2, 15.7)),
        stats: Stats {
            seizures_tons: Some(15.0),
            ..Stats::NONE
        },
        routes: &["hnd-gtm-land", "gtm-mex-land"],
        organizations: &[BARRIO18],
        sources: &[INCSR],
        ..Country::BLANK
    },
    Country {
        id: "BLZ",
        name: "Belize",
        capital: Some("Belmopan"),
        population: 410_000,
        flag: "🇧🇿",
        role: Role::Transit,
        role_description: "Clandestine airstrips and coastal cays used for transshipment.",
        center: Some(LonLat::new(-88.5, 17.2)),
        sources: &[INCSR],
        ..Country::BLANK
    },
    Country {
        id: "GUY",
        name: "Guyana",
        capital: Some("Georgetown"),
        population: 813_000,
        flag: "🇬🇾",
        role: Role::Transit,
        role_description: "Coastal and riverine routes towards the Caribbean and Europe.",
        center: Some(LonLat::new(-58.9, 4.9)),
        routes: &["ven-guy-land", "guy-sur-maritime"],
        sources: &[INCSR],
        ..Country::BLANK
    },
    Country {
        id: "SUR",
        name: "Suriname",
        capital: Some("Paramaribo"),
        population: 623_000,
        flag: "🇸🇷",
        role: Role::Transit,
        role_description: "Container shipments to the Netherlands.",
        center: Some(LonLat::new(-56.0, 4.0)),
        routes: &["guy-sur-maritime"],
        sources: &[INCSR],
        ..Country::BLANK
    },
    Country {
        id: "GUF",
        name: "French Guiana",
        capital: Some("Cayenne"),
        population: 295_000,
        flag: "🇬🇫",
        role: Role::Transit,
        role_description: "Cocaine couriers on flights from Cayenne to Paris.",
        center: Some(LonLat::new(-53.1, 3.9)),
        programs: &[AIRCOP],
        sources: &[WDR],
        ..Country::BLANK
    },
    Country {
        id: "CUB",
        name: "Cuba",
        capital: Some("Havana"),
        population: 11_200_000,
        flag: "🇨🇺",
        role: Role::Other,
        role_description: "Limited role; coastal wash-ups of jettisoned cargo.",
        center: Some(LonLat::new(-79.5, 21.5)),
        ..Country::BLANK
    },
    Country {
        id: "JAM",
        name: "Jamaica",
        capital: Some("Kingston"),
        population: 2_800_000,
        flag: "🇯🇲",
        role: Role::Mixed,
        role_description: "Cannabis producer and transshipment point for cocaine.",
        center: Some(LonLat::new(-77.3, 18.1)),
        routes: &["jam-usa-maritime"],
        sources: &[INCSR],
        ..Country::BLANK
    },
    Country {
        id: "HTI",
        name: "Haiti",
        capital: Some("Port-au-Prince"),
        population: 11_700_000,
        flag: "🇭🇹",
        role: Role::Transit,
        role_description: "Weak interdiction capacity exploited by air and sea shipments.",
        center: Some(LonLat::new(-72.3, 19.0)),
        routes: &["ven-hti-air"],
        sources: &[INCSR],
        ..Country::BLANK
    },
    Country {
        id: "DOM",
        name: "Dominican Republic",
        capital: Some("Santo Domingo"),
        population: 11_300_000,
        flag: "🇩🇴",
        role: Role::Transit,
        role_description: "Caribbean hub for shipments to Puerto Rico, the US and Europe.",
        center: Some(LonLat::new(-70.2, 18.7)),
        stats: Stats {
            seizures_tons: Some(42.0),
            ..Stats::NONE
        },
        routes: &["col-dom-maritime", "dom-pri-maritime"],
        programs: &[CCP],
        sources: &[INCSR],
        ..Country::BLANK
    },
    Country {
        id: "TTO",
        name: "Trinidad and Tobago",
        capital: Some("Port of Spain"),
        population: 1_500_000,
        flag: "🇹🇹",
        role: Role::Transit,
        role_description: "Short crossing from Venezuela into Caribbean shipping lanes.",
        routes: &["ven-tto-maritime"],
        sources: &[INCSR],
        ..Country::BLANK
    },
    Country {
        id: "PRI",
        name: "Puerto Rico",
        capital: Some("San Juan"),
        population: 3_200_000,
        flag: "🇵🇷",
        role: Role::Transit,
        role_description: "Gateway into US customs territory without further border checks.",
        routes: &["dom-pri-maritime", "pri-usa-air"],
        sources: &[INCSR],
        ..Country::BLANK
    },
    Country {
        id: "USA",
        name: "United States",
        capital: Some("Washington, D.C."),
        population: 334_900_000,
        flag: "🇺🇸",
        role: Role::Consumer,
        role_description: "Largest consumer market; synthetic opioids drive overdose deaths.",
        center: Some(LonLat::new(-98.6, 39.8)),
        stats: Stats {
            consumption: &[
                DrugMeasure::new("Cocaine", 1.7, Unit::Percent, 2022),
                DrugMeasure::new("Methamphetamine", 0.9, Unit::Percent, 2022),
            ],
            transit_volume: &[DrugMeasure::new("Fentanyl", 27_000.0, Unit::Kilograms, 2023)],
            ..Stats::NONE
        },
        routes: &["mex-usa-land", "jam-usa-maritime", "pri-usa-air"],
        policy: Some("Supply-side interdiction alongside expanding harm reduction funding."),
        sources: &[WDR, INCSR],
        ..Country::BLANK
    },
    Country {
        id: "CAN",
        name: "Canada",
        capital: Some("Ottawa"),
        population: 40_100_000,
        flag: "🇨🇦",
        role: Role::Consumer,
        role_description: "Consumer market with domestic synthetic drug production.",
        center: Some(LonLat::new(-106.3, 56.1)),
        routes: &["mex-can-air"],
        policy: Some("Public-health approach including supervised consumption sites."),
        sources: &[WDR],
        ..Country::BLANK
    },
];
