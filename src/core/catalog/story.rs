use std::fmt;

use serde::Serialize;

use crate::core::catalog::{Instrument, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StoryId(pub u32);

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstrumentProduct {
    pub instrument: Instrument,
    pub product: &'static str,
}

/// Which Terra products a story draws on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TerraData {
    pub products: &'static [InstrumentProduct],
    pub period: &'static str,
    pub impact: &'static str,
}

impl TerraData {
    /// Product shown on the story card.
    pub fn primary(&self) -> Option<&InstrumentProduct> {
        self.products.first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoryStat {
    pub key: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Story {
    pub id: StoryId,
    pub region: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub terra_data: TerraData,
    /// Impact statistics in display order.
    pub stats: &'static [StoryStat],
    pub languages: &'static [Language],
}

impl Story {
    pub fn is_available_in(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }
}

/// Stories whose tag set contains `language`, in their original order.
pub fn filter_by_language(records: &[Story], language: Language) -> Vec<&Story> {
    records
        .iter()
        .filter(|story| story.is_available_in(language))
        .collect()
}

/// Like [`filter_by_language`] for a raw tag. Only exact registry codes
/// match; anything else, `pt-BR` included, matches nothing.
pub fn filter_by_tag<'a>(records: &'a [Story], tag: &str) -> Vec<&'a Story> {
    match Language::from_tag(tag) {
        Some(language) => filter_by_language(records, language),
        None => {
            tracing::warn!(tag, "filtering by unsupported language code");
            Vec::new()
        }
    }
}

pub static STORIES: [Story; 3] = [
    Story {
        id: StoryId(1),
        region: "Bangladesh",
        title: "Rising Tides in Coastal Villages",
        summary: "Sea-level rise has displaced thousands of families from their ancestral homes.",
        description: "Through ASTER elevation mapping and MODIS flood detection, we track how rising sea levels in the Bay of Bengal have inundated coastal villages in Bangladesh. Local families share their stories of adaptation and resilience.",
        terra_data: TerraData {
            products: &[
                InstrumentProduct { instrument: Instrument::Modis, product: "flood_extent" },
                InstrumentProduct { instrument: Instrument::Aster, product: "elevation_loss" },
            ],
            period: "2020-2025",
            impact: "15,000 families displaced",
        },
        stats: &[
            StoryStat { key: "seaLevelRise", value: "3.2mm/year" },
            StoryStat { key: "affectedArea", value: "2,400 km²" },
            StoryStat { key: "displacement", value: "15,000 families" },
        ],
        languages: &[Language::En, Language::Bn],
    },
    Story {
        id: StoryId(2),
        region: "California, USA",
        title: "Wildfire Smoke & Health Crisis",
        summary: "MODIS fire hotspots and MISR plume tracking reveal smoke spread to urban areas.",
        description: "Terra's MODIS instrument detects fire hotspots while MISR tracks aerosol plumes, showing how wildfire smoke travels hundreds of miles to affect urban populations. Healthcare workers and residents share their experiences during fire seasons.",
        terra_data: TerraData {
            products: &[
                InstrumentProduct { instrument: Instrument::Modis, product: "fire_hotspots" },
                InstrumentProduct { instrument: Instrument::Misr, product: "aerosol_plumes" },
            ],
            period: "2020-2025",
            impact: "2.3M people affected by smoke",
        },
        stats: &[
            StoryStat { key: "fireArea", value: "4.2M acres burned" },
            StoryStat { key: "smokeTravel", value: "500+ miles" },
            StoryStat { key: "healthImpact", value: "2.3M people" },
        ],
        languages: &[Language::En, Language::Es],
    },
    Story {
        id: StoryId(3),
        region: "Amazon, Brazil",
        title: "Deforestation & Climate Flux",
        summary: "CERES energy imbalance measurements linked to accelerating forest loss.",
        description: "Using MODIS vegetation indices and CERES energy balance measurements, we document how Amazon deforestation affects global climate patterns. Indigenous communities share their traditional knowledge and conservation efforts.",
        terra_data: TerraData {
            products: &[
                InstrumentProduct { instrument: Instrument::Modis, product: "vegetation_loss" },
                InstrumentProduct { instrument: Instrument::Ceres, product: "energy_flux" },
            ],
            period: "2000-2025",
            impact: "17% forest cover lost",
        },
        stats: &[
            StoryStat { key: "forestLoss", value: "17% since 2000" },
            StoryStat { key: "carbonRelease", value: "1.5 Gt CO₂" },
            StoryStat { key: "biodiversity", value: "30,000 species affected" },
        ],
        languages: &[Language::En, Language::Pt],
    },
];
