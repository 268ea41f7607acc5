use terrax::core::catalog::{
    Catalog, Instrument, InstrumentProduct, Language, MetricSnapshot, SampleYear, Story, StoryId,
    TerraData,
};

const TEST_TERRA_DATA: TerraData = TerraData {
    products: &[InstrumentProduct {
        instrument: Instrument::Modis,
        product: "test_product",
    }],
    period: "2000-2025",
    impact: "none",
};

/// Builds a minimal story with the given id, region and language tags.
pub const fn make_story(id: u32, region: &'static str, languages: &'static [Language]) -> Story {
    Story {
        id: StoryId(id),
        region,
        title: region,
        summary: "",
        description: "",
        terra_data: TEST_TERRA_DATA,
        stats: &[],
        languages,
    }
}

/// Three stories tagged {en,bn}, {en,es}, {en,pt}.
pub static BILINGUAL_STORIES: [Story; 3] = [
    make_story(1, "Bangladesh", &[Language::En, Language::Bn]),
    make_story(2, "California", &[Language::En, Language::Es]),
    make_story(3, "Amazon", &[Language::En, Language::Pt]),
];

/// Interleaved tags so order preservation is visible in filter results.
pub static MIXED_STORIES: [Story; 6] = [
    make_story(10, "A", &[Language::Es]),
    make_story(11, "B", &[Language::En]),
    make_story(12, "C", &[Language::Es, Language::Pt]),
    make_story(13, "D", &[Language::Bn]),
    make_story(14, "E", &[Language::Pt, Language::Es, Language::En]),
    make_story(15, "F", &[Language::En]),
];

/// Nobody reads Bengali or Spanish here.
pub static ENGLISH_ONLY_STORIES: [Story; 2] = [
    make_story(20, "North", &[Language::En]),
    make_story(21, "South", &[Language::En, Language::Pt]),
];

pub static DUPLICATE_ID_STORIES: [Story; 2] = [
    make_story(30, "First", &[Language::En]),
    make_story(30, "Second", &[Language::Es]),
];

pub static UNTAGGED_STORIES: [Story; 1] = [make_story(40, "Silent", &[])];

pub static SHORT_SNAPSHOT_TABLE: [MetricSnapshot; 2] = [
    snapshot(SampleYear::Y2000, 1),
    snapshot(SampleYear::Y2005, 2),
];

/// Every year present, 2010 and 2015 swapped.
pub static UNORDERED_SNAPSHOT_TABLE: [MetricSnapshot; SampleYear::COUNT] = [
    snapshot(SampleYear::Y2000, 1),
    snapshot(SampleYear::Y2005, 2),
    snapshot(SampleYear::Y2015, 4),
    snapshot(SampleYear::Y2010, 3),
    snapshot(SampleYear::Y2020, 5),
    snapshot(SampleYear::Y2025, 6),
];

const fn snapshot(year: SampleYear, value: u32) -> MetricSnapshot {
    MetricSnapshot {
        year,
        fires: value,
        pollution_index: value as f32,
        flood_events: value,
    }
}

/// Catalog over the built-in snapshot table and the given stories.
pub fn catalog_with(stories: &'static [Story]) -> Catalog {
    Catalog::new(&terrax::core::catalog::ATLAS_TABLE, stories)
        .expect("Failed to build test catalog")
}
