mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from terrax for tests
pub use terrax::core::catalog::{
    ATLAS_TABLE, Catalog, CatalogError, DataLayer, InstrumentProduct, Instrument, Language, MetricSnapshot,
    SUPPORTED_LANGUAGES, STORIES, SampleYear, Story, StoryId, StoryStat, TerraData, YearPolicy,
    filter_by_language, filter_by_tag, lookup, resolve_year,
};
