pub mod core;

pub use crate::core::catalog::{
    Catalog, CatalogError, DataLayer, Language, MetricSnapshot, Page, SampleYear, Story, StoryId,
    YearPolicy, filter_by_language, filter_by_tag, lookup, resolve_year,
};
pub use crate::core::selection::{AtlasSelection, AtlasView, Selection, StoriesView, StorySelection};

#[cfg(feature = "gui")]
pub mod gui;
