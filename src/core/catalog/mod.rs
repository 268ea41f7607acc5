mod atlas;
mod error;
mod language;
mod page;
pub mod showcase;
mod story;

use std::collections::HashSet;

pub use atlas::{
    ATLAS_TABLE, DataLayer, Instrument, LayerReading, MetricSnapshot, SampleYear, YearPolicy, lookup,
    resolve_year,
};
pub use error::CatalogError;
pub use language::{Language, SUPPORTED_LANGUAGES};
pub use page::Page;
pub use story::{
    InstrumentProduct, STORIES, Story, StoryId, StoryStat, TerraData, filter_by_language,
    filter_by_tag,
};

/// Validated view over the literal tables. Everything a page renders comes
/// from here.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    snapshots: &'static [MetricSnapshot],
    stories: &'static [Story],
}

impl Catalog {
    /// The built-in TerraX tables.
    pub fn load() -> Result<Self, CatalogError> {
        let catalog = Self::new(&ATLAS_TABLE, &STORIES)?;
        tracing::info!(
            years = catalog.snapshots.len(),
            stories = catalog.stories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// `snapshots` holds one row per [`SampleYear`], oldest first.
    pub fn new(
        snapshots: &'static [MetricSnapshot],
        stories: &'static [Story],
    ) -> Result<Self, CatalogError> {
        if snapshots.len() != SampleYear::COUNT {
            return Err(CatalogError::SnapshotTableSize {
                expected: SampleYear::COUNT,
                found: snapshots.len(),
            });
        }
        for (row, (snapshot, expected)) in snapshots.iter().zip(SampleYear::ALL).enumerate() {
            if snapshot.year != expected {
                return Err(CatalogError::SnapshotOutOfOrder {
                    row,
                    expected: expected.year(),
                    found: snapshot.year.year(),
                });
            }
        }
        let mut seen = HashSet::new();
        for story in stories {
            if !seen.insert(story.id) {
                return Err(CatalogError::DuplicateStoryId(story.id));
            }
            if story.languages.is_empty() {
                return Err(CatalogError::StoryWithoutLanguages(story.id));
            }
        }
        Ok(Self { snapshots, stories })
    }

    pub fn snapshot(&self, year: SampleYear) -> &'static MetricSnapshot {
        &self.snapshots[year.index()]
    }

    pub fn stories(&self) -> &'static [Story] {
        self.stories
    }

    pub fn story(&self, id: StoryId) -> Option<&'static Story> {
        self.stories.iter().find(|story| story.id == id)
    }

    pub fn stories_in(&self, language: Language) -> Vec<&'static Story> {
        filter_by_language(self.stories, language)
    }
}
