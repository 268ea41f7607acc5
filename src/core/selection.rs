use std::fmt::Debug;

use crate::core::catalog::{
    Catalog, DataLayer, Language, LayerReading, MetricSnapshot, SampleYear, Story, StoryId,
};

/// A single user-chosen value. `select` always wins; `clear` goes back to
/// the value the selection was created with.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<T> {
    current: T,
    default: T,
}

impl<T: Clone + Debug> Selection<T> {
    pub fn new(default: T) -> Self {
        Self {
            current: default.clone(),
            default,
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn select(&mut self, value: T) {
        tracing::debug!(from = ?self.current, to = ?value, "selection changed");
        self.current = value;
    }

    pub fn clear(&mut self) {
        self.select(self.default.clone());
    }

    pub fn is_default(&self) -> bool
    where
        T: PartialEq,
    {
        self.current == self.default
    }
}

impl<T: Clone + Debug + Default> Default for Selection<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Year and layer chosen on the atlas page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtlasSelection {
    pub year: Selection<SampleYear>,
    pub layer: Selection<DataLayer>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasView {
    pub year: SampleYear,
    pub layer: DataLayer,
    pub snapshot: &'static MetricSnapshot,
}

impl AtlasView {
    pub fn reading(&self) -> Option<LayerReading> {
        self.layer.reading(self.snapshot)
    }

    /// Caption for the map placeholder.
    pub fn map_caption(&self) -> String {
        format!(
            "This is where the interactive map would be integrated, showing {} for the year {}.",
            self.layer.label().to_lowercase(),
            self.year
        )
    }
}

impl AtlasSelection {
    pub fn view(&self, catalog: &Catalog) -> AtlasView {
        let year = *self.year.current();
        AtlasView {
            year,
            layer: *self.layer.current(),
            snapshot: catalog.snapshot(year),
        }
    }
}

/// Language filter and detail overlay of the stories page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorySelection {
    pub language: Selection<Language>,
    pub open_story: Selection<Option<StoryId>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoriesView {
    pub language: Language,
    pub stories: Vec<&'static Story>,
}

impl StoriesView {
    /// True when the page should show its "no stories" state.
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

impl StorySelection {
    pub fn open(&mut self, id: StoryId) {
        self.open_story.select(Some(id));
    }

    pub fn close(&mut self) {
        self.open_story.clear();
    }

    pub fn view(&self, catalog: &Catalog) -> StoriesView {
        let language = *self.language.current();
        StoriesView {
            language,
            stories: catalog.stories_in(language),
        }
    }

    /// The story shown in the overlay. An id the catalog does not know
    /// shows nothing.
    pub fn open_story(&self, catalog: &Catalog) -> Option<&'static Story> {
        self.open_story.current().and_then(|id| catalog.story(id))
    }
}
