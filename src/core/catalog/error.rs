use thiserror::Error;

use crate::core::catalog::StoryId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{year} is not a sample year (sample years run 2000 to 2025 in steps of 5)")]
    YearNotSampled { year: u16 },
    #[error("unsupported language code: {0:?}")]
    UnknownLanguage(String),
    #[error("unknown data layer: {0:?}")]
    UnknownLayer(String),
    #[error("no story with id {0}")]
    UnknownStory(StoryId),
    #[error("story {0} is listed more than once")]
    DuplicateStoryId(StoryId),
    #[error("story {0} has no languages")]
    StoryWithoutLanguages(StoryId),
    #[error("snapshot table has {found} rows, expected one per sample year ({expected})")]
    SnapshotTableSize { expected: usize, found: usize },
    #[error("snapshot row {row} is for {found}, expected {expected}")]
    SnapshotOutOfOrder { row: usize, expected: u16, found: u16 },
}
