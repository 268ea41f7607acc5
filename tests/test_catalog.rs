//! Integration tests for catalog validation.

mod common;

use std::collections::HashSet;

use common::*;

#[test]
fn test_builtin_catalog_loads() -> anyhow::Result<()> {
    let catalog = Catalog::load()?;

    assert_eq!(catalog.stories().len(), 3);
    for story in catalog.stories() {
        assert!(!story.languages.is_empty(), "story {} has no languages", story.id);
        for language in story.languages {
            assert!(SUPPORTED_LANGUAGES.contains(language));
        }
    }

    let unique: HashSet<_> = catalog.stories().iter().map(|story| story.id).collect();
    assert_eq!(unique.len(), catalog.stories().len());

    Ok(())
}

#[test]
fn test_duplicate_story_ids_rejected() {
    let err = Catalog::new(&ATLAS_TABLE, &DUPLICATE_ID_STORIES).unwrap_err();
    assert_eq!(err, CatalogError::DuplicateStoryId(StoryId(30)));
}

#[test]
fn test_story_without_languages_rejected() {
    let err = Catalog::new(&ATLAS_TABLE, &UNTAGGED_STORIES).unwrap_err();
    assert_eq!(err, CatalogError::StoryWithoutLanguages(StoryId(40)));
}

#[test]
fn test_short_snapshot_table_rejected() {
    let err = Catalog::new(&SHORT_SNAPSHOT_TABLE, &STORIES).unwrap_err();
    assert_eq!(
        err,
        CatalogError::SnapshotTableSize {
            expected: SampleYear::COUNT,
            found: 2
        }
    );
}

#[test]
fn test_snapshot_rows_must_follow_sample_years() {
    let err = Catalog::new(&UNORDERED_SNAPSHOT_TABLE, &STORIES).unwrap_err();
    assert_eq!(
        err,
        CatalogError::SnapshotOutOfOrder {
            row: 2,
            expected: 2010,
            found: 2015
        }
    );
}

#[test]
fn test_empty_story_collection_is_valid() -> anyhow::Result<()> {
    let catalog = Catalog::new(&ATLAS_TABLE, &[])?;
    assert!(catalog.stories_in(Language::En).is_empty());
    Ok(())
}

#[test]
fn test_unknown_story_lookup() -> anyhow::Result<()> {
    let catalog = Catalog::load()?;
    assert!(catalog.story(StoryId(0)).is_none());
    assert_eq!(
        CatalogError::UnknownStory(StoryId(7)).to_string(),
        "no story with id 7"
    );
    Ok(())
}
