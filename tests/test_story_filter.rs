//! Integration tests for the language-filtered story view.
//!
//! Tests cover:
//! - Exact partition of the collection by language tag
//! - Order stability of filter results
//! - Empty results for unmatched and unsupported tags
//! - The built-in story catalog

mod common;

use common::*;

fn ids(stories: &[&Story]) -> Vec<u32> {
    stories.iter().map(|story| story.id.0).collect()
}

#[test]
fn test_filter_spanish_picks_second_story() {
    let result = filter_by_language(&BILINGUAL_STORIES, Language::Es);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0], &BILINGUAL_STORIES[1]);
}

#[test]
fn test_filter_english_keeps_everything_in_order() {
    let result = filter_by_language(&BILINGUAL_STORIES, Language::En);
    assert_eq!(ids(&result), vec![1, 2, 3]);
}

#[test]
fn test_filter_is_exact_partition() {
    for language in SUPPORTED_LANGUAGES {
        let kept = filter_by_language(&MIXED_STORIES, language);

        for story in &kept {
            assert!(
                story.languages.contains(&language),
                "story {} kept without {language:?}",
                story.id
            );
        }
        for story in &MIXED_STORIES {
            let was_kept = kept.iter().any(|kept| kept.id == story.id);
            assert_eq!(
                was_kept,
                story.languages.contains(&language),
                "story {} misclassified for {language:?}",
                story.id
            );
        }
    }
}

#[test]
fn test_filter_preserves_relative_order() {
    assert_eq!(
        ids(&filter_by_language(&MIXED_STORIES, Language::Es)),
        vec![10, 12, 14]
    );
    assert_eq!(
        ids(&filter_by_language(&MIXED_STORIES, Language::En)),
        vec![11, 14, 15]
    );
    assert_eq!(
        ids(&filter_by_language(&MIXED_STORIES, Language::Pt)),
        vec![12, 14]
    );
}

#[test]
fn test_filter_without_matches_is_empty() {
    assert!(filter_by_language(&ENGLISH_ONLY_STORIES, Language::Bn).is_empty());
    assert!(filter_by_language(&ENGLISH_ONLY_STORIES, Language::Es).is_empty());
    assert!(filter_by_language(&[], Language::En).is_empty());
}

#[test]
fn test_filter_by_unsupported_tag_is_empty() {
    assert!(filter_by_tag(&BILINGUAL_STORIES, "fr").is_empty());
    assert!(filter_by_tag(&BILINGUAL_STORIES, "").is_empty());
    assert_eq!(ids(&filter_by_tag(&BILINGUAL_STORIES, "es")), vec![2]);
    assert_eq!(ids(&filter_by_tag(&BILINGUAL_STORIES, "pt")), vec![3]);
}

#[test]
fn test_filter_by_tag_requires_exact_code() {
    // none of these strings is in any story's tag set
    for tag in ["pt-BR", "PT", " es ", "ES", "en_US", "bn-"] {
        let kept = filter_by_tag(&BILINGUAL_STORIES, tag);
        assert!(kept.is_empty(), "tag {tag:?} kept {:?}", ids(&kept));
    }
    assert_eq!(Language::from_tag("pt-BR"), None);
    assert_eq!(Language::from_tag("bn"), Some(Language::Bn));
}

#[test]
fn test_language_codes() -> anyhow::Result<()> {
    assert_eq!("bn".parse::<Language>()?, Language::Bn);
    assert_eq!("es_MX".parse::<Language>()?, Language::Es);
    assert_eq!(
        "xx".parse::<Language>(),
        Err(CatalogError::UnknownLanguage("xx".to_string()))
    );
    let codes: Vec<_> = SUPPORTED_LANGUAGES.iter().map(|language| language.code()).collect();
    assert_eq!(codes, vec!["en", "bn", "es", "pt"]);
    assert_eq!(Language::Pt.native_name(), "Português");
    Ok(())
}

#[test]
fn test_builtin_stories_by_language() -> anyhow::Result<()> {
    let catalog = Catalog::load()?;

    assert_eq!(ids(&catalog.stories_in(Language::En)), vec![1, 2, 3]);
    assert_eq!(ids(&catalog.stories_in(Language::Bn)), vec![1]);
    assert_eq!(ids(&catalog.stories_in(Language::Es)), vec![2]);
    assert_eq!(ids(&catalog.stories_in(Language::Pt)), vec![3]);

    let california = catalog
        .story(StoryId(2))
        .ok_or_else(|| anyhow::anyhow!("story 2 missing"))?;
    assert_eq!(california.region, "California, USA");
    assert_eq!(california.stats.len(), 3);
    assert_eq!(california.stats[0].key, "fireArea");
    assert_eq!(
        california.terra_data.primary().map(|product| product.product),
        Some("fire_hotspots")
    );

    Ok(())
}
