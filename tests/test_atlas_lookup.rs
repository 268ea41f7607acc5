//! Integration tests for the temporal metric lookup.
//!
//! Tests cover:
//! - Exact snapshots for every sample year
//! - Distinct years never share a snapshot
//! - Resolving free-form years under the exact and nearest policies
//! - Layer readings and parsing

mod common;

use common::*;

#[test]
fn test_lookup_returns_table_row_for_every_year() -> anyhow::Result<()> {
    let expected = [
        (2000, 1200, 40.0, 3),
        (2005, 1600, 48.0, 4),
        (2010, 2400, 65.0, 7),
        (2015, 3200, 72.0, 9),
        (2020, 4100, 80.0, 12),
        (2025, 5000, 95.0, 15),
    ];
    assert_eq!(SampleYear::ALL.len(), expected.len());

    for (year, (expected_year, fires, pollution_index, flood_events)) in
        SampleYear::ALL.into_iter().zip(expected)
    {
        assert_eq!(year.year(), expected_year);
        let snapshot = lookup(year);
        assert_eq!(
            *snapshot,
            MetricSnapshot { year, fires, pollution_index, flood_events },
            "snapshot for {year} should come from its own row"
        );
    }

    Ok(())
}

#[test]
fn test_lookup_2010() -> anyhow::Result<()> {
    let year = SampleYear::try_from(2010)?;
    let snapshot = lookup(year);

    assert_eq!(snapshot.fires, 2400);
    assert_eq!(snapshot.pollution_index, 65.0);
    assert_eq!(snapshot.flood_events, 7);

    Ok(())
}

#[test]
fn test_distinct_years_have_distinct_snapshots() {
    for (i, a) in SampleYear::ALL.iter().enumerate() {
        for b in &SampleYear::ALL[i + 1..] {
            assert_ne!(lookup(*a), lookup(*b), "{a} and {b} share a snapshot");
        }
    }
}

#[test]
fn test_catalog_snapshot_matches_lookup() -> anyhow::Result<()> {
    let catalog = Catalog::load()?;
    for year in SampleYear::ALL {
        assert_eq!(catalog.snapshot(year), lookup(year));
    }
    Ok(())
}

#[test]
fn test_exact_policy_rejects_unsampled_year() {
    assert_eq!(
        resolve_year(2003, YearPolicy::Exact),
        Err(CatalogError::YearNotSampled { year: 2003 })
    );
    assert_eq!(resolve_year(2015, YearPolicy::Exact), Ok(SampleYear::Y2015));
    assert!(SampleYear::try_from(1999).is_err());
}

#[test]
fn test_nearest_policy_snaps_and_clamps() {
    let cases = [
        (2003, 2005),
        (2002, 2000),
        // ties go to the earlier sample
        (2007, 2005),
        (2008, 2010),
        (2012, 2010),
        (2020, 2020),
        (1990, 2000),
        (0, 2000),
        (2100, 2025),
        (u16::MAX, 2025),
    ];
    for (input, expected) in cases {
        let resolved = resolve_year(input, YearPolicy::Nearest).expect("nearest never fails");
        assert_eq!(resolved.year(), expected, "resolving {input}");
    }
}

#[test]
fn test_year_stepping_saturates() {
    assert_eq!(SampleYear::Y2000.previous(), SampleYear::Y2000);
    assert_eq!(SampleYear::Y2000.next(), SampleYear::Y2005);
    assert_eq!(SampleYear::Y2025.next(), SampleYear::Y2025);
    assert_eq!(SampleYear::Y2025.previous(), SampleYear::Y2020);

    for pair in SampleYear::ALL.windows(2) {
        assert_eq!(pair[1].year() - pair[0].year(), SampleYear::STEP);
    }
}

#[test]
fn test_layer_readings() {
    let snapshot = lookup(SampleYear::Y2020);

    assert_eq!(
        DataLayer::Fires.reading(snapshot),
        Some(terrax::core::catalog::LayerReading::Count(4100))
    );
    assert_eq!(
        DataLayer::Pollution.reading(snapshot),
        Some(terrax::core::catalog::LayerReading::Index(80.0))
    );
    assert_eq!(
        DataLayer::Floods.reading(snapshot),
        Some(terrax::core::catalog::LayerReading::Count(12))
    );
    assert_eq!(DataLayer::Trends.reading(snapshot), None);
}

#[test]
fn test_map_lists_modis_misr_aster() {
    let mapped: Vec<_> = DataLayer::ALL
        .into_iter()
        .filter(|layer| layer.is_mapped())
        .map(|layer| layer.instrument())
        .collect();
    assert_eq!(mapped, vec![Instrument::Modis, Instrument::Misr, Instrument::Aster]);
    assert!(!DataLayer::Trends.is_mapped());
}

#[test]
fn test_layer_parsing() -> anyhow::Result<()> {
    assert_eq!("fires".parse::<DataLayer>()?, DataLayer::Fires);
    assert_eq!(" Floods ".parse::<DataLayer>()?, DataLayer::Floods);
    assert_eq!(DataLayer::Pollution.instrument(), Instrument::Misr);
    assert_eq!(
        "lava".parse::<DataLayer>(),
        Err(CatalogError::UnknownLayer("lava".to_string()))
    );
    Ok(())
}
