use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use crate::core::catalog::CatalogError;

/// One of the years the atlas has a snapshot for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SampleYear {
    Y2000,
    Y2005,
    Y2010,
    Y2015,
    Y2020,
    Y2025,
}

impl SampleYear {
    pub const ALL: [SampleYear; 6] = [
        SampleYear::Y2000,
        SampleYear::Y2005,
        SampleYear::Y2010,
        SampleYear::Y2015,
        SampleYear::Y2020,
        SampleYear::Y2025,
    ];
    pub const COUNT: usize = Self::ALL.len();
    pub const FIRST: SampleYear = SampleYear::Y2000;
    pub const LAST: SampleYear = SampleYear::Y2025;
    /// Spacing between consecutive sample years.
    pub const STEP: u16 = 5;

    pub const fn year(self) -> u16 {
        match self {
            SampleYear::Y2000 => 2000,
            SampleYear::Y2005 => 2005,
            SampleYear::Y2010 => 2010,
            SampleYear::Y2015 => 2015,
            SampleYear::Y2020 => 2020,
            SampleYear::Y2025 => 2025,
        }
    }

    /// Row of this year in a snapshot table.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_year(year: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|sample| sample.year() == year)
    }

    pub fn next(self) -> Self {
        Self::ALL.get(self.index() + 1).copied().unwrap_or(self)
    }

    pub fn previous(self) -> Self {
        match self.index() {
            0 => self,
            i => Self::ALL[i - 1],
        }
    }
}

impl Default for SampleYear {
    fn default() -> Self {
        SampleYear::LAST
    }
}

impl TryFrom<u16> for SampleYear {
    type Error = CatalogError;

    fn try_from(year: u16) -> Result<Self, Self::Error> {
        Self::from_year(year).ok_or(CatalogError::YearNotSampled { year })
    }
}

impl From<SampleYear> for u16 {
    fn from(year: SampleYear) -> Self {
        year.year()
    }
}

impl fmt::Display for SampleYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}

impl Serialize for SampleYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.year())
    }
}

/// How a free-form year is mapped onto the sample years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearPolicy {
    /// Only sample years are accepted.
    #[default]
    Exact,
    /// Closest sample year; ties go to the earlier year and years outside
    /// the sampled range clamp to the first or last sample.
    Nearest,
}

pub fn resolve_year(year: u16, policy: YearPolicy) -> Result<SampleYear, CatalogError> {
    match policy {
        YearPolicy::Exact => SampleYear::try_from(year),
        YearPolicy::Nearest => {
            // min_by_key keeps the first minimum, which is the earlier year on a tie
            let nearest = SampleYear::ALL
                .into_iter()
                .min_by_key(|sample| sample.year().abs_diff(year))
                .unwrap_or_default();
            if nearest.year() != year {
                tracing::debug!(requested = year, resolved = nearest.year(), "snapped year to nearest sample");
            }
            Ok(nearest)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSnapshot {
    pub year: SampleYear,
    /// Fire-detection events.
    pub fires: u32,
    /// Air-quality index, practically 0-100.
    pub pollution_index: f32,
    pub flood_events: u32,
}

/// Snapshot rows, one per [`SampleYear`] in ascending order.
pub static ATLAS_TABLE: [MetricSnapshot; SampleYear::COUNT] = [
    MetricSnapshot {
        year: SampleYear::Y2000,
        fires: 1200,
        pollution_index: 40.0,
        flood_events: 3,
    },
    MetricSnapshot {
        year: SampleYear::Y2005,
        fires: 1600,
        pollution_index: 48.0,
        flood_events: 4,
    },
    MetricSnapshot {
        year: SampleYear::Y2010,
        fires: 2400,
        pollution_index: 65.0,
        flood_events: 7,
    },
    MetricSnapshot {
        year: SampleYear::Y2015,
        fires: 3200,
        pollution_index: 72.0,
        flood_events: 9,
    },
    MetricSnapshot {
        year: SampleYear::Y2020,
        fires: 4100,
        pollution_index: 80.0,
        flood_events: 12,
    },
    MetricSnapshot {
        year: SampleYear::Y2025,
        fires: 5000,
        pollution_index: 95.0,
        flood_events: 15,
    },
];

/// Snapshot recorded for `year`. Exact, never interpolated.
pub fn lookup(year: SampleYear) -> &'static MetricSnapshot {
    &ATLAS_TABLE[year.index()]
}

/// Terra's instruments, as credited on the atlas and story pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Instrument {
    Modis,
    Misr,
    Aster,
    Ceres,
}

impl Instrument {
    pub const fn name(self) -> &'static str {
        match self {
            Instrument::Modis => "MODIS",
            Instrument::Misr => "MISR",
            Instrument::Aster => "ASTER",
            Instrument::Ceres => "CERES",
        }
    }

    pub const fn product(self) -> &'static str {
        match self {
            Instrument::Modis => "fire detection data",
            Instrument::Misr => "aerosol and pollution tracking",
            Instrument::Aster => "elevation and flood mapping",
            Instrument::Ceres => "energy balance measurements",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataLayer {
    #[default]
    Fires,
    Pollution,
    Floods,
    Trends,
}

/// Value a layer highlights in the statistics panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerReading {
    Count(u32),
    Index(f32),
}

impl DataLayer {
    pub const ALL: [DataLayer; 4] = [
        DataLayer::Fires,
        DataLayer::Pollution,
        DataLayer::Floods,
        DataLayer::Trends,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            DataLayer::Fires => "fires",
            DataLayer::Pollution => "pollution",
            DataLayer::Floods => "floods",
            DataLayer::Trends => "trends",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DataLayer::Fires => "Fire Hotspots",
            DataLayer::Pollution => "Air Quality",
            DataLayer::Floods => "Flood Events",
            DataLayer::Trends => "Climate Trends",
        }
    }

    pub const fn instrument(self) -> Instrument {
        match self {
            DataLayer::Fires => Instrument::Modis,
            DataLayer::Pollution => Instrument::Misr,
            DataLayer::Floods => Instrument::Aster,
            DataLayer::Trends => Instrument::Ceres,
        }
    }

    /// Layers drawn on the map. Trends is a chart, not a map overlay.
    pub const fn is_mapped(self) -> bool {
        !matches!(self, DataLayer::Trends)
    }

    /// `None` for trends, which has no single metric in the snapshot.
    pub fn reading(self, snapshot: &MetricSnapshot) -> Option<LayerReading> {
        match self {
            DataLayer::Fires => Some(LayerReading::Count(snapshot.fires)),
            DataLayer::Pollution => Some(LayerReading::Index(snapshot.pollution_index)),
            DataLayer::Floods => Some(LayerReading::Count(snapshot.flood_events)),
            DataLayer::Trends => None,
        }
    }
}

impl FromStr for DataLayer {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|layer| layer.id() == id)
            .ok_or_else(|| CatalogError::UnknownLayer(s.to_string()))
    }
}

impl fmt::Display for DataLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
