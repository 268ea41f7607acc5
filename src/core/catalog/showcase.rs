//! Fixed copy for the landing, atlas preview and VR demo pages.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadlineStat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Titled blurb used for feature cards and preview tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hotspot {
    pub name: &'static str,
    pub impact: &'static str,
    pub kind: &'static str,
}

pub const TAGLINE: &str = "25 years of Terra satellite data reimagined through human stories.";

pub const MISSION: &str = "TerraX transforms 25 years of NASA's Terra satellite observations into compelling human narratives. By combining MODIS fire detection, MISR aerosol tracking, ASTER elevation mapping, and CERES energy measurements with personal stories from affected communities, we create a bridge between global data and local impact.";

pub const HEADLINE_STATS: [HeadlineStat; 3] = [
    HeadlineStat { value: "25+", label: "Years of Data" },
    HeadlineStat { value: "1000+", label: "Stories" },
    HeadlineStat { value: "195", label: "Countries" },
];

pub const LANDING_FEATURES: [Feature; 3] = [
    Feature {
        title: "Interactive Atlas",
        description: "Explore 25 years of Terra data through interactive maps and timelines",
    },
    Feature {
        title: "Human Stories",
        description: "Personal narratives from communities affected by climate change",
    },
    Feature {
        title: "VR Experience",
        description: "Immersive Earth exploration with Google Cardboard compatibility",
    },
];

/// Regional teasers under the atlas map, titled by region.
pub const ATLAS_PREVIEWS: [Feature; 3] = [
    Feature {
        title: "Bangladesh",
        description: "Rising sea levels impact coastal communities",
    },
    Feature {
        title: "California",
        description: "Wildfire smoke affects urban air quality",
    },
    Feature {
        title: "Amazon",
        description: "Deforestation impacts global carbon cycle",
    },
];

pub const VR_FEATURES: [Feature; 6] = [
    Feature {
        title: "360° Earth Explorer",
        description: "Navigate around Earth in full 360° view with authentic Terra satellite imagery",
    },
    Feature {
        title: "Climate Hotspots",
        description: "Interactive hotspots showing wildfire zones, urban heat islands, and glacier retreat",
    },
    Feature {
        title: "Temperature Visualization",
        description: "See temperature changes over time with thermal imaging from Terra's MODIS instrument",
    },
    Feature {
        title: "Data Overlays",
        description: "Toggle between different Terra instrument views: MODIS, MISR, ASTER, and CERES",
    },
    Feature {
        title: "Time-lapse Mode",
        description: "Watch 25 years of climate change unfold in accelerated time-lapse sequences",
    },
    Feature {
        title: "Mobile Compatible",
        description: "Works with Google Cardboard and any smartphone for accessible VR experience",
    },
];

pub const VR_STEPS: [&str; 3] = [
    "Download the TerraX VR app",
    "Insert phone into Google Cardboard or VR headset",
    "Use gaze controls to navigate and select hotspots",
];

pub const HOTSPOTS: [Hotspot; 5] = [
    Hotspot { name: "Arctic Ice Sheet", impact: "30% ice loss", kind: "Glacier Retreat" },
    Hotspot { name: "Amazon Basin", impact: "17% deforestation", kind: "Forest Loss" },
    Hotspot { name: "Sahara Desert", impact: "Expanding 48km/year", kind: "Desertification" },
    Hotspot { name: "Coral Triangle", impact: "50% bleaching", kind: "Ocean Warming" },
    Hotspot { name: "Himalayan Glaciers", impact: "0.3m/year retreat", kind: "Ice Melt" },
];

pub const VR_MINIMUM_REQUIREMENTS: [&str; 4] = [
    "Smartphone with gyroscope",
    "Android 7.0+ or iOS 12+",
    "2GB RAM",
    "Google Cardboard compatible",
];

pub const VR_RECOMMENDED_REQUIREMENTS: [&str; 4] = [
    "High-resolution display (1080p+)",
    "4GB+ RAM",
    "Dedicated VR headset",
    "Stable internet connection",
];
