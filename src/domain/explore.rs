use serde::{Deserialize, Serialize};

use crate::store::Record;

/// The four explore-the-area content hubs, each backed by its own source
/// file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AreaCategory {
    Dining,
    Attractions,
    Events,
    Outdoors,
}

impl AreaCategory {
    pub const ALL: [AreaCategory; 4] = [
        Self::Dining,
        Self::Attractions,
        Self::Events,
        Self::Outdoors,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dining" => Some(Self::Dining),
            "attractions" => Some(Self::Attractions),
            "events" => Some(Self::Events),
            "outdoors" => Some(Self::Outdoors),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Dining => "dining",
            Self::Attractions => "attractions",
            Self::Events => "events",
            Self::Outdoors => "outdoors",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dining => "Dining & Nightlife",
            Self::Attractions => "Attractions",
            Self::Events => "Events & Festivals",
            Self::Outdoors => "Beaches, Parks & Outdoors",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Dining => "Discover the best restaurants, bars, and nightlife spots in Tampa Bay",
            Self::Attractions => "Explore top attractions and entertainment venues in the area",
            Self::Events => "Experience the vibrant events and festivals throughout the year",
            Self::Outdoors => "Enjoy beautiful beaches, parks, and outdoor activities",
        }
    }
}

/// One explore-the-area item (a restaurant, attraction, event, or beach).
/// The slug is the item's identity within its category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaItem {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub short_description: Option<String>,
    /// May be HTML or plain text
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    /// Items are shown unless explicitly unpublished
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

impl Record for AreaItem {
    fn id(&self) -> &str {
        &self.slug
    }
}

/// Hub summary for one category
#[derive(Debug, Clone, Serialize)]
pub struct AreaCategorySummary {
    pub category: AreaCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub items: usize,
}
