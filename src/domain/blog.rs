use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BlogCategory {
    #[serde(rename = "Market Updates")]
    MarketUpdates,
    #[serde(rename = "Buyer Tips")]
    BuyerTips,
    #[serde(rename = "Seller Tips")]
    SellerTips,
    #[serde(rename = "Neighborhood Spotlights")]
    NeighborhoodSpotlights,
    Financing,
    Lifestyle,
}

impl BlogCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MarketUpdates => "Market Updates",
            Self::BuyerTips => "Buyer Tips",
            Self::SellerTips => "Seller Tips",
            Self::NeighborhoodSpotlights => "Neighborhood Spotlights",
            Self::Financing => "Financing",
            Self::Lifestyle => "Lifestyle",
        }
    }
}

/// Blog post entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Post body; may be HTML or plain text
    pub content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    pub category: BlogCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_photo: Option<String>,
    /// Estimated read time in minutes
    #[serde(default)]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
    pub created_date: DateTime<Utc>,
}

impl Record for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Query-string parameters for the blog listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogListParams {
    pub category: Option<BlogCategory>,
}
