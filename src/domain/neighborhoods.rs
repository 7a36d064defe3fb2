use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Neighborhood guide entity
///
/// Properties relate to a neighborhood by case-insensitive equality between
/// the property's `city` and the neighborhood's `name`; there is no foreign
/// key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neighborhood {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub state: String,
    pub description: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Average home price in whole USD
    #[serde(default)]
    pub avg_home_price: Option<i64>,
    #[serde(default)]
    pub population: Option<u64>,
    /// 1-10
    #[serde(default)]
    pub school_rating: Option<f32>,
    /// 0-100
    #[serde(default)]
    pub walkability_score: Option<u32>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
}

impl Record for Neighborhood {
    fn id(&self) -> &str {
        &self.id
    }
}
