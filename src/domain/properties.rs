use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Listing status; only Active listings appear in public searches
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PropertyStatus {
    Active,
    Pending,
    Sold,
    #[serde(rename = "Off Market")]
    OffMarket,
}

impl Default for PropertyStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Sold => "Sold",
            Self::OffMarket => "Off Market",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PropertyType {
    #[serde(rename = "Single Family")]
    SingleFamily,
    Condo,
    Townhouse,
    #[serde(rename = "Multi-Family")]
    MultiFamily,
    Land,
    Commercial,
}

impl Default for PropertyType {
    fn default() -> Self {
        Self::SingleFamily
    }
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleFamily => "Single Family",
            Self::Condo => "Condo",
            Self::Townhouse => "Townhouse",
            Self::MultiFamily => "Multi-Family",
            Self::Land => "Land",
            Self::Commercial => "Commercial",
        }
    }
}

/// Property listing entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    /// List price in whole USD
    pub price: i64,
    pub beds: u32,
    pub baths: f32,
    #[serde(default)]
    pub sqft: Option<u32>,
    #[serde(default)]
    pub property_type: PropertyType,
    #[serde(default)]
    pub status: PropertyStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub year_built: Option<i32>,
    /// Lot size in acres
    #[serde(default)]
    pub lot_size: Option<f64>,
    /// Garage spaces
    #[serde(default)]
    pub garage: Option<u32>,
    #[serde(default)]
    pub pool: bool,
    /// Monthly HOA fee in whole USD
    #[serde(default)]
    pub hoa_fee: Option<i64>,
    #[serde(default)]
    pub featured: bool,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Record for Property {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Amenity refinements accepted by the property search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amenity {
    Pool,
    Garage,
    Waterfront,
    NewConstruction,
}

impl Amenity {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "pool" => Some(Self::Pool),
            "garage" => Some(Self::Garage),
            "waterfront" => Some(Self::Waterfront),
            "new_construction" => Some(Self::NewConstruction),
            _ => None,
        }
    }
}

/// Query-string refinements applied on top of the Active-listings query.
///
/// These are the page-level refinements: substring location matching and
/// ranges live here, not in the store's equality criteria.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertySearchParams {
    pub location: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub beds: Option<u32>,
    pub baths: Option<f32>,
    pub property_type: Option<PropertyType>,
    pub min_sqft: Option<u32>,
    pub max_sqft: Option<u32>,
    pub min_year: Option<i32>,
    pub garage: Option<u32>,
    /// Comma-separated list; unknown entries are ignored
    pub amenities: Option<String>,
}

impl PropertySearchParams {
    pub fn amenities(&self) -> Vec<Amenity> {
        self.amenities
            .as_deref()
            .map(|raw| raw.split(',').filter_map(Amenity::parse).collect())
            .unwrap_or_default()
    }

    pub fn matches(&self, property: &Property) -> bool {
        if let Some(location) = &self.location {
            let location = location.to_lowercase();
            let matches_city = property.city.to_lowercase().contains(&location);
            let matches_zip = property.zip.contains(&location);
            let matches_address = property.address.to_lowercase().contains(&location);
            if !matches_city && !matches_zip && !matches_address {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if property.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if property.price > max {
                return false;
            }
        }

        if let Some(beds) = self.beds {
            if property.beds < beds {
                return false;
            }
        }
        if let Some(baths) = self.baths {
            if property.baths < baths {
                return false;
            }
        }

        if let Some(property_type) = self.property_type {
            if property.property_type != property_type {
                return false;
            }
        }

        // Listings without a recorded sqft or year pass the range checks
        if let (Some(min), Some(sqft)) = (self.min_sqft, property.sqft) {
            if sqft < min {
                return false;
            }
        }
        if let (Some(max), Some(sqft)) = (self.max_sqft, property.sqft) {
            if sqft > max {
                return false;
            }
        }
        if let (Some(min), Some(year)) = (self.min_year, property.year_built) {
            if year < min {
                return false;
            }
        }

        if let Some(garage) = self.garage {
            if property.garage.unwrap_or(0) < garage {
                return false;
            }
        }

        for amenity in self.amenities() {
            let ok = match amenity {
                Amenity::Pool => property.pool,
                Amenity::Garage => property.garage.unwrap_or(0) > 0,
                Amenity::Waterfront => property
                    .features
                    .iter()
                    .any(|f| f.to_lowercase().contains("waterfront")),
                Amenity::NewConstruction => {
                    !matches!(property.year_built, Some(year) if year < 2020)
                }
            };
            if !ok {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(json: serde_json::Value) -> Property {
        serde_json::from_value(json).unwrap()
    }

    fn base() -> Property {
        property(serde_json::json!({
            "id": "hp-001",
            "title": "Waterfront bungalow",
            "address": "120 Bayshore Dr",
            "city": "Dunedin",
            "state": "FL",
            "zip": "34698",
            "price": 450_000,
            "beds": 3,
            "baths": 2.0,
            "sqft": 1650,
            "features": ["Waterfront views", "Updated kitchen"],
            "year_built": 1987,
            "created_date": "2025-04-01T12:00:00Z",
            "updated_date": "2025-04-10T12:00:00Z"
        }))
    }

    #[test]
    fn minimal_listing_gets_defaults() {
        let p = property(serde_json::json!({
            "id": "hp-002",
            "title": "Vacant lot",
            "address": "0 County Rd 1",
            "city": "Palm Harbor",
            "state": "FL",
            "zip": "34683",
            "price": 120_000,
            "beds": 0,
            "baths": 0.0,
            "property_type": "Land",
            "created_date": "2025-01-01T00:00:00Z",
            "updated_date": "2025-01-01T00:00:00Z"
        }));
        assert_eq!(p.status, PropertyStatus::Active);
        assert_eq!(p.property_type, PropertyType::Land);
        assert!(!p.pool);
        assert!(!p.featured);
        assert!(p.sqft.is_none());
        assert!(p.features.is_empty());
    }

    #[test]
    fn spaced_enum_names_round_trip_through_serde() {
        let p = property(serde_json::json!({
            "id": "hp-003",
            "title": "Duplex",
            "address": "5 Main St",
            "city": "Largo",
            "state": "FL",
            "zip": "33770",
            "price": 600_000,
            "beds": 4,
            "baths": 3.0,
            "property_type": "Multi-Family",
            "status": "Off Market",
            "created_date": "2025-01-01T00:00:00Z",
            "updated_date": "2025-01-01T00:00:00Z"
        }));
        assert_eq!(p.status, PropertyStatus::OffMarket);
        assert_eq!(p.status.as_str(), "Off Market");
        assert_eq!(p.property_type.as_str(), "Multi-Family");
    }

    #[test]
    fn location_matches_city_zip_or_address_substring() {
        let p = base();
        let matches = |location: &str| PropertySearchParams {
            location: Some(location.to_string()),
            ..Default::default()
        }
        .matches(&p);
        assert!(matches("dunedin"));
        assert!(matches("34698"));
        assert!(matches("bayshore"));
        assert!(!matches("tampa"));
    }

    #[test]
    fn price_and_bed_minimums_exclude_smaller_listings() {
        let p = base();
        let params = PropertySearchParams {
            min_price: Some(400_000),
            max_price: Some(500_000),
            beds: Some(3),
            ..Default::default()
        };
        assert!(params.matches(&p));
        let too_expensive = PropertySearchParams {
            max_price: Some(400_000),
            ..Default::default()
        };
        assert!(!too_expensive.matches(&p));
        let too_many_beds = PropertySearchParams {
            beds: Some(4),
            ..Default::default()
        };
        assert!(!too_many_beds.matches(&p));
    }

    #[test]
    fn listings_without_sqft_pass_sqft_ranges() {
        let mut p = base();
        p.sqft = None;
        let params = PropertySearchParams {
            min_sqft: Some(2000),
            max_sqft: Some(3000),
            ..Default::default()
        };
        assert!(params.matches(&p));
    }

    #[test]
    fn waterfront_amenity_scans_features() {
        let p = base();
        let params = PropertySearchParams {
            amenities: Some("waterfront".to_string()),
            ..Default::default()
        };
        assert!(params.matches(&p));
        let pool = PropertySearchParams {
            amenities: Some("pool".to_string()),
            ..Default::default()
        };
        assert!(!pool.matches(&p));
    }

    #[test]
    fn unknown_amenities_are_ignored() {
        let p = base();
        let params = PropertySearchParams {
            amenities: Some("helipad,waterfront".to_string()),
            ..Default::default()
        };
        assert_eq!(params.amenities(), vec![Amenity::Waterfront]);
        assert!(params.matches(&p));
    }
}
