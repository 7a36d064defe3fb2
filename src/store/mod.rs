//! The content store: typed collections loaded once from JSON at startup.
//!
//! Content is authored as JSON arrays, one file per entity type, and is
//! read-only at runtime. Malformed content fails the load with the file
//! named, rather than being discovered at render time.

pub mod collection;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::{AreaCategory, AreaItem, BlogPost, Neighborhood, Property};

pub use collection::{Collection, Criteria, Record, SortKey};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid sort key '{0}'")]
    InvalidSortKey(String),

    #[error("duplicate id '{id}' in {collection}")]
    DuplicateId { collection: &'static str, id: String },

    #[error("{collection} records must be JSON objects")]
    NotAnObject { collection: &'static str },

    #[error("failed to encode {collection} record")]
    Encode {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{collection}.{operation} is not implemented: content is edited at the source and redeployed")]
    Unimplemented {
        collection: &'static str,
        operation: &'static str,
    },
}

/// All content collections, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub properties: Collection<Property>,
    pub blog_posts: Collection<BlogPost>,
    pub neighborhoods: Collection<Neighborhood>,
    pub dining: Collection<AreaItem>,
    pub attractions: Collection<AreaItem>,
    pub events: Collection<AreaItem>,
    pub beaches: Collection<AreaItem>,
}

impl Catalog {
    /// Load every collection from `dir`, failing fast on missing files,
    /// malformed JSON, or duplicate ids.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            properties: load_collection(dir, "properties.json", "properties")?,
            blog_posts: load_collection(dir, "blog_posts.json", "blog_posts")?,
            neighborhoods: load_collection(dir, "neighborhoods.json", "neighborhoods")?,
            dining: load_collection(dir, "dining.json", "dining")?,
            attractions: load_collection(dir, "attractions.json", "attractions")?,
            events: load_collection(dir, "events.json", "events")?,
            beaches: load_collection(dir, "beaches.json", "beaches")?,
        })
    }

    /// The explore-the-area collection backing a category.
    pub fn area_items(&self, category: AreaCategory) -> &Collection<AreaItem> {
        match category {
            AreaCategory::Dining => &self.dining,
            AreaCategory::Attractions => &self.attractions,
            AreaCategory::Events => &self.events,
            AreaCategory::Outdoors => &self.beaches,
        }
    }

    pub fn area_item_count(&self) -> usize {
        AreaCategory::ALL
            .iter()
            .map(|category| self.area_items(*category).len())
            .sum()
    }
}

fn load_collection<T: Record + DeserializeOwned>(
    dir: &Path,
    file: &str,
    name: &'static str,
) -> Result<Collection<T>> {
    let path = dir.join(file);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let items: Vec<T> = serde_json::from_str(&raw)
        .with_context(|| format!("malformed content in {}", path.display()))?;
    let collection = Collection::new(name, items)
        .with_context(|| format!("invalid content in {}", path.display()))?;
    tracing::debug!(
        collection = name,
        records = collection.len(),
        "Loaded content collection"
    );
    Ok(collection)
}
