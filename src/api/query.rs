//! Shared list-query parameters for content endpoints

use serde::Deserialize;

use crate::store::{SortKey, StoreError};

/// Sort/limit overrides accepted by every list endpoint
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListParams {
    /// Field name, `-` prefix for descending; omitted keeps each
    /// endpoint's default order
    pub sort: Option<String>,

    /// Maximum records to return
    pub limit: Option<usize>,
}

impl ListParams {
    /// Maximum allowed records per request
    pub const MAX_LIMIT: usize = 100;

    /// Returns the clamped limit, with an endpoint-specific default
    pub fn limit_or(&self, default: usize) -> usize {
        self.limit.unwrap_or(default).clamp(1, Self::MAX_LIMIT)
    }

    /// Parse the sort override, if any
    pub fn sort_key(&self) -> Result<Option<SortKey>, StoreError> {
        self.sort.as_deref().map(SortKey::parse).transpose()
    }
}
