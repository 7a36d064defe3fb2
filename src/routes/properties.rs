use axum::extract::{Path, Query, State};
use std::sync::Arc;

use crate::api::{DataResponse, ListParams, ListResponse};
use crate::app::AppState;
use crate::domain::{Property, PropertySearchParams, PropertyStatus};
use crate::error::{ApiError, ApiResult};
use crate::store::{Criteria, SortKey};

/// Search active listings.
///
/// The store query selects Active listings newest-first (capped at 100,
/// matching the listings page); the search params then refine the result
/// with substring and range matching.
pub async fn list_properties(
    State(state): State<Arc<AppState>>,
    Query(list): Query<ListParams>,
    Query(search): Query<PropertySearchParams>,
) -> ApiResult<ListResponse<Property>> {
    let sort = list
        .sort_key()?
        .unwrap_or_else(|| SortKey::descending("created_date"));

    let candidates = state.catalog.properties.filter(
        &Criteria::new().eq("status", PropertyStatus::Active.as_str()),
        Some(&sort),
        Some(list.limit_or(100)),
    );

    let data: Vec<Property> = candidates
        .into_iter()
        .filter(|property| search.matches(property))
        .collect();

    tracing::debug!(count = data.len(), "Property search");

    Ok(ListResponse::new(data))
}

/// Featured listings for the home page, in curated source order
pub async fn featured_properties(
    State(state): State<Arc<AppState>>,
) -> ListResponse<Property> {
    let data = state.catalog.properties.filter(
        &Criteria::new()
            .eq("featured", true)
            .eq("status", PropertyStatus::Active.as_str()),
        None,
        Some(6),
    );

    ListResponse::new(data)
}

/// Get a specific listing by ID
pub async fn get_property(
    State(state): State<Arc<AppState>>,
    Path(property_id): Path<String>,
) -> ApiResult<DataResponse<Property>> {
    state
        .catalog
        .properties
        .get(&property_id)
        .cloned()
        .map(DataResponse::new)
        .ok_or_else(|| ApiError::NotFound(format!("Property {property_id} not found")))
}
