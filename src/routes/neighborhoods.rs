use axum::extract::{Path, State};
use std::sync::Arc;

use crate::api::{DataResponse, ListResponse};
use crate::app::AppState;
use crate::domain::{Neighborhood, Property, PropertyStatus};
use crate::error::{ApiError, ApiResult};
use crate::store::{Criteria, SortKey};

/// List published neighborhood guides, alphabetical
pub async fn list_neighborhoods(
    State(state): State<Arc<AppState>>,
) -> ListResponse<Neighborhood> {
    let data = state.catalog.neighborhoods.filter(
        &Criteria::new().eq("published", true),
        Some(&SortKey::ascending("name")),
        Some(100),
    );

    ListResponse::new(data)
}

/// Get a published neighborhood by slug
pub async fn get_neighborhood(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<DataResponse<Neighborhood>> {
    find_published(&state, &slug).map(DataResponse::new)
}

/// Active listings inside a neighborhood.
///
/// A listing belongs to a neighborhood when its city equals the
/// neighborhood name, compared case-insensitively; there is no foreign key.
pub async fn neighborhood_properties(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<ListResponse<Property>> {
    let neighborhood = find_published(&state, &slug)?;
    let city = neighborhood.name.to_lowercase();

    let mut data: Vec<Property> = state
        .catalog
        .properties
        .filter(
            &Criteria::new().eq("status", PropertyStatus::Active.as_str()),
            Some(&SortKey::descending("created_date")),
            Some(100),
        )
        .into_iter()
        .filter(|property| property.city.to_lowercase() == city)
        .collect();
    data.truncate(12);

    Ok(ListResponse::new(data))
}

fn find_published(state: &AppState, slug: &str) -> Result<Neighborhood, ApiError> {
    state
        .catalog
        .neighborhoods
        .filter(&Criteria::new().eq("published", true), None, None)
        .into_iter()
        .find(|neighborhood| neighborhood.slug == slug)
        .ok_or_else(|| ApiError::NotFound(format!("Neighborhood {slug} not found")))
}
