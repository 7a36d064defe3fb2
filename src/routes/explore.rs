use axum::extract::{Path, State};
use std::sync::Arc;

use crate::api::{DataResponse, ListResponse};
use crate::app::AppState;
use crate::domain::{AreaCategory, AreaCategorySummary, AreaItem};
use crate::error::{ApiError, ApiResult};
use crate::store::Criteria;

/// The explore-the-area hub: every category with its published item count
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> ListResponse<AreaCategorySummary> {
    let data = AreaCategory::ALL
        .iter()
        .map(|&category| AreaCategorySummary {
            category,
            title: category.title(),
            description: category.description(),
            items: state
                .catalog
                .area_items(category)
                .filter(&Criteria::new().eq("published", true), None, None)
                .len(),
        })
        .collect();

    ListResponse::new(data)
}

/// Published items for one category, in curated source order
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> ApiResult<ListResponse<AreaItem>> {
    let category = parse_category(&category)?;

    let data = state
        .catalog
        .area_items(category)
        .filter(&Criteria::new().eq("published", true), None, None);

    Ok(ListResponse::new(data))
}

/// Get one item by category and slug
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path((category, slug)): Path<(String, String)>,
) -> ApiResult<DataResponse<AreaItem>> {
    let category = parse_category(&category)?;

    state
        .catalog
        .area_items(category)
        .get(&slug)
        .cloned()
        .map(DataResponse::new)
        .ok_or_else(|| {
            ApiError::NotFound(format!("Item {slug} not found in {}", category.slug()))
        })
}

fn parse_category(raw: &str) -> Result<AreaCategory, ApiError> {
    AreaCategory::parse(raw)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown explore category {raw}")))
}
