//! Admin mutation endpoints.
//!
//! Content is edited at the JSON source and redeployed; there is no runtime
//! write path. These handlers exist so dashboard clients get an explicit
//! 501 instead of a silently-succeeding no-op.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::MessageResponse;
use crate::app::AppState;
use crate::domain::{BlogPost, Neighborhood, Property};
use crate::error::ApiResult;

pub async fn create_property(
    State(state): State<Arc<AppState>>,
    Json(record): Json<Property>,
) -> ApiResult<Json<MessageResponse>> {
    tracing::info!(property_id = %record.id, "Property create requested");
    state.catalog.properties.create(record)?;
    Ok(Json(MessageResponse::new("Property created")))
}

pub async fn update_property(
    State(state): State<Arc<AppState>>,
    Path(property_id): Path<String>,
    Json(record): Json<Property>,
) -> ApiResult<Json<MessageResponse>> {
    tracing::info!(property_id = %property_id, "Property update requested");
    state.catalog.properties.update(&property_id, record)?;
    Ok(Json(MessageResponse::new("Property updated")))
}

pub async fn delete_property(
    State(state): State<Arc<AppState>>,
    Path(property_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    tracing::info!(property_id = %property_id, "Property delete requested");
    state.catalog.properties.delete(&property_id)?;
    Ok(Json(MessageResponse::new("Property deleted")))
}

pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(record): Json<BlogPost>,
) -> ApiResult<Json<MessageResponse>> {
    tracing::info!(post_id = %record.id, "Post create requested");
    state.catalog.blog_posts.create(record)?;
    Ok(Json(MessageResponse::new("Post created")))
}

pub async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
    Json(record): Json<BlogPost>,
) -> ApiResult<Json<MessageResponse>> {
    tracing::info!(post_id = %post_id, "Post update requested");
    state.catalog.blog_posts.update(&post_id, record)?;
    Ok(Json(MessageResponse::new("Post updated")))
}

pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    tracing::info!(post_id = %post_id, "Post delete requested");
    state.catalog.blog_posts.delete(&post_id)?;
    Ok(Json(MessageResponse::new("Post deleted")))
}

pub async fn create_neighborhood(
    State(state): State<Arc<AppState>>,
    Json(record): Json<Neighborhood>,
) -> ApiResult<Json<MessageResponse>> {
    tracing::info!(neighborhood_id = %record.id, "Neighborhood create requested");
    state.catalog.neighborhoods.create(record)?;
    Ok(Json(MessageResponse::new("Neighborhood created")))
}

pub async fn update_neighborhood(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(record): Json<Neighborhood>,
) -> ApiResult<Json<MessageResponse>> {
    tracing::info!(slug = %slug, "Neighborhood update requested");
    state.catalog.neighborhoods.update(&slug, record)?;
    Ok(Json(MessageResponse::new("Neighborhood updated")))
}

pub async fn delete_neighborhood(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    tracing::info!(slug = %slug, "Neighborhood delete requested");
    state.catalog.neighborhoods.delete(&slug)?;
    Ok(Json(MessageResponse::new("Neighborhood deleted")))
}
